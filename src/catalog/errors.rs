use std::path::PathBuf;

use thiserror::Error;

/// Reasons the music data document could not be turned into a dataset.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Music data file not found at: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read music data, error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Music data is not valid JSON, error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Music data has invalid format: {0}")]
    InvalidShape(String),
}

/// Failed lookups.
///
/// `MalformedMood` is a fault in the music data, not in the request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Mood not found")]
    MoodNotFound { available_moods: Vec<String> },

    #[error("No videos found for this mood")]
    NoVideosForMood,

    #[error("Mood `{0}` is not a list of videos")]
    MalformedMood(String),
}
