use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fixed set of moods every dataset must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// `happy`
    Happy,
    /// `sad`
    Sad,
    /// `energetic`
    Energetic,
    /// `relaxed`
    Relaxed,
}

impl Mood {
    /// All required moods, in their canonical order.
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Sad, Mood::Energetic, Mood::Relaxed];

    /// Key used for this mood in the music data document.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energetic => "energetic",
            Mood::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single suggested music video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoEntry {
    pub title: String,
    pub artist: String,
    pub thumbnail_url: String,
    /// Identifier on the external video platform
    pub video_id: String,
    /// Any other fields of the entry, echoed back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Successful answer to a mood lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodVideos {
    pub mood: String,
    pub videos: Vec<VideoEntry>,
}
