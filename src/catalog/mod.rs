/// In-memory dataset and the mood lookup
pub mod dataset;
/// Moods and video entries
pub mod entities;
/// Load and lookup error types
pub mod errors;
/// Reads the music data document from disk
pub mod loader;

pub use dataset::{MAX_VIDEOS_PER_MOOD, MusicDataset};
pub use entities::{Mood, MoodVideos, VideoEntry};
pub use loader::DatasetLoader;
