//! MoodTunes - music video suggestions by mood
//!
//! This library loads a small mood-keyed catalog of music videos once at
//! startup and serves the first few suggestions for a mood over HTTP.

/// HTTP routes, shared state and JSON error responses
pub mod api;
/// Music data loading, validation and mood lookup
pub mod catalog;
/// Crate-level error type and result alias
pub mod errors;
