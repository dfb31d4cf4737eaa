use indexmap::IndexMap;
use log::warn;
use serde_json::Value;

use crate::catalog::{
    entities::{Mood, MoodVideos, VideoEntry},
    errors::{LoadError, LookupError},
};

/// Upper bound of videos returned for a single mood.
pub const MAX_VIDEOS_PER_MOOD: usize = 5;

/// What a key of the music data document is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Shelf {
    Videos(Vec<VideoEntry>),
    /// Extra key whose value is not a list, kept as it was read
    Other(Value),
}

/// Mood name to ordered video list, built once at startup and never mutated.
///
/// Keys keep the order of the source document. A valid dataset always holds
/// every [`Mood`] key bound to a list; extra keys are kept whatever they hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicDataset {
    moods: IndexMap<String, Shelf>,
}

impl Default for MusicDataset {
    /// Every required mood bound to an empty list.
    fn default() -> Self {
        let moods = Mood::ALL
            .iter()
            .map(|mood| (mood.as_str().to_string(), Shelf::Videos(Vec::new())))
            .collect();
        MusicDataset { moods }
    }
}

impl MusicDataset {
    /// Builds a dataset from already typed lists, checking that every required mood is present.
    pub fn new(moods: IndexMap<String, Vec<VideoEntry>>) -> Result<Self, LoadError> {
        if let Some(missing) = Mood::ALL
            .iter()
            .find(|mood| !moods.contains_key(mood.as_str()))
        {
            return Err(LoadError::InvalidShape(format!(
                "mood `{missing}` is missing"
            )));
        }
        let moods = moods
            .into_iter()
            .map(|(mood, videos)| (mood, Shelf::Videos(videos)))
            .collect();
        Ok(MusicDataset { moods })
    }

    /// Validates a parsed music data document and converts it into a dataset.
    ///
    /// The top level must be an object in which every required mood is bound
    /// to an array. Every key is kept. Array elements that don't decode as a
    /// [`VideoEntry`] are skipped.
    pub fn from_value(document: Value) -> Result<Self, LoadError> {
        let Value::Object(document) = document else {
            return Err(LoadError::InvalidShape(
                "top-level value is not an object".to_string(),
            ));
        };

        for mood in Mood::ALL {
            if !document.get(mood.as_str()).is_some_and(Value::is_array) {
                return Err(LoadError::InvalidShape(format!(
                    "mood `{mood}` is missing or not a list"
                )));
            }
        }

        let mut moods = IndexMap::with_capacity(document.len());
        for (key, value) in document {
            let items = match value {
                Value::Array(items) => items,
                other => {
                    warn!("`{key}` in music data is not a list of videos");
                    moods.insert(key, Shelf::Other(other));
                    continue;
                }
            };
            let videos: Vec<VideoEntry> = items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value(item) {
                    Ok(video) => Some(video),
                    Err(e) => {
                        warn!("Skipping malformed video #{index} under `{key}`: {e}");
                        None
                    }
                })
                .collect();
            moods.insert(key, Shelf::Videos(videos));
        }

        Ok(MusicDataset { moods })
    }

    /// Keys in dataset order, list or not.
    pub fn moods(&self) -> impl Iterator<Item = &str> {
        self.moods.keys().map(String::as_str)
    }

    /// Full video list of a mood, matched exactly.
    #[must_use]
    pub fn videos(&self, mood: &str) -> Option<&[VideoEntry]> {
        match self.moods.get(mood)? {
            Shelf::Videos(videos) => Some(videos),
            Shelf::Other(_) => None,
        }
    }

    /// Raw value of an extra key that isn't a video list.
    #[must_use]
    pub fn extra(&self, key: &str) -> Option<&Value> {
        match self.moods.get(key)? {
            Shelf::Other(value) => Some(value),
            Shelf::Videos(_) => None,
        }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moods.len()
    }

    /// Always false for a dataset built through [`MusicDataset::new`] or [`MusicDataset::from_value`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    /// Returns the first [`MAX_VIDEOS_PER_MOOD`] videos of a mood, in stored order.
    ///
    /// The key is lowercased before matching.
    pub fn lookup(&self, mood: &str) -> Result<MoodVideos, LookupError> {
        let mood = mood.to_lowercase();
        let videos = match self.moods.get(&mood) {
            Some(Shelf::Videos(videos)) => videos,
            Some(Shelf::Other(_)) => return Err(LookupError::MalformedMood(mood)),
            None => {
                return Err(LookupError::MoodNotFound {
                    available_moods: self.moods().map(str::to_string).collect(),
                });
            }
        };

        let videos: Vec<VideoEntry> = videos.iter().take(MAX_VIDEOS_PER_MOOD).cloned().collect();
        if videos.is_empty() {
            return Err(LookupError::NoVideosForMood);
        }

        Ok(MoodVideos { mood, videos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, json};

    fn video(n: usize) -> VideoEntry {
        VideoEntry {
            title: format!("Song {n}"),
            artist: format!("Artist {n}"),
            thumbnail_url: format!("https://i.ytimg.com/vi/video{n}/hqdefault.jpg"),
            video_id: format!("video{n}"),
            extra: Map::new(),
        }
    }

    fn videos(count: usize) -> Vec<VideoEntry> {
        (1..=count).map(video).collect()
    }

    fn scenario() -> MusicDataset {
        let moods = IndexMap::from([
            ("happy".to_string(), videos(7)),
            ("sad".to_string(), vec![]),
            ("energetic".to_string(), videos(1)),
            ("relaxed".to_string(), videos(2)),
        ]);
        MusicDataset::new(moods).unwrap()
    }

    #[test]
    fn lookup_caps_at_five_in_stored_order() {
        let result = scenario().lookup("happy").unwrap();
        assert_eq!(result.mood, "happy");
        assert_eq!(result.videos, videos(5));
    }

    #[test]
    fn lookup_returns_short_lists_whole() {
        let dataset = scenario();
        assert_eq!(dataset.lookup("energetic").unwrap().videos, videos(1));
        assert_eq!(dataset.lookup("relaxed").unwrap().videos, videos(2));
    }

    #[test]
    fn lookup_of_empty_mood_is_no_videos() {
        assert_eq!(
            scenario().lookup("sad"),
            Err(LookupError::NoVideosForMood)
        );
    }

    #[test]
    fn lookup_of_unknown_mood_lists_available_moods() {
        assert_eq!(
            scenario().lookup("angry"),
            Err(LookupError::MoodNotFound {
                available_moods: vec![
                    "happy".to_string(),
                    "sad".to_string(),
                    "energetic".to_string(),
                    "relaxed".to_string(),
                ],
            })
        );
    }

    #[test]
    fn lookup_result_is_prefix_for_every_length() {
        for len in 0..=7 {
            let mut moods: IndexMap<String, Vec<VideoEntry>> = Mood::ALL
                .iter()
                .map(|m| (m.as_str().to_string(), vec![]))
                .collect();
            moods.insert("happy".to_string(), videos(len));
            let dataset = MusicDataset::new(moods).unwrap();

            match dataset.lookup("happy") {
                Ok(result) => {
                    let stored = dataset.videos("happy").unwrap();
                    assert_eq!(result.videos.len(), len.min(MAX_VIDEOS_PER_MOOD));
                    assert_eq!(result.videos.as_slice(), &stored[..result.videos.len()]);
                }
                Err(e) => {
                    assert_eq!(len, 0);
                    assert_eq!(e, LookupError::NoVideosForMood);
                }
            }
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let dataset = scenario();
        assert_eq!(dataset.lookup("Happy"), dataset.lookup("happy"));
        assert_eq!(dataset.lookup("ENERGETIC"), dataset.lookup("energetic"));
    }

    #[test]
    fn default_holds_every_mood_empty() {
        let dataset = MusicDataset::default();
        assert_eq!(
            dataset.moods().collect::<Vec<_>>(),
            ["happy", "sad", "energetic", "relaxed"]
        );
        for mood in Mood::ALL {
            assert_eq!(dataset.videos(mood.as_str()), Some(&[][..]));
        }
    }

    #[test]
    fn new_rejects_missing_mood() {
        let moods = IndexMap::from([("happy".to_string(), videos(1))]);
        assert!(matches!(
            MusicDataset::new(moods),
            Err(LoadError::InvalidShape(_))
        ));
    }

    #[test]
    fn from_value_keeps_document_order_and_extra_moods() {
        let document = json!({
            "relaxed": [],
            "chill": [{"title": "a", "artist": "b", "thumbnailUrl": "c", "videoId": "d"}],
            "happy": [],
            "sad": [],
            "energetic": [],
        });
        let dataset = MusicDataset::from_value(document).unwrap();
        assert_eq!(
            dataset.moods().collect::<Vec<_>>(),
            ["relaxed", "chill", "happy", "sad", "energetic"]
        );
        assert_eq!(dataset.lookup("chill").unwrap().videos[0].video_id, "d");
    }

    #[test]
    fn from_value_rejects_non_object() {
        let err = MusicDataset::from_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, LoadError::InvalidShape(_)));
    }

    #[test]
    fn from_value_rejects_missing_mood() {
        let document = json!({"happy": [], "sad": [], "energetic": []});
        let err = MusicDataset::from_value(document).unwrap_err();
        assert!(err.to_string().contains("relaxed"));
    }

    #[test]
    fn from_value_rejects_mood_that_is_not_a_list() {
        let document = json!({"happy": {}, "sad": [], "energetic": [], "relaxed": []});
        let err = MusicDataset::from_value(document).unwrap_err();
        assert!(matches!(err, LoadError::InvalidShape(_)));
        assert!(err.to_string().contains("happy"));
    }

    #[test]
    fn from_value_skips_malformed_entries() {
        let document = json!({
            "happy": [
                "not an object",
                {"title": "kept", "artist": "x", "thumbnailUrl": "y", "videoId": "z"},
                {"title": "no id", "artist": "x", "thumbnailUrl": "y"},
            ],
            "sad": [],
            "energetic": [],
            "relaxed": [],
        });
        let dataset = MusicDataset::from_value(document).unwrap();
        let happy = dataset.videos("happy").unwrap();
        assert_eq!(happy.len(), 1);
        assert_eq!(happy[0].title, "kept");
    }

    #[test]
    fn from_value_keeps_every_key_and_entry_field() {
        let document = json!({
            "happy": [
                {"title": "a", "artist": "b", "thumbnailUrl": "c", "videoId": "d", "duration": "3:12"},
            ],
            "sad": [],
            "energetic": [],
            "relaxed": [],
            "version": 2,
        });
        let dataset = MusicDataset::from_value(document).unwrap();

        assert_eq!(
            dataset.moods().collect::<Vec<_>>(),
            ["happy", "sad", "energetic", "relaxed", "version"]
        );
        assert_eq!(dataset.extra("version"), Some(&json!(2)));
        assert!(dataset.videos("version").is_none());

        let happy = dataset.lookup("happy").unwrap();
        assert_eq!(
            serde_json::to_value(&happy.videos[0]).unwrap(),
            json!({"title": "a", "artist": "b", "thumbnailUrl": "c", "videoId": "d", "duration": "3:12"})
        );
        assert_eq!(
            dataset.lookup("angry"),
            Err(LookupError::MoodNotFound {
                available_moods: ["happy", "sad", "energetic", "relaxed", "version"]
                    .map(str::to_string)
                    .to_vec(),
            })
        );
    }

    #[test]
    fn lookup_of_non_list_key_is_malformed() {
        let document = json!({"happy": [], "sad": [], "energetic": [], "relaxed": [], "version": 2});
        let dataset = MusicDataset::from_value(document).unwrap();
        assert_eq!(
            dataset.lookup("Version"),
            Err(LookupError::MalformedMood("version".to_string()))
        );
    }
}
