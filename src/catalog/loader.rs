use std::path::{Path, PathBuf};

use log::{debug, error, info};
use serde_json::Value;

use crate::catalog::{dataset::MusicDataset, errors::LoadError};

/// Location of the music data document when none is configured.
pub const DEFAULT_DATA_PATH: &str = "data/musicData.json";

/// Reads and validates the music data document.
pub struct DatasetLoader {
    path: PathBuf,
}

impl Default for DatasetLoader {
    fn default() -> Self {
        DatasetLoader::new(DEFAULT_DATA_PATH)
    }
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetLoader { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the dataset, reporting exactly why it could not be used.
    pub async fn try_load(&self) -> Result<MusicDataset, LoadError> {
        if !tokio::fs::try_exists(&self.path).await? {
            return Err(LoadError::NotFound(self.path.clone()));
        }
        let raw = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes of music data from {:?}", raw.len(), self.path);
        let document: Value = serde_json::from_str(&raw)?;
        MusicDataset::from_value(document)
    }

    /// Loads the dataset, falling back to [`MusicDataset::default`] on any failure.
    ///
    /// The failure is logged and never returned: the service keeps running
    /// with every mood empty.
    pub async fn load(&self) -> MusicDataset {
        match self.try_load().await {
            Ok(dataset) => {
                info!(
                    "Loaded music data from {:?}: {}",
                    self.path,
                    dataset
                        .moods()
                        .map(|mood| format!(
                            "{mood}={}",
                            dataset.videos(mood).map_or(0, <[_]>::len)
                        ))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                dataset
            }
            Err(e) => {
                error!("{e}. Falling back to an empty catalog");
                MusicDataset::default()
            }
        }
    }
}
