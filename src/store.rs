use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talk {
    #[serde(rename = "watchedAt")]
    pub watched_at: String,
    pub rate: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Talker {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub talk: Talk,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("talker document unreadable or unwritable: {0}")]
    Io(#[from] std::io::Error),
    #[error("talker document is not a valid JSON array: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistence seam over the talker document. The collection is the unit of
/// persistence: `load` always parses the whole file and `save` rewrites it
/// wholesale, so there is no partial-write state to recover from.
#[async_trait]
pub trait TalkerStore: Send + Sync {
    async fn load(&self) -> Result<Vec<Talker>, StoreError>;
    async fn save(&self, talkers: &[Talker]) -> Result<(), StoreError>;
}

#[derive(Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TalkerStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Talker>, StoreError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn save(&self, talkers: &[Talker]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(talkers)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Vec<Talker> {
        vec![Talker {
            id: 1,
            name: "Marcos Costa".into(),
            age: 24,
            talk: Talk {
                watched_at: "23/10/2020".into(),
                rate: 5,
            },
        }]
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let file = NamedTempFile::new().expect("temp file");
        let store = JsonFileStore::new(file.path());
        let talkers = sample();

        store.save(&talkers).await.expect("save should succeed");
        let loaded = store.load().await.expect("load should succeed");
        assert_eq!(loaded, talkers);
    }

    #[tokio::test]
    async fn load_missing_file_is_io_error() {
        let store = JsonFileStore::new("/nonexistent/talker.json");
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[tokio::test]
    async fn load_rejects_malformed_document() {
        let file = NamedTempFile::new().expect("temp file");
        std::fs::write(file.path(), "not a json array").expect("write");

        let store = JsonFileStore::new(file.path());
        let err = store.load().await.unwrap_err();
        assert!(matches!(err, StoreError::Parse(_)));
    }

    #[tokio::test]
    async fn save_overwrites_previous_content() {
        let file = NamedTempFile::new().expect("temp file");
        let store = JsonFileStore::new(file.path());

        store.save(&sample()).await.expect("first save");
        store.save(&[]).await.expect("second save");
        let loaded = store.load().await.expect("load");
        assert!(loaded.is_empty());
    }
}
