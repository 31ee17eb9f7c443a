//! File-backed flashcard store
//!
//! Each flashcard is persisted as a standalone JSON document named
//! `<id>.json` inside the store directory. There is no index file;
//! the directory listing is the source of truth.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;
use crate::model::Flashcard;

/// Handle to a directory of flashcard records
///
/// Cheap to share behind an `Arc`; all operations take `&self`.
#[derive(Debug)]
pub struct FlashcardStore {
    dir: PathBuf,
}

impl FlashcardStore {
    /// Open a store rooted at `dir`, creating the directory if absent
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Directory holding the record files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Write a flashcard to disk, replacing any existing record with the same id
    pub async fn save(&self, card: &Flashcard) -> Result<()> {
        let json = serde_json::to_string(card)?;
        tokio::fs::write(self.record_path(card.id), json).await?;
        Ok(())
    }

    /// Load a single flashcard by id
    ///
    /// Returns `Ok(None)` when no record file exists for the id. A record
    /// file that exists but cannot be read or parsed is an error here,
    /// unlike in [`load_all`](Self::load_all) where it is skipped.
    pub async fn load(&self, id: Uuid) -> Result<Option<Flashcard>> {
        let path = self.record_path(id);
        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Load every flashcard in the store
    ///
    /// Unreadable or malformed record files are logged and skipped so one
    /// corrupt file cannot hide the rest of the collection. Order is
    /// whatever the directory listing yields.
    pub async fn load_all(&self) -> Result<Vec<Flashcard>> {
        let mut cards = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let contents = match tokio::fs::read_to_string(&path).await {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!("Skipping unreadable record {}: {}", path.display(), e);
                    continue;
                }
            };

            match serde_json::from_str::<Flashcard>(&contents) {
                Ok(card) => cards.push(card),
                Err(e) => {
                    tracing::warn!("Skipping malformed record {}: {}", path.display(), e);
                }
            }
        }

        Ok(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn open_temp_store() -> (TempDir, FlashcardStore) {
        let temp = TempDir::new().unwrap();
        let store = FlashcardStore::open(temp.path()).await.unwrap();
        (temp, store)
    }

    #[tokio::test]
    async fn test_open_creates_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("cards");
        assert!(!dir.exists());

        let store = FlashcardStore::open(&dir).await.unwrap();
        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir);
    }

    #[tokio::test]
    async fn test_save_then_load_returns_equal_card() {
        let (_temp, store) = open_temp_store().await;

        let card = Flashcard::new("casa", "house", vec!["Mi casa es grande.".to_string()]);
        store.save(&card).await.unwrap();

        let loaded = store.load(card.id).await.unwrap().unwrap();
        assert_eq!(loaded, card);
    }

    #[tokio::test]
    async fn test_save_uses_id_as_filename() {
        let (temp, store) = open_temp_store().await;

        let card = Flashcard::new("perro", "dog", vec![]);
        store.save(&card).await.unwrap();

        assert!(temp.path().join(format!("{}.json", card.id)).is_file());
    }

    #[tokio::test]
    async fn test_save_overwrites_existing_record() {
        let (_temp, store) = open_temp_store().await;

        let mut card = Flashcard::new("gato", "cat", vec![]);
        store.save(&card).await.unwrap();

        card.translation = "cat (animal)".to_string();
        store.save(&card).await.unwrap();

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].translation, "cat (animal)");
    }

    #[tokio::test]
    async fn test_load_missing_id_returns_none() {
        let (_temp, store) = open_temp_store().await;
        let loaded = store.load(Uuid::new_v4()).await.unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_load_all_on_empty_store() {
        let (_temp, store) = open_temp_store().await;
        let all = store.load_all().await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn test_load_all_skips_malformed_records() {
        let (temp, store) = open_temp_store().await;

        let good = Flashcard::new("sol", "sun", vec![]);
        store.save(&good).await.unwrap();

        std::fs::write(temp.path().join("not-a-card.json"), "{ broken").unwrap();

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, good.id);
    }

    #[tokio::test]
    async fn test_load_all_ignores_non_json_files() {
        let (temp, store) = open_temp_store().await;

        let card = Flashcard::new("luna", "moon", vec![]);
        store.save(&card).await.unwrap();

        std::fs::write(temp.path().join("notes.txt"), "not a record").unwrap();

        let all = store.load_all().await.unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_load_surfaces_corrupt_record_as_error() {
        let (temp, store) = open_temp_store().await;

        let id = Uuid::new_v4();
        std::fs::write(temp.path().join(format!("{id}.json")), "{ broken").unwrap();

        assert!(store.load(id).await.is_err());
    }
}
