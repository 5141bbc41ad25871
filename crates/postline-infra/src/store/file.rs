//! JSON-document store - the process-local analogue of browser storage.
//!
//! One JSON object at a configured path holds the `scheduledPosts` and
//! `userPreferences` keys. Saves rewrite the whole document through a
//! temp file plus rename so a crash never leaves a half-written store.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use postline_core::domain::{Post, UserPreferences};
use postline_core::ports::{PostStore, StoreError};
use postline_core::seed;

/// On-disk shape. An absent key means "never persisted", which is
/// distinct from a key holding an empty value.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(
        rename = "scheduledPosts",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    scheduled_posts: Option<Vec<Post>>,

    #[serde(
        rename = "userPreferences",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    user_preferences: Option<UserPreferences>,
}

/// File-backed post store.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process. Two
    // processes sharing one file keep last-writer-wins semantics.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Document, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Document::default()),
            Err(err) => return Err(StoreError::Io(err.to_string())),
        };

        match serde_json::from_slice(&raw) {
            Ok(document) => Ok(document),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "Malformed store file, treating as empty"
                );
                Ok(Document {
                    scheduled_posts: Some(Vec::new()),
                    user_preferences: None,
                })
            }
        }
    }

    async fn write_document(&self, document: &Document) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(document)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &raw)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|err| StoreError::Io(err.to_string()))
    }
}

#[async_trait]
impl PostStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let document = self.read_document().await?;
        Ok(match document.scheduled_posts {
            Some(posts) => posts,
            None => seed::demo_posts(Local::now().date_naive()),
        })
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.scheduled_posts = Some(posts.to_vec());
        self.write_document(&document).await
    }

    async fn load_preferences(&self) -> Result<UserPreferences, StoreError> {
        let document = self.read_document().await?;
        Ok(document.user_preferences.unwrap_or_default())
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;
        document.user_preferences = Some(preferences.clone());
        self.write_document(&document).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err.to_string())),
        }
    }
}
