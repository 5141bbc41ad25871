//! In-memory store - used when no data path is configured.

use async_trait::async_trait;
use chrono::Local;
use tokio::sync::RwLock;

use postline_core::domain::{Post, UserPreferences};
use postline_core::ports::{PostStore, StoreError};
use postline_core::seed;

/// In-memory post store.
///
/// `None` means a slot has never been written, which is what triggers the
/// demo-seed fallback on read. Data is lost on process restart.
pub struct MemoryStore {
    posts: RwLock<Option<Vec<Post>>>,
    preferences: RwLock<Option<UserPreferences>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(None),
            preferences: RwLock::new(None),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let posts = self.posts.read().await;
        Ok(match posts.as_ref() {
            Some(saved) => saved.clone(),
            None => seed::demo_posts(Local::now().date_naive()),
        })
    }

    async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut slot = self.posts.write().await;
        *slot = Some(posts.to_vec());
        Ok(())
    }

    async fn load_preferences(&self) -> Result<UserPreferences, StoreError> {
        let preferences = self.preferences.read().await;
        Ok(preferences.clone().unwrap_or_default())
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StoreError> {
        let mut slot = self.preferences.write().await;
        *slot = Some(preferences.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.posts.write().await = None;
        *self.preferences.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postline_core::domain::Platform;

    #[tokio::test]
    async fn test_unwritten_store_yields_seed() {
        let store = MemoryStore::new();
        let posts = store.load().await.unwrap();
        assert_eq!(posts.len(), seed::SEED_LEN);
    }

    #[tokio::test]
    async fn test_saved_empty_sequence_stays_empty() {
        let store = MemoryStore::new();
        store.save(&[]).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let store = MemoryStore::new();
        let posts = seed::demo_posts(Local::now().date_naive());

        store.save(&posts).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded.len(), posts.len());
        assert_eq!(loaded[0].id, posts[0].id);
    }

    #[tokio::test]
    async fn test_preferences_default_until_saved() {
        let store = MemoryStore::new();
        assert_eq!(store.load_preferences().await.unwrap(), UserPreferences::default());

        let prefs = UserPreferences {
            default_platform: Some(Platform::Linkedin),
            auto_save: false,
            notifications: false,
        };
        store.save_preferences(&prefs).await.unwrap();
        assert_eq!(store.load_preferences().await.unwrap(), prefs);
    }

    #[tokio::test]
    async fn test_clear_restores_seed_fallback() {
        let store = MemoryStore::new();
        store.save(&[]).await.unwrap();
        store.clear().await.unwrap();

        assert_eq!(store.load().await.unwrap().len(), seed::SEED_LEN);
    }
}
