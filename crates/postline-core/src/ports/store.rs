use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Post, UserPreferences};

/// Store-level errors.
///
/// Malformed persisted data is deliberately not represented: adapters
/// downgrade it to a warning and an empty store on read.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Serialization failed: {0}")]
    Serialize(String),
}

/// Owns the persisted post sequence.
///
/// One instance per process; every consumer (filtering, bucketing,
/// export, the limit check) receives it by injection rather than reaching
/// for ambient state. The sequence is insertion-ordered and mutated only
/// by whole-sequence overwrite.
///
/// `load` is a pure read with a seed fallback: a store that has never
/// been written yields the demo seed, while an explicitly saved empty
/// sequence stays empty.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// The currently persisted sequence, in insertion order.
    async fn load(&self) -> Result<Vec<Post>, StoreError>;

    /// Overwrite the entire persisted sequence. No merge semantics.
    async fn save(&self, posts: &[Post]) -> Result<(), StoreError>;

    /// The persisted preferences, or defaults when absent.
    async fn load_preferences(&self) -> Result<UserPreferences, StoreError>;

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<(), StoreError>;

    /// Drop both the post sequence and the preferences.
    async fn clear(&self) -> Result<(), StoreError>;
}
