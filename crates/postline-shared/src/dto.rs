//! Data Transfer Objects - request and query types for the API.
//!
//! Creation fields arrive as plain strings so that missing or mistyped
//! values surface through the validation report instead of a
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// Request to schedule a new post. Field names match the creation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub media: Option<String>,
    #[serde(default)]
    pub scheduled_date: String,
    #[serde(default)]
    pub scheduled_time: String,
}

/// Body of the placeholder reschedule action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RescheduleRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
}

/// Query parameters for the management list. `all` (or absence) disables
/// the corresponding predicate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostListQuery {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Query parameters for the daily-limit probe.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyLimitQuery {
    pub platform: String,
    pub date: String,
}

/// Query parameters for the export download.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    #[serde(default)]
    pub format: Option<String>,
}
