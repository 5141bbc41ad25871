//! Creation-time validation.
//!
//! Failures are values, never errors: callers get the full list of
//! problems back and decide what to surface.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::domain::{Platform, Post, PostDraft};

/// Maximum caption length, in characters.
pub const MAX_CAPTION_CHARS: usize = 2200;

/// Cap of posts per platform per calendar date.
pub const DAILY_POST_LIMIT: usize = 3;

/// Media upload ceiling, in bytes (50 MB).
pub const MAX_MEDIA_BYTES: u64 = 50 * 1024 * 1024;

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}

/// Validate a creation draft against the caller's `now`.
pub fn validate_draft(draft: &PostDraft, now: NaiveDateTime) -> ValidationReport {
    let mut errors = Vec::new();

    if draft.platform.is_none() {
        errors.push("Platform is required".to_string());
    }

    if draft.caption.trim().is_empty() {
        errors.push("Caption is required".to_string());
    } else if draft.caption.chars().count() > MAX_CAPTION_CHARS {
        errors.push(format!(
            "Caption must be less than {MAX_CAPTION_CHARS} characters"
        ));
    }

    if draft.scheduled_date.is_none() {
        errors.push("Scheduled date is required".to_string());
    }

    if draft.scheduled_time.is_none() {
        errors.push("Scheduled time is required".to_string());
    }

    if let (Some(date), Some(time)) = (draft.scheduled_date, draft.scheduled_time) {
        if date.and_time(time) <= now {
            errors.push("Scheduled time must be in the future".to_string());
        }
    }

    ValidationReport::from_errors(errors)
}

/// Check an upload's declared type and size against the accepted-type
/// allowlist (`image/*`, `video/*`) and the 50 MB ceiling. The creation
/// flow calls this before accepting a media reference.
pub fn validate_media(content_type: &str, size_bytes: u64) -> ValidationReport {
    let mut errors = Vec::new();

    if !content_type.starts_with("image/") && !content_type.starts_with("video/") {
        errors.push(format!("Unsupported media type: {content_type}"));
    }

    if size_bytes > MAX_MEDIA_BYTES {
        errors.push("Media file must be 50MB or smaller".to_string());
    }

    ValidationReport::from_errors(errors)
}

/// Daily-limit probe result. `current_count` and `max_limit` let callers
/// render "N/3 used".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLimit {
    pub is_within_limit: bool,
    pub current_count: usize,
    pub max_limit: usize,
}

/// Count existing posts matching the exact (platform, date) pair.
///
/// Advisory: callers invoke this before inserting. The store itself never
/// enforces the limit, so imports and direct saves can exceed it.
pub fn check_daily_limit(platform: Platform, date: NaiveDate, existing: &[Post]) -> DailyLimit {
    let current_count = existing
        .iter()
        .filter(|post| post.platform == platform && post.scheduled_date == date)
        .count();

    DailyLimit {
        is_within_limit: current_count < DAILY_POST_LIMIT,
        current_count,
        max_limit: DAILY_POST_LIMIT,
    }
}
