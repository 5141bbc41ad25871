use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::DomainError;

use super::platform::Platform;

/// Publication state of a post.
///
/// Plain data, not a state machine: nothing in this crate transitions a
/// post between states. `Scheduling` and `Failed` are only ever written by
/// the demo seed; a real publish pipeline would own the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Scheduling,
    Failed,
}

impl PostStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Scheduling => "scheduling",
            Self::Failed => "failed",
        }
    }

    /// Label with the first letter capitalized, as used in export rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Scheduling => "Scheduling",
            Self::Failed => "Failed",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "scheduled" => Ok(Self::Scheduled),
            "scheduling" => Ok(Self::Scheduling),
            "failed" => Ok(Self::Failed),
            _ => Err(DomainError::UnknownStatus(raw.to_string())),
        }
    }
}

/// Post entity - one scheduled social-media content record.
///
/// Serializes with the persisted wire shape: camelCase field names, dates
/// as `YYYY-MM-DD`, times as `HH:MM`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub platform: Platform,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
    pub scheduled_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub scheduled_time: NaiveTime,
    pub status: PostStatus,
}

impl Post {
    /// Create a new post. Every post starts out `Scheduled`.
    pub fn new(
        platform: Platform,
        caption: String,
        media: Option<String>,
        scheduled_date: NaiveDate,
        scheduled_time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            platform,
            caption,
            media,
            scheduled_date,
            scheduled_time,
            status: PostStatus::Scheduled,
        }
    }

    /// Combined schedule instant - the sort and bucket key for the
    /// calendar and upcoming views.
    pub fn scheduled_at(&self) -> NaiveDateTime {
        self.scheduled_date.and_time(self.scheduled_time)
    }
}

/// Creation-form fields before validation.
///
/// Anything the user can leave blank or mistype arrives as `None`;
/// [`crate::validate::validate_draft`] turns the gaps into messages.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub platform: Option<Platform>,
    pub caption: String,
    pub media: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub scheduled_time: Option<NaiveTime>,
}

/// Parse a `HH:MM` time of day. Accepts a trailing `:SS` for payloads
/// written by earlier versions.
pub fn parse_hhmm(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

/// Times persist as `HH:MM` (24h), matching the stored record format.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid HH:MM time: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_post() -> Post {
        Post::new(
            Platform::Instagram,
            "Launch day!".to_string(),
            None,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
        )
    }

    #[test]
    fn test_wire_shape_is_camel_case_with_hhmm_time() {
        let value = serde_json::to_value(sample_post()).unwrap();

        assert_eq!(value["scheduledDate"], "2025-06-01");
        assert_eq!(value["scheduledTime"], "10:30");
        assert_eq!(value["status"], "scheduled");
        assert_eq!(value["platform"], "instagram");
        assert!(value.get("media").is_none());
    }

    #[test]
    fn test_time_round_trip_accepts_seconds_suffix() {
        let mut value = serde_json::to_value(sample_post()).unwrap();
        value["scheduledTime"] = "10:30:00".into();

        let post: Post = serde_json::from_value(value).unwrap();
        assert_eq!(post.scheduled_time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_scheduled_at_combines_date_and_time() {
        let post = sample_post();
        assert_eq!(
            post.scheduled_at(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().and_hms_opt(10, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_status_parsing_is_case_insensitive() {
        assert_eq!("Failed".parse::<PostStatus>().unwrap(), PostStatus::Failed);
        assert!("published".parse::<PostStatus>().is_err());
    }
}
