use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Target social network for a post.
///
/// A closed set: anything keyed by platform (filters, connection maps)
/// uses this enum so an invalid platform is a type error, not a stray
/// string key.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Instagram,
    Twitter,
    Linkedin,
    Facebook,
}

impl Platform {
    /// Every supported platform, in display order.
    pub const ALL: [Self; 4] = [
        Self::Instagram,
        Self::Twitter,
        Self::Linkedin,
        Self::Facebook,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Instagram => "instagram",
            Self::Twitter => "twitter",
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
        }
    }

    /// Capitalized name for user-facing copy.
    pub fn label(self) -> &'static str {
        match self {
            Self::Instagram => "Instagram",
            Self::Twitter => "Twitter",
            Self::Linkedin => "LinkedIn",
            Self::Facebook => "Facebook",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "instagram" => Ok(Self::Instagram),
            "twitter" => Ok(Self::Twitter),
            "linkedin" => Ok(Self::Linkedin),
            "facebook" => Ok(Self::Facebook),
            _ => Err(DomainError::UnknownPlatform(raw.to_string())),
        }
    }
}

/// Connection state of one platform account, as reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStatus {
    pub connected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expires: Option<NaiveDate>,
}
