use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Platform, PlatformStatus, Post};

/// Publish-gateway errors. The shipped mock never produces one; the
/// variants exist so a real backend can slot in behind the port.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Gateway request failed: {0}")]
    Request(String),
}

/// Receipt returned when a post is handed to the publish backend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleReceipt {
    pub post_id: Uuid,
}

/// Receipt for starting a platform connection flow.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectReceipt {
    pub auth_url: String,
}

/// The publish backend as the rest of the system sees it.
///
/// All calls resolve immediately in the shipped implementation; nothing
/// here retries, times out, or runs in the background.
#[async_trait]
pub trait PublishGateway: Send + Sync {
    /// Hand a post to the backend for future publication.
    async fn schedule_post(&self, post: &Post) -> Result<ScheduleReceipt, GatewayError>;

    /// Connection state of every platform account, keyed by the closed
    /// platform set.
    async fn platform_status(&self) -> Result<BTreeMap<Platform, PlatformStatus>, GatewayError>;

    /// Begin connecting a platform account; yields the authorization URL.
    async fn connect(&self, platform: Platform) -> Result<ConnectReceipt, GatewayError>;

    /// Disconnect a platform account.
    async fn disconnect(&self, platform: Platform) -> Result<(), GatewayError>;
}
