//! Logged stand-in for the publish backend.
//!
//! Every call succeeds immediately and is traced; connection state lives
//! in memory. A real backend replaces this behind the same port.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Days, Local, NaiveDate};
use tokio::sync::RwLock;

use postline_core::domain::{Platform, PlatformStatus, Post};
use postline_core::ports::{ConnectReceipt, GatewayError, PublishGateway, ScheduleReceipt};

/// Simulated publish gateway.
pub struct MockGateway {
    connections: RwLock<BTreeMap<Platform, PlatformStatus>>,
}

impl MockGateway {
    pub fn new() -> Self {
        let expires = Some(token_expiry());
        let mut connections = BTreeMap::new();
        for platform in Platform::ALL {
            connections.insert(
                platform,
                PlatformStatus {
                    connected: true,
                    token_expires: expires,
                },
            );
        }
        // LinkedIn starts out unconnected so the connect flow has
        // something to demonstrate.
        connections.insert(
            Platform::Linkedin,
            PlatformStatus {
                connected: false,
                token_expires: None,
            },
        );

        Self {
            connections: RwLock::new(connections),
        }
    }
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

fn token_expiry() -> NaiveDate {
    Local::now().date_naive() + Days::new(365)
}

#[async_trait]
impl PublishGateway for MockGateway {
    async fn schedule_post(&self, post: &Post) -> Result<ScheduleReceipt, GatewayError> {
        tracing::info!(
            post_id = %post.id,
            platform = %post.platform,
            scheduled_for = %post.scheduled_at(),
            "Gateway: schedule post"
        );
        Ok(ScheduleReceipt { post_id: post.id })
    }

    async fn platform_status(
        &self,
    ) -> Result<BTreeMap<Platform, PlatformStatus>, GatewayError> {
        tracing::debug!("Gateway: platform status");
        Ok(self.connections.read().await.clone())
    }

    async fn connect(&self, platform: Platform) -> Result<ConnectReceipt, GatewayError> {
        tracing::info!(%platform, "Gateway: connect platform");

        let mut connections = self.connections.write().await;
        connections.insert(
            platform,
            PlatformStatus {
                connected: true,
                token_expires: Some(token_expiry()),
            },
        );

        Ok(ConnectReceipt {
            auth_url: format!("https://oauth.{platform}.com/authorize"),
        })
    }

    async fn disconnect(&self, platform: Platform) -> Result<(), GatewayError> {
        tracing::info!(%platform, "Gateway: disconnect platform");

        let mut connections = self.connections.write().await;
        connections.insert(
            platform,
            PlatformStatus {
                connected: false,
                token_expires: None,
            },
        );

        Ok(())
    }
}
