//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod gateway;
mod store;

pub use gateway::{ConnectReceipt, GatewayError, PublishGateway, ScheduleReceipt};
pub use store::{PostStore, StoreError};
