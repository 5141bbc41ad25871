//! Publish-gateway implementations.

mod mock;

pub use mock::MockGateway;
