//! # Postline Infrastructure
//!
//! Concrete implementations of the ports defined in `postline-core`,
//! plus the spreadsheet export writers.

pub mod export;
pub mod gateway;
pub mod store;

// Re-exports
pub use export::{ExportError, ExportFile, ExportFormat, export_posts};
pub use gateway::MockGateway;
pub use store::{JsonFileStore, MemoryStore};
