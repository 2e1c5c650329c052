//! Tubely Core Library
//!
//! Domain model, error taxonomy, and process configuration shared by the
//! storage, database, and API crates.

pub mod config;
pub mod error;
pub mod models;
pub mod policy;
pub mod storage_types;

// Re-export commonly used types
pub use config::{Config, MediaLimits};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{AssetKind, VideoRecord};
pub use policy::{MetadataSyncPolicy, SupersededAssetPolicy};
pub use storage_types::StorageBackend;
