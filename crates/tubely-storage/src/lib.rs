//! Tubely Storage Library
//!
//! Storage abstraction for uploaded assets. Thumbnails live on the local
//! filesystem under the served asset root; videos live in an S3 bucket.
//!
//! # Storage key format
//!
//! Keys are flat: `{token}.{ext}`, where `token` is URL-safe base64 of fresh
//! random bytes. Keys must not contain `..` or a leading `/`. Key generation
//! lives in the `keys` module so both backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use keys::{extension_for_media_type, generate_asset_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
pub use tubely_core::StorageBackend;
