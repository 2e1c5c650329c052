//! Storage abstraction trait
//!
//! This module defines the Storage trait that both asset backends implement.

use async_trait::async_trait;
use std::pin::Pin;
use thiserror::Error;
use tokio::io::AsyncRead;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Handlers hold an `Arc<dyn Storage>` per asset kind and never see which
/// backend sits behind it. Every write targets a caller-chosen key and returns
/// the public URL of the stored object.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `data` under `storage_key`, replacing nothing that already exists
    /// under a different key. Returns the public URL for the object.
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String>;

    /// Store the contents of `reader` under `storage_key`.
    ///
    /// The reader is consumed until EOF without holding the whole payload in
    /// memory. `content_length` is the expected size when known; a reader that
    /// ends early or runs long fails the upload.
    async fn upload_stream(
        &self,
        storage_key: &str,
        content_type: &str,
        content_length: Option<u64>,
        reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<String>;

    /// Delete an object. Deleting a missing object is not an error.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Public URL an object stored under `storage_key` is reachable at.
    fn public_url(&self, storage_key: &str) -> String;

    /// Recover the storage key from a URL previously produced by `public_url`.
    ///
    /// Returns `None` for URLs that belong to a different backend or location.
    fn key_from_url(&self, url: &str) -> Option<String> {
        let base = self.public_url("");
        url.strip_prefix(base.as_str())
            .filter(|key| !key.is_empty() && !key.contains('/'))
            .map(str::to_string)
    }
}
