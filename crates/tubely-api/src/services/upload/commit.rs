use super::StagedUpload;
use crate::error::storage_error;
use tubely_core::AppError;
use tubely_storage::Storage;

/// Write an in-memory asset to `storage` and return its public URL.
pub async fn commit_bytes(
    storage: &dyn Storage,
    key: &str,
    data: Vec<u8>,
    media_type: &str,
) -> Result<String, AppError> {
    storage
        .upload_with_key(key, data, media_type)
        .await
        .map_err(storage_error)
}

/// Send a staged asset to `storage` in a single put and return its public URL.
///
/// The scratch file is removed once the put has finished, whatever its outcome.
pub async fn commit_staged(
    storage: &dyn Storage,
    key: &str,
    staged: StagedUpload,
    media_type: &str,
) -> Result<String, AppError> {
    let (temp_path, file, size_bytes) = staged.finish().await?;

    let result = storage
        .upload_stream(key, media_type, Some(size_bytes), Box::pin(file))
        .await;

    if let Err(e) = temp_path.close() {
        tracing::warn!(error = %e, key = %key, "Failed to remove staging file");
    }

    result.map_err(storage_error)
}
