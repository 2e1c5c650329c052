//! Storage backend setup

use anyhow::{Context, Result};
use std::sync::Arc;
use tubely_core::{Config, StorageBackend};
use tubely_storage::{create_storage, Storage};

/// Build the thumbnail (local) and video (S3) stores.
pub async fn setup_storage(config: &Config) -> Result<(Arc<dyn Storage>, Arc<dyn Storage>)> {
    let thumbnails = create_storage(config, StorageBackend::Local)
        .await
        .context("Failed to initialize thumbnail storage")?;
    let videos = create_storage(config, StorageBackend::S3)
        .await
        .context("Failed to initialize video storage")?;

    tracing::info!(
        assets_root = %config.assets_root.display(),
        assets_url = %config.assets_base_url(),
        bucket = %config.s3_bucket,
        region = %config.s3_region,
        endpoint = ?config.s3_endpoint,
        "Storage initialized"
    );

    Ok((thumbnails, videos))
}
