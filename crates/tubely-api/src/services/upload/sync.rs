use std::sync::Arc;
use tubely_core::{AppError, AssetKind, MetadataSyncPolicy, SupersededAssetPolicy, VideoRecord};
use tubely_db::VideoRepository;
use tubely_storage::Storage;

/// Record a newly committed asset URL on the video and persist it.
///
/// Under `BestEffort` a failed write is logged and the in-memory record is
/// still returned: the asset is stored but the URL index may lag behind it.
/// Under `Strict` the failure is returned to the caller.
#[tracing::instrument(skip_all, fields(video_id = %video.id, asset_kind = %kind))]
pub async fn publish_asset_url(
    repository: &dyn VideoRepository,
    storage: &Arc<dyn Storage>,
    sync_policy: MetadataSyncPolicy,
    superseded_policy: SupersededAssetPolicy,
    mut video: VideoRecord,
    kind: AssetKind,
    url: String,
) -> Result<VideoRecord, AppError> {
    let previous = video.set_asset_url(kind, url);

    match repository.update_video(&video).await {
        Ok(()) => {
            if let Some(previous) = previous {
                release_superseded_asset(storage, superseded_policy, &video, kind, previous);
            }
        }
        Err(e) => match sync_policy {
            MetadataSyncPolicy::BestEffort => {
                tracing::warn!(
                    error = %e,
                    video_id = %video.id,
                    asset_kind = %kind,
                    url = ?video.asset_url(kind),
                    consistency = "eventually_consistent_url_index",
                    "Asset stored but video record update failed; responding with unsaved record"
                );
            }
            MetadataSyncPolicy::Strict => {
                tracing::error!(
                    error = %e,
                    video_id = %video.id,
                    asset_kind = %kind,
                    "Asset stored but video record update failed"
                );
                return Err(e);
            }
        },
    }

    Ok(video)
}

/// Delete the asset a record no longer points at, when configured to.
///
/// Runs in the background; a failure only leaves the old object behind.
fn release_superseded_asset(
    storage: &Arc<dyn Storage>,
    policy: SupersededAssetPolicy,
    video: &VideoRecord,
    kind: AssetKind,
    previous_url: String,
) {
    if policy == SupersededAssetPolicy::Retain {
        return;
    }

    let Some(key) = storage.key_from_url(&previous_url) else {
        tracing::debug!(
            video_id = %video.id,
            url = %previous_url,
            "Superseded asset is not in this store; leaving it in place"
        );
        return;
    };

    if video.asset_url(kind) == Some(previous_url.as_str()) {
        return;
    }

    let storage = storage.clone();
    let video_id = video.id;
    tokio::spawn(async move {
        match storage.delete(&key).await {
            Ok(()) => tracing::info!(
                video_id = %video_id,
                key = %key,
                "Deleted superseded asset"
            ),
            Err(e) => tracing::warn!(
                error = %e,
                video_id = %video_id,
                key = %key,
                "Failed to delete superseded asset"
            ),
        }
    });
}
