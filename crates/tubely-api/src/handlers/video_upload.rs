use crate::error::{ErrorResponse, HttpAppError};
use crate::services::upload::{authorize_video_owner, commit, intake, sync};
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::HeaderMap,
    Json,
};
use std::sync::Arc;
use tubely_core::{AssetKind, VideoRecord};
use tubely_storage::generate_asset_key;

#[utoipa::path(
    post,
    path = "/api/videos/{video_id}/video",
    tag = "videos",
    params(
        ("video_id" = uuid::Uuid, Path, description = "Video ID")
    ),
    request_body(content = inline(Object), content_type = "multipart/form-data", description = "MP4 file in form field 'video'"),
    responses(
        (status = 200, description = "Video uploaded; returns the updated video", body = VideoRecord),
        (status = 400, description = "Invalid identifier, missing field, or unsupported media type", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credential, or caller does not own the video", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Storage or metadata failure", body = ErrorResponse)
    )
)]
pub async fn upload_video(
    State(state): State<Arc<AppState>>,
    Path(video_id): Path<String>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<VideoRecord>, HttpAppError> {
    let kind = AssetKind::Video;
    let upload = authorize_video_owner(&state, &video_id, &headers).await?;

    let limits = state.config.limits_for(kind);
    intake::check_declared_length(&headers, &limits)?;
    let mut multipart = multipart.map_err(intake::multipart_rejection)?;

    let (staged, media_type) = intake::stage_file_field(
        &mut multipart,
        kind,
        &limits,
        state.config.upload_temp_dir.as_deref(),
    )
    .await?;

    let start = std::time::Instant::now();
    let key = generate_asset_key(state.config.asset_key_random_bytes, &media_type, kind);
    let size_bytes = staged.size_bytes();
    let url = commit::commit_staged(state.media.videos.as_ref(), &key, staged, &media_type).await?;

    tracing::info!(
        video_id = %upload.video_id,
        user_id = %upload.user_id,
        key = %key,
        media_type = %media_type,
        size_bytes,
        duration_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Video stored"
    );

    let video = sync::publish_asset_url(
        state.media.repository.as_ref(),
        &state.media.videos,
        state.config.metadata_sync_policy,
        state.config.superseded_asset_policy,
        upload.video,
        kind,
        url,
    )
    .await?;

    Ok(Json(video))
}
