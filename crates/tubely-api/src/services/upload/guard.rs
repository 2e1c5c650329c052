use crate::auth::bearer_token;
use crate::state::AppState;
use axum::http::HeaderMap;
use tubely_core::{AppError, VideoRecord};
use uuid::Uuid;

/// Caller and target record of an authorised upload.
#[derive(Debug)]
pub struct AuthorizedUpload {
    pub video_id: Uuid,
    pub user_id: Uuid,
    pub video: VideoRecord,
}

/// Resolve the caller and confirm they own the target video.
///
/// Checks run in a fixed order: identifier, credential, record lookup, ownership.
#[tracing::instrument(skip_all, fields(video_id = %raw_video_id))]
pub async fn authorize_video_owner(
    state: &AppState,
    raw_video_id: &str,
    headers: &HeaderMap,
) -> Result<AuthorizedUpload, AppError> {
    let video_id = Uuid::parse_str(raw_video_id)
        .map_err(|_| AppError::InvalidIdentifier("Invalid video ID".to_string()))?;

    let token = bearer_token(headers)?;
    let user_id = state.security.jwt.validate_token(token)?;

    let video = state
        .media
        .repository
        .get_video(video_id)
        .await
        .map_err(|e| match e {
            AppError::NotFound(msg) => AppError::NotFound(msg),
            other => AppError::MetadataUnavailable(other.to_string()),
        })?
        .ok_or_else(|| AppError::NotFound(format!("Video {} not found", video_id)))?;

    if !video.is_owned_by(user_id) {
        tracing::warn!(
            video_id = %video_id,
            user_id = %user_id,
            owner_id = %video.user_id,
            "Upload rejected: caller does not own video"
        );
        return Err(AppError::Unauthorized(
            "You are not the owner of this video".to_string(),
        ));
    }

    Ok(AuthorizedUpload {
        video_id,
        user_id,
        video,
    })
}
