//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use tubely_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tubely API",
        version = "0.1.0",
        description = "Upload pipeline for Tubely videos: thumbnails are stored on local disk and served under /assets, video files are stored in S3. Both endpoints require a bearer token for the video's owner."
    ),
    paths(
        handlers::thumbnail_upload::upload_thumbnail,
        handlers::video_upload::upload_video,
    ),
    components(
        schemas(
            models::VideoRecord,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "videos", description = "Thumbnail and video uploads for existing videos")
    )
)]
pub struct ApiDoc;
