//! Route configuration and setup.

mod health;

use crate::api_doc::ApiDoc;
use crate::handlers::{thumbnail_upload, video_upload};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tubely_core::{AssetKind, Config};
use utoipa::OpenApi;

/// Setup all application routes
pub fn setup_routes(config: &Config, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config);

    let thumbnail_limit = config.limits_for(AssetKind::Thumbnail).max_file_size;
    let video_limit = config.limits_for(AssetKind::Video).max_file_size;

    // The per-route limit is the only body ceiling: its overrun surfaces inside the
    // multipart reader, where it is reported as PayloadTooLarge in the JSON envelope.
    let upload_routes = Router::new()
        .route(
            "/api/videos/{video_id}/thumbnail",
            post(thumbnail_upload::upload_thumbnail).layer(DefaultBodyLimit::max(thumbnail_limit)),
        )
        .route(
            "/api/videos/{video_id}/video",
            post(video_upload::upload_video).layer(DefaultBodyLimit::max(video_limit)),
        );

    let app = Router::new()
        .route("/health", get(health::liveness_check))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(upload_routes)
        .nest_service("/assets", ServeDir::new(&config.assets_root))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn setup_cors(config: &Config) -> CorsLayer {
    if config.cors_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    }
}
