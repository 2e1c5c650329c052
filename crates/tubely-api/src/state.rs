//! Application state.
//!
//! Built once at start-up from `Config` and shared with every handler as
//! `Arc<AppState>`.

use crate::auth::JwtService;
use std::sync::Arc;
use tubely_core::Config;
use tubely_db::VideoRepository;
use tubely_storage::Storage;

/// Asset stores and the metadata store the upload pipeline writes to.
#[derive(Clone)]
pub struct MediaState {
    pub repository: Arc<dyn VideoRepository>,
    /// Local asset root, served under `/assets`.
    pub thumbnails: Arc<dyn Storage>,
    pub videos: Arc<dyn Storage>,
}

#[derive(Clone)]
pub struct SecurityConfig {
    pub jwt: JwtService,
}

pub struct AppState {
    pub config: Config,
    pub media: MediaState,
    pub security: SecurityConfig,
}
