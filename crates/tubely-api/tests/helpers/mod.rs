//! Test helpers: build AppState and router for integration tests.
//!
//! Thumbnails go to a real `LocalStorage` under a temp dir; videos go to an
//! in-memory store that can be told to fail; the metadata store is an
//! in-memory repository.

#![allow(dead_code)]

pub mod auth;
pub mod fixtures;
pub mod repository;
pub mod storage;
pub mod streaming;

use axum::Router;
use axum_test::TestServer;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tubely_api::auth::JwtService;
use tubely_api::setup::routes;
use tubely_api::state::{AppState, MediaState, SecurityConfig};
use tubely_core::{Config, MetadataSyncPolicy, SupersededAssetPolicy, VideoRecord};
use tubely_storage::LocalStorage;

use repository::InMemoryVideoRepository;
use storage::MemoryStorage;

pub const TEST_JWT_SECRET: &str = "test-secret-key-min-32-characters-long-for-testing";
pub const TEST_PORT: u16 = 8091;

/// Test application: server plus handles on every collaborator it writes to.
pub struct TestApp {
    pub server: TestServer,
    /// Same router the server wraps, for requests `TestServer` cannot express.
    pub router: Router,
    pub repository: Arc<InMemoryVideoRepository>,
    pub videos: Arc<MemoryStorage>,
    pub jwt: JwtService,
    pub assets_dir: TempDir,
    pub staging_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn assets_path(&self) -> &Path {
        self.assets_dir.path()
    }

    /// Files currently in the asset root.
    pub fn asset_files(&self) -> Vec<PathBuf> {
        list_dir(self.assets_dir.path())
    }

    /// Files currently in the staging directory.
    pub fn staging_files(&self) -> Vec<PathBuf> {
        list_dir(self.staging_dir.path())
    }

    /// Insert a video owned by a fresh user; returns the record and a token for that user.
    pub fn seed_video(&self) -> (VideoRecord, String) {
        let video = fixtures::video_record(uuid::Uuid::new_v4());
        self.repository.insert(video.clone());
        let token = auth::token_for(&self.jwt, video.user_id);
        (video, token)
    }
}

fn list_dir(path: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(path)
        .expect("Failed to read directory")
        .map(|entry| entry.expect("Failed to read entry").path())
        .collect()
}

/// Knobs for `setup_test_app_with`.
pub struct TestOptions {
    pub thumbnail_max_bytes: usize,
    pub video_max_bytes: usize,
    pub metadata_sync_policy: MetadataSyncPolicy,
    pub superseded_asset_policy: SupersededAssetPolicy,
    pub fail_video_uploads: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            thumbnail_max_bytes: 10 << 20,
            video_max_bytes: 4 << 20,
            metadata_sync_policy: MetadataSyncPolicy::BestEffort,
            superseded_asset_policy: SupersededAssetPolicy::Retain,
            fail_video_uploads: false,
        }
    }
}

pub async fn setup_test_app() -> TestApp {
    setup_test_app_with(TestOptions::default()).await
}

pub async fn setup_test_app_with(options: TestOptions) -> TestApp {
    let assets_dir = tempfile::tempdir().expect("Failed to create assets dir");
    let staging_dir = tempfile::tempdir().expect("Failed to create staging dir");

    let config = create_test_config(&options, assets_dir.path(), staging_dir.path());

    let thumbnails = LocalStorage::new(assets_dir.path(), config.assets_base_url())
        .await
        .expect("Failed to create local storage");
    let videos = Arc::new(MemoryStorage::new(
        config.s3_bucket.clone(),
        config.s3_region.clone(),
        options.fail_video_uploads,
    ));
    let repository = Arc::new(InMemoryVideoRepository::default());
    let jwt = JwtService::new(&config.jwt_secret);

    let state = Arc::new(AppState {
        media: MediaState {
            repository: repository.clone(),
            thumbnails: Arc::new(thumbnails),
            videos: videos.clone(),
        },
        security: SecurityConfig { jwt: jwt.clone() },
        config: config.clone(),
    });

    let app = routes::setup_routes(&config, state).expect("Failed to setup routes");
    let server =
        TestServer::new(app.clone().into_make_service()).expect("Failed to create test server");

    TestApp {
        server,
        router: app,
        repository,
        videos,
        jwt,
        assets_dir,
        staging_dir,
    }
}

fn create_test_config(options: &TestOptions, assets_root: &Path, staging_dir: &Path) -> Config {
    Config {
        server_port: TEST_PORT,
        public_host: "localhost".to_string(),
        cors_origins: vec!["*".to_string()],
        environment: "test".to_string(),
        database_url: "postgres://unused".to_string(),
        db_max_connections: 1,
        db_timeout_seconds: 5,
        jwt_secret: TEST_JWT_SECRET.to_string(),
        assets_root: assets_root.to_path_buf(),
        s3_bucket: "tubely-videos".to_string(),
        s3_region: "us-east-2".to_string(),
        s3_endpoint: None,
        upload_temp_dir: Some(staging_dir.to_path_buf()),
        thumbnail_max_bytes: options.thumbnail_max_bytes,
        thumbnail_allowed_content_types: vec![
            "image/jpeg".to_string(),
            "image/png".to_string(),
            "image/gif".to_string(),
            "image/webp".to_string(),
        ],
        video_max_bytes: options.video_max_bytes,
        video_allowed_content_types: vec!["video/mp4".to_string()],
        asset_key_random_bytes: 9,
        metadata_sync_policy: options.metadata_sync_policy,
        superseded_asset_policy: options.superseded_asset_policy,
    }
}
