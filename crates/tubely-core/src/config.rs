//! Configuration module
//!
//! Process configuration is read once at start-up (`.env` first, then the
//! environment) and handed to request handlers through the application state.
//! Nothing in here is global.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::models::AssetKind;
use crate::policy::{MetadataSyncPolicy, SupersededAssetPolicy};

// Common constants
const SERVER_PORT: u16 = 8091;
const MAX_CONNECTIONS: u32 = 10;
const CONNECTION_TIMEOUT_SECS: u64 = 30;
const THUMBNAIL_MAX_BYTES: usize = 10 << 20;
const VIDEO_MAX_BYTES: usize = 1 << 30;
const ASSET_KEY_RANDOM_BYTES: usize = 9;
const MIN_ASSET_KEY_RANDOM_BYTES: usize = 4;
const MAX_ASSET_KEY_RANDOM_BYTES: usize = 32;

/// Size ceiling and allow-list for one asset kind.
#[derive(Clone, Debug)]
pub struct MediaLimits {
    pub max_file_size: usize,
    pub allowed_content_types: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Host name embedded in thumbnail URLs.
    pub public_host: String,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub jwt_secret: String,
    pub assets_root: PathBuf,
    pub s3_bucket: String,
    pub s3_region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, DigitalOcean Spaces, etc.)
    pub s3_endpoint: Option<String>,
    /// Staging directory for video uploads; `None` uses the system temp dir.
    pub upload_temp_dir: Option<PathBuf>,
    pub thumbnail_max_bytes: usize,
    pub thumbnail_allowed_content_types: Vec<String>,
    pub video_max_bytes: usize,
    pub video_allowed_content_types: Vec<String>,
    pub asset_key_random_bytes: usize,
    pub metadata_sync_policy: MetadataSyncPolicy,
    pub superseded_asset_policy: SupersededAssetPolicy,
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET environment variable not set"))?;
        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;
        let s3_bucket = env::var("S3_BUCKET")
            .map_err(|_| anyhow::anyhow!("S3_BUCKET environment variable not set"))?;
        let s3_region = env::var("S3_REGION")
            .or_else(|_| env::var("AWS_REGION"))
            .map_err(|_| anyhow::anyhow!("S3_REGION or AWS_REGION must be set"))?;

        let metadata_sync_policy = match env::var("METADATA_SYNC_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => MetadataSyncPolicy::default(),
        };
        let superseded_asset_policy = match env::var("SUPERSEDED_ASSET_POLICY") {
            Ok(raw) => raw.parse()?,
            Err(_) => SupersededAssetPolicy::default(),
        };

        let config = Config {
            server_port: parse_env("PORT", SERVER_PORT),
            public_host: env::var("PUBLIC_HOST").unwrap_or_else(|_| "localhost".to_string()),
            cors_origins,
            environment,
            database_url,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", MAX_CONNECTIONS),
            db_timeout_seconds: parse_env("DB_TIMEOUT_SECONDS", CONNECTION_TIMEOUT_SECS),
            jwt_secret,
            assets_root: PathBuf::from(
                env::var("ASSETS_ROOT").unwrap_or_else(|_| "./assets".to_string()),
            ),
            s3_bucket,
            s3_region,
            s3_endpoint: env::var("S3_ENDPOINT").ok().filter(|s| !s.trim().is_empty()),
            upload_temp_dir: env::var("UPLOAD_TEMP_DIR").ok().map(PathBuf::from),
            thumbnail_max_bytes: parse_env("THUMBNAIL_MAX_BYTES", THUMBNAIL_MAX_BYTES),
            thumbnail_allowed_content_types: parse_list(
                &env::var("THUMBNAIL_ALLOWED_CONTENT_TYPES")
                    .unwrap_or_else(|_| "image/jpeg,image/png,image/gif,image/webp".to_string()),
            ),
            video_max_bytes: parse_env("VIDEO_MAX_BYTES", VIDEO_MAX_BYTES),
            video_allowed_content_types: parse_list(
                &env::var("VIDEO_ALLOWED_CONTENT_TYPES").unwrap_or_else(|_| "video/mp4".to_string()),
            ),
            asset_key_random_bytes: parse_env("ASSET_KEY_RANDOM_BYTES", ASSET_KEY_RANDOM_BYTES),
            metadata_sync_policy,
            superseded_asset_policy,
        };

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.jwt_secret.len() < 32 {
            return Err(anyhow::anyhow!(
                "JWT_SECRET must be at least 32 characters long"
            ));
        }

        if !(self.database_url.starts_with("postgres://")
            || self.database_url.starts_with("postgresql://"))
        {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid PostgreSQL connection string"
            ));
        }

        if self.is_production() && self.cors_origins.iter().any(|o| o == "*") {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if !(MIN_ASSET_KEY_RANDOM_BYTES..=MAX_ASSET_KEY_RANDOM_BYTES)
            .contains(&self.asset_key_random_bytes)
        {
            return Err(anyhow::anyhow!(
                "ASSET_KEY_RANDOM_BYTES must be between {} and {}",
                MIN_ASSET_KEY_RANDOM_BYTES,
                MAX_ASSET_KEY_RANDOM_BYTES
            ));
        }

        if self.thumbnail_max_bytes == 0 || self.video_max_bytes == 0 {
            return Err(anyhow::anyhow!("Upload size ceilings must be greater than zero"));
        }

        if self.thumbnail_allowed_content_types.is_empty()
            || self.video_allowed_content_types.is_empty()
        {
            return Err(anyhow::anyhow!(
                "Content type allow-lists must not be empty"
            ));
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Public base URL under which the asset root is served.
    pub fn assets_base_url(&self) -> String {
        format!("http://{}:{}/assets", self.public_host, self.server_port)
    }

    /// Return size limits and allow-list for the given asset kind.
    pub fn limits_for(&self, kind: AssetKind) -> MediaLimits {
        match kind {
            AssetKind::Thumbnail => MediaLimits {
                max_file_size: self.thumbnail_max_bytes,
                allowed_content_types: self.thumbnail_allowed_content_types.clone(),
            },
            AssetKind::Video => MediaLimits {
                max_file_size: self.video_max_bytes,
                allowed_content_types: self.video_allowed_content_types.clone(),
            },
        }
    }
}
