use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::AssetKind;

/// A unit of hosted content.
///
/// `id` and `user_id` never change after creation. The URL fields are `None`
/// until the matching asset has been uploaded; they never hold an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct VideoRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl VideoRecord {
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Current URL for the given asset kind, if one has been uploaded.
    pub fn asset_url(&self, kind: AssetKind) -> Option<&str> {
        match kind {
            AssetKind::Thumbnail => self.thumbnail_url.as_deref(),
            AssetKind::Video => self.video_url.as_deref(),
        }
    }

    /// Point the record at a newly stored asset. Returns the URL it replaced.
    pub fn set_asset_url(&mut self, kind: AssetKind, url: String) -> Option<String> {
        self.updated_at = Utc::now();
        match kind {
            AssetKind::Thumbnail => self.thumbnail_url.replace(url),
            AssetKind::Video => self.video_url.replace(url),
        }
    }
}
