//! Tubely Database Library
//!
//! Persistence for video records. Handlers depend on the `VideoRepository`
//! trait; `PgVideoRepository` is the production implementation.

pub mod db;

pub use db::{PgVideoRepository, VideoRepository};

/// Embedded schema migrations, applied at start-up.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");
