//! Tubely API Library
//!
//! HTTP surface of the upload pipeline: ownership guard, upload intake,
//! staging, storage commit and metadata synchronisation, plus application
//! setup.

// Module declarations
mod api_doc;
mod handlers;
mod services;
pub mod setup;
mod telemetry;

// Public modules
pub mod auth;
pub mod error;
pub mod state;

// Re-exports
pub use error::{ErrorResponse, HttpAppError};
pub use state::AppState;
