//! Upload-and-publish pipeline
//!
//! Both upload endpoints run the same sequence: `guard` authorises the caller
//! against the video record, `intake` bounds and validates the multipart
//! payload, `staging` spools large payloads to a scratch file, `commit` places
//! the asset in its store, and `sync` writes the resulting URL back to the
//! record. Every stage fails fast with an `AppError`; nothing after a
//! successful commit can turn the request into a failure except a strict
//! metadata policy.

pub mod commit;
pub mod guard;
pub mod intake;
pub mod staging;
pub mod sync;

pub use guard::authorize_video_owner;
pub use staging::StagedUpload;
