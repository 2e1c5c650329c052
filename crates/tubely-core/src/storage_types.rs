/// Storage backend types
///
/// Thumbnails always live on the local backend; videos go to the object store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    S3,
    Local,
}
