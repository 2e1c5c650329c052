//! Scratch-file staging for uploads too large to hold in memory.
//!
//! A `StagedUpload` owns its scratch file through a `TempPath`, so the file
//! is removed whenever the value (or the path handed out by `finish`) is
//! dropped, on success and on every early return.

use std::io::SeekFrom;
use std::path::Path;
use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::{AsyncSeekExt, AsyncWriteExt};
use tubely_core::AppError;

const STAGING_PREFIX: &str = "tubely-upload-";

pub struct StagedUpload {
    file: File,
    path: TempPath,
    size_bytes: u64,
}

impl StagedUpload {
    /// Create a uniquely named scratch file in `dir`, or the system temp dir.
    pub fn create(dir: Option<&Path>, extension: &str) -> Result<Self, AppError> {
        let suffix = format!(".{}", extension);
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX).suffix(&suffix);

        let named = match dir {
            Some(dir) => builder.tempfile_in(dir),
            None => builder.tempfile(),
        }
        .map_err(|e| AppError::StorageWriteFailed(format!("Failed to create staging file: {}", e)))?;

        let (file, path) = named.into_parts();
        tracing::debug!(path = %path.display(), "Staging file created");

        Ok(Self {
            file: File::from_std(file),
            path,
            size_bytes: 0,
        })
    }

    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), AppError> {
        self.file.write_all(chunk).await.map_err(|e| {
            AppError::StorageWriteFailed(format!(
                "Failed to write staging file {}: {}",
                self.path().display(),
                e
            ))
        })?;
        self.size_bytes += chunk.len() as u64;
        Ok(())
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and rewind the scratch file for reading.
    ///
    /// The caller keeps the returned `TempPath` alive until the reader is done.
    pub async fn finish(mut self) -> Result<(TempPath, File, u64), AppError> {
        let path_display = self.path.display().to_string();
        let rewound = async {
            self.file.flush().await?;
            self.file.seek(SeekFrom::Start(0)).await?;
            Ok::<(), std::io::Error>(())
        }
        .await;

        rewound.map_err(|e| {
            AppError::StorageWriteFailed(format!(
                "Failed to rewind staging file {}: {}",
                path_display, e
            ))
        })?;

        Ok((self.path, self.file, self.size_bytes))
    }
}
