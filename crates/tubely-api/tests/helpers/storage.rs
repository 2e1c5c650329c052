use async_trait::async_trait;
use std::collections::HashMap;
use std::pin::Pin;
use std::sync::Mutex;
use tokio::io::{AsyncRead, AsyncReadExt};
use tubely_storage::s3::object_url;
use tubely_storage::{Storage, StorageError, StorageResult};

/// Object stored by `MemoryStorage`.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub data: Vec<u8>,
    pub content_type: String,
}

/// Stand-in for the S3 bucket. Produces real S3-style URLs.
pub struct MemoryStorage {
    bucket: String,
    region: String,
    fail_uploads: bool,
    objects: Mutex<HashMap<String, StoredObject>>,
}

impl MemoryStorage {
    pub fn new(bucket: String, region: String, fail_uploads: bool) -> Self {
        Self {
            bucket,
            region,
            fail_uploads,
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn object(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    fn put(&self, key: &str, data: Vec<u8>, content_type: &str) -> StorageResult<String> {
        if self.fail_uploads {
            return Err(StorageError::UploadFailed(
                "simulated network error: connection reset".to_string(),
            ));
        }
        self.objects.lock().unwrap().insert(
            key.to_string(),
            StoredObject {
                data,
                content_type: content_type.to_string(),
            },
        );
        Ok(self.public_url(key))
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        self.put(storage_key, data, content_type)
    }

    async fn upload_stream(
        &self,
        storage_key: &str,
        content_type: &str,
        content_length: Option<u64>,
        mut reader: Pin<Box<dyn AsyncRead + Send + Unpin>>,
    ) -> StorageResult<String> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;
        if let Some(expected) = content_length {
            assert_eq!(data.len() as u64, expected, "declared length must match staged bytes");
        }
        self.put(storage_key, data, content_type)
    }

    async fn delete(&self, storage_key: &str) -> StorageResult<()> {
        self.objects.lock().unwrap().remove(storage_key);
        Ok(())
    }

    fn public_url(&self, storage_key: &str) -> String {
        object_url(&self.bucket, &self.region, None, storage_key)
    }
}
