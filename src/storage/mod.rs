pub mod bucket;
pub mod client;
pub mod download;
pub mod error;
pub mod models;
pub mod upload;


// Re-export types for convenient access from other modules
pub use error::{Result, StorageError};
pub use models::{BucketPolicy, BucketStatus, S3StorageClient, UploadSummary, UploadedObject};

use crate::interfaces::ObjectStore;
use std::path::Path;

impl ObjectStore for S3StorageClient {
    fn list_bucket_names(&self) -> Result<Vec<String>> {
        S3StorageClient::list_bucket_names(self)
    }

    fn create_bucket(&self, bucket: &str) -> Result<()> {
        S3StorageClient::create_bucket(self, bucket)
    }

    fn put_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        S3StorageClient::put_file(self, bucket, key, local_path)
    }

    fn download_to(&self, bucket: &str, key: &str, local_path: &Path) -> Result<u64> {
        S3StorageClient::download_to(self, bucket, key, local_path)
    }

    fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        S3StorageClient::list_keys(self, bucket, prefix)
    }
}
