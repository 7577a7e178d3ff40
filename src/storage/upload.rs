use crate::storage::error::{Result, StorageError};
use crate::storage::models::S3StorageClient;
use crate::utils::log_utils;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;

impl S3StorageClient {
    /// Upload a local file to `bucket_name`/`object_key`
    pub fn put_file(&self, bucket_name: &str, object_key: &str, local_path: &Path) -> Result<()> {
        if !local_path.is_file() {
            return Err(StorageError::LocalFileMissing(local_path.to_path_buf()));
        }

        self.runtime.block_on(async {
            // Stream straight from disk, the file is never loaded whole
            let body = ByteStream::from_path(local_path)
                .await
                .map_err(|e| StorageError::sdk("ByteStream::from_path", e))?;

            log_utils::debug(
                &format!(
                    "Uploading {} to s3://{bucket_name}/{object_key}",
                    local_path.display()
                ),
                self.verbose,
            );

            let response = self
                .client
                .put_object()
                .bucket(bucket_name)
                .key(object_key)
                .body(body)
                .send()
                .await
                .map_err(|e| StorageError::sdk("PutObject", e))?;

            log_utils::debug(
                &format!("Upload complete, ETag: {:?}", response.e_tag()),
                self.verbose,
            );
            Ok(())
        })
    }
}
