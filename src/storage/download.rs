use crate::storage::error::{Result, StorageError};
use crate::storage::models::S3StorageClient;
use crate::utils::log_utils;
use std::fs::File;
use std::io::Write;
use std::path::Path;

impl S3StorageClient {
    /// Stream an object into `local_path`, truncating it first.
    ///
    /// The request is sent before the file is opened, so a missing key never
    /// touches the filesystem.
    pub fn download_to(&self, bucket_name: &str, object_key: &str, local_path: &Path) -> Result<u64> {
        self.runtime.block_on(async {
            let resp = self
                .client
                .get_object()
                .bucket(bucket_name)
                .key(object_key)
                .send()
                .await
                .map_err(|e| StorageError::sdk("GetObject", e))?;

            log_utils::debug(
                &format!(
                    "S3 download response received\nContent length: {:?}\nE-Tag: {:?}",
                    resp.content_length(),
                    resp.e_tag()
                ),
                self.verbose,
            );

            let mut body = resp.body;
            let mut file = File::create(local_path)?;
            let mut written: u64 = 0;

            while let Some(chunk) = body
                .try_next()
                .await
                .map_err(|e| StorageError::sdk("GetObject body", e))?
            {
                file.write_all(&chunk)?;
                written += chunk.len() as u64;
            }
            file.flush()?;

            log_utils::debug(
                &format!("Successfully downloaded {written} bytes from S3"),
                self.verbose,
            );
            Ok(written)
        })
    }
}
