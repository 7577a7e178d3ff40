use crate::storage::error::{Result, StorageError};
use crate::storage::models::S3StorageClient;
use crate::utils::log_utils;

impl S3StorageClient {
    /// Names of all buckets owned by the configured credentials
    pub fn list_bucket_names(&self) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let resp = self
                .client
                .list_buckets()
                .send()
                .await
                .map_err(|e| StorageError::sdk("ListBuckets", e))?;

            let names: Vec<String> = resp
                .buckets()
                .iter()
                .filter_map(|b| b.name().map(str::to_string))
                .collect();

            log_utils::debug(&format!("Found {} buckets", names.len()), self.verbose);
            Ok(names)
        })
    }

    /// Create a bucket without a location constraint
    pub fn create_bucket(&self, bucket_name: &str) -> Result<()> {
        self.runtime.block_on(async {
            log_utils::info(&format!("Creating bucket '{bucket_name}'"), self.verbose);

            self.client
                .create_bucket()
                .bucket(bucket_name)
                .send()
                .await
                .map_err(|e| StorageError::sdk("CreateBucket", e))?;

            log_utils::debug(
                &format!("Successfully created bucket '{bucket_name}'"),
                self.verbose,
            );
            Ok(())
        })
    }

    /// List every object key in a bucket that starts with a prefix
    pub fn list_keys(&self, bucket_name: &str, prefix: &str) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            log_utils::debug(
                &format!("Listing objects with prefix '{prefix}' in bucket '{bucket_name}'"),
                self.verbose,
            );

            let mut pages = self
                .client
                .list_objects_v2()
                .bucket(bucket_name)
                .prefix(prefix)
                .into_paginator()
                .send();

            let mut keys = Vec::new();
            while let Some(page) = pages.next().await {
                let page = page.map_err(|e| StorageError::sdk("ListObjectsV2", e))?;
                keys.extend(
                    page.contents()
                        .iter()
                        .filter_map(|object| object.key().map(str::to_string)),
                );
            }

            log_utils::debug(
                &format!("Found {} objects with prefix '{prefix}'", keys.len()),
                self.verbose,
            );
            Ok(keys)
        })
    }
}
