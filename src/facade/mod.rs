//! Bucket-scoped operations on top of any [`ObjectStore`].
//!
//! [`StorageFacade`] holds a store and a logger and implements the operations.
//! The free functions below match the one-shot call style: each one builds a
//! fresh [`S3StorageClient`] from the given connection settings, runs a single
//! operation and drops the client. They log nothing beyond normal output; hold a
//! [`StorageFacade`] with a verbose [`Logger`] to see `info:`/`dbg:` lines.

mod bucket;
mod download;
mod list;
mod upload;

pub use upload::derive_object_key;

use crate::connection::ConnectionParams;
use crate::interfaces::ObjectStore;
use crate::storage::{BucketPolicy, BucketStatus, Result, S3StorageClient, UploadSummary};
use crate::utils::log_utils::Logger;
use std::path::Path;

pub struct StorageFacade<S: ObjectStore> {
    store: S,
    logger: Logger,
}

impl<S: ObjectStore> StorageFacade<S> {
    pub fn new(store: S, logger: Logger) -> Self {
        Self { store, logger }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn connect(params: &ConnectionParams) -> Result<StorageFacade<S3StorageClient>> {
    let logger = Logger::default();
    let client = S3StorageClient::connect(params, 0)?;
    Ok(StorageFacade::new(client, logger))
}

/// Create `bucket` unless a bucket with that exact name is already visible
pub fn ensure_bucket(bucket: &str, params: &ConnectionParams) -> Result<BucketStatus> {
    connect(params)?.ensure_bucket(bucket)
}

pub fn bucket_exists(bucket: &str, params: &ConnectionParams) -> Result<bool> {
    connect(params)?.bucket_exists(bucket)
}

/// Upload one local file to `bucket`/`key`
pub fn upload_file(
    bucket: &str,
    key: &str,
    local_path: &Path,
    params: &ConnectionParams,
    policy: BucketPolicy,
) -> Result<UploadSummary> {
    connect(params)?.upload_file(bucket, key, local_path, policy)
}

/// Upload every file under `local_folder` beneath `key_prefix`
pub fn recursive_upload(
    bucket: &str,
    key_prefix: &str,
    local_folder: &Path,
    params: &ConnectionParams,
    policy: BucketPolicy,
) -> Result<UploadSummary> {
    connect(params)?.recursive_upload(bucket, key_prefix, local_folder, policy)
}

/// Download `bucket`/`key` to `local_path`, returning the number of bytes written
pub fn download(
    bucket: &str,
    key: &str,
    local_path: &Path,
    params: &ConnectionParams,
) -> Result<u64> {
    connect(params)?.download(bucket, key, local_path)
}

/// Keys in `bucket` that start with `key_prefix`
pub fn list_bucket_files(
    bucket: &str,
    key_prefix: &str,
    params: &ConnectionParams,
) -> Result<Vec<String>> {
    connect(params)?.list_bucket_files(bucket, key_prefix)
}
