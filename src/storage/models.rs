use aws_sdk_s3::Client;
use serde::Serialize;
use std::path::PathBuf;

/// Whether an upload may provision the target bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BucketPolicy {
    /// Write straight to the bucket; a missing bucket surfaces as an SDK error
    #[default]
    RequireExisting,
    /// Create the bucket first when it isn't among the visible buckets
    CreateIfMissing,
}

/// Outcome of an ensure-bucket call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketStatus {
    Existing,
    Created,
}

/// One object written by an upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedObject {
    pub key: String,
    pub local_path: PathBuf,
    pub size: u64,
}

/// Represents the result of a single or recursive upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub bucket: String,
    pub uploaded: Vec<UploadedObject>,
}

impl UploadSummary {
    pub fn new(bucket: &str) -> Self {
        Self {
            bucket: bucket.to_string(),
            uploaded: Vec::new(),
        }
    }

    pub fn total_bytes(&self) -> u64 {
        self.uploaded.iter().map(|o| o.size).sum()
    }
}

/// Blocking client for an S3-compatible store
pub struct S3StorageClient {
    pub(crate) client: Client,
    pub(crate) runtime: tokio::runtime::Runtime,
    pub verbose: u8,
}
