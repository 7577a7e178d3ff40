pub mod app;
pub mod args;
pub mod connection;
pub mod facade;
pub mod interfaces;
pub mod storage;
pub mod utils {
    pub mod log_utils;
    pub mod path_utils;
}

pub use args::Args;
pub use connection::{ConnectionOverrides, ConnectionParams, resolve_connection, resolve_connection_with};
pub use facade::{
    StorageFacade, bucket_exists, download, ensure_bucket, list_bucket_files, recursive_upload,
    upload_file,
};
pub use storage::{BucketPolicy, BucketStatus, S3StorageClient, StorageError, UploadSummary};
