use crate::storage::error::Result;
use mockall::automock;
use std::path::Path;

/// Primitive calls against an object store, kept small so the facade can be tested without a network
#[automock]
pub trait ObjectStore {
    /// Names of every bucket visible to the current credentials
    fn list_bucket_names(&self) -> Result<Vec<String>>;

    fn create_bucket(&self, bucket: &str) -> Result<()>;

    /// Upload the bytes at `local_path` to `bucket`/`key`
    fn put_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()>;

    /// Stream `bucket`/`key` into `local_path`, returning the bytes written
    fn download_to(&self, bucket: &str, key: &str, local_path: &Path) -> Result<u64>;

    /// Every key in `bucket` starting with `prefix`, across all result pages
    fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>>;
}
