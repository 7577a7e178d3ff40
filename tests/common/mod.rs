#![allow(dead_code)]

use objstore_util::StorageError;
use objstore_util::interfaces::ObjectStore;
use objstore_util::storage::Result;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

/// In-memory object store; buckets and objects live in ordered maps
#[derive(Default)]
pub struct MemoryStore {
    buckets: RefCell<BTreeMap<String, BTreeMap<String, Vec<u8>>>>,
    calls: RefCell<Vec<String>>,
    fail_on_key: Option<String>,
}

impl MemoryStore {
    pub fn with_buckets(names: &[&str]) -> Self {
        let store = Self::default();
        for name in names {
            store
                .buckets
                .borrow_mut()
                .insert((*name).to_string(), BTreeMap::new());
        }
        store
    }

    /// Make `put_file` fail for this key
    pub fn failing_on(mut self, key: &str) -> Self {
        self.fail_on_key = Some(key.to_string());
        self
    }

    pub fn insert(&self, bucket: &str, key: &str, body: &[u8]) {
        self.buckets
            .borrow_mut()
            .entry(bucket.to_string())
            .or_default()
            .insert(key.to_string(), body.to_vec());
    }

    pub fn keys(&self, bucket: &str) -> Vec<String> {
        self.buckets
            .borrow()
            .get(bucket)
            .map(|objects| objects.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn object(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.buckets.borrow().get(bucket)?.get(key).cloned()
    }

    pub fn has_bucket(&self, bucket: &str) -> bool {
        self.buckets.borrow().contains_key(bucket)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn not_found(operation: &'static str, what: String) -> StorageError {
        StorageError::sdk(
            operation,
            std::io::Error::new(std::io::ErrorKind::NotFound, what),
        )
    }
}

impl ObjectStore for MemoryStore {
    fn list_bucket_names(&self) -> Result<Vec<String>> {
        self.record("list_buckets".to_string());
        Ok(self.buckets.borrow().keys().cloned().collect())
    }

    fn create_bucket(&self, bucket: &str) -> Result<()> {
        self.record(format!("create_bucket {bucket}"));
        self.buckets
            .borrow_mut()
            .entry(bucket.to_string())
            .or_default();
        Ok(())
    }

    fn put_file(&self, bucket: &str, key: &str, local_path: &Path) -> Result<()> {
        self.record(format!("put {bucket}/{key}"));
        if self.fail_on_key.as_deref() == Some(key) {
            return Err(StorageError::Runtime(format!("injected failure for {key}")));
        }
        let body = std::fs::read(local_path)?;
        let mut buckets = self.buckets.borrow_mut();
        let objects = buckets
            .get_mut(bucket)
            .ok_or_else(|| Self::not_found("PutObject", format!("NoSuchBucket: {bucket}")))?;
        objects.insert(key.to_string(), body);
        Ok(())
    }

    fn download_to(&self, bucket: &str, key: &str, local_path: &Path) -> Result<u64> {
        self.record(format!("get {bucket}/{key}"));
        let body = self
            .object(bucket, key)
            .ok_or_else(|| Self::not_found("GetObject", format!("NoSuchKey: {key}")))?;
        std::fs::write(local_path, &body)?;
        Ok(body.len() as u64)
    }

    fn list_keys(&self, bucket: &str, prefix: &str) -> Result<Vec<String>> {
        self.record(format!("list {bucket}/{prefix}"));
        Ok(self
            .keys(bucket)
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect())
    }
}
