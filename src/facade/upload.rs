use super::StorageFacade;
use crate::interfaces::ObjectStore;
use crate::storage::{BucketPolicy, Result, StorageError, UploadSummary, UploadedObject};
use std::path::Path;
use walkdir::WalkDir;

/// Object key for a file at `relative` below the upload root.
///
/// The prefix and the relative path are joined with the local path separator.
/// An empty prefix yields the relative path as-is.
pub fn derive_object_key(key_prefix: &str, relative: &Path) -> Result<String> {
    let joined = if key_prefix.is_empty() {
        relative.to_path_buf()
    } else {
        Path::new(key_prefix).join(relative)
    };

    joined
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| StorageError::InvalidPath(format!("{} is not valid UTF-8", joined.display())))
}

impl<S: ObjectStore> StorageFacade<S> {
    fn apply_policy(&self, bucket: &str, policy: BucketPolicy) -> Result<()> {
        if policy == BucketPolicy::CreateIfMissing {
            self.ensure_bucket(bucket)?;
        }
        Ok(())
    }

    fn put_one(&self, bucket: &str, key: &str, local_path: &Path) -> Result<UploadedObject> {
        let size = std::fs::metadata(local_path)
            .map_err(|_| StorageError::LocalFileMissing(local_path.to_path_buf()))?
            .len();

        self.logger
            .info(&format!("Uploading {} -> {bucket}/{key}", local_path.display()));
        self.store.put_file(bucket, key, local_path)?;

        Ok(UploadedObject {
            key: key.to_string(),
            local_path: local_path.to_path_buf(),
            size,
        })
    }

    /// Upload a single file.
    ///
    /// A missing local file fails before the store is contacted.
    pub fn upload_file(
        &self,
        bucket: &str,
        key: &str,
        local_path: &Path,
        policy: BucketPolicy,
    ) -> Result<UploadSummary> {
        if !local_path.is_file() {
            return Err(StorageError::LocalFileMissing(local_path.to_path_buf()));
        }
        self.apply_policy(bucket, policy)?;

        let mut summary = UploadSummary::new(bucket);
        summary.uploaded.push(self.put_one(bucket, key, local_path)?);
        Ok(summary)
    }

    /// Upload every file below `local_folder`, depth-first, in walk order.
    ///
    /// Stops at the first failure; objects written before it stay in the bucket.
    pub fn recursive_upload(
        &self,
        bucket: &str,
        key_prefix: &str,
        local_folder: &Path,
        policy: BucketPolicy,
    ) -> Result<UploadSummary> {
        if !local_folder.is_dir() {
            return Err(StorageError::NotADirectory(local_folder.to_path_buf()));
        }
        self.apply_policy(bucket, policy)?;

        let mut summary = UploadSummary::new(bucket);
        for entry in WalkDir::new(local_folder) {
            let entry = entry?;
            if entry.file_type().is_dir() || !entry.path().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(local_folder)
                .map_err(|e| StorageError::InvalidPath(e.to_string()))?;
            let key = derive_object_key(key_prefix, relative)?;

            summary.uploaded.push(self.put_one(bucket, &key, entry.path())?);
        }

        self.logger.info(&format!(
            "Uploaded {} files ({} bytes) to {bucket}",
            summary.uploaded.len(),
            summary.total_bytes()
        ));
        Ok(summary)
    }
}
