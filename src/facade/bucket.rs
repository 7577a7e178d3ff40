use super::StorageFacade;
use crate::interfaces::ObjectStore;
use crate::storage::{BucketStatus, Result};

impl<S: ObjectStore> StorageFacade<S> {
    /// Exact-name lookup among the buckets visible to the store's credentials
    pub fn bucket_exists(&self, bucket: &str) -> Result<bool> {
        let names = self.store.list_bucket_names()?;
        Ok(names.iter().any(|name| name == bucket))
    }

    /// Ensure bucket exists, create it if it doesn't.
    ///
    /// The check and the create are separate calls; a bucket created by someone
    /// else in between makes the create fail with the store's own error.
    pub fn ensure_bucket(&self, bucket: &str) -> Result<BucketStatus> {
        if self.bucket_exists(bucket)? {
            self.logger.debug(&format!("Bucket '{bucket}' already exists"));
            return Ok(BucketStatus::Existing);
        }

        self.logger
            .info(&format!("Bucket '{bucket}' doesn't exist, creating it..."));
        self.store.create_bucket(bucket)?;
        Ok(BucketStatus::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MockObjectStore;
    use crate::storage::StorageError;
    use crate::utils::log_utils::Logger;
    use mockall::predicate::eq;

    fn facade(store: MockObjectStore) -> StorageFacade<MockObjectStore> {
        StorageFacade::new(store, Logger::new(0))
    }

    #[test]
    fn existing_bucket_is_not_recreated() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_bucket_names()
            .times(1)
            .returning(|| Ok(vec!["logs".to_string(), "models".to_string()]));
        store.expect_create_bucket().never();

        let status = facade(store).ensure_bucket("models").unwrap();
        assert_eq!(status, BucketStatus::Existing);
    }

    #[test]
    fn missing_bucket_is_created() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_bucket_names()
            .returning(|| Ok(vec!["logs".to_string()]));
        store
            .expect_create_bucket()
            .with(eq("models"))
            .times(1)
            .returning(|_| Ok(()));

        let status = facade(store).ensure_bucket("models").unwrap();
        assert_eq!(status, BucketStatus::Created);
    }

    #[test]
    fn bucket_match_is_exact() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_bucket_names()
            .returning(|| Ok(vec!["models-archive".to_string(), "Models".to_string()]));

        assert!(!facade(store).bucket_exists("models").unwrap());
    }

    #[test]
    fn list_failure_propagates_without_create() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_bucket_names()
            .returning(|| Err(StorageError::Runtime("offline".to_string())));
        store.expect_create_bucket().never();

        let err = facade(store).ensure_bucket("models").unwrap_err();
        assert!(matches!(err, StorageError::Runtime(_)));
    }
}
