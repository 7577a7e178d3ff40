use super::StorageFacade;
use crate::interfaces::ObjectStore;
use crate::storage::{Result, StorageError};

impl<S: ObjectStore> StorageFacade<S> {
    /// Every key in `bucket` beginning with `key_prefix`, in store order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::BucketNotFound` when no visible bucket has that exact name.
    pub fn list_bucket_files(&self, bucket: &str, key_prefix: &str) -> Result<Vec<String>> {
        if !self.bucket_exists(bucket)? {
            return Err(StorageError::BucketNotFound(bucket.to_string()));
        }

        let keys: Vec<String> = self
            .store
            .list_keys(bucket, key_prefix)?
            .into_iter()
            .filter(|key| key.starts_with(key_prefix))
            .collect();

        self.logger.debug(&format!(
            "{} keys under '{key_prefix}' in bucket '{bucket}'",
            keys.len()
        ));
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MockObjectStore;
    use crate::utils::log_utils::Logger;
    use mockall::predicate::eq;

    #[test]
    fn unknown_bucket_is_reported_not_indexed() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_bucket_names()
            .returning(|| Ok(vec!["other".to_string()]));
        store.expect_list_keys().never();

        let facade = StorageFacade::new(store, Logger::new(0));
        let err = facade.list_bucket_files("data", "").unwrap_err();
        assert!(matches!(err, StorageError::BucketNotFound(ref b) if b == "data"));
    }

    #[test]
    fn keys_keep_store_order() {
        let mut store = MockObjectStore::new();
        store
            .expect_list_bucket_names()
            .returning(|| Ok(vec!["data".to_string()]));
        store
            .expect_list_keys()
            .with(eq("data"), eq("runs/"))
            .times(1)
            .returning(|_, _| {
                Ok(vec![
                    "runs/b.csv".to_string(),
                    "runs/a.csv".to_string(),
                ])
            });

        let facade = StorageFacade::new(store, Logger::new(0));
        let keys = facade.list_bucket_files("data", "runs/").unwrap();
        assert_eq!(keys, vec!["runs/b.csv", "runs/a.csv"]);
    }
}
