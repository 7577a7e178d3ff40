use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to move download into place: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Local file does not exist: {}", .0.display())]
    LocalFileMissing(PathBuf),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Path error: {0}")]
    InvalidPath(String),

    #[error("Bucket not found: {0}")]
    BucketNotFound(String),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("{operation} failed: {message}")]
    Sdk {
        operation: &'static str,
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    /// Wrap an SDK error, keeping it as the source and its full context as the message
    pub fn sdk<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let message = aws_sdk_s3::error::DisplayErrorContext(&err).to_string();
        StorageError::Sdk {
            operation,
            message,
            source: Box::new(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn sdk_error_keeps_original_as_source() {
        let inner = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = StorageError::sdk("PutObject", inner);

        assert!(err.to_string().starts_with("PutObject failed: "));
        let source = err.source().expect("source should be set");
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn bucket_not_found_names_the_bucket() {
        let err = StorageError::BucketNotFound("reports".to_string());
        assert_eq!(err.to_string(), "Bucket not found: reports");
    }
}
