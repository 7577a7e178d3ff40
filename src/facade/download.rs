use super::StorageFacade;
use crate::interfaces::ObjectStore;
use crate::storage::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{Builder as TempFileBuilder, NamedTempFile};

/// Where the bytes should finally land: a symlinked destination is written
/// through to its target, anything else (including a dangling link) is used as given.
fn resolve_destination(local_path: &Path) -> PathBuf {
    match fs::symlink_metadata(local_path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(local_path).unwrap_or_else(|_| local_path.to_path_buf())
        }
        _ => local_path.to_path_buf(),
    }
}

/// Staging file in `dir` whose mode matches what a plain create would give
fn staging_file_in(dir: &Path) -> Result<NamedTempFile> {
    let mut builder = TempFileBuilder::new();
    builder.prefix(".objstore-download-");

    // The requested mode is filtered through the umask, like File::create
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    Ok(builder.tempfile_in(dir)?)
}

impl<S: ObjectStore> StorageFacade<S> {
    /// Download `bucket`/`key` into `local_path`.
    ///
    /// Bytes land in a temp file next to the destination, which replaces
    /// `local_path` only once the whole object has arrived. A failed download
    /// leaves an existing destination untouched and creates no empty file.
    /// An existing destination keeps its permissions; a symlink is followed.
    pub fn download(&self, bucket: &str, key: &str, local_path: &Path) -> Result<u64> {
        let target = resolve_destination(local_path);
        let parent = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let staging = staging_file_in(parent)?;

        self.logger.info(&format!(
            "Downloading {bucket}/{key} -> {}",
            local_path.display()
        ));
        let written = self.store.download_to(bucket, key, staging.path())?;

        if let Ok(existing) = fs::metadata(&target) {
            staging.as_file().set_permissions(existing.permissions())?;
        }

        staging.persist(&target)?;
        self.logger
            .debug(&format!("Wrote {written} bytes to {}", target.display()));
        Ok(written)
    }
}
