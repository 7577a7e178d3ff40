use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Clap value parser for a local folder to upload.
///
/// The folder must exist and its entries must be listable, since the upload
/// walks it before sending anything.
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = expand_tilde(&PathBuf::from(dir))?;

    if !path.is_dir() {
        return Err(format!("The directory '{dir}' is not readable: not a directory"));
    }
    match fs::read_dir(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("The directory '{dir}' is not readable: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn accepts_readable_directory() {
        let dir = tempdir().unwrap();
        let checked = check_readable_dir(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(checked, dir.path());
    }

    #[test]
    fn rejects_regular_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"").unwrap();
        let err = check_readable_dir(file.to_str().unwrap()).unwrap_err();
        assert!(err.contains("is not readable"));
    }

    #[test]
    fn missing_directory_names_the_argument() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let arg = missing.to_str().unwrap();
        let err = check_readable_dir(arg).unwrap_err();
        assert!(err.contains(arg));
        assert!(err.contains("not a directory"));
    }
}
