use super::expansion::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Checks if a file is readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    let expanded_path = expand_tilde(&path)?;

    if expanded_path.is_file() && fs::File::open(&expanded_path).is_ok() {
        Ok(expanded_path)
    } else {
        Err(format!("The file '{file}' is not readable."))
    }
}

/// Checks that a download may land at `file_path` without creating anything.
///
/// The parent directory must exist and the path itself must not be a directory.
pub fn check_download_destination(file_path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file_path);
    let expanded_path = expand_tilde(&path)?;

    if expanded_path.is_dir() {
        return Err(format!(
            "'{}' is a directory, expected a file path.",
            expanded_path.display()
        ));
    }

    if let Some(parent) = expanded_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            return Err(format!(
                "The parent directory of '{}' does not exist.",
                expanded_path.display()
            ));
        }

        if !parent.is_dir() {
            return Err(format!(
                "The parent path '{}' is not a directory.",
                parent.display()
            ));
        }
    }

    Ok(expanded_path)
}
