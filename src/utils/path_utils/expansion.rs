use home::home_dir;
use std::path::{Path, PathBuf};

/// Replace a leading `~` component with the home directory.
///
/// `~user` forms and a `~` later in the path are left alone.
pub fn expand_tilde(path: &Path) -> Result<PathBuf, String> {
    let Ok(rest) = path.strip_prefix("~") else {
        return Ok(path.to_path_buf());
    };
    let home = home_dir().ok_or_else(|| {
        format!("Cannot expand '{}': home directory is unknown", path.display())
    })?;
    Ok(home.join(rest))
}
