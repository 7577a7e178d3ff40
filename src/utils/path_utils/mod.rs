mod dir_checks;
mod expansion;
mod file_checks;

pub use dir_checks::check_readable_dir;
pub use expansion::expand_tilde;
pub use file_checks::{check_download_destination, check_readable_file};
