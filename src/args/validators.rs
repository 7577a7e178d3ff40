use super::types::{Args, Command};

/// Checks that bucket names and keys are usable before any client is built
pub fn validate(args: &Args) -> Result<(), String> {
    if args.command.bucket().trim().is_empty() {
        return Err("Bucket name must not be empty.".to_string());
    }

    match &args.command {
        Command::Upload { key, .. } | Command::Download { key, .. } if key.is_empty() => {
            Err("Object key must not be empty.".to_string())
        }
        _ => Ok(()),
    }
}
