use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::validators::validate;
use crate::connection::ConnectionOverrides;
use crate::storage::BucketPolicy;
use crate::utils::path_utils::{check_download_destination, check_readable_dir, check_readable_file};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Object store endpoint URL; falls back to $STORAGE_ENDPOINT
    #[arg(long, global = true, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Access key id; falls back to $AWS_ACCESS_KEY_ID
    #[arg(long, global = true, value_name = "ID")]
    pub access_id: Option<String>,

    /// Secret access key; falls back to $AWS_SECRET_ACCESS_KEY (prefer the env var, flags show up in `ps`)
    #[arg(long, global = true, value_name = "SECRET")]
    pub access_secret: Option<String>,

    /// Region; falls back to $AWS_DEFAULT_REGION
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Print extra stuff (use -v -v or --verbose --verbose for even more detail)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a bucket unless one with the same name is already visible
    EnsureBucket { bucket: String },

    /// Upload a single file
    Upload {
        bucket: String,
        key: String,
        #[arg(value_parser = check_readable_file)]
        file: PathBuf,
        /// Create the bucket first if it doesn't exist
        #[arg(long)]
        create_bucket: bool,
    },

    /// Upload every file under a directory, keyed by prefix + relative path
    UploadDir {
        bucket: String,
        prefix: String,
        #[arg(value_parser = check_readable_dir)]
        dir: PathBuf,
        /// Create the bucket first if it doesn't exist
        #[arg(long)]
        create_bucket: bool,
        /// Print the upload summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download one object to a local file
    Download {
        bucket: String,
        key: String,
        #[arg(value_parser = check_download_destination)]
        dest: PathBuf,
    },

    /// List keys in a bucket, optionally under a prefix
    List {
        bucket: String,
        #[arg(default_value = "")]
        prefix: String,
        /// Print the keys as a JSON array
        #[arg(long)]
        json: bool,
    },
}

impl Command {
    pub fn bucket(&self) -> &str {
        match self {
            Command::EnsureBucket { bucket }
            | Command::Upload { bucket, .. }
            | Command::UploadDir { bucket, .. }
            | Command::Download { bucket, .. }
            | Command::List { bucket, .. } => bucket,
        }
    }
}

/// Map the `--create-bucket` flag onto an upload policy
pub fn policy_for(create_bucket: bool) -> BucketPolicy {
    if create_bucket {
        BucketPolicy::CreateIfMissing
    } else {
        BucketPolicy::RequireExisting
    }
}

impl Args {
    /// Explicit connection values given on the command line
    #[must_use]
    pub fn overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            endpoint: self.endpoint.clone(),
            access_id: self.access_id.clone(),
            access_secret: self.access_secret.clone(),
            region: self.region.clone(),
        }
    }

    /// Validate the arguments beyond what clap's value parsers check
    ///
    /// # Errors
    ///
    /// Returns an error if the arguments are invalid for the selected command.
    pub fn validate(&self) -> Result<(), String> {
        validate(self)
    }
}
