use anyhow::Context;

use crate::args::{Args, Command, policy_for};
use crate::connection::{ConnectionParams, resolve_connection};
use crate::facade::StorageFacade;
use crate::interfaces::ObjectStore;
use crate::storage::{BucketStatus, S3StorageClient};
use crate::utils::log_utils::Logger;

/// Resolve the connection once, build one client, and run the selected command
pub fn run_app(args: &Args) -> anyhow::Result<()> {
    let logger = Logger::new(args.verbose);
    let params = resolve_connection(&args.overrides());
    logger.debug(&format!("Resolved connection: {params:?}"));

    let client = connect(&params, args.verbose)?;
    let facade = StorageFacade::new(client, logger);
    run_command(&facade, &args.command, &logger)
}

fn connect(params: &ConnectionParams, verbose: u8) -> anyhow::Result<S3StorageClient> {
    S3StorageClient::connect(params, verbose).context("Failed to create storage client")
}

/// Dispatch one command against any store; split out so it runs against mocks too
pub fn run_command<S: ObjectStore>(
    facade: &StorageFacade<S>,
    command: &Command,
    logger: &Logger,
) -> anyhow::Result<()> {
    match command {
        Command::EnsureBucket { bucket } => {
            let status = facade
                .ensure_bucket(bucket)
                .with_context(|| format!("Failed to ensure bucket '{bucket}'"))?;
            match status {
                BucketStatus::Created => logger.normal(&format!("Created bucket {bucket}")),
                BucketStatus::Existing => logger.normal(&format!("Bucket {bucket} already exists")),
            }
        }
        Command::Upload {
            bucket,
            key,
            file,
            create_bucket,
        } => {
            let summary = facade
                .upload_file(bucket, key, file, policy_for(*create_bucket))
                .with_context(|| format!("Failed to upload {} to {bucket}/{key}", file.display()))?;
            logger.normal(&format!(
                "Uploaded {} bytes to {bucket}/{key}",
                summary.total_bytes()
            ));
        }
        Command::UploadDir {
            bucket,
            prefix,
            dir,
            create_bucket,
            json,
        } => {
            let summary = facade
                .recursive_upload(bucket, prefix, dir, policy_for(*create_bucket))
                .with_context(|| format!("Failed to upload {} to {bucket}", dir.display()))?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
                return Ok(());
            }
            for object in &summary.uploaded {
                logger.info(&format!("{} -> {}", object.local_path.display(), object.key));
            }
            logger.normal(&format!(
                "Uploaded {} files ({} bytes) to {bucket}",
                summary.uploaded.len(),
                summary.total_bytes()
            ));
        }
        Command::Download { bucket, key, dest } => {
            let written = facade
                .download(bucket, key, dest)
                .with_context(|| format!("Failed to download {bucket}/{key}"))?;
            logger.normal(&format!("Downloaded {written} bytes to {}", dest.display()));
        }
        Command::List {
            bucket,
            prefix,
            json,
        } => {
            let keys = facade
                .list_bucket_files(bucket, prefix)
                .with_context(|| format!("Failed to list {bucket}"))?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&keys)?);
            } else {
                for key in &keys {
                    println!("{key}");
                }
            }
        }
    }
    Ok(())
}

