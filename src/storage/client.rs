use crate::connection::ConnectionParams;
use crate::storage::error::{Result, StorageError};
use crate::storage::models::S3StorageClient;
use crate::utils::log_utils;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;

const MAX_ATTEMPTS: u32 = 3;

fn new_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| StorageError::Runtime(format!("Failed to create runtime: {e}")))
}

fn static_credentials(params: &ConnectionParams) -> Option<Credentials> {
    params.static_credentials().map(|(id, secret)| {
        Credentials::new(
            id,
            secret,
            None, // No session token
            None, // No expiry
            "ObjstoreStaticCredentials",
        )
    })
}

/// S3 config for `params` layered over shared SDK defaults.
///
/// Only resolved fields override `base`; everything else is left to the SDK.
pub(crate) fn s3_config_builder(
    params: &ConnectionParams,
    base: &SdkConfig,
) -> aws_sdk_s3::config::Builder {
    let mut builder = aws_sdk_s3::config::Builder::from(base);

    if let Some(region) = &params.region {
        builder = builder.region(Region::new(region.clone()));
    }
    if let Some(endpoint) = &params.endpoint {
        builder = builder.endpoint_url(endpoint.clone());
    }
    if let Some(credentials) = static_credentials(params) {
        builder = builder.credentials_provider(credentials);
    }

    // Custom endpoints are addressed path-style
    builder.force_path_style(params.endpoint.is_some())
}

impl S3StorageClient {
    /// Create a new S3-compatible client from resolved connection settings
    pub fn connect(params: &ConnectionParams, verbose: u8) -> Result<Self> {
        // Runtime is reused for every call made through this client
        let runtime = new_runtime()?;

        if verbose >= 2 {
            log_utils::debug("Creating S3-compatible client with these parameters:", verbose);
            log_utils::debug(&format!("Endpoint: {:?}", params.endpoint), verbose);
            log_utils::debug(&format!("Region: {:?}", params.region), verbose);
            if let Some(id) = &params.access_id {
                let shown: String = id.chars().take(4).collect();
                log_utils::debug(&format!("Key ID: {shown}****"), verbose);
            }
        }

        let base = runtime.block_on(async {
            let mut loader = aws_config::defaults(BehaviorVersion::latest())
                .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS));

            // Known values go on the loader too so the default chain skips looking them up
            if let Some(region) = &params.region {
                loader = loader.region(Region::new(region.clone()));
            }
            if let Some(credentials) = static_credentials(params) {
                loader = loader.credentials_provider(credentials);
            }

            loader.load().await
        });

        Ok(Self {
            client: Client::from_conf(s3_config_builder(params, &base).build()),
            runtime,
            verbose,
        })
    }

    /// Wrap an already built S3 config, e.g. one with a custom HTTP client
    pub fn from_conf(config: aws_sdk_s3::Config, verbose: u8) -> Result<Self> {
        Ok(Self {
            client: Client::from_conf(config),
            runtime: new_runtime()?,
            verbose,
        })
    }
}
