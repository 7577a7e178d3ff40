use super::expand::expand_vars;
use std::fmt;

pub const ENDPOINT_ENV: &str = "STORAGE_ENDPOINT";
pub const ACCESS_ID_ENV: &str = "AWS_ACCESS_KEY_ID";
pub const ACCESS_SECRET_ENV: &str = "AWS_SECRET_ACCESS_KEY";
pub const REGION_ENV: &str = "AWS_DEFAULT_REGION";

/// Values supplied explicitly by the caller; each one wins over the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionOverrides {
    pub endpoint: Option<String>,
    pub access_id: Option<String>,
    pub access_secret: Option<String>,
    pub region: Option<String>,
}

/// Fully resolved connection settings handed to the storage client.
///
/// Fields that could not be resolved stay `None`; the SDK's own default chain
/// decides what to do with them.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionParams {
    pub endpoint: Option<String>,
    pub access_id: Option<String>,
    pub access_secret: Option<String>,
    pub region: Option<String>,
}

impl fmt::Debug for ConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParams")
            .field("endpoint", &self.endpoint)
            .field("access_id", &self.access_id)
            .field("access_secret", &self.access_secret.as_ref().map(|_| "****"))
            .field("region", &self.region)
            .finish()
    }
}

impl ConnectionParams {
    /// Static credentials are only usable as a pair
    pub fn static_credentials(&self) -> Option<(&str, &str)> {
        match (&self.access_id, &self.access_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}

/// Resolve connection settings against the process environment
pub fn resolve_connection(overrides: &ConnectionOverrides) -> ConnectionParams {
    resolve_connection_with(overrides, |name| std::env::var(name).ok())
}

/// Resolve connection settings against an arbitrary variable lookup.
///
/// Per field: a non-empty explicit value is used as given; otherwise the
/// matching environment variable is read and expanded with the same lookup.
pub fn resolve_connection_with<F>(overrides: &ConnectionOverrides, lookup: F) -> ConnectionParams
where
    F: Fn(&str) -> Option<String>,
{
    let field = |explicit: &Option<String>, var: &str| -> Option<String> {
        match explicit {
            Some(value) if !value.is_empty() => Some(value.clone()),
            _ => lookup(var)
                .filter(|value| !value.is_empty())
                .map(|value| expand_vars(&value, &lookup)),
        }
    };

    ConnectionParams {
        endpoint: field(&overrides.endpoint, ENDPOINT_ENV),
        access_id: field(&overrides.access_id, ACCESS_ID_ENV),
        access_secret: field(&overrides.access_secret, ACCESS_SECRET_ENV),
        region: field(&overrides.region, REGION_ENV),
    }
}
