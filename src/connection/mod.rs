mod expand;
mod resolve;

pub use expand::expand_vars;
pub use resolve::{
    ACCESS_ID_ENV, ACCESS_SECRET_ENV, ConnectionOverrides, ConnectionParams, ENDPOINT_ENV,
    REGION_ENV, resolve_connection, resolve_connection_with,
};
