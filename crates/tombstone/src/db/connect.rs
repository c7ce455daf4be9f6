use crate::{driver::Driver, Error, Result};

use std::sync::Arc;
use url::Url;

/// Selects a driver by URL scheme.
pub(super) fn driver(url: &str) -> Result<Arc<dyn Driver>> {
    let parsed = Url::parse(url).map_err(Error::driver_operation_failed)?;

    match parsed.scheme() {
        "sqlite" => connect_sqlite(url),
        scheme => Err(Error::invalid_connection_url(format!(
            "unsupported database; scheme={scheme}; url={url}"
        ))),
    }
}

#[cfg(feature = "sqlite")]
fn connect_sqlite(url: &str) -> Result<Arc<dyn Driver>> {
    let driver = tombstone_driver_sqlite::Sqlite::new(url)?;
    Ok(Arc::new(driver))
}

#[cfg(not(feature = "sqlite"))]
fn connect_sqlite(_url: &str) -> Result<Arc<dyn Driver>> {
    Err(Error::invalid_connection_url("`sqlite` feature not enabled"))
}
