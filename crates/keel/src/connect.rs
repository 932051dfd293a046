use crate::{driver::Connection, Result, Settings};

use keel_core::Driver;
use keel_driver_mysql::MySQL;

/// Opens a MySQL connection described by `settings`.
///
/// Invalid settings fail before any network activity. The connect attempt is
/// bounded by `timeout_seconds` and is not retried.
pub async fn connect(settings: &Settings) -> Result<Box<dyn Connection>> {
    let driver = MySQL::new(settings)?;
    driver.connect().await
}
