pub use keel_core::driver::{Connection, Driver};

#[cfg(feature = "mysql")]
pub use keel_driver_mysql::MySQL;

#[cfg(feature = "sqlite")]
pub use keel_driver_sqlite::Sqlite;
