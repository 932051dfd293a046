//! Schema management for plain Rust types.
//!
//! A type deriving [`Model`] describes exactly one table. The [`Manager`]
//! makes sure that table exists, creating it when it is absent and
//! comparing it against the declaration when it is not.
//!
//! ```ignore
//! #[derive(keel::Model)]
//! #[table = "test_table"]
//! #[allow(non_snake_case)]
//! struct Player {
//!     #[key]
//!     #[auto]
//!     Id: i32,
//!
//!     #[unique]
//!     SteamId: u64,
//! }
//!
//! let manager = keel::Manager::builder().register::<Player>().build()?;
//! let mut conn = keel::connect(&settings).await?;
//! let outcome = manager.ensure_schema::<Player>(&mut *conn).await;
//! ```

#[cfg(feature = "mysql")]
mod connect;
#[cfg(feature = "mysql")]
pub use connect::connect;

pub mod driver;

mod manager;
pub use manager::{Builder, DriftPolicy, Manager, Outcome};

mod model;
pub use model::Model;

mod primitive;
pub use primitive::Primitive;

pub mod verifier;

pub use keel_core::{schema, Error, Result, Settings};
pub use keel_macros::Model;
pub use keel_sql as sql;
