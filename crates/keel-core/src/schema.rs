//! Schema descriptions at two levels.
//!
//! [`app`] is the structural description of a mapped Rust type as declared
//! by `#[derive(Model)]` (or written by hand). [`db`] holds the resolved
//! table and column descriptors that DDL is synthesized from and that live
//! tables are compared against. [`extract`] turns the former into the latter.

pub mod app;

pub mod db;

mod extract;
pub use extract::extract;

mod verify;
pub use verify::verify;
