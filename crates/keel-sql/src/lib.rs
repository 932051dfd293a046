//! DDL synthesis.
//!
//! Statements are built from resolved [`db::Table`](keel_core::schema::db::Table)
//! descriptors and rendered to SQL text by a flavor-aware [`Serializer`].
//! Rendering is pure and deterministic: the same statement always produces
//! byte-identical output.

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
