//! Backend abstraction.
//!
//! A [`Driver`] knows how to reach a database; each [`Connection`] it hands
//! out owns one session and performs catalog lookups and DDL on it. Dropping
//! a connection releases the session, so a connection scoped to a block is
//! released on every exit path.

use crate::{
    async_trait,
    schema::db::{Column, ColumnInfo, Table},
    Result,
};

use std::fmt::Debug;

#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Opens a new connection. Fails with a connection error when the
    /// backend cannot be reached or rejects the credentials. No retry is
    /// attempted.
    async fn connect(&self) -> Result<Box<dyn Connection>>;
}

#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Renders the `CREATE TABLE` statement this backend executes for
    /// `table`.
    fn create_table_sql(&self, table: &Table) -> String;

    /// Checks the catalog for a table with the given name.
    ///
    /// Returns `Ok(false)` when the table does not exist; errors are reserved
    /// for an unusable connection.
    async fn table_exists(&mut self, table: &str) -> Result<bool>;

    /// Lists the columns of a live table in catalog order.
    async fn columns(&mut self, table: &str) -> Result<Vec<ColumnInfo>>;

    /// Creates `table`. A rejected statement is reported as a DDL execution
    /// error carrying the backend's message.
    async fn create_table(&mut self, table: &Table) -> Result<()>;

    /// Adds `column` to an existing table.
    async fn add_column(&mut self, table: &str, column: &Column) -> Result<()>;

    /// Drops a table.
    async fn drop_table(&mut self, table: &str, if_exists: bool) -> Result<()>;

    /// Closes the session gracefully. Dropping the connection also releases
    /// it, without waiting for the backend to acknowledge.
    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
