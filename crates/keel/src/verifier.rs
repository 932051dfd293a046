//! Compares live tables against their declarations. Nothing here mutates
//! the database.

use keel_core::{
    driver::Connection,
    schema::db::{SchemaDiff, Table},
    Result,
};

/// Returns whether a table named `table` exists.
///
/// A missing table is `Ok(false)`; an error means the connection is
/// unusable.
pub async fn table_exists(conn: &mut dyn Connection, table: &str) -> Result<bool> {
    conn.table_exists(table).await
}

/// Compares the live columns of `table` with its declared columns.
///
/// If the table does not exist every declared column is reported missing.
pub async fn diff(conn: &mut dyn Connection, table: &Table) -> Result<SchemaDiff> {
    let columns = conn.columns(&table.name).await?;
    Ok(SchemaDiff::between(table, &columns))
}
