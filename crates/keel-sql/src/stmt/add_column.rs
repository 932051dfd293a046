use super::{ColumnDef, Statement};

use keel_core::schema::db::Column;

/// A statement to add a column to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct AddColumn {
    /// Name of the table to add the column to.
    pub table: String,

    /// Column definition.
    pub column: ColumnDef,
}

impl Statement {
    /// Adds a column to a table.
    ///
    /// Key constraints are not part of the clause; adding a column never
    /// changes the table's primary key.
    pub fn add_column(table: impl Into<String>, column: &Column) -> Self {
        let mut column = ColumnDef::from_schema(column);
        column.primary_key = false;
        column.auto_increment = false;

        AddColumn {
            table: table.into(),
            column,
        }
        .into()
    }
}

impl From<AddColumn> for Statement {
    fn from(value: AddColumn) -> Self {
        Self::AddColumn(value)
    }
}
