use super::Column;

/// A mapped table: its resolved name and columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Name of the table
    pub name: String,

    /// The table's columns, in the order their fields were declared
    pub columns: Vec<Column>,
}

impl Table {
    /// The primary key column, if the table has one.
    pub fn primary_key(&self) -> Option<&Column> {
        self.columns.iter().find(|column| column.primary_key)
    }

    /// Finds a column by name. Column names are compared ASCII
    /// case-insensitively, matching MySQL.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.name.eq_ignore_ascii_case(name))
    }

    /// Columns that need a standalone `UNIQUE` clause.
    pub fn unique_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns
            .iter()
            .filter(|column| column.needs_unique_clause())
    }

    /// Columns that reference another table.
    pub fn foreign_key_columns(&self) -> impl Iterator<Item = &Column> + '_ {
        self.columns
            .iter()
            .filter(|column| column.foreign_key.is_some())
    }
}
