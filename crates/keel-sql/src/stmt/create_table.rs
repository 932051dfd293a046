use super::{ColumnDef, Statement};

use keel_core::schema::db::Table;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions, in declaration order
    pub columns: Vec<ColumnDef>,

    /// Primary key column
    pub primary_key: Option<String>,

    /// Columns with a standalone `UNIQUE` constraint, in declaration order
    pub unique: Vec<String>,

    /// Foreign key clauses, in declaration order
    pub foreign_keys: Vec<ForeignKeyDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKeyDef {
    pub column: String,
    pub target_table: String,
    pub target_column: String,
}

impl Statement {
    pub fn create_table(table: &Table) -> Self {
        CreateTable {
            name: table.name.clone(),
            columns: table.columns.iter().map(ColumnDef::from_schema).collect(),
            primary_key: table.primary_key().map(|column| column.name.clone()),
            unique: table
                .unique_columns()
                .map(|column| column.name.clone())
                .collect(),
            foreign_keys: table
                .columns
                .iter()
                .filter_map(|column| {
                    let fk = column.foreign_key.as_ref()?;
                    Some(ForeignKeyDef {
                        column: column.name.clone(),
                        target_table: fk.table.clone(),
                        target_column: fk.column.clone(),
                    })
                })
                .collect(),
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
