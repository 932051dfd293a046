#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod keyword;

// Fragment serializers
mod column_def;
mod statement;
mod ty;

use crate::stmt::Statement;

use keel_core::schema::db::{Column, Table};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// Renders `stmt`. The output carries no trailing semicolon.
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);
        ret
    }

    /// Renders the `CREATE TABLE` statement for `table`.
    pub fn create_table(&self, table: &Table) -> String {
        self.serialize(&Statement::create_table(table))
    }

    /// Renders an `ALTER TABLE ... ADD COLUMN` statement.
    pub fn add_column(&self, table: &str, column: &Column) -> String {
        self.serialize(&Statement::add_column(table, column))
    }

    /// Renders a single column clause, e.g. `SteamId BIGINT UNSIGNED NOT NULL`.
    pub fn column_clause(&self, column: &Column) -> String {
        let mut ret = String::new();
        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        crate::stmt::ColumnDef::from_schema(column).to_sql(&mut fmt);
        ret
    }

    pub(crate) fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }

    pub(crate) fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}
