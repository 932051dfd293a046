use keel_core::schema::db::{self, Column};

/// A single column clause of a `CREATE TABLE` or `ALTER TABLE` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,

    /// Renders `UNSIGNED` after the type
    pub unsigned: bool,

    pub nullable: bool,
    pub auto_increment: bool,

    /// True if the column is the table's primary key. Only flavors that
    /// declare the key inline look at this.
    pub primary_key: bool,
}

impl ColumnDef {
    pub fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.ty.clone(),
            unsigned: column.is_unsigned_integer(),
            nullable: column.nullable,
            auto_increment: column.auto_increment,
            primary_key: column.primary_key,
        }
    }
}
