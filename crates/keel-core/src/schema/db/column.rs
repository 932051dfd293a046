use super::{Type, TypeClass};

/// Resolved description of one table column.
///
/// Built by [`extract`](crate::schema::extract) and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// The name of the column in the database.
    pub name: String,

    /// The database storage type of the column.
    pub ty: Type,

    /// Whether or not the column is nullable
    pub nullable: bool,

    /// True if the column carries a `UNIQUE` constraint
    pub unique: bool,

    /// True if the column is the table's primary key
    pub primary_key: bool,

    /// True if the column is an integer that should be auto-incremented
    /// with each insertion of a new row.
    pub auto_increment: bool,

    /// True if the column stores an unsigned integer. Ignored for
    /// non-integer types.
    pub unsigned: bool,

    /// Column referenced by this column, if any.
    pub foreign_key: Option<ForeignKey>,
}

/// Target of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ForeignKey {
    /// Referenced table
    pub table: String,

    /// Referenced column
    pub column: String,
}

/// A column as reported by a live database catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,

    /// The type exactly as the catalog spells it, e.g. `bigint unsigned`.
    pub ty: String,

    pub nullable: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: Type) -> Column {
        Column {
            name: name.into(),
            ty,
            nullable: false,
            unique: false,
            primary_key: false,
            auto_increment: false,
            unsigned: false,
            foreign_key: None,
        }
    }

    /// True when `UNSIGNED` should be rendered for this column.
    pub fn is_unsigned_integer(&self) -> bool {
        self.unsigned && self.ty.is_integer()
    }

    /// True when a standalone `UNIQUE (...)` clause should be rendered.
    pub fn needs_unique_clause(&self) -> bool {
        self.unique && !self.primary_key
    }
}

impl ColumnInfo {
    pub fn class(&self) -> TypeClass {
        TypeClass::parse(&self.ty)
    }
}
