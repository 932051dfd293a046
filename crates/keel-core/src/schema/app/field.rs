use super::Type;
use crate::schema::db;

/// A single field of a mapped type.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name as declared in Rust.
    pub name: String,

    /// The field's value type.
    pub ty: Type,

    /// True if the Rust type itself admits absence (`Option<T>`).
    pub nullable: bool,

    /// Declared column metadata.
    pub attrs: FieldAttrs,
}

/// Column metadata attached to a field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldAttrs {
    /// Column name override from `#[column("name")]`.
    pub column_name: Option<String>,

    /// Column type override from `#[column(type = ...)]`.
    pub storage_ty: Option<db::Type>,

    /// Set by `#[nullable]`.
    pub nullable: bool,

    /// Set by `#[unique]`.
    pub unique: bool,

    /// Set by `#[key]`.
    pub primary_key: bool,

    /// Set by `#[auto]`.
    pub auto_increment: bool,

    /// Set by `#[unsigned]`.
    pub unsigned: bool,

    /// Set by `#[references(table = "...", column = "...")]`.
    pub foreign_key: Option<db::ForeignKey>,

    /// Set by `#[skip]`. Skipped fields never become columns.
    pub skip: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Field {
        Field {
            name: name.into(),
            ty,
            nullable: false,
            attrs: FieldAttrs::default(),
        }
    }

    pub fn column_name(mut self, name: impl Into<String>) -> Field {
        self.attrs.column_name = Some(name.into());
        self
    }

    pub fn storage_ty(mut self, ty: db::Type) -> Field {
        self.attrs.storage_ty = Some(ty);
        self
    }

    pub fn nullable(mut self) -> Field {
        self.attrs.nullable = true;
        self
    }

    pub fn unique(mut self) -> Field {
        self.attrs.unique = true;
        self
    }

    pub fn primary_key(mut self) -> Field {
        self.attrs.primary_key = true;
        self
    }

    pub fn auto_increment(mut self) -> Field {
        self.attrs.auto_increment = true;
        self
    }

    pub fn unsigned(mut self) -> Field {
        self.attrs.unsigned = true;
        self
    }

    pub fn references(mut self, table: impl Into<String>, column: impl Into<String>) -> Field {
        self.attrs.foreign_key = Some(db::ForeignKey {
            table: table.into(),
            column: column.into(),
        });
        self
    }

    pub fn skip(mut self) -> Field {
        self.attrs.skip = true;
        self
    }

    /// The column name this field maps to.
    pub fn column_name_or_default(&self) -> &str {
        self.attrs.column_name.as_deref().unwrap_or(&self.name)
    }
}
