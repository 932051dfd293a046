use super::Field;

/// Structural description of a mapped type.
///
/// This is what `#[derive(Model)]` emits. It records the declaration as
/// written and performs no validation; [`extract`](crate::schema::extract)
/// resolves it into a [`db::Table`](crate::schema::db::Table).
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    /// The bare name of the Rust type.
    pub name: String,

    /// Explicit table name from `#[table = "..."]`.
    pub table_name: Option<String>,

    /// Fields in declaration order.
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Model {
        Model {
            name: name.into(),
            table_name: None,
            fields: vec![],
        }
    }

    pub fn table_name(mut self, name: impl Into<String>) -> Model {
        self.table_name = Some(name.into());
        self
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }
}
