use super::TypeClass;

use std::fmt;

/// Database storage type of a column.
///
/// The [`Display`](fmt::Display) impl renders the canonical MySQL spelling,
/// which is also what the MySQL serializer emits. Other flavors may adjust
/// the spelling when serializing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// A boolean, stored as `TINYINT(1)`
    Boolean,

    /// A signed integer of `n` bytes. The column's `unsigned` flag turns it
    /// into its unsigned counterpart.
    Integer(u8),

    /// 64-bit floating point
    Double,

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Unconstrained binary type
    Blob,

    /// A civil date
    Date,

    /// A civil date and time
    DateTime,

    /// User-specified type, emitted verbatim
    Custom(String),
}

impl Type {
    /// Default type for text fields.
    pub const DEFAULT_STRING: Type = Type::VarChar(255);

    pub fn class(&self) -> TypeClass {
        match self {
            Type::Boolean => TypeClass::Boolean,
            Type::Integer(_) => TypeClass::Integer,
            Type::Double => TypeClass::Float,
            Type::Text | Type::VarChar(_) => TypeClass::Text,
            Type::Blob => TypeClass::Binary,
            Type::Date => TypeClass::Date,
            Type::DateTime => TypeClass::DateTime,
            Type::Custom(ty) => TypeClass::parse(ty),
        }
    }

    pub fn is_integer(&self) -> bool {
        self.class() == TypeClass::Integer
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("TINYINT(1)"),
            Type::Integer(1) => f.write_str("TINYINT"),
            Type::Integer(2) => f.write_str("SMALLINT"),
            Type::Integer(3) => f.write_str("MEDIUMINT"),
            Type::Integer(n) if *n <= 4 => f.write_str("INT"),
            Type::Integer(_) => f.write_str("BIGINT"),
            Type::Double => f.write_str("DOUBLE"),
            Type::Text => f.write_str("TEXT"),
            Type::VarChar(size) => write!(f, "VARCHAR({size})"),
            Type::Blob => f.write_str("BLOB"),
            Type::Date => f.write_str("DATE"),
            Type::DateTime => f.write_str("DATETIME"),
            Type::Custom(ty) => f.write_str(ty),
        }
    }
}
