use std::fmt;

/// Coarse classification of a column type.
///
/// Declared types and the types reported by a live catalog are both reduced
/// to a class before they are compared, so that `INT` and `int(11)`, or
/// `VARCHAR(255)` and `varchar(64)`, are considered the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Integer,
    Boolean,
    Float,
    Decimal,
    Text,
    Binary,
    Date,
    DateTime,
    Time,

    /// Anything not recognized, keyed by its lowercased base name.
    Other(String),
}

impl TypeClass {
    /// Classifies a type as spelled in SQL, e.g. `bigint(20) unsigned` or
    /// `TINYINT(1)`.
    pub fn parse(sql_type: &str) -> TypeClass {
        let ty = sql_type.trim().to_ascii_lowercase();

        let (base, args) = match ty.find('(') {
            Some(open) => (ty[..open].trim(), ty[open..].trim()),
            None => match ty.split_once(' ') {
                // "double precision", "character varying", "int unsigned"
                Some((first, _)) if !matches!(first, "double" | "character") => (first, ""),
                _ => (ty.as_str(), ""),
            },
        };

        // MySQL spells booleans as `tinyint(1)`.
        if base == "tinyint" && args.starts_with("(1)") {
            return TypeClass::Boolean;
        }

        match base {
            "bool" | "boolean" => TypeClass::Boolean,
            "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "bigint" => {
                TypeClass::Integer
            }
            "float" | "double" | "double precision" | "real" => TypeClass::Float,
            "decimal" | "numeric" | "dec" => TypeClass::Decimal,
            "char" | "varchar" | "character varying" | "character" | "text" | "tinytext"
            | "mediumtext" | "longtext" | "nchar" | "nvarchar" | "clob" => TypeClass::Text,
            "binary" | "varbinary" | "blob" | "tinyblob" | "mediumblob" | "longblob" => {
                TypeClass::Binary
            }
            "date" => TypeClass::Date,
            "datetime" | "timestamp" => TypeClass::DateTime,
            "time" => TypeClass::Time,
            other => TypeClass::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeClass::Integer => f.write_str("integer"),
            TypeClass::Boolean => f.write_str("boolean"),
            TypeClass::Float => f.write_str("float"),
            TypeClass::Decimal => f.write_str("decimal"),
            TypeClass::Text => f.write_str("text"),
            TypeClass::Binary => f.write_str("binary"),
            TypeClass::Date => f.write_str("date"),
            TypeClass::DateTime => f.write_str("datetime"),
            TypeClass::Time => f.write_str("time"),
            TypeClass::Other(name) => f.write_str(name),
        }
    }
}
