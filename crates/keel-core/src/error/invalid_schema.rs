use super::Error;

/// Error when a model's declared metadata cannot describe a valid table.
///
/// This occurs when:
/// - More than one column is marked as the primary key
/// - `auto_increment` is set on a non-integer or non-primary-key column
/// - A foreign key omits its target table or column
/// - Two fields resolve to the same column name, or the table name is empty
///
/// These errors are raised while extracting the table descriptor and are
/// always fatal for that model.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error, or any error it wraps, is an invalid
    /// schema error.
    pub fn is_invalid_schema(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::InvalidSchema(_)))
    }
}
