use super::Error;
use crate::schema::db::SchemaDiff;

/// Error raised when the drift policy treats a schema difference as fatal.
#[derive(Debug)]
pub(super) struct SchemaDriftError {
    table: Box<str>,
    diff: SchemaDiff,
}

impl std::error::Error for SchemaDriftError {}

impl core::fmt::Display for SchemaDriftError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "schema drift in table `{}`: {} missing, {} extra, {} mismatched column(s)",
            self.table,
            self.diff.missing_columns.len(),
            self.diff.extra_columns.len(),
            self.diff.mismatched_columns.len(),
        )
    }
}

impl Error {
    pub fn schema_drift(table: impl Into<String>, diff: SchemaDiff) -> Error {
        Error::from(super::ErrorKind::SchemaDrift(SchemaDriftError {
            table: table.into().into(),
            diff,
        }))
    }

    pub fn is_schema_drift(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::SchemaDrift(_)))
    }

    /// The difference that triggered a schema drift error.
    pub fn schema_drift_diff(&self) -> Option<&SchemaDiff> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::SchemaDrift(err) => Some(&err.diff),
            _ => None,
        })
    }
}
