use keel_core::{schema::db::SchemaDiff, Error};

/// What to do when an existing table differs from its declaration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DriftPolicy {
    /// Log the difference and return it as [`Outcome::DiffFound`].
    #[default]
    Report,

    /// Add missing columns with `ALTER TABLE ... ADD COLUMN` and return
    /// [`Outcome::Reconciled`]. Existing columns are never dropped or
    /// altered.
    AddMissing,

    /// Treat any difference as a schema drift error.
    Fail,
}

/// Result of ensuring one table.
#[derive(Debug)]
pub enum Outcome {
    /// The table did not exist and was created.
    Created,

    /// The table exists and matches the declaration.
    AlreadyValid,

    /// The table exists but differs from the declaration. Nothing was
    /// changed.
    DiffFound(SchemaDiff),

    /// Missing columns were added. The diff is the one found before
    /// reconciling, so extra and mismatched columns it lists remain.
    Reconciled(SchemaDiff),

    /// The table could not be checked or created.
    Failed(Error),
}

impl Outcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Outcome::Created)
    }

    pub fn is_already_valid(&self) -> bool {
        matches!(self, Outcome::AlreadyValid)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// The diff found, if any.
    pub fn diff(&self) -> Option<&SchemaDiff> {
        match self {
            Outcome::DiffFound(diff) | Outcome::Reconciled(diff) => Some(diff),
            _ => None,
        }
    }

    /// The error, if the outcome is a failure.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Converts a failure into `Err`, leaving every other outcome as `Ok`.
    pub fn into_result(self) -> Result<Outcome, Error> {
        match self {
            Outcome::Failed(err) => Err(err),
            outcome => Ok(outcome),
        }
    }
}
