use keel::driver::{Driver, Sqlite};
use tempfile::TempDir;

use crate::Setup;

/// Each test gets its own database file, so several connections within one
/// test see the same tables.
pub struct SetupSqlite {
    dir: TempDir,
}

impl SetupSqlite {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }
}

impl Default for SetupSqlite {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupSqlite {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn driver(&self) -> Box<dyn Driver> {
        Box::new(Sqlite::open(self.dir.path().join("keel.db")))
    }
}
