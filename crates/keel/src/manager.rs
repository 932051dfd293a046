mod builder;
pub use builder::Builder;

mod outcome;
pub use outcome::{DriftPolicy, Outcome};

use crate::{verifier, Model, Result};

use keel_core::{
    driver::{Connection, Driver},
    err,
    schema::db::{SchemaDiff, Table},
    Error,
};

/// Ensures mapped tables exist and match their declarations.
///
/// Construct one at startup and pass it to whatever needs it. All
/// operations run sequentially on the caller's connection; concurrent
/// startups against the same database must be serialized by the caller.
#[derive(Debug, Default)]
pub struct Manager {
    /// Tables of registered models, in registration order.
    tables: Vec<Table>,

    /// What to do when an existing table has drifted.
    policy: DriftPolicy,
}

impl Manager {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// A manager with no registered models and the default drift policy.
    pub fn new() -> Manager {
        Manager::default()
    }

    pub fn policy(&self) -> DriftPolicy {
        self.policy
    }

    /// Tables of the registered models, in registration order.
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// Ensures the table of `M` exists on `conn`.
    ///
    /// An absent table is created. A present one is compared with the
    /// declaration and the drift policy decides what happens with any
    /// difference. Every failure, including an invalid declaration, is
    /// reported as [`Outcome::Failed`].
    pub async fn ensure_schema<M: Model>(&self, conn: &mut dyn Connection) -> Outcome {
        match M::table() {
            Ok(table) => self.ensure_table(conn, &table).await,
            Err(err) => Outcome::Failed(err),
        }
    }

    /// Ensures every registered table, one after another in registration
    /// order. Later tables are still processed when an earlier one fails.
    pub async fn ensure_all(&self, conn: &mut dyn Connection) -> Vec<(String, Outcome)> {
        let mut outcomes = Vec::with_capacity(self.tables.len());

        for table in &self.tables {
            let outcome = self.ensure_table(conn, table).await;
            outcomes.push((table.name.clone(), outcome));
        }

        outcomes
    }

    /// Opens a connection with `driver`, ensures every registered table and
    /// closes the connection again.
    ///
    /// Only a failure to connect is returned as an error. The connection is
    /// released on every path.
    pub async fn ensure_all_with(&self, driver: &dyn Driver) -> Result<Vec<(String, Outcome)>> {
        let mut conn = driver.connect().await?;
        let outcomes = self.ensure_all(&mut *conn).await;

        if let Err(err) = conn.close().await {
            tracing::warn!(error = %err, "failed to close connection");
        }

        Ok(outcomes)
    }

    /// Ensures a single resolved table.
    pub async fn ensure_table(&self, conn: &mut dyn Connection, table: &Table) -> Outcome {
        match self.ensure_table_impl(conn, table).await {
            Ok(outcome) => outcome,
            Err(err) => {
                let err = err.context(err!("ensuring table `{}`", table.name));
                tracing::error!(table = %table.name, error = %err, "schema check failed");
                Outcome::Failed(err)
            }
        }
    }

    async fn ensure_table_impl(&self, conn: &mut dyn Connection, table: &Table) -> Result<Outcome> {
        tracing::debug!(table = %table.name, "checking table");

        if !verifier::table_exists(conn, &table.name).await? {
            conn.create_table(table).await?;
            tracing::info!(table = %table.name, "created table");
            return Ok(Outcome::Created);
        }

        let diff = verifier::diff(conn, table).await?;

        if diff.is_empty() {
            tracing::debug!(table = %table.name, "table matches declaration");
            return Ok(Outcome::AlreadyValid);
        }

        tracing::warn!(table = %table.name, %diff, "table has drifted from its declaration");

        match self.policy {
            DriftPolicy::Report => Ok(Outcome::DiffFound(diff)),
            DriftPolicy::Fail => Err(Error::schema_drift(&table.name, diff)),
            DriftPolicy::AddMissing => self.add_missing(conn, table, diff).await,
        }
    }

    async fn add_missing(
        &self,
        conn: &mut dyn Connection,
        table: &Table,
        diff: SchemaDiff,
    ) -> Result<Outcome> {
        if diff.missing_columns.is_empty() {
            return Ok(Outcome::DiffFound(diff));
        }

        for name in &diff.missing_columns {
            let Some(column) = table.column(name) else {
                continue;
            };

            conn.add_column(&table.name, column).await?;
            tracing::info!(table = %table.name, column = %column.name, "added missing column");
        }

        Ok(Outcome::Reconciled(diff))
    }
}
