use keel_core::{
    async_trait,
    driver::Driver,
    schema::db::{Column, ColumnInfo, Table},
    Error, Result,
};
use keel_sql::{self as sql, Serializer};
use rusqlite::{Connection as RusqliteConnection, ErrorCode, OptionalExtension};
use std::path::{Path, PathBuf};
use url::Url;

/// Embedded SQLite backend.
///
/// Each in-memory connection gets its own fresh database.
#[derive(Debug)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` URL. The path
    /// `:memory:` selects an in-memory database.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_settings(format!(
                "connection URL does not have a `sqlite` scheme; url={}",
                url_str
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn connect(&self) -> Result<Box<dyn keel_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::connection)?;

        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::connection)?;
        Ok(Self { connection })
    }

    fn execute_ddl(&mut self, stmt: &sql::Statement) -> Result<()> {
        let sql = Serializer::sqlite().serialize(stmt);
        tracing::debug!(db.statement = %sql, "executing DDL");

        self.connection
            .execute(&sql, [])
            .map_err(|err| {
                if is_unusable(&err) {
                    Error::connection(err)
                } else {
                    Error::ddl_execution(&sql, err)
                }
            })?;

        Ok(())
    }
}

/// True when the database file itself cannot be used, as opposed to SQLite
/// rejecting a particular statement.
fn is_unusable(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(
            ErrorCode::CannotOpen
                | ErrorCode::NotADatabase
                | ErrorCode::DatabaseCorrupt
                | ErrorCode::SystemIoFailure
                | ErrorCode::PermissionDenied
                | ErrorCode::FileLockingProtocolFailed
        )
    )
}

fn query_error(err: rusqlite::Error) -> Error {
    if is_unusable(&err) {
        Error::connection(err)
    } else {
        Error::driver(err)
    }
}

#[async_trait]
impl keel_core::Connection for Connection {
    fn create_table_sql(&self, table: &Table) -> String {
        Serializer::sqlite().create_table(table)
    }

    async fn table_exists(&mut self, table: &str) -> Result<bool> {
        tracing::debug!(table, "checking sqlite_master");

        let found = self
            .connection
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1 COLLATE NOCASE",
                [table],
                |_| Ok(()),
            )
            .optional()
            .map_err(query_error)?;

        Ok(found.is_some())
    }

    async fn columns(&mut self, table: &str) -> Result<Vec<ColumnInfo>> {
        tracing::debug!(table, "reading table_info");

        let mut stmt = self
            .connection
            .prepare("SELECT name, type, \"notnull\" FROM pragma_table_info(?1) ORDER BY cid")
            .map_err(query_error)?;

        let rows = stmt
            .query_map([table], |row| {
                let not_null: i64 = row.get(2)?;
                Ok(ColumnInfo {
                    name: row.get(0)?,
                    ty: row.get(1)?,
                    nullable: not_null == 0,
                })
            })
            .map_err(query_error)?;

        let columns = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(query_error)?;

        Ok(columns)
    }

    async fn create_table(&mut self, table: &Table) -> Result<()> {
        self.execute_ddl(&sql::Statement::create_table(table))
    }

    async fn add_column(&mut self, table: &str, column: &Column) -> Result<()> {
        self.execute_ddl(&sql::Statement::add_column(table, column))
    }

    async fn drop_table(&mut self, table: &str, if_exists: bool) -> Result<()> {
        let stmt = if if_exists {
            sql::Statement::drop_table_if_exists(table)
        } else {
            sql::Statement::drop_table(table)
        };

        self.execute_ddl(&stmt)
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.connection
            .close()
            .map_err(|(_, err)| query_error(err))
    }
}
