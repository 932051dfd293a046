use keel_core::{
    async_trait,
    driver::Driver,
    schema::db::{Column, ColumnInfo, Table},
    Error, Result, Settings,
};
use keel_sql::{self as sql, Serializer};
use mysql_async::{prelude::Queryable, Conn, Opts, OptsBuilder};
use std::time::Duration;

/// MySQL backend.
///
/// Every call to [`connect`](Driver::connect) opens a new session; there is
/// no pooling.
#[derive(Debug)]
pub struct MySQL {
    opts: Opts,
    timeout_seconds: u64,
}

impl MySQL {
    /// Builds a driver from validated connection settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;

        let opts = OptsBuilder::default()
            .ip_or_hostname(settings.host.clone())
            .tcp_port(settings.port)
            .db_name(Some(settings.database_name.clone()))
            .user(Some(settings.user_name.clone()))
            .pass(Some(settings.user_password.clone()));

        Ok(Self {
            opts: opts.into(),
            timeout_seconds: settings.timeout_seconds,
        })
    }

    /// Builds a driver from a `mysql://` URL.
    pub fn from_url(url: &str) -> Result<Self> {
        let opts = Opts::from_url(url).map_err(|err| Error::invalid_settings(err.to_string()))?;

        if opts.db_name().is_none() {
            return Err(Error::invalid_settings(format!(
                "no database specified - missing path in connection URL; url={}",
                url
            )));
        }

        Ok(Self {
            opts,
            timeout_seconds: Settings::default().timeout_seconds,
        })
    }

    /// Opens a connection, waiting at most the configured timeout.
    pub async fn connect_mysql(&self) -> Result<Connection> {
        tracing::debug!(
            host = %self.opts.ip_or_hostname(),
            port = self.opts.tcp_port(),
            "connecting to MySQL"
        );

        let timeout = Duration::from_secs(self.timeout_seconds);

        match tokio::time::timeout(timeout, Conn::new(self.opts.clone())).await {
            Ok(Ok(conn)) => Ok(Connection::new(conn)),
            Ok(Err(err)) => Err(Error::connection(err)),
            Err(_) => Err(Error::connection_timeout(self.timeout_seconds)),
        }
    }
}

#[async_trait]
impl Driver for MySQL {
    async fn connect(&self) -> Result<Box<dyn keel_core::Connection>> {
        Ok(Box::new(self.connect_mysql().await?))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    async fn execute_ddl(&mut self, stmt: &sql::Statement) -> Result<()> {
        let sql = Serializer::mysql().serialize(stmt);
        tracing::debug!(db.statement = %sql, "executing DDL");

        self.conn
            .query_drop(sql.as_str())
            .await
            .map_err(|err| {
                if is_session_failure(&err) {
                    Error::connection(err)
                } else {
                    Error::ddl_execution(&sql, err)
                }
            })
    }
}

/// True when the session is gone or unusable. Errors returned by the server
/// itself leave the session intact.
fn is_session_failure(err: &mysql_async::Error) -> bool {
    matches!(err, mysql_async::Error::Io(_) | mysql_async::Error::Driver(_))
}

fn query_error(err: mysql_async::Error) -> Error {
    if is_session_failure(&err) {
        Error::connection(err)
    } else {
        Error::driver(err)
    }
}

impl From<Conn> for Connection {
    fn from(conn: Conn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl keel_core::Connection for Connection {
    fn create_table_sql(&self, table: &Table) -> String {
        Serializer::mysql().create_table(table)
    }

    async fn table_exists(&mut self, table: &str) -> Result<bool> {
        tracing::debug!(table, "checking information_schema.tables");

        let count: Option<u64> = self
            .conn
            .exec_first(
                "SELECT COUNT(*) FROM information_schema.tables \
                 WHERE table_schema = DATABASE() AND table_name = ?",
                (table,),
            )
            .await
            .map_err(query_error)?;

        Ok(count.unwrap_or(0) > 0)
    }

    async fn columns(&mut self, table: &str) -> Result<Vec<ColumnInfo>> {
        tracing::debug!(table, "reading information_schema.columns");

        let rows: Vec<(String, String, String)> = self
            .conn
            .exec(
                "SELECT COLUMN_NAME, COLUMN_TYPE, IS_NULLABLE \
                 FROM information_schema.columns \
                 WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
                 ORDER BY ORDINAL_POSITION",
                (table,),
            )
            .await
            .map_err(query_error)?;

        Ok(rows
            .into_iter()
            .map(|(name, ty, is_nullable)| ColumnInfo {
                name,
                ty,
                nullable: is_nullable.eq_ignore_ascii_case("YES"),
            })
            .collect())
    }

    async fn create_table(&mut self, table: &Table) -> Result<()> {
        self.execute_ddl(&sql::Statement::create_table(table)).await
    }

    async fn add_column(&mut self, table: &str, column: &Column) -> Result<()> {
        self.execute_ddl(&sql::Statement::add_column(table, column))
            .await
    }

    async fn drop_table(&mut self, table: &str, if_exists: bool) -> Result<()> {
        let stmt = if if_exists {
            sql::Statement::drop_table_if_exists(table)
        } else {
            sql::Statement::drop_table(table)
        };

        self.execute_ddl(&stmt).await
    }

    async fn close(self: Box<Self>) -> Result<()> {
        self.conn.disconnect().await.map_err(query_error)
    }
}
