use keel::{
    driver::{Driver, MySQL},
    Settings,
};
use mysql_async::{prelude::Queryable, Conn, OptsBuilder};

use crate::Setup;

/// Runs each test in a freshly created database on the server described by
/// the `KEEL_TEST_MYSQL_*` environment variables.
pub struct SetupMySQL {
    settings: Settings,
}

impl SetupMySQL {
    pub fn new() -> Self {
        let env = |name: &str, default: &str| {
            std::env::var(format!("KEEL_TEST_MYSQL_{name}")).unwrap_or_else(|_| default.to_string())
        };

        let settings = Settings {
            host: env("HOST", "localhost"),
            port: env("PORT", "3306").parse().expect("invalid KEEL_TEST_MYSQL_PORT"),
            database_name: format!("keel_test_{}", uuid::Uuid::new_v4().simple()),
            user_name: env("USER", "root"),
            user_password: env("PASSWORD", ""),
            timeout_seconds: 10,
        };

        Self { settings }
    }

    /// A connection to the server without selecting a database.
    async fn admin(&self) -> keel::Result<Conn> {
        let opts = OptsBuilder::default()
            .ip_or_hostname(self.settings.host.clone())
            .tcp_port(self.settings.port)
            .user(Some(self.settings.user_name.clone()))
            .pass(Some(self.settings.user_password.clone()));

        Conn::new(opts).await.map_err(keel::Error::connection)
    }

    async fn admin_query(&self, sql: String) -> keel::Result<()> {
        let mut conn = self.admin().await?;
        conn.query_drop(sql).await.map_err(keel::Error::driver)?;
        conn.disconnect().await.map_err(keel::Error::driver)
    }
}

impl Default for SetupMySQL {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Setup for SetupMySQL {
    fn name(&self) -> &'static str {
        "mysql"
    }

    async fn init(&self) -> keel::Result<()> {
        self.admin_query(format!("CREATE DATABASE `{}`", self.settings.database_name))
            .await
    }

    fn driver(&self) -> Box<dyn Driver> {
        Box::new(MySQL::new(&self.settings).expect("invalid MySQL test settings"))
    }

    async fn cleanup(&self) -> keel::Result<()> {
        self.admin_query(format!(
            "DROP DATABASE IF EXISTS `{}`",
            self.settings.database_name
        ))
        .await
    }
}
