use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::{fmt, path::Path, time::Duration};
use url::Url;

/// Connection settings supplied by the host application.
///
/// Usually read once at startup from a human-editable JSON file. Missing
/// keys fall back to the defaults below.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Server host name or IP address. Defaults to `localhost`.
    pub host: String,

    /// Server port. Defaults to `3306`.
    pub port: u16,

    /// Database (schema) to manage tables in.
    pub database_name: String,

    pub user_name: String,

    pub user_password: String,

    /// Upper bound on connection establishment, in seconds. Defaults to 10.
    pub timeout_seconds: u64,
}

impl Settings {
    /// Reads settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Settings> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Settings::from_json(&content)
    }

    /// Parses settings from a JSON string and validates them.
    pub fn from_json(json: &str) -> Result<Settings> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Writes the settings to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::invalid_settings("`host` must not be empty"));
        }

        if self.port == 0 {
            return Err(Error::invalid_settings("`port` must not be 0"));
        }

        if self.database_name.trim().is_empty() {
            return Err(Error::invalid_settings("`database_name` must not be empty"));
        }

        if self.user_name.trim().is_empty() {
            return Err(Error::invalid_settings("`user_name` must not be empty"));
        }

        if self.timeout_seconds == 0 {
            return Err(Error::invalid_settings(
                "`timeout_seconds` must be greater than 0",
            ));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Renders the settings as a `mysql://` connection URL. Credentials are
    /// percent-encoded.
    pub fn to_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("mysql://{}:{}/", self.host, self.port))?;

        url.set_username(&self.user_name)
            .map_err(|_| Error::invalid_settings("`user_name` cannot be used in a URL"))?;

        if !self.user_password.is_empty() {
            url.set_password(Some(&self.user_password))
                .map_err(|_| Error::invalid_settings("`user_password` cannot be used in a URL"))?;
        }

        url.set_path(&format!("/{}", self.database_name));

        Ok(url)
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            host: "localhost".to_string(),
            port: 3306,
            database_name: String::new(),
            user_name: String::new(),
            user_password: String::new(),
            timeout_seconds: 10,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_name", &self.database_name)
            .field("user_name", &self.user_name)
            .field("user_password", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
