//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_API_*` environment variables and
//! configuration files. Every field is optional; accessors apply defaults.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "usersdb";
const DEFAULT_DB_USER: &str = "user";
const DEFAULT_DB_PASSWORD: &str = "password";
const DEFAULT_HTTP_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_DB_POOL_SIZE: u32 = 10;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// Settings could not be read from their sources.
    #[error("failed to load settings: {message}")]
    Load {
        /// Loader message.
        message: String,
    },

    /// The configured database location does not form a valid URL.
    #[error("invalid database URL: {message}")]
    DatabaseUrl {
        /// URL parser message.
        message: String,
    },
}

/// Runtime configuration for the user service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_API")]
pub struct AppSettings {
    /// Full PostgreSQL URL; overrides the individual `db_*` fields.
    pub database_url: Option<String>,
    /// Database host.
    pub db_host: Option<String>,
    /// Database port.
    pub db_port: Option<u16>,
    /// Database name.
    pub db_name: Option<String>,
    /// Database user.
    pub db_user: Option<String>,
    /// Database password.
    pub db_password: Option<String>,
    /// Address the HTTP listener binds to.
    pub http_host: Option<IpAddr>,
    /// Port the HTTP listener binds to.
    pub http_port: Option<u16>,
    /// Maximum number of pooled database connections.
    pub db_pool_size: Option<u32>,
}

impl AppSettings {
    /// Load settings from the process arguments and environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Load`] when a source cannot be parsed.
    pub fn load_from_process() -> Result<Self, SettingsError> {
        Self::load_from_iter(std::env::args_os()).map_err(|err| SettingsError::Load {
            message: err.to_string(),
        })
    }

    /// PostgreSQL connection URL.
    ///
    /// Uses `database_url` verbatim when set. Otherwise the URL is assembled
    /// from the individual fields with credentials percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::DatabaseUrl`] when the result is not a valid
    /// URL.
    pub fn database_url(&self) -> Result<String, SettingsError> {
        if let Some(explicit) = &self.database_url {
            return Url::parse(explicit)
                .map(String::from)
                .map_err(|err| database_url_error(&err));
        }

        let mut url = Url::parse("postgres://localhost").map_err(|err| database_url_error(&err))?;
        url.set_host(Some(self.db_host.as_deref().unwrap_or(DEFAULT_DB_HOST)))
            .map_err(|err| database_url_error(&err))?;
        url.set_port(Some(self.db_port.unwrap_or(DEFAULT_DB_PORT)))
            .map_err(|()| invalid_database_url("port cannot be set"))?;
        url.set_username(self.db_user.as_deref().unwrap_or(DEFAULT_DB_USER))
            .map_err(|()| invalid_database_url("user cannot be set"))?;
        url.set_password(Some(
            self.db_password.as_deref().unwrap_or(DEFAULT_DB_PASSWORD),
        ))
        .map_err(|()| invalid_database_url("password cannot be set"))?;
        url.path_segments_mut()
            .map_err(|()| invalid_database_url("URL cannot carry a database name"))?
            .push(self.db_name.as_deref().unwrap_or(DEFAULT_DB_NAME));
        Ok(url.into())
    }

    /// Socket address for the HTTP listener.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.http_host.unwrap_or(DEFAULT_HTTP_HOST),
            self.http_port.unwrap_or(DEFAULT_HTTP_PORT),
        )
    }

    /// Maximum pool size.
    #[must_use]
    pub fn pool_size(&self) -> u32 {
        self.db_pool_size.unwrap_or(DEFAULT_DB_POOL_SIZE)
    }
}

fn database_url_error(err: &url::ParseError) -> SettingsError {
    invalid_database_url(err.to_string())
}

fn invalid_database_url(message: impl Into<String>) -> SettingsError {
    SettingsError::DatabaseUrl {
        message: message.into(),
    }
}
