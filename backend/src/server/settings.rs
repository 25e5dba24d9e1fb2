//! Server settings loaded via OrthoConfig.
//!
//! Values come from `TOGOHUB_*` environment variables, matching command-line
//! flags, or a configuration file, in OrthoConfig's usual precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_POOL_MAX_SIZE: u32 = 10;

/// Configuration values controlling how the server binds and stores data.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TOGOHUB")]
pub struct ServerSettings {
    /// Interface to listen on.
    pub host: Option<String>,
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// PostgreSQL connection URL. The in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Skip applying embedded migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl ServerSettings {
    /// Return the configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to 5000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Return the pool size limit, falling back to 10.
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Resolve host and port into the address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error when the host does not resolve.
    pub fn bind_addr(&self) -> io::Result<SocketAddr> {
        (self.host(), self.port())
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::other(format!("host {} did not resolve", self.host())))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("togohub")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("TOGOHUB_HOST", None::<String>),
            ("TOGOHUB_PORT", None::<String>),
            ("TOGOHUB_DATABASE_URL", None::<String>),
            ("TOGOHUB_POOL_MAX_SIZE", None::<String>),
            ("TOGOHUB_SKIP_MIGRATIONS", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.pool_max_size(), DEFAULT_POOL_MAX_SIZE);
        assert!(settings.database_url.is_none());
        assert!(!settings.skip_migrations);
        assert_eq!(
            settings.bind_addr().expect("default address"),
            SocketAddr::from(([0, 0, 0, 0], 5000))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TOGOHUB_HOST", Some("127.0.0.1".to_owned())),
            ("TOGOHUB_PORT", Some("8081".to_owned())),
            (
                "TOGOHUB_DATABASE_URL",
                Some("postgres://togohub@localhost/togohub".to_owned()),
            ),
            ("TOGOHUB_POOL_MAX_SIZE", Some("4".to_owned())),
            ("TOGOHUB_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("loopback address"),
            SocketAddr::from(([127, 0, 0, 1], 8081))
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://togohub@localhost/togohub")
        );
        assert_eq!(settings.pool_max_size(), 4);
        assert!(settings.skip_migrations);
    }
}
