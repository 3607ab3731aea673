use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

/// Environment variable overriding the listen address.
pub const HOST_ENV: &str = "PHONE_LOOKUP_HOST";
/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PHONE_LOOKUP_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
/// A configuration value could not be parsed.
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value:?}")]
    InvalidHost {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },

    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Listen address of the HTTP server.
///
/// Defaults to `127.0.0.1:3000`. Use the builder methods, or [`ServerConfig::from_env`]
/// to read [`HOST_ENV`] and [`PORT_ENV`].
pub struct ServerConfig {
    host: IpAddr,
    port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the listen address.
    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    /// Override the listen port. `0` asks the OS for a free port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Defaults overridden by whichever of [`HOST_ENV`] / [`PORT_ENV`] are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|var| std::env::var(var).ok())
    }

    fn from_vars(get: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = get(HOST_ENV) {
            config.host = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidHost {
                    var: HOST_ENV,
                    value: value.clone(),
                    source,
                })?;
        }
        if let Some(value) = get(PORT_ENV) {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort {
                    var: PORT_ENV,
                    value: value.clone(),
                    source,
                })?;
        }

        Ok(config)
    }
}
