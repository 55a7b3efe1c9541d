use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// How much a rejected signature reveals in the server log.
///
/// Clients always get the same 401 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionLogging {
    /// Log whether the address, the signature encoding, or the signature itself was bad.
    Detailed,
    /// Log every rejection the same way.
    Uniform,
}

impl FromStr for RejectionLogging {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(RejectionLogging::Detailed),
            "uniform" => Ok(RejectionLogging::Uniform),
            other => Err(format!("expected 'detailed' or 'uniform', got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,

    // Limits
    pub max_body_bytes: usize,

    // Logging
    pub rejection_logging: RejectionLogging,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("Failed to parse {0}: {1}")]
    ParseError(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            static_dir: PathBuf::from("static"),
            max_body_bytes: 16_384,
            rejection_logging: RejectionLogging::Detailed,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine; variables may be set directly
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        // BIND_ADDR wins; PORT alone binds on all interfaces
        let bind_addr = match env::var("BIND_ADDR") {
            Ok(addr) => addr
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::ParseError("BIND_ADDR".to_string(), e.to_string()))?,
            Err(_) => {
                let port: u16 = parse_env_or_default("PORT", defaults.bind_addr.port())?;
                SocketAddr::from(([0, 0, 0, 0], port))
            }
        };

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let max_body_bytes: usize = parse_env_or_default("MAX_BODY_BYTES", defaults.max_body_bytes)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue(
                "MAX_BODY_BYTES".to_string(),
                "must be greater than 0".to_string(),
            ));
        }

        let rejection_logging = match env::var("REJECTION_LOGGING") {
            Ok(val) => val
                .parse::<RejectionLogging>()
                .map_err(|e| ConfigError::InvalidValue("REJECTION_LOGGING".to_string(), e))?,
            Err(_) => defaults.rejection_logging,
        };

        Ok(Config {
            bind_addr,
            static_dir,
            max_body_bytes,
            rejection_logging,
        })
    }
}

/// Helper function to parse environment variable with a default value
fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| ConfigError::ParseError(key.to_string(), format!("{}: {}", e, val))),
        Err(_) => Ok(default),
    }
}
