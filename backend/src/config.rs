use std::fmt::{Debug, Display};
use std::{env, path::PathBuf, str::FromStr};

use log::{info, warn};

/// Server settings, read once at startup from `CATALOG_*` environment variables.
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub uploads_dir: PathBuf,
    pub secret_code: Option<String>,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup; unset or invalid values fall back
    /// to their defaults with a log line.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: try_load(&lookup, "CATALOG_HOST", "127.0.0.1".to_string()),
            port: try_load(&lookup, "CATALOG_PORT", 8080),
            database_path: try_load(&lookup, "CATALOG_DATABASE", PathBuf::from("catalog.sqlite")),
            uploads_dir: try_load(&lookup, "CATALOG_UPLOADS_DIR", PathBuf::from("uploads")),
            secret_code: lookup("CATALOG_SECRET_CODE").filter(|code| !code.is_empty()),
            open_browser: try_load(&lookup, "CATALOG_OPEN_BROWSER", false),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Debug,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default:?}");
            default
        }
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}; using default: {default:?}");
            default
        }),
    }
}
