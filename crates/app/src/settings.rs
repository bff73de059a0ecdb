//! Handles settings for the application.
//!
//! Sources, later ones winning:
//!
//! 1. `settings.toml` (or the file given with `--config`), optional;
//! 2. `MYFINANCE_*` environment variables, `__` separating nested keys
//!    (e.g. `MYFINANCE_SERVER__PORT=8080`);
//! 3. `MONGODB_URI`, which sets `database.uri`;
//! 4. command line flags.
//!
//! `database.uri` has no default: startup fails without it.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";
const URI_VARIABLE: &str = "MONGODB_URI";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Database {
    pub uri: String,
    pub timeout_secs: u64,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            uri: String::new(),
            timeout_secs: engine::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
    pub database: Database,
}

#[derive(Debug, Parser)]
#[command(name = "myfinance", version)]
struct Args {
    /// Optional settings file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override the log level (e.g. debug).
    #[arg(long)]
    level: Option<String>,
}

pub fn load() -> Result<Settings, ConfigError> {
    build(Args::parse(), environment(), std::env::var(URI_VARIABLE).ok())
}

/// `MYFINANCE_` prefix, `__` between nested keys.
fn environment() -> Environment {
    Environment::with_prefix("MYFINANCE")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn build(
    args: Args,
    environment: Environment,
    uri: Option<String>,
) -> Result<Settings, ConfigError> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut settings: Settings = Config::builder()
        .add_source(File::with_name(config_path).required(false))
        .add_source(environment)
        .set_override_option("database.uri", uri)?
        .build()?
        .try_deserialize()?;

    if let Some(port) = args.port {
        settings.server.port = port;
    }
    if let Some(level) = args.level {
        settings.app.level = level;
    }

    if settings.database.uri.trim().is_empty() {
        return Err(ConfigError::NotFound(URI_VARIABLE.to_string()));
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let vars = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        environment().source(Some(vars))
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["myfinance", "--config", "does/not/exist"];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn defaults_when_only_uri_is_set() {
        let settings = build(
            args(&[]),
            env(&[]),
            Some("mongodb://localhost:27017".to_string()),
        )
        .unwrap();

        assert_eq!(settings.database.uri, "mongodb://localhost:27017");
        assert_eq!(settings.database.timeout_secs, 5);
        assert_eq!(settings.server.bind, "0.0.0.0");
        assert_eq!(settings.server.port, 5000);
        assert_eq!(settings.app.level, "info");
    }

    #[test]
    fn flags_override_settings() {
        let settings = build(
            args(&["--port", "8080", "--level", "debug"]),
            env(&[("MYFINANCE_SERVER__PORT", "9000")]),
            Some("sqlite::memory:".to_string()),
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.app.level, "debug");
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let settings = build(
            args(&[]),
            env(&[
                ("MYFINANCE_SERVER__PORT", "8080"),
                ("MYFINANCE_SERVER__BIND", "127.0.0.1"),
                ("MYFINANCE_APP__LEVEL", "warn"),
                ("MYFINANCE_DATABASE__TIMEOUT_SECS", "2"),
            ]),
            Some("sqlite::memory:".to_string()),
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.app.level, "warn");
        assert_eq!(settings.database.timeout_secs, 2);
    }

    #[test]
    fn uri_variable_wins_over_prefixed_uri() {
        let settings = build(
            args(&[]),
            env(&[("MYFINANCE_DATABASE__URI", "sqlite::memory:")]),
            Some("mongodb://localhost:27017".to_string()),
        )
        .unwrap();

        assert_eq!(settings.database.uri, "mongodb://localhost:27017");
    }

    #[test]
    fn missing_uri_is_an_error() {
        let err = build(args(&[]), env(&[]), None).unwrap_err();
        assert!(err.to_string().contains(URI_VARIABLE));
    }
}
