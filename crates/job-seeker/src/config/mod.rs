use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::render::Theme;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub latency: LatencyConfig,
    pub backend: BackendConfig,
    pub theme: Theme,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let latency = LatencyConfig {
            search: millis_var("APP_SEARCH_DELAY_MS", 2000)?,
            submit: millis_var("APP_SUBMIT_DELAY_MS", 1000)?,
        };

        let timeout_secs = match env::var("APP_BACKEND_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "APP_BACKEND_TIMEOUT_SECS",
                    value: raw,
                })?,
            Err(_) => 30,
        };

        let backend = BackendConfig {
            job_search_url: non_blank_var("APP_JOB_SEARCH_URL"),
            applications_url: non_blank_var("APP_APPLICATIONS_URL"),
            timeout: Duration::from_secs(timeout_secs),
        };

        let mut theme = Theme::default();
        if let Some(primary) = non_blank_var("APP_THEME_PRIMARY") {
            theme.primary = hex_colour("APP_THEME_PRIMARY", primary)?;
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            latency,
            backend,
            theme,
        })
    }
}

fn millis_var(key: &'static str, default_ms: u64) -> Result<Duration, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_millis)
            .map_err(|_| ConfigError::InvalidNumber { key, value: raw }),
        Err(_) => Ok(Duration::from_millis(default_ms)),
    }
}

/// The value lands verbatim in the stylesheet, so only `#rrggbb` is accepted.
fn hex_colour(key: &'static str, value: String) -> Result<String, ConfigError> {
    let digits = value.strip_prefix('#').unwrap_or_default();
    if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidColour { key, value })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Artificial latency applied by the in-memory services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyConfig {
    pub search: Duration,
    pub submit: Duration,
}

impl LatencyConfig {
    pub const fn none() -> Self {
        Self {
            search: Duration::ZERO,
            submit: Duration::ZERO,
        }
    }
}

/// Remote endpoints; when unset the in-memory services are used.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub job_search_url: Option<String>,
    pub applications_url: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str, value: String },
    InvalidColour { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer (got '{value}')")
            }
            ConfigError::InvalidColour { key, value } => {
                write!(f, "{key} must be a #rrggbb colour (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidColour { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_SEARCH_DELAY_MS",
            "APP_SUBMIT_DELAY_MS",
            "APP_JOB_SEARCH_URL",
            "APP_APPLICATIONS_URL",
            "APP_BACKEND_TIMEOUT_SECS",
            "APP_THEME_PRIMARY",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.latency.search, Duration::from_millis(2000));
        assert_eq!(config.latency.submit, Duration::from_millis(1000));
        assert!(config.backend.job_search_url.is_none());
        assert_eq!(config.backend.timeout, Duration::from_secs(30));
        assert_eq!(config.theme.primary, "#0a66c2");
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_delay() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SEARCH_DELAY_MS", "soon");
        match AppConfig::load() {
            Err(ConfigError::InvalidNumber { key, value }) => {
                assert_eq!(key, "APP_SEARCH_DELAY_MS");
                assert_eq!(value, "soon");
            }
            other => panic!("expected invalid number, got {other:?}"),
        }
        reset_env();
    }

    #[test]
    fn blank_backend_urls_fall_back_to_in_memory() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_JOB_SEARCH_URL", "   ");
        env::set_var("APP_APPLICATIONS_URL", "http://jobs.internal/applications");
        env::set_var("APP_THEME_PRIMARY", "#123456");
        let config = AppConfig::load().expect("config loads");
        assert!(config.backend.job_search_url.is_none());
        assert_eq!(
            config.backend.applications_url.as_deref(),
            Some("http://jobs.internal/applications")
        );
        assert_eq!(config.theme.primary, "#123456");
        reset_env();
    }

    #[test]
    fn rejects_theme_colour_that_is_not_hex() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        for raw in ["red;}body{display:none", "#12345", "#12345g", "123456"] {
            reset_env();
            env::set_var("APP_THEME_PRIMARY", raw);
            match AppConfig::load() {
                Err(ConfigError::InvalidColour { key, value }) => {
                    assert_eq!(key, "APP_THEME_PRIMARY");
                    assert_eq!(value, raw);
                }
                other => panic!("expected invalid colour for {raw}, got {other:?}"),
            }
        }
        reset_env();
    }
}
