use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use url::Url;

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
    pub forms: FormsConfig,
    pub analytics: AnalyticsConfig,
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

        let endpoint = parse_endpoint(
            "APP_FORMS_ENDPOINT",
            &env::var("APP_FORMS_ENDPOINT").unwrap_or_else(|_| DEFAULT_FORMS_ENDPOINT.to_string()),
        )?;
        let timeout = Duration::from_secs(parse_number("APP_FORMS_TIMEOUT_SECS", 10)?);
        let availability_delay =
            Duration::from_millis(parse_number("APP_AVAILABILITY_DELAY_MS", 800)?);
        let region_prefix =
            parse_region_prefix(&env::var("APP_REGION_PREFIX").unwrap_or_else(|_| "HP".into()))?;

        let analytics_endpoint = match env::var("APP_ANALYTICS_ENDPOINT") {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(parse_endpoint("APP_ANALYTICS_ENDPOINT", &raw)?)
            }
            _ => None,
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            forms: FormsConfig {
                endpoint,
                timeout,
                region_prefix,
                availability_delay,
            },
            analytics: AnalyticsConfig {
                endpoint: analytics_endpoint,
            },
        })
    }
}

const DEFAULT_FORMS_ENDPOINT: &str = "http://127.0.0.1:8787/";

fn parse_number(key: &'static str, default: u64) -> Result<u64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

fn parse_endpoint(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidEndpoint {
        key,
        reason: source.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint {
            key,
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

fn parse_region_prefix(raw: &str) -> Result<String, ConfigError> {
    let prefix = raw.trim().to_ascii_uppercase();
    let valid = (1..=2).contains(&prefix.len()) && prefix.chars().all(|c| c.is_ascii_alphabetic());
    if valid {
        Ok(prefix)
    } else {
        Err(ConfigError::InvalidRegionPrefix(raw.to_string()))
    }
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Where and how quote/contact drafts are delivered.
#[derive(Debug, Clone)]
pub struct FormsConfig {
    pub endpoint: Url,
    pub timeout: Duration,
    /// Upper-case postcode prefix of the serviced area.
    pub region_prefix: String,
    pub availability_delay: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct AnalyticsConfig {
    pub endpoint: Option<Url>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    InvalidEndpoint { key: &'static str, reason: String },
    InvalidRegionPrefix(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
            ConfigError::InvalidEndpoint { key, reason } => {
                write!(f, "{key} must be an absolute http(s) URL: {reason}")
            }
            ConfigError::InvalidRegionPrefix(value) => write!(
                f,
                "APP_REGION_PREFIX must be one or two letters, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}
