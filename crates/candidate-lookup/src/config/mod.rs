use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use phonenumber::country;

use crate::lookup::PaginationStrategy;

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

pub const DEFAULT_API_URL: &str = "https://api.teamtailor.com";
pub const DEFAULT_APP_URL: &str = "https://app.teamtailor.com";
pub const DEFAULT_API_VERSION: &str = "20240904";
pub const DEFAULT_REGION: &str = "NO";
/// Teamtailor caps `page[size]` at 30.
pub const MAX_PAGE_SIZE: u32 = 30;

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub teamtailor: TeamtailorConfig,
    pub phone: PhoneConfig,
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

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            teamtailor: TeamtailorConfig::from_env()?,
            phone: PhoneConfig::from_env()?,
        })
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

/// Credentials and traversal settings for the Teamtailor API.
#[derive(Clone)]
pub struct TeamtailorConfig {
    pub api_key: String,
    pub company_id: String,
    pub api_url: String,
    pub app_url: String,
    pub api_version: String,
    pub pagination: PaginationStrategy,
    pub page_size: u32,
    pub timeout: Duration,
    pub max_retries: u32,
}

impl TeamtailorConfig {
    /// Defaults for everything except the credentials.
    pub fn new(api_key: impl Into<String>, company_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            company_id: company_id.into(),
            api_url: DEFAULT_API_URL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            pagination: PaginationStrategy::Cursor,
            page_size: MAX_PAGE_SIZE,
            timeout: Duration::from_secs(10),
            max_retries: 2,
        }
    }

    fn from_env() -> Result<Self, ConfigError> {
        let api_key = required_var("API_KEY")?;
        let company_id = required_var("COMPANY_ID")?;
        let mut config = Self::new(api_key, company_id);

        if let Ok(url) = env::var("TEAMTAILOR_API_URL") {
            config.api_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = env::var("TEAMTAILOR_APP_URL") {
            config.app_url = url.trim_end_matches('/').to_string();
        }
        if let Ok(version) = env::var("TEAMTAILOR_API_VERSION") {
            config.api_version = version;
        }
        if let Ok(raw) = env::var("TEAMTAILOR_PAGINATION") {
            config.pagination = PaginationStrategy::parse(&raw)
                .ok_or(ConfigError::InvalidPagination { value: raw })?;
        }
        if let Ok(raw) = env::var("TEAMTAILOR_PAGE_SIZE") {
            config.page_size = raw
                .parse::<u32>()
                .ok()
                .filter(|size| (1..=MAX_PAGE_SIZE).contains(size))
                .ok_or(ConfigError::InvalidPageSize)?;
        }
        if let Ok(raw) = env::var("TEAMTAILOR_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Ok(raw) = env::var("TEAMTAILOR_MAX_RETRIES") {
            config.max_retries = raw.parse().map_err(|_| ConfigError::InvalidRetries)?;
        }

        Ok(config)
    }
}

impl fmt::Debug for TeamtailorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamtailorConfig")
            .field("api_key", &"<redacted>")
            .field("company_id", &self.company_id)
            .field("api_url", &self.api_url)
            .field("app_url", &self.app_url)
            .field("api_version", &self.api_version)
            .field("pagination", &self.pagination)
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

/// Region used when a phone number carries no country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneConfig {
    pub default_region: country::Id,
}

impl PhoneConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("PHONE_DEFAULT_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());
        let default_region = parse_region(&raw)?;
        Ok(Self { default_region })
    }
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            default_region: country::Id::NO,
        }
    }
}

pub fn parse_region(raw: &str) -> Result<country::Id, ConfigError> {
    raw.trim()
        .to_ascii_uppercase()
        .parse::<country::Id>()
        .map_err(|_| ConfigError::InvalidRegion {
            value: raw.to_string(),
        })
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar { name }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    MissingVar { name: &'static str },
    InvalidPagination { value: String },
    InvalidPageSize,
    InvalidTimeout,
    InvalidRetries,
    InvalidRegion { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::MissingVar { name } => write!(f, "{name} must be set"),
            ConfigError::InvalidPagination { value } => write!(
                f,
                "TEAMTAILOR_PAGINATION must be 'cursor' or 'page-number', got '{value}'"
            ),
            ConfigError::InvalidPageSize => write!(
                f,
                "TEAMTAILOR_PAGE_SIZE must be between 1 and {MAX_PAGE_SIZE}"
            ),
            ConfigError::InvalidTimeout => {
                write!(f, "TEAMTAILOR_TIMEOUT_SECS must be a positive integer")
            }
            ConfigError::InvalidRetries => {
                write!(f, "TEAMTAILOR_MAX_RETRIES must be a non-negative integer")
            }
            ConfigError::InvalidRegion { value } => write!(
                f,
                "PHONE_DEFAULT_REGION must be an ISO 3166 region code, got '{value}'"
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
