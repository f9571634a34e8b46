use crate::core::{AppError, Currency, Locale, Result};
use std::env;
use std::time::Duration;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub display: DisplayConfig,
    pub fira: FiraConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    /// `json` switches the fmt layer to JSON lines
    pub log_format: String,
}

/// How comparisons are labelled and rendered
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    pub home_currency: Currency,
    pub locale: Locale,
    pub baseline_label: String,
    pub challenger_label: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            home_currency: Currency::INR,
            locale: Locale::EnIn,
            baseline_label: "Current Provider".to_string(),
            challenger_label: "Skydo".to_string(),
        }
    }
}

/// FIRA processing collaborator settings
#[derive(Debug, Clone)]
pub struct FiraConfig {
    /// External extraction API; the mock processor is used when unset
    pub api_url: Option<String>,
    pub api_timeout: Duration,
    pub mock_delay: Duration,
    pub max_upload_bytes: usize,
}

impl Default for FiraConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            api_timeout: Duration::from_secs(30),
            mock_delay: Duration::from_millis(2000),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let display_defaults = DisplayConfig::default();
        let fira_defaults = FiraConfig::default();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string()),
            },
            server: ServerConfig::from_env()?,
            display: DisplayConfig {
                home_currency: match env::var("HOME_CURRENCY") {
                    Ok(code) => code.parse().map_err(AppError::Configuration)?,
                    Err(_) => display_defaults.home_currency,
                },
                locale: match env::var("DISPLAY_LOCALE") {
                    Ok(tag) => tag.parse().map_err(AppError::Configuration)?,
                    Err(_) => display_defaults.locale,
                },
                baseline_label: env::var("BASELINE_LABEL")
                    .unwrap_or(display_defaults.baseline_label),
                challenger_label: env::var("CHALLENGER_LABEL")
                    .unwrap_or(display_defaults.challenger_label),
            },
            fira: FiraConfig {
                api_url: env::var("FIRA_API_URL")
                    .ok()
                    .filter(|url| !url.trim().is_empty()),
                api_timeout: match env::var("FIRA_API_TIMEOUT_SECS") {
                    Ok(secs) => Duration::from_secs(secs.parse().map_err(|_| {
                        AppError::Configuration("Invalid FIRA_API_TIMEOUT_SECS".to_string())
                    })?),
                    Err(_) => fira_defaults.api_timeout,
                },
                mock_delay: match env::var("FIRA_MOCK_DELAY_MS") {
                    Ok(ms) => Duration::from_millis(ms.parse().map_err(|_| {
                        AppError::Configuration("Invalid FIRA_MOCK_DELAY_MS".to_string())
                    })?),
                    Err(_) => fira_defaults.mock_delay,
                },
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| fira_defaults.max_upload_bytes.to_string())
                    .parse()
                    .map_err(|_| AppError::Configuration("Invalid MAX_UPLOAD_BYTES".to_string()))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.fira.max_upload_bytes == 0 {
            return Err(AppError::Configuration(
                "MAX_UPLOAD_BYTES must be greater than 0".to_string(),
            ));
        }

        if self.display.baseline_label.trim().is_empty()
            || self.display.challenger_label.trim().is_empty()
        {
            return Err(AppError::Configuration(
                "Provider labels cannot be empty".to_string(),
            ));
        }

        if let Some(url) = &self.fira.api_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(AppError::Configuration(format!(
                    "FIRA_API_URL must be an http(s) URL, got: {}",
                    url
                )));
            }
        }

        Ok(())
    }
}
