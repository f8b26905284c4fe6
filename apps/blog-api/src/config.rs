//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

/// Run mode selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Development,
    Testing,
    Production,
}

impl RunMode {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn default_log_filter(self) -> &'static str {
        match self {
            RunMode::Development => "info,blog_api=debug,blog_infra=debug",
            RunMode::Testing => "warn",
            RunMode::Production => "info",
        }
    }
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "development" | "dev" => Ok(RunMode::Development),
            "testing" | "test" => Ok(RunMode::Testing),
            "production" | "prod" => Ok(RunMode::Production),
            other => Err(format!("unknown run mode: {other}")),
        }
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunMode::Development => "development",
            RunMode::Testing => "testing",
            RunMode::Production => "production",
        };
        f.write_str(name)
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub run_mode: RunMode,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            run_mode: env::var("APP_ENV")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or_default(),
        }
    }
}
