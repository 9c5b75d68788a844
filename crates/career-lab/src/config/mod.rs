use std::env;
use std::fmt;

use crate::workflows::enrollment::screening::ScreeningConfig;

/// Distinguishes runtime behavior for different stages of the program.
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
    /// Default screening thresholds; callers may still override per call.
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("LAB_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let mut screening = ScreeningConfig::default();
        if let Ok(raw) = env::var("LAB_MIN_WORK_ETHIC") {
            let value = raw
                .trim()
                .parse::<u8>()
                .map_err(|_| ConfigError::InvalidMinWorkEthic { value: raw.clone() })?;
            if !(1..=10).contains(&value) {
                return Err(ConfigError::InvalidMinWorkEthic { value: raw });
            }
            screening.min_work_ethic = value;
        }
        if let Ok(raw) = env::var("LAB_REQUIRE_WILLING") {
            screening.require_willing = match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" | "" => false,
                _ => return Err(ConfigError::InvalidRequireWilling { value: raw }),
            };
        }

        let log_level = env::var("LAB_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            screening,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinWorkEthic { value: String },
    InvalidRequireWilling { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinWorkEthic { value } => {
                write!(f, "LAB_MIN_WORK_ETHIC must be an integer from 1 to 10, got '{value}'")
            }
            ConfigError::InvalidRequireWilling { value } => {
                write!(f, "LAB_REQUIRE_WILLING must be a boolean, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
