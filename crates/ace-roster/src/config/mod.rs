use crate::roster::import::parse_currency;
use crate::roster::RosterLimits;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
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
    pub data: DataConfig,
    pub limits: RosterLimits,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let players_csv = env::var("ACE_PLAYERS_CSV").unwrap_or_else(|_| "ACE_MODEL.csv".into());
        let owners_csv = env::var("ACE_GMS_CSV").unwrap_or_else(|_| "gms.csv".into());

        let standard = RosterLimits::standard();
        let capacity = match env::var("ACE_ROSTER_CAPACITY") {
            Ok(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|capacity| *capacity > 0)
                .ok_or(ConfigError::InvalidCapacity(raw))?,
            Err(_) => standard.capacity,
        };
        let salary_cap = match env::var("ACE_SALARY_CAP") {
            Ok(raw) => parse_currency(&raw)
                .filter(|cap| *cap > 0.0)
                .ok_or(ConfigError::InvalidSalaryCap(raw))?,
            Err(_) => standard.salary_cap,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            data: DataConfig {
                players_csv: PathBuf::from(players_csv),
                owners_csv: PathBuf::from(owners_csv),
            },
            limits: RosterLimits {
                capacity,
                salary_cap,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Locations of the player valuation export and the team/GM lookup table.
#[derive(Debug, Clone)]
pub struct DataConfig {
    pub players_csv: PathBuf,
    pub owners_csv: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCapacity(String),
    InvalidSalaryCap(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity(raw) => {
                write!(f, "ACE_ROSTER_CAPACITY must be a positive integer (got '{raw}')")
            }
            ConfigError::InvalidSalaryCap(raw) => {
                write!(f, "ACE_SALARY_CAP must be a positive amount (got '{raw}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
