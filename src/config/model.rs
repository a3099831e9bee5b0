//! Configuration data model.
//!
//! All structs derive `Deserialize` for TOML. Every field has a default so a
//! missing or partial config file still works.

use crate::course::{CourseDefaults, Letter};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;

/// Root application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub course: CourseConfig,
    #[serde(default)]
    pub gpa: GpaConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("course.default_credits must be a finite number, got {0}")]
    InvalidDefaultCredits(f64),
    #[error("ui.credit_step must be a positive number, got {0}")]
    InvalidCreditStep(f64),
    #[error("ui.min_credits must be a finite number, got {0}")]
    InvalidMinCredits(f64),
    #[error("ui.tick_rate_ms must be at least 1")]
    InvalidTickRate,
    #[error("logging.level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

impl AppConfig {
    /// Reject values the rest of the application cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.course.default_credits.is_finite() {
            return Err(ConfigError::InvalidDefaultCredits(self.course.default_credits));
        }
        if !(self.ui.credit_step.is_finite() && self.ui.credit_step > 0.0) {
            return Err(ConfigError::InvalidCreditStep(self.ui.credit_step));
        }
        if !self.ui.min_credits.is_finite() {
            return Err(ConfigError::InvalidMinCredits(self.ui.min_credits));
        }
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        self.logging.level()?;
        Ok(())
    }

    pub fn course_defaults(&self) -> CourseDefaults {
        CourseDefaults {
            credits: self.course.default_credits,
            grade: self.course.default_grade,
        }
    }
}

/// Field values for the seed course and every added course.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    #[serde(default = "default_credits")]
    pub default_credits: f64,
    #[serde(default = "default_grade")]
    pub default_grade: Letter,
}

impl Default for CourseConfig {
    fn default() -> Self {
        Self {
            default_credits: default_credits(),
            default_grade: default_grade(),
        }
    }
}

/// GPA display settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GpaConfig {
    /// Show `0.00` instead of `0` when no course carries usable credits.
    #[serde(default)]
    pub normalize_zero: bool,
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Amount added or removed by the `+`/`-` keys.
    #[serde(default = "default_credit_step")]
    pub credit_step: f64,
    /// Floor for `-` stepping. Typed values are not clamped.
    #[serde(default = "default_min_credits")]
    pub min_credits: f64,
    #[serde(default = "default_true")]
    pub show_grade_points: bool,
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_status_timeout")]
    pub status_timeout_secs: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            credit_step: default_credit_step(),
            min_credits: default_min_credits(),
            show_grade_points: true,
            tick_rate_ms: default_tick_rate(),
            status_timeout_secs: default_status_timeout(),
        }
    }
}

/// Diagnostic log file settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    pub fn level(&self) -> Result<tracing::Level, ConfigError> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.level.clone()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_credits() -> f64 {
    3.0
}
fn default_grade() -> Letter {
    Letter::A
}
fn default_credit_step() -> f64 {
    0.5
}
fn default_min_credits() -> f64 {
    1.0
}
fn default_tick_rate() -> u64 {
    250
}
fn default_status_timeout() -> u64 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/gradecrab/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
