//! Logging infrastructure for the topology engine
//!
//! This module provides structured logging using the `tracing` crate. Every
//! graph mutation emits `trace!` events with structured fields and `debug!`
//! summaries with the resulting counts, so an embedding application can watch
//! the topology evolve without instrumenting anything itself.
//!
//! # Usage
//!
//! ```no_run
//! use rigging::core::logging::init_logging;
//!
//! // Initialize with default settings
//! init_logging(None, None).ok();
//!
//! // Or with custom level and format
//! init_logging(Some("debug"), Some("pretty")).ok();
//! ```
//!
//! # Log Levels
//!
//! - `trace`: per-mutation detail, interesting only when debugging
//! - `debug`: entity counts after each mutation
//! - `info`: general informational messages (default)
//! - `warn`: warning messages
//! - `error`: error messages
//!
//! # Log Formats
//!
//! - `compact`: single-line format, good for production
//! - `pretty`: multi-line format with colors, good for development
//! - `json`: JSON format, good for log aggregation systems
//!
//! # Environment Variables
//!
//! Logging can be configured via environment variables:
//! - `RIGGING_LOG_LEVEL`: set log level (trace|debug|info|warn|error)
//! - `RIGGING_LOG_FORMAT`: set log format (compact|pretty|json)
//! - `RUST_LOG`: alternative way to set log level (tracing-subscriber standard)
//!
//! # Filtering Logs
//!
//! You can filter logs by module using the usual directive syntax:
//!
//! ```bash
//! # Show only graph mutations at trace level
//! RUST_LOG="rigging::topology::graph=trace" my-app
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// # Arguments
///
/// * `level` - Optional log level string (trace|debug|info|warn|error).
///            If None, uses environment variable `RIGGING_LOG_LEVEL` or
///            `RUST_LOG`, or defaults to `info`.
/// * `format` - Optional log format (compact|pretty|json).
///             If None, uses environment variable `RIGGING_LOG_FORMAT`,
///             or defaults to `compact`.
///
/// # Returns
///
/// Returns an error if initialization fails (e.g., subscriber already
/// initialized).
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Determine log level from parameter, env var, or default
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("RIGGING_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string());

    // Determine format from parameter, env var, or default
    let log_format = format
        .map(|s| s.to_string())
        .or_else(|| std::env::var("RIGGING_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());

    // Parse log level
    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Parse format
    let format =
        LogFormat::from_str(&log_format).map_err(|e| format!("Invalid log format: {}", e))?;

    // Build subscriber based on format
    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_target(false)
                        .with_level(true)
                        .with_file(false)
                        .with_line_number(false)
                        .with_span_events(FmtSpan::NONE),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_target(true)
                        .with_level(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Initialize logging with default settings (info level, compact format)
///
/// This is a convenience function that calls `init_logging(None, None)`.
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
