//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (periods and timeouts > 0)
//! - Detect self-defeating combinations (probe timeout >= check period)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before the config is accepted into the system

use thiserror::Error;

use crate::config::schema::MonitorConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("check.check_period_secs must be at least 1")]
    CheckPeriodZero,

    #[error("check.probe_timeout_secs must be at least 1")]
    ProbeTimeoutZero,

    #[error("check.probe_timeout_secs ({timeout}) must be shorter than check.check_period_secs ({period})")]
    ProbeTimeoutExceedsPeriod { timeout: u64, period: u64 },

    #[error("event_log.max_bytes ({0}) is below the 4096 byte minimum")]
    EventLogBudgetTooSmall(u64),

    #[error("observability.metrics_address is not a valid socket address: {0}")]
    InvalidMetricsAddress(String),
}

/// Check a parsed configuration, collecting every violation.
pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.check.check_period_secs == 0 {
        errors.push(ValidationError::CheckPeriodZero);
    }
    if config.check.probe_timeout_secs == 0 {
        errors.push(ValidationError::ProbeTimeoutZero);
    }
    if config.check.check_period_secs > 0
        && config.check.probe_timeout_secs >= config.check.check_period_secs
    {
        errors.push(ValidationError::ProbeTimeoutExceedsPeriod {
            timeout: config.check.probe_timeout_secs,
            period: config.check.check_period_secs,
        });
    }

    if config.event_log.max_bytes < 4096 {
        errors.push(ValidationError::EventLogBudgetTooSmall(
            config.event_log.max_bytes,
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
