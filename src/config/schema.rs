//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! monitor. All types derive Serde traits for deserialization from
//! config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Status check cadence and thresholds.
    pub check: StatusCheckConfig,

    /// Source store settings.
    pub store: StoreConfig,

    /// Event log settings.
    pub event_log: EventLogConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Status check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StatusCheckConfig {
    /// Seconds between cycle starts.
    pub check_period_secs: u64,

    /// Consecutive failures above which a source is evicted.
    /// Strict: a source at exactly this count is retained.
    pub failure_threshold: u32,

    /// Per-probe timeout in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for StatusCheckConfig {
    fn default() -> Self {
        Self {
            check_period_secs: 60,
            failure_threshold: 5,
            probe_timeout_secs: 3,
        }
    }
}

/// Source store configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON snapshot restored at startup and rewritten on
    /// every mutation. In-memory only when unset.
    pub snapshot_path: Option<String>,
}

/// Event log configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EventLogConfig {
    /// Path of the append-only event log.
    pub path: String,

    /// Size budget before the log rotates to a single backup file.
    pub max_bytes: u64,
}

impl Default for EventLogConfig {
    fn default() -> Self {
        Self {
            path: "logs/status_check.log".to_string(),
            max_bytes: 1024 * 1024,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_deployment_constants() {
        let config = MonitorConfig::default();
        assert_eq!(config.check.check_period_secs, 60);
        assert_eq!(config.check.failure_threshold, 5);
        assert_eq!(config.check.probe_timeout_secs, 3);
        assert_eq!(config.event_log.max_bytes, 1024 * 1024);
        assert!(config.store.snapshot_path.is_none());
        assert!(!config.observability.metrics_enabled);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: MonitorConfig = toml::from_str(
            r#"
            [check]
            check_period_secs = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.check.check_period_secs, 10);
        assert_eq!(config.check.failure_threshold, 5);
        assert_eq!(config.event_log.path, "logs/status_check.log");
    }
}
