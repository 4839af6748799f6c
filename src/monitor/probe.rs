//! Outbound reachability probes.
//!
//! # Responsibilities
//! - Issue one bounded-timeout GET per source per cycle
//! - Classify the outcome without ever propagating a transport error
//!
//! # Design Decisions
//! - No retries inside a probe; the next scheduled cycle is the retry
//! - Only HTTP 200 counts as available

use std::time::Duration;

/// Classified result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The numeric HTTP response status.
    StatusCode(u16),
    /// The request exceeded the timeout budget.
    TimedOut,
    /// DNS or connect-level failure.
    ConnectionFailed,
    /// Any other transport-level failure.
    OtherError(String),
}

impl ProbeOutcome {
    /// The stored status-code form: the numeric code as a string, or
    /// the `"0"` sentinel for every failure variant.
    pub fn normalized_code(&self) -> String {
        match self {
            ProbeOutcome::StatusCode(code) => code.to_string(),
            _ => "0".to_string(),
        }
    }

    /// True iff the probe observed HTTP 200.
    pub fn is_ok(&self) -> bool {
        matches!(self, ProbeOutcome::StatusCode(200))
    }

    /// Outcome class used as a metric label.
    pub fn metric_class(&self) -> &'static str {
        match self {
            ProbeOutcome::StatusCode(200) => "ok",
            ProbeOutcome::StatusCode(_) => "http_error",
            ProbeOutcome::TimedOut => "timeout",
            ProbeOutcome::ConnectionFailed => "connect_error",
            ProbeOutcome::OtherError(_) => "error",
        }
    }
}

/// Client issuing availability probes with a fixed per-request timeout.
#[derive(Clone)]
pub struct ProbeClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl ProbeClient {
    /// Build a probe client. The timeout bounds the whole request,
    /// connect included.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, timeout })
    }

    /// The configured per-probe timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe a single URL. The response body is never read; dropping
    /// the response releases the connection on every path.
    pub async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => ProbeOutcome::StatusCode(response.status().as_u16()),
            Err(err) if err.is_timeout() => ProbeOutcome::TimedOut,
            Err(err) if err.is_connect() => ProbeOutcome::ConnectionFailed,
            Err(err) => ProbeOutcome::OtherError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_code() {
        assert_eq!(ProbeOutcome::StatusCode(200).normalized_code(), "200");
        assert_eq!(ProbeOutcome::StatusCode(503).normalized_code(), "503");
        assert_eq!(ProbeOutcome::TimedOut.normalized_code(), "0");
        assert_eq!(ProbeOutcome::ConnectionFailed.normalized_code(), "0");
        assert_eq!(
            ProbeOutcome::OtherError("tls handshake".into()).normalized_code(),
            "0"
        );
    }

    #[test]
    fn test_only_200_is_ok() {
        assert!(ProbeOutcome::StatusCode(200).is_ok());
        assert!(!ProbeOutcome::StatusCode(204).is_ok());
        assert!(!ProbeOutcome::StatusCode(301).is_ok());
        assert!(!ProbeOutcome::TimedOut.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_other_error() {
        let client = ProbeClient::new(Duration::from_secs(1)).unwrap();
        let outcome = client.probe("not a url").await;
        assert!(matches!(outcome, ProbeOutcome::OtherError(_)));
    }
}
