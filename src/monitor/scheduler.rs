//! Monitoring cycle scheduler.
//!
//! # Responsibilities
//! - Drive the periodic check loop until shutdown
//! - Fan out one probe task per source and drain the whole group
//! - Apply evaluator verdicts to the store and the event log

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tokio::time::{self, Instant, MissedTickBehavior};
use url::Url;

use crate::config::StatusCheckConfig;
use crate::events::EventLog;
use crate::monitor::evaluator::{evaluate, Event, Verdict};
use crate::monitor::probe::{ProbeClient, ProbeOutcome};
use crate::observability::metrics;
use crate::store::{SourceStore, TrackedSource};

/// Long-lived monitor driving the availability check cycle.
pub struct Monitor {
    store: Arc<dyn SourceStore>,
    events: Arc<dyn EventLog>,
    probe: ProbeClient,
    config: StatusCheckConfig,
}

impl Monitor {
    /// Create a new monitor over the given store and event log.
    pub fn new(
        store: Arc<dyn SourceStore>,
        events: Arc<dyn EventLog>,
        probe: ProbeClient,
        config: StatusCheckConfig,
    ) -> Self {
        Self {
            store,
            events,
            probe,
            config,
        }
    }

    /// Run the check loop. The first cycle starts immediately; the loop
    /// exits at the sleep boundary once the shutdown signal arrives.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            period_secs = self.config.check_period_secs,
            failure_threshold = self.config.failure_threshold,
            probe_timeout_secs = self.config.probe_timeout_secs,
            "Monitor starting"
        );

        let period = Duration::from_secs(self.config.check_period_secs);
        let mut ticker = time::interval(period);
        // A cycle that overruns the period must not trigger a burst of
        // catch-up cycles.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.run_cycle().await;
                }
                _ = shutdown.recv() => {
                    tracing::info!("Monitor received shutdown signal, exiting loop");
                    break;
                }
            }
        }
    }

    /// Run one full pass over all tracked sources.
    ///
    /// Each source gets its own task running the independent pipeline
    /// probe → evaluate → persist → log. The cycle ends only when every
    /// task has finished; a failing or panicking task never cancels its
    /// siblings.
    pub async fn run_cycle(&self) {
        let started = Instant::now();

        let sources = match self.store.list_all().await {
            Ok(sources) => sources,
            Err(e) => {
                tracing::error!(error = %e, "Failed to snapshot sources, skipping cycle");
                return;
            }
        };

        tracing::info!(sources = sources.len(), "Starting monitoring cycle");
        metrics::record_source_count(sources.len());

        let mut tasks = JoinSet::new();
        for source in sources {
            let store = self.store.clone();
            let events = self.events.clone();
            let probe = self.probe.clone();
            let threshold = self.config.failure_threshold;
            tasks.spawn(async move {
                check_source(source, probe, store, events, threshold).await;
            });
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Probe task failed");
            }
        }

        let elapsed = started.elapsed();
        metrics::record_cycle_duration(elapsed);
        tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "Monitoring cycle complete");
    }
}

/// Probe one source and apply the result.
async fn check_source(
    source: TrackedSource,
    probe: ProbeClient,
    store: Arc<dyn SourceStore>,
    events: Arc<dyn EventLog>,
    threshold: u32,
) {
    let outcome = probe.probe(&source.full_link).await;
    log_outcome(&source, &outcome);
    metrics::record_probe(&outcome);

    let (verdict, emitted) = evaluate(&source, &outcome, threshold);

    match verdict {
        Verdict::Update(updated) => {
            if let Err(e) = store.update(&updated).await {
                tracing::error!(source = %source.id, error = %e, "Failed to persist source status");
                return;
            }
        }
        Verdict::Evict => {
            if let Err(e) = store.delete(source.id).await {
                tracing::error!(source = %source.id, error = %e, "Failed to evict source");
                return;
            }
            metrics::record_eviction();
        }
    }

    for event in emitted {
        match event {
            Event::StatusChanged {
                id,
                old_code,
                new_code,
            } => events.log_status_change(id, &old_code, &new_code),
            Event::Evicted { id, threshold } => events.log_eviction(id, threshold),
        }
    }
}

fn log_outcome(source: &TrackedSource, outcome: &ProbeOutcome) {
    match outcome {
        ProbeOutcome::StatusCode(200) => {
            tracing::info!(source = %source.id, code = 200u16, "Source available");
        }
        ProbeOutcome::StatusCode(code) => {
            tracing::info!(source = %source.id, code = *code, "Source unavailable");
        }
        ProbeOutcome::TimedOut => {
            tracing::info!(source = %source.id, "Probe timed out");
        }
        ProbeOutcome::ConnectionFailed => {
            let host = Url::parse(&source.full_link)
                .ok()
                .and_then(|url| url.host_str().map(str::to_owned));
            tracing::info!(
                source = %source.id,
                host = host.as_deref().unwrap_or("unknown"),
                "Could not connect, host may not exist"
            );
        }
        ProbeOutcome::OtherError(detail) => {
            tracing::info!(source = %source.id, error = %detail, "Probe failed");
        }
    }
}
