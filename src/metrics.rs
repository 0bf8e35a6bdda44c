//! Prometheus metrics.
//!
//! Request metrics come from the actix middleware at `/metrics`. Data-store
//! health (fixture fallbacks, failed remote writes) lives in its own registry
//! and is rendered at `/api/healthz/metrics`.

use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, Opts, Registry, TextEncoder};

/// Request middleware, shared by every worker.
pub static METRICS: Lazy<PrometheusMetrics> = Lazy::new(|| {
    PrometheusMetricsBuilder::new("rally_board")
        .endpoint("/metrics")
        .build()
        .expect("metrics builder")
});

pub static STORE_REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

/// Reads answered from fixtures after a remote failure, by operation.
pub static FIXTURE_FALLBACKS: Lazy<IntCounterVec> = Lazy::new(|| {
    store_counter(
        "rally_board_fixture_fallbacks_total",
        "reads served from fixture data after a remote failure",
    )
});

/// Remote writes that returned an error, by operation.
pub static REMOTE_WRITE_FAILURES: Lazy<IntCounterVec> = Lazy::new(|| {
    store_counter(
        "rally_board_remote_write_failures_total",
        "writes rejected by or lost on the way to the remote service",
    )
});

fn store_counter(name: &str, help: &str) -> IntCounterVec {
    let counter = IntCounterVec::new(Opts::new(name, help), &["op"]).expect("counter opts");
    STORE_REGISTRY
        .register(Box::new(counter.clone()))
        .expect("counter registered once");
    counter
}

/// Text exposition of the data-store counters.
pub fn render_store_metrics() -> Result<String, prometheus::Error> {
    TextEncoder::new().encode_to_string(&STORE_REGISTRY.gather())
}
