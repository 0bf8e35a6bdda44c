//! Data access for players and matches.
//!
//! A [`DataStore`] is either backed by the remote table service or by the
//! in-memory fixtures alone. Reads never fail: any remote error is logged and
//! answered from the fixtures. Writes against the remote service return the
//! error to the caller instead.

use std::time::Duration;

use crate::config::{DataSourceConfig, DataSourceMode};
use crate::metrics::{FIXTURE_FALLBACKS, REMOTE_WRITE_FAILURES};

pub mod error;
pub mod fixtures;
pub mod match_repo;
pub mod models;
pub mod player_repo;
pub mod remote;

pub use error::StoreError;
use fixtures::FixtureStore;
use remote::TableClient;

pub struct DataStore {
    remote: Option<TableClient>,
    fixtures: FixtureStore,
}

impl DataStore {
    /// Build the adapter for the chosen mode. Fixture mode never creates an
    /// HTTP client.
    pub fn new(config: &DataSourceConfig, timeout: Duration) -> Result<Self, StoreError> {
        let remote = match &config.mode {
            DataSourceMode::Remote(rc) => Some(TableClient::new(rc, timeout)?),
            DataSourceMode::Fixture => None,
        };
        Ok(DataStore {
            remote,
            fixtures: FixtureStore::seeded(),
        })
    }

    pub fn fixture_only() -> Self {
        DataStore {
            remote: None,
            fixtures: FixtureStore::seeded(),
        }
    }

    pub fn remote(&self) -> Option<&TableClient> {
        self.remote.as_ref()
    }

    pub fn fixtures(&self) -> &FixtureStore {
        &self.fixtures
    }

    pub fn mode_label(&self) -> &'static str {
        if self.remote.is_some() {
            "remote"
        } else {
            "fixture"
        }
    }
}

/// Log a degraded read.
fn serving_fixtures(op: &str, err: &StoreError) {
    log::warn!("{op}: remote read failed, serving fixture data: {err}");
    FIXTURE_FALLBACKS.with_label_values(&[op]).inc();
}

/// Log a failed write and hand the error back.
fn write_failed(op: &str, err: StoreError) -> StoreError {
    log::warn!("{op}: remote write failed: {err}");
    REMOTE_WRITE_FAILURES.with_label_values(&[op]).inc();
    err
}
