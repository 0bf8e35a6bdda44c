//! Runtime configuration for the rally board server.

use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;
use url::Url;

/// Values shipped in the sample `.env`; seeing either means nobody filled it in.
const PLACEHOLDER_URL: &str = "https://your-project-url.supabase.co";
const PLACEHOLDER_KEY: &str = "your-anon-key";
const PLACEHOLDER_MARKERS: [&str; 2] = ["your-project-url", "your-anon-key"];

#[derive(Debug)]
pub struct Settings {
    /// Address the HTTP server binds to.
    pub server_addr: String,
    /// Upper bound for a single call to the remote table service.
    pub remote_timeout: Duration,
    /// Where player/match data comes from, decided once here.
    pub data_source: DataSourceConfig,
}

impl Settings {
    fn from_env() -> Self {
        let server_addr = env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());

        let remote_timeout = env::var("REMOTE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(10));

        let url = first_var(&["SUPABASE_URL", "NEXT_PUBLIC_SUPABASE_URL"]);
        let key = first_var(&["SUPABASE_ANON_KEY", "NEXT_PUBLIC_SUPABASE_ANON_KEY"]);

        Settings {
            server_addr,
            remote_timeout,
            data_source: DataSourceConfig::from_credentials(url.as_deref(), key.as_deref()),
        }
    }
}

/// First non-empty value among `names`.
fn first_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}

/// Endpoint and access key of the hosted table service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    pub url: Url,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSourceMode {
    Remote(RemoteConfig),
    Fixture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSourceConfig {
    pub mode: DataSourceMode,
}

impl DataSourceConfig {
    pub fn fixture() -> Self {
        DataSourceConfig {
            mode: DataSourceMode::Fixture,
        }
    }

    pub fn remote(url: Url, key: impl Into<String>) -> Self {
        DataSourceConfig {
            mode: DataSourceMode::Remote(RemoteConfig {
                url,
                key: key.into(),
            }),
        }
    }

    /// Decide the data source from a URL/key pair.
    ///
    /// Missing values fall back to the placeholders. Placeholders, an empty
    /// key or a URL that does not parse as http(s) all select fixture mode,
    /// in which no network call is ever made.
    pub fn from_credentials(url: Option<&str>, key: Option<&str>) -> Self {
        let url = url.map(str::trim).unwrap_or(PLACEHOLDER_URL);
        let key = key.map(str::trim).unwrap_or(PLACEHOLDER_KEY);

        if is_placeholder(url) || is_placeholder(key) {
            log::warn!("remote table service is not configured; serving fixture data");
            return Self::fixture();
        }
        if key.is_empty() {
            log::warn!("remote access key is empty; serving fixture data");
            return Self::fixture();
        }

        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Self::remote(parsed, key),
            Ok(parsed) => {
                log::warn!(
                    "unsupported scheme {:?} for remote table service; serving fixture data",
                    parsed.scheme()
                );
                Self::fixture()
            }
            Err(e) => {
                log::warn!("invalid remote table service URL ({e}); serving fixture data");
                Self::fixture()
            }
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.mode, DataSourceMode::Remote(_))
    }

    pub fn label(&self) -> &'static str {
        match self.mode {
            DataSourceMode::Remote(_) => "remote",
            DataSourceMode::Fixture => "fixture",
        }
    }
}

fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_MARKERS.iter().any(|m| value.contains(m))
}
