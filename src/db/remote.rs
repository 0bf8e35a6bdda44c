//! Thin client for the hosted database's REST interface (PostgREST dialect).
//!
//! Every table lives under `<url>/rest/v1/<table>`. Reads filter and sort
//! through query parameters, writes ask for the stored row back with
//! `Prefer: return=representation`.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::config::RemoteConfig;
use crate::db::error::StoreError;

pub const PLAYERS: &str = "players";
pub const MATCHES: &str = "matches";

/// Query parameters, in the order they are sent.
pub type Params = Vec<(&'static str, String)>;

pub struct TableClient {
    http: Client,
    base: Url,
    key: String,
}

impl TableClient {
    pub fn new(config: &RemoteConfig, timeout: Duration) -> Result<Self, StoreError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("rally-board-server/", env!("CARGO_PKG_VERSION")))
            .build()?;

        // `Url::join` drops the last segment unless the path ends in '/'.
        let mut root = config.url.clone();
        if !root.path().ends_with('/') {
            let path = format!("{}/", root.path());
            root.set_path(&path);
        }
        let base = root.join("rest/v1/")?;

        Ok(TableClient {
            http,
            base,
            key: config.key.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn request(&self, method: Method, table: &str) -> Result<RequestBuilder, StoreError> {
        let url = self.base.join(table)?;
        Ok(self
            .http
            .request(method, url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key))
    }

    /// `GET /<table>?<params>` → all matching rows.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &Params,
    ) -> Result<Vec<T>, StoreError> {
        let resp = self
            .request(Method::GET, table)?
            .query(params)
            .send()
            .await?;
        rows(resp).await
    }

    /// `POST /<table>` with a one-row array; returns the stored row.
    pub async fn insert<B, T>(&self, table: &str, row: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::POST, table)?
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;
        single(rows(resp).await?)
    }

    /// `PATCH /<table>?<filters>`; exactly one row must match.
    pub async fn update<B, T>(&self, table: &str, filters: &Params, changes: &B) -> Result<T, StoreError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .request(Method::PATCH, table)?
            .query(filters)
            .header("Prefer", "return=representation")
            .json(changes)
            .send()
            .await?;
        single(rows(resp).await?)
    }
}

async fn rows<T: DeserializeOwned>(resp: Response) -> Result<Vec<T>, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::Status {
            status: status.as_u16(),
            body,
        });
    }
    resp.json::<Vec<T>>().await.map_err(StoreError::Decode)
}

/// Exactly one row, or `NotSingle`.
pub fn single<T>(mut rows: Vec<T>) -> Result<T, StoreError> {
    match rows.len() {
        1 => Ok(rows.remove(0)),
        n => Err(StoreError::NotSingle(n)),
    }
}

/// `eq.<value>` filter operand.
pub fn eq(value: &str) -> String {
    format!("eq.{value}")
}

/// Double-quote a value for use inside `or=(...)` lists, where `,` and
/// parentheses are reserved.
pub fn quoted(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
