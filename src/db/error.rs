use thiserror::Error;

/// Failure talking to the remote table service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("remote request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote service responded {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode remote response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("expected exactly one row, got {0}")]
    NotSingle(usize),
    #[error("invalid remote endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}
