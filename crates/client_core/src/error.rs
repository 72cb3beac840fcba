use std::time::Duration;

use shared::error::ApiException;
use thiserror::Error;

/// Every way a brief request can fail. None of these reach the UI; the
/// fetcher downgrades them to the fallback item.
#[derive(Debug, Error)]
pub enum BriefError {
    #[error("invalid brief endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("brief request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("brief endpoint returned HTTP {status}: {source}")]
    Status { status: u16, source: ApiException },
    #[error("response carried no candidate text")]
    EmptyResponse,
    #[error("no bracketed array found in response text")]
    MissingArray,
    #[error("array could not be decoded as news items: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("response array held no news items")]
    NoItems,
    #[error("brief request timed out after {0:?}")]
    Timeout(Duration),
}
