use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),
    #[error("unexpected status format: expected one v3 and one metar endpoint, found {v3} and {metar}")]
    UnexpectedStatus { v3: usize, metar: usize },
}

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Init(#[from] shared::error::InitializationError),
    #[error("datafeed fetch error: {0}")]
    Fetch(#[from] FetchError),
}
