use thiserror::Error;

/// Failure of a single fetch.
///
/// `Transport` collapses every network-level cause (DNS, refused
/// connection, timeout, TLS, non-2xx status) into one kind. `Malformed`
/// means the request itself succeeded but the body lacked the expected
/// fields.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("response body did not match the expected shape: {0}")]
    Malformed(#[from] serde_json::Error),
}
