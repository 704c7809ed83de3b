//! API Error Type

use thiserror::Error;

/// Failure surfaced by the transport layer.
///
/// Backend-reported errors carry the space-joined flattening of the error
/// payload's values so validation messages read as one sentence.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response with a (possibly empty) JSON error payload.
    #[error("{0}")]
    Api(String),
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),
    /// The request could not be assembled.
    #[error("Request build error: {0}")]
    Build(String),
    /// A 2xx response whose body could not be decoded.
    #[error("Parse error: {0}")]
    Decode(String),
}
