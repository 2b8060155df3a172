use thiserror::Error;

/// Why a backend call did not produce a
/// usable success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFailure {
  #[error("request failed: {0}")]
  Network(String),
  #[error("could not decode response: {0}")]
  Decode(String),
  #[error("server reported failure")]
  Rejected
}
