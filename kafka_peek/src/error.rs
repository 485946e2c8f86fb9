use thiserror::Error;

/// Failure kinds surfaced by the topic queries.
///
/// An empty or missing topic is not an error: it produces an empty result.
/// A collection that times out before reaching the requested count is not an
/// error either.
#[derive(Debug, Error)]
pub enum PeekError {
    #[error("Invalid argument: {0:#}")]
    InvalidArgument(anyhow::Error),
    #[error("Broker unavailable: {0:#}")]
    BrokerUnavailable(anyhow::Error),
}
