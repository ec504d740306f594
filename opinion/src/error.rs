//! Error type returned by the adapter.

use alloy::primitives::U256;

/// Boxed error raised by a host while retrieving logs.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while computing the daily dimensions.
///
/// None of these are recovered from locally; they propagate to the host.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The host failed to retrieve logs.
    #[error("log retrieval failed: {0}")]
    LogRetrieval(#[source] BoxError),

    /// A log could not be decoded into the requested event.
    #[error("event decoding failed: {0}")]
    Decode(#[from] alloy::sol_types::Error),

    /// An on-chain amount does not fit the decimal accumulator.
    #[error("amount {0} is not representable as a decimal")]
    AmountOverflow(U256),
}

impl Error {
    /// Wrap a host-side failure.
    pub fn log_retrieval<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::LogRetrieval(err.into())
    }
}

/// Convenience alias for `Result<T, Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
