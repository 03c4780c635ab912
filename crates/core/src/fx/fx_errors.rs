use thiserror::Error;

use tripsplit_rates::RateProviderError;

#[derive(Error, Debug)]
pub enum FxError {
    /// The provider day sheet is missing the pivot, home, or target
    /// currency (or quotes it at zero). Nothing is cached in this case.
    #[error("Invalid rate data from provider: {0}")]
    InvalidRateData(String),

    /// Transport or timeout failure talking to the provider. Not retried
    /// here; retry policy belongs to the caller.
    #[error("Rate provider unavailable: {0}")]
    ProviderUnavailable(RateProviderError),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl FxError {
    /// Classify a provider failure: a decode failure means the data is
    /// bad, anything else means the provider could not be reached.
    pub(crate) fn from_provider(err: RateProviderError) -> Self {
        match err {
            RateProviderError::InvalidResponse { message } => FxError::InvalidRateData(message),
            other => FxError::ProviderUnavailable(other),
        }
    }
}
