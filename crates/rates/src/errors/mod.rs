//! Error types for the rates crate.

use thiserror::Error;

/// Errors that can occur while talking to an external rate provider.
///
/// Transport-level failures are surfaced to the caller as-is; this crate
/// never retries. Retry policy, if any, belongs to whoever owns the call.
#[derive(Error, Debug)]
pub enum RateProviderError {
    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred (non-2xx response, auth failure).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a body that could not be decoded.
    #[error("Invalid provider response: {message}")]
    InvalidResponse {
        /// Description of the decode failure
        message: String,
    },

    /// A network error occurred while communicating with the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
