//! Core error types.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors are converted to these types by the storage layer.

use thiserror::Error;

use crate::fx::FxError;
use crate::settlements::SettlementError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the tripsplit core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Settlement error: {0}")]
    Settlement(#[from] SettlementError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    /// Debtor and creditor totals failed to balance after aggregation.
    /// This is an internal invariant violation, fatal to the computation.
    #[error("Ledger invariant violated: {0}")]
    InconsistentLedger(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
