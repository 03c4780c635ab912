use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("amount must be > 0")]
    InvalidAmount,

    #[error("from_user and to_user must be different")]
    SamePayerAndReceiver,

    #[error("Settlement not found: {0}")]
    NotFound(String),

    #[error("Settlement already confirmed: {0}")]
    AlreadyConfirmed(String),

    #[error("Only the receiver can confirm a settlement")]
    NotReceiver,
}
