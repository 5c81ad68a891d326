/// Error type for checkout operations
///
/// A declined payment is not an error; it is reported as an absent order.
/// These variants cover collaborators that fail outright.
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    #[error("Order repository error: {0}")]
    Repository(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Amount overflow: {0}")]
    AmountOverflow(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
