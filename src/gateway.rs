use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

use crate::CheckoutResult;

/// Result of a charge attempt as reported by the payment provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChargeOutcome {
    pub success: bool,
}

impl ChargeOutcome {
    pub fn approved() -> Self {
        Self { success: true }
    }

    pub fn declined() -> Self {
        Self { success: false }
    }
}

/// Payment provider able to charge a customer.
///
/// A declined charge is a successful call returning
/// [`ChargeOutcome::declined`]. `Err` is reserved for the provider itself
/// being unreachable or misbehaving.
#[automock]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` against the payment method identified by `token`.
    async fn charge(&self, amount: i64, token: &str) -> CheckoutResult<ChargeOutcome>;
}

#[async_trait]
impl<T: PaymentGateway + ?Sized> PaymentGateway for Arc<T> {
    async fn charge(&self, amount: i64, token: &str) -> CheckoutResult<ChargeOutcome> {
        (**self).charge(amount, token).await
    }
}
