use async_trait::async_trait;
use mockall::automock;
use std::sync::Arc;

use crate::{CheckoutConfig, CheckoutResult, Order};

/// Subject line of every order confirmation.
pub const CONFIRMATION_SUBJECT: &str = "Your Order has been Approved!";

/// Delivers email to customers.
#[automock]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send an email, returning whether the transport accepted it.
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> CheckoutResult<bool>;
}

#[async_trait]
impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> CheckoutResult<bool> {
        (**self).send_email(to, subject, body).await
    }
}

/// Confirmation email for a persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl ConfirmationEmail {
    /// Address the order's customer, or the configured fallback for guest carts.
    pub fn for_order(order: &Order, config: &CheckoutConfig) -> Self {
        let to = order
            .user()
            .map_or(config.fallback_recipient.as_str(), |user| user.email());

        Self {
            to: to.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body: format!(
                "Order {} for the amount of {}{}",
                order.id(),
                config.currency_symbol,
                order.total()
            ),
        }
    }
}
