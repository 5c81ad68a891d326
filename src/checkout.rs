use tracing::{info, warn, Span};

use crate::{
    discount, Cart, CheckoutConfig, CheckoutResult, ConfirmationEmail, NewOrder, Notifier, Order,
    OrderRepository, OrderStatus, PaymentGateway,
};

/// Runs checkouts against injected collaborators.
///
/// A checkout charges the cart's discounted total, persists the order and
/// emails a confirmation, strictly in that order. Nothing is persisted or
/// sent unless the charge is approved.
#[derive(Debug)]
pub struct CheckoutService<G, R, N> {
    gateway: G,
    repository: R,
    notifier: N,
    config: CheckoutConfig,
}

impl<G, R, N> CheckoutService<G, R, N>
where
    G: PaymentGateway,
    R: OrderRepository,
    N: Notifier,
{
    /// Create a service with the default [`CheckoutConfig`].
    pub fn new(gateway: G, repository: R, notifier: N) -> Self {
        Self::with_config(gateway, repository, notifier, CheckoutConfig::default())
    }

    pub fn with_config(gateway: G, repository: R, notifier: N, config: CheckoutConfig) -> Self {
        Self {
            gateway,
            repository,
            notifier,
            config,
        }
    }

    pub fn config(&self) -> &CheckoutConfig {
        &self.config
    }

    /// Charge, persist and confirm a purchase.
    ///
    /// Returns `Ok(None)` when the gateway declines the charge. On success the
    /// order is exactly what the repository returned. Collaborator errors are
    /// passed through untouched.
    #[tracing::instrument(
        name = "checkout.process_order",
        skip(self, cart, payment_token),
        fields(
            item_count = cart.len(),
            premium = cart.user().is_some_and(|user| user.is_premium()),
            total = tracing::field::Empty,
            order_id = tracing::field::Empty
        ),
        err
    )]
    pub async fn process_order(
        &self,
        cart: &Cart,
        payment_token: &str,
    ) -> CheckoutResult<Option<Order>> {
        let span = Span::current();

        let total = discount::discounted_total(cart)?;
        span.record("total", total);

        let outcome = self.gateway.charge(total, payment_token).await?;
        if !outcome.success {
            info!(total, "payment declined");
            return Ok(None);
        }

        let order = self
            .repository
            .save(NewOrder {
                cart: cart.clone(),
                total,
                status: OrderStatus::Processed,
            })
            .await?;
        span.record("order_id", tracing::field::display(order.id()));

        let email = ConfirmationEmail::for_order(&order, &self.config);
        let delivered = self
            .notifier
            .send_email(&email.to, &email.subject, &email.body)
            .await?;
        if !delivered {
            warn!(order_id = %order.id(), to = %email.to, "confirmation email was not delivered");
        }

        info!(order_id = %order.id(), total = order.total(), "order processed");
        Ok(Some(order))
    }
}
