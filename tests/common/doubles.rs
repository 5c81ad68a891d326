use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;

use checkout_service::{
    ChargeOutcome, CheckoutError, CheckoutResult, NewOrder, Notifier, Order, OrderRepository,
    PaymentGateway,
};

/// Gateway returning a fixed outcome and recording every charge
pub struct GatewayStub {
    outcome: CheckoutResult<ChargeOutcome>,
    charges: Arc<RwLock<Vec<(i64, String)>>>,
}

impl GatewayStub {
    pub fn approving() -> Arc<Self> {
        Self::with_outcome(Ok(ChargeOutcome::approved()))
    }

    pub fn declining() -> Arc<Self> {
        Self::with_outcome(Ok(ChargeOutcome::declined()))
    }

    pub fn failing(reason: &str) -> Arc<Self> {
        Self::with_outcome(Err(CheckoutError::Gateway(reason.to_string())))
    }

    fn with_outcome(outcome: CheckoutResult<ChargeOutcome>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            charges: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn charges(&self) -> Vec<(i64, String)> {
        self.charges.read().clone()
    }
}

#[async_trait]
impl PaymentGateway for GatewayStub {
    async fn charge(&self, amount: i64, token: &str) -> CheckoutResult<ChargeOutcome> {
        self.charges.write().push((amount, token.to_string()));
        match &self.outcome {
            Ok(outcome) => Ok(*outcome),
            Err(err) => Err(CheckoutError::Gateway(err.to_string())),
        }
    }
}

/// Repository answering every save with a prepared outcome
pub struct RepositoryStub {
    outcome: CheckoutResult<Order>,
    received: Arc<RwLock<Vec<NewOrder>>>,
}

impl RepositoryStub {
    pub fn returning(order: Order) -> Arc<Self> {
        Self::with_outcome(Ok(order))
    }

    /// Fails every save; also serves as a dummy that must never be reached.
    pub fn failing() -> Arc<Self> {
        Self::with_outcome(Err(CheckoutError::Repository(
            "connection refused".to_string(),
        )))
    }

    fn with_outcome(outcome: CheckoutResult<Order>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            received: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn received(&self) -> Vec<NewOrder> {
        self.received.read().clone()
    }
}

#[async_trait]
impl OrderRepository for RepositoryStub {
    async fn save(&self, order: NewOrder) -> CheckoutResult<Order> {
        self.received.write().push(order);
        match &self.outcome {
            Ok(saved) => Ok(saved.clone()),
            Err(err) => Err(CheckoutError::Repository(err.to_string())),
        }
    }
}

/// Notifier recording every email it is asked to send
pub struct NotifierSpy {
    delivered: bool,
    fail: bool,
    sent: Arc<RwLock<Vec<(String, String, String)>>>,
}

impl NotifierSpy {
    pub fn new() -> Arc<Self> {
        Self::build(true, false)
    }

    pub fn undeliverable() -> Arc<Self> {
        Self::build(false, false)
    }

    pub fn failing() -> Arc<Self> {
        Self::build(false, true)
    }

    fn build(delivered: bool, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            delivered,
            fail,
            sent: Arc::new(RwLock::new(Vec::new())),
        })
    }

    pub fn sent(&self) -> Vec<(String, String, String)> {
        self.sent.read().clone()
    }
}

#[async_trait]
impl Notifier for NotifierSpy {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> CheckoutResult<bool> {
        self.sent
            .write()
            .push((to.to_string(), subject.to_string(), body.to_string()));
        if self.fail {
            return Err(CheckoutError::Notification("smtp unavailable".to_string()));
        }
        Ok(self.delivered)
    }
}
