use async_trait::async_trait;
use mockall::automock;
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::{CheckoutResult, NewOrder, Order};

/// Storage for paid orders.
#[automock]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persist a candidate order and return the stored order, including its id.
    async fn save(&self, order: NewOrder) -> CheckoutResult<Order>;
}

#[async_trait]
impl<T: OrderRepository + ?Sized> OrderRepository for Arc<T> {
    async fn save(&self, order: NewOrder) -> CheckoutResult<Order> {
        (**self).save(order).await
    }
}

/// How [`InMemoryOrderRepository`] assigns ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `PREFIX-<uuid>`
    Random,
    /// `PREFIX-001`, `PREFIX-002`, ...
    Sequential,
}

/// Order repository kept in process memory.
///
/// Clones share the same storage.
#[derive(Debug, Clone)]
pub struct InMemoryOrderRepository {
    prefix: String,
    strategy: IdStrategy,
    orders: Arc<RwLock<Vec<Order>>>,
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new("ORD", IdStrategy::Random)
    }
}

impl InMemoryOrderRepository {
    pub fn new(prefix: impl Into<String>, strategy: IdStrategy) -> Self {
        Self {
            prefix: prefix.into(),
            strategy,
            orders: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn sequential(prefix: impl Into<String>) -> Self {
        Self::new(prefix, IdStrategy::Sequential)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Order> {
        self.orders
            .read()
            .iter()
            .find(|order| order.id() == id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.orders.read().len()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().clone()
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn save(&self, order: NewOrder) -> CheckoutResult<Order> {
        // Id assignment and insert happen under one lock so sequential ids stay unique.
        let mut orders = self.orders.write();

        let id = match self.strategy {
            IdStrategy::Random => format!("{}-{}", self.prefix, Uuid::new_v4().simple()),
            IdStrategy::Sequential => format!("{}-{:03}", self.prefix, orders.len() + 1),
        };

        let saved = Order::from_new(id, order);
        orders.push(saved.clone());
        Ok(saved)
    }
}
