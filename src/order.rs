use std::fmt;

use crate::cart::{Cart, User};

/// Lifecycle status recorded on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Processed,
}

impl OrderStatus {
    /// Literal stored and displayed for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processed => "PROCESSED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An order that has been paid for but not yet persisted.
///
/// Only an order repository turns this into an [`Order`], assigning its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub cart: Cart,
    pub total: i64,
    pub status: OrderStatus,
}

/// A persisted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: String,
    cart: Cart,
    total: i64,
    status: OrderStatus,
}

impl Order {
    /// Create a new Order with the given id, cart snapshot, total and status.
    pub fn new(id: impl Into<String>, cart: Cart, total: i64, status: OrderStatus) -> Self {
        Self {
            id: id.into(),
            cart,
            total,
            status,
        }
    }

    /// Promotes a candidate into a persisted order under the given id.
    pub fn from_new(id: impl Into<String>, order: NewOrder) -> Self {
        Self::new(id, order.cart, order.total, order.status)
    }

    /// Identifier assigned by the repository.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Snapshot of the cart that was checked out.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Amount actually charged, after discounts.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Current status of the order.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// User owning the order, if the cart had one.
    pub fn user(&self) -> Option<&User> {
        self.cart.user()
    }
}
