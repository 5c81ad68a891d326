//! Checkout Service Module
//!
//! This module charges a shopping cart, applies the owner's loyalty discount,
//! persists the resulting order and emails a confirmation. Payment, storage
//! and email delivery are injected collaborators.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod discount;
pub mod error;
pub mod gateway;
pub mod notifier;
pub mod order;
pub mod repository;

pub use cart::{Cart, CartBuilder, Item, Tier, User};
pub use checkout::CheckoutService;
pub use config::CheckoutConfig;
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{ChargeOutcome, MockPaymentGateway, PaymentGateway};
pub use notifier::{ConfirmationEmail, MockNotifier, Notifier, CONFIRMATION_SUBJECT};
pub use order::{NewOrder, Order, OrderStatus};
pub use repository::{IdStrategy, InMemoryOrderRepository, MockOrderRepository, OrderRepository};
