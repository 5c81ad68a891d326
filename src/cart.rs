use std::sync::Arc;

use crate::{CheckoutError, CheckoutResult};

/// Loyalty tier of a customer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    Premium,
    #[default]
    Standard,
}

/// A customer placing orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    email: String,
    tier: Tier,
}

impl User {
    /// Create a new User with the given email and tier.
    pub fn new(email: impl Into<String>, tier: Tier) -> Self {
        Self {
            email: email.into(),
            tier,
        }
    }

    /// Create a Premium tier user.
    pub fn premium(email: impl Into<String>) -> Self {
        Self::new(email, Tier::Premium)
    }

    /// Create a Standard tier user.
    pub fn standard(email: impl Into<String>) -> Self {
        Self::new(email, Tier::Standard)
    }

    /// Email address used for order confirmations.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Loyalty tier of this user.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Whether this user is entitled to the Premium discount.
    pub fn is_premium(&self) -> bool {
        self.tier == Tier::Premium
    }
}

/// An item offered for sale, priced in whole currency units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    price: i64,
}

impl Item {
    /// Create a new Item with the given name and unit price.
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Name of the item.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price of the item.
    pub fn price(&self) -> i64 {
        self.price
    }
}

/// Items a customer intends to purchase.
///
/// The cart owns its items. The user is shared with whoever else holds it,
/// and may be absent for guest checkouts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    user: Option<Arc<User>>,
    items: Vec<Item>,
}

impl Cart {
    /// Create a new Cart from an optional user and its items.
    pub fn new(user: Option<Arc<User>>, items: Vec<Item>) -> Self {
        Self { user, items }
    }

    /// User owning the cart, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_deref()
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Append an item to the cart.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Sum of all item prices. An empty cart totals zero.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::AmountOverflow` if the sum does not fit in an `i64`.
    pub fn total(&self) -> CheckoutResult<i64> {
        self.items.iter().try_fold(0i64, |total, item| {
            total.checked_add(item.price()).ok_or_else(|| {
                CheckoutError::AmountOverflow(format!(
                    "cart total exceeds {} after adding {}",
                    i64::MAX,
                    item.name()
                ))
            })
        })
    }

    /// Number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Builds carts step by step.
#[derive(Debug, Clone, Default)]
pub struct CartBuilder {
    user: Option<Arc<User>>,
    items: Vec<Item>,
}

impl CartBuilder {
    /// Create a builder for a guest cart with no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user owning the cart.
    pub fn with_user(mut self, user: impl Into<Arc<User>>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Append several items.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        self.items.extend(items);
        self
    }

    /// Append a single item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Drops any items added so far.
    pub fn empty(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Build the cart.
    pub fn build(self) -> Cart {
        Cart::new(self.user, self.items)
    }
}
