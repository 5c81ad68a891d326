use crate::{CheckoutError, CheckoutResult};

/// Environment variable overriding [`CheckoutConfig::fallback_recipient`].
pub const FALLBACK_RECIPIENT_VAR: &str = "CHECKOUT_FALLBACK_RECIPIENT";

/// Environment variable overriding [`CheckoutConfig::currency_symbol`].
pub const CURRENCY_SYMBOL_VAR: &str = "CHECKOUT_CURRENCY_SYMBOL";

/// Settings for the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// Recipient of the confirmation email when the cart has no user.
    pub fallback_recipient: String,
    /// Prefix placed before amounts in customer-facing messages.
    pub currency_symbol: String,
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            fallback_recipient: "customer@email.com".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl CheckoutConfig {
    pub fn with_fallback_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.fallback_recipient = recipient.into();
        self
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Load configuration from the environment, keeping defaults for unset variables.
    pub fn from_env() -> CheckoutResult<Self> {
        let mut config = Self::default();

        if let Ok(recipient) = std::env::var(FALLBACK_RECIPIENT_VAR) {
            if recipient.trim().is_empty() {
                return Err(CheckoutError::Config(format!(
                    "{FALLBACK_RECIPIENT_VAR} must not be empty"
                )));
            }
            config.fallback_recipient = recipient;
        }

        if let Ok(symbol) = std::env::var(CURRENCY_SYMBOL_VAR) {
            config.currency_symbol = symbol;
        }

        Ok(config)
    }
}
