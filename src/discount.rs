//! Loyalty discount policy.

use crate::{
    cart::{Cart, Tier},
    CheckoutError, CheckoutResult,
};

/// Price multiplier granted to a loyalty tier, in hundredths.
pub fn multiplier_percent(tier: Tier) -> i64 {
    match tier {
        Tier::Premium => 90,
        Tier::Standard => 100,
    }
}

/// Amount to charge for a cart once its owner's discount is applied.
///
/// Carts without a user are charged as [`Tier::Standard`]. Discounted amounts
/// are rounded to the nearest whole unit, halves away from zero.
///
/// # Errors
///
/// Returns `CheckoutError::AmountOverflow` if the total cannot be represented.
pub fn discounted_total(cart: &Cart) -> CheckoutResult<i64> {
    let tier = cart.user().map(|user| user.tier()).unwrap_or_default();
    apply(cart.total()?, tier)
}

/// Applies the tier multiplier to a raw amount.
///
/// # Errors
///
/// Returns `CheckoutError::AmountOverflow` if scaling the amount overflows.
pub fn apply(amount: i64, tier: Tier) -> CheckoutResult<i64> {
    let scaled = amount
        .checked_mul(multiplier_percent(tier))
        .ok_or_else(|| {
            CheckoutError::AmountOverflow(format!("cannot apply {tier:?} discount to {amount}"))
        })?;
    let (whole, rest) = (scaled / 100, scaled % 100);

    // |whole| <= i64::MAX / 100, so the rounding step cannot overflow.
    if rest.abs() * 2 >= 100 {
        Ok(whole + scaled.signum())
    } else {
        Ok(whole)
    }
}
