//! Booking pricing
//!
//! - [`calculator`]: base price and schedule per service kind
//! - [`discount`]: member discount and loyalty points
//!
//! All arithmetic is done in `Decimal`, then converted to `f64` (2 dp) for
//! storage and serialization.

pub mod calculator;
pub mod discount;

pub use calculator::{Quote, quote};
pub use discount::{DiscountOutcome, apply_member_discount};

use rust_decimal::prelude::*;

/// Monetary values are kept to 2 decimal places
const DECIMAL_PLACES: u32 = 2;

/// Round to 2 dp (half away from zero)
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}
