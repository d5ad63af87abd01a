//! Member discount and loyalty points

use super::round_money;
use rust_decimal::prelude::*;

/// Members pay 90% of the base price
pub const MEMBER_PRICE_RATE: Decimal = Decimal::from_parts(90, 0, 0, false, 2);

/// One point per 10 currency units of the discounted price
const POINTS_DIVISOR: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountOutcome {
    /// Final price, rounded to 2 dp
    pub price: Decimal,
    /// Loyalty points earned (0 for non-members)
    pub points: i64,
}

/// Apply the membership policy to a base price
pub fn apply_member_discount(base_price: Decimal, member: bool) -> DiscountOutcome {
    if !member {
        return DiscountOutcome {
            price: round_money(base_price),
            points: 0,
        };
    }

    let price = round_money(base_price * MEMBER_PRICE_RATE);
    let points = (price / Decimal::from(POINTS_DIVISOR))
        .floor()
        .to_i64()
        .unwrap_or_default();

    DiscountOutcome { price, points }
}
