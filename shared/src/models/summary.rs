//! Admin Summary Model

use serde::{Deserialize, Serialize};

/// Aggregate figures for the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminSummary {
    /// All bookings ever created
    pub total_bookings: i64,
    /// Bookings with `paid = false`
    pub unpaid: i64,
    /// Sum of `price` over paid bookings (0 when none are paid)
    pub revenue: f64,
    /// All customers
    pub customers: i64,
}
