//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity (pet owner)
///
/// `points` only ever grows: it is credited when a member books and is never
/// debited by this system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Members get the booking discount and earn loyalty points
    pub member: bool,
    /// Loyalty point balance
    pub points: i64,
    pub created_at: i64,
}

/// Create customer payload
///
/// `name` defaults to empty so a missing field reaches validation instead of
/// being rejected by the JSON extractor with a generic message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerCreate {
    #[serde(default)]
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub member: bool,
}
