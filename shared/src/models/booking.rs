//! Booking Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::customer::Customer;

/// Service kind enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum ServiceKind {
    /// Overnight stay, priced per night by pet size
    Overnight,
    /// Hourly care, first hour plus a per-hour increment
    Hourly,
    /// Grooming session, one hour, priced by pet size
    Groom,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overnight => "overnight",
            Self::Hourly => "hourly",
            Self::Groom => "groom",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a service kind string is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service kind: {0:?}")]
pub struct UnknownServiceKind(pub String);

impl FromStr for ServiceKind {
    type Err = UnknownServiceKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overnight" => Ok(Self::Overnight),
            "hourly" => Ok(Self::Hourly),
            "groom" => Ok(Self::Groom),
            _ => Err(UnknownServiceKind(s.to_string())),
        }
    }
}

/// Pet size enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PetSize {
    S,
    M,
    L,
}

impl PetSize {
    /// Exact `S`/`M`/`L` only; anything else means "no size" and prices at the default
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "S" => Some(Self::S),
            "M" => Some(Self::M),
            "L" => Some(Self::L),
            _ => None,
        }
    }
}

/// Result of a mark-paid request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentTransition {
    /// The booking moved from unpaid to paid
    Paid,
    /// The booking was already paid; nothing changed
    AlreadyPaid,
}

/// Booking entity
///
/// `price` is fixed at creation time and `paid` only ever goes false → true.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub customer_id: i64,
    pub service_type: ServiceKind,
    /// Only set for overnight / groom bookings
    pub size: Option<PetSize>,
    /// Start (Unix millis)
    pub start_at: i64,
    /// End (Unix millis), always after `start_at`
    pub end_at: i64,
    pub price: f64,
    pub paid: bool,
    pub created_at: i64,
}

impl Booking {
    /// Apply the single lifecycle transition. Repeating it is a no-op.
    pub fn mark_paid(&mut self) -> PaymentTransition {
        if self.paid {
            PaymentTransition::AlreadyPaid
        } else {
            self.paid = true;
            PaymentTransition::Paid
        }
    }
}

/// Create booking payload
///
/// Kept as raw strings/numbers: the server decides how lenient to be
/// (unknown sizes fall back to defaults, unknown kinds are rejected).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingCreate {
    /// Optional so a missing owner reaches validation as a required field
    pub customer_id: Option<i64>,
    #[serde(default)]
    pub service_type: String,
    pub size: Option<String>,
    /// ISO-8601 datetime (`2026-10-16T09:30`) or RFC 3339
    #[serde(default)]
    pub start: String,
    /// Overnight only (default 1)
    pub nights: Option<f64>,
    /// Hourly only (default 1)
    pub hours: Option<f64>,
}

/// Booking with its customer's name (dashboard rows)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingWithCustomer {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub booking: Booking,
    pub customer_name: String,
}

/// Booking creation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreated {
    pub booking: Booking,
    /// Loyalty points credited by this booking (0 for non-members)
    pub points_awarded: i64,
    /// Customer balance after the credit
    pub customer_points: i64,
}

/// Checkout view: booking plus owning customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetail {
    pub booking: Booking,
    pub customer: Customer,
}
