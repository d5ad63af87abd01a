//! Base price and schedule per service kind

use chrono::Duration;
use rust_decimal::Decimal;
use shared::models::{PetSize, ServiceKind};

/// Price and length of a booking before any discount
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub base_price: Decimal,
    pub duration: Duration,
    /// Size as stored on the booking (`None` for hourly care)
    pub size: Option<PetSize>,
}

/// Overnight rate per night
fn overnight_rate(size: Option<PetSize>) -> Decimal {
    match size {
        Some(PetSize::S) => Decimal::from(300),
        Some(PetSize::L) => Decimal::from(700),
        Some(PetSize::M) | None => Decimal::from(500),
    }
}

fn groom_rate(size: Option<PetSize>) -> Decimal {
    match size {
        Some(PetSize::S) => Decimal::from(200),
        Some(PetSize::L) => Decimal::from(450),
        Some(PetSize::M) | None => Decimal::from(300),
    }
}

/// First hour 100, then 50 per extra hour
fn hourly_rate(hours: i64) -> Decimal {
    Decimal::from(100) + Decimal::from(50) * Decimal::from(hours - 1)
}

/// Floor a requested duration to whole units, at least 1 (missing → 1)
pub fn whole_units(value: Option<f64>) -> i64 {
    match value {
        Some(v) if v.is_finite() && v >= 1.0 => v.floor() as i64,
        _ => 1,
    }
}

/// Price a booking.
///
/// `nights` is only read for overnight stays and `hours` only for hourly
/// care; grooming is always one hour.
pub fn quote(
    kind: ServiceKind,
    size: Option<PetSize>,
    nights: Option<f64>,
    hours: Option<f64>,
) -> Quote {
    match kind {
        ServiceKind::Overnight => {
            let nights = whole_units(nights);
            Quote {
                base_price: overnight_rate(size) * Decimal::from(nights),
                duration: Duration::days(nights),
                size,
            }
        }
        ServiceKind::Hourly => {
            let hours = whole_units(hours);
            Quote {
                base_price: hourly_rate(hours),
                duration: Duration::hours(hours),
                size: None,
            }
        }
        ServiceKind::Groom => Quote {
            base_price: groom_rate(size),
            duration: Duration::hours(1),
            size,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(kind: ServiceKind, size: Option<PetSize>, n: Option<f64>) -> Decimal {
        quote(kind, size, n, n).base_price
    }

    #[test]
    fn test_overnight_by_size() {
        assert_eq!(price(ServiceKind::Overnight, Some(PetSize::S), None), Decimal::from(300));
        assert_eq!(price(ServiceKind::Overnight, Some(PetSize::M), None), Decimal::from(500));
        assert_eq!(price(ServiceKind::Overnight, Some(PetSize::L), None), Decimal::from(700));
        assert_eq!(price(ServiceKind::Overnight, None, None), Decimal::from(500));
    }

    #[test]
    fn test_unrecognised_size_token_prices_at_default() {
        let q = quote(ServiceKind::Overnight, PetSize::parse("s"), None, None);
        assert_eq!(q.base_price, Decimal::from(500));
        assert!(q.size.is_none());
        assert_eq!(
            price(ServiceKind::Groom, PetSize::parse("l"), None),
            Decimal::from(300)
        );
    }

    #[test]
    fn test_overnight_multiplies_nights() {
        let q = quote(ServiceKind::Overnight, Some(PetSize::M), Some(2.0), None);
        assert_eq!(q.base_price, Decimal::from(1000));
        assert_eq!(q.duration, Duration::days(2));
        assert_eq!(q.size, Some(PetSize::M));
    }

    #[test]
    fn test_overnight_ignores_hours() {
        let q = quote(ServiceKind::Overnight, Some(PetSize::S), None, Some(5.0));
        assert_eq!(q.base_price, Decimal::from(300));
        assert_eq!(q.duration, Duration::days(1));
    }

    #[test]
    fn test_hourly_rates() {
        assert_eq!(price(ServiceKind::Hourly, None, Some(1.0)), Decimal::from(100));
        assert_eq!(price(ServiceKind::Hourly, None, Some(3.0)), Decimal::from(200));
        assert_eq!(price(ServiceKind::Hourly, None, Some(3.9)), Decimal::from(200));
        assert_eq!(price(ServiceKind::Hourly, None, None), Decimal::from(100));
    }

    #[test]
    fn test_hourly_clamps_non_positive_hours() {
        assert_eq!(price(ServiceKind::Hourly, None, Some(0.0)), Decimal::from(100));
        assert_eq!(price(ServiceKind::Hourly, None, Some(-4.0)), Decimal::from(100));
        let q = quote(ServiceKind::Hourly, None, None, Some(0.0));
        assert_eq!(q.duration, Duration::hours(1));
    }

    #[test]
    fn test_hourly_drops_size() {
        let q = quote(ServiceKind::Hourly, Some(PetSize::L), None, Some(2.0));
        assert!(q.size.is_none());
        assert_eq!(q.duration, Duration::hours(2));
    }

    #[test]
    fn test_groom_by_size_and_fixed_duration() {
        assert_eq!(price(ServiceKind::Groom, Some(PetSize::S), None), Decimal::from(200));
        assert_eq!(price(ServiceKind::Groom, Some(PetSize::M), None), Decimal::from(300));
        assert_eq!(price(ServiceKind::Groom, Some(PetSize::L), None), Decimal::from(450));
        assert_eq!(price(ServiceKind::Groom, None, None), Decimal::from(300));

        let q = quote(ServiceKind::Groom, Some(PetSize::L), Some(3.0), Some(3.0));
        assert_eq!(q.duration, Duration::hours(1));
    }

    #[test]
    fn test_whole_units() {
        assert_eq!(whole_units(None), 1);
        assert_eq!(whole_units(Some(2.7)), 2);
        assert_eq!(whole_units(Some(0.5)), 1);
        assert_eq!(whole_units(Some(f64::NAN)), 1);
    }
}
