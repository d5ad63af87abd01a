//! Booking service
//!
//! Create (unpaid, priced once) → mark paid. No other transitions.

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    Booking, BookingCreate, BookingCreated, BookingDetail, PaymentTransition, PetSize, ServiceKind,
};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

use crate::db::repository::{RepoError, booking, customer};
use crate::messages;
use crate::pricing;
use crate::utils::time::parse_start;
use crate::utils::validation::{MAX_HOURS, MAX_NIGHTS, validate_duration};

fn booking_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::BookingNotFound, messages::BOOKING_NOT_FOUND)
        .with_detail("booking_id", id)
}

fn customer_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::CustomerNotFound, messages::CUSTOMER_NOT_FOUND)
        .with_detail("customer_id", id)
}

/// Create an unpaid booking for an existing customer.
///
/// The price is computed from the customer's membership at this instant.
/// Members earn points; the booking insert and the points credit commit
/// together.
pub async fn create_booking(pool: &SqlitePool, payload: BookingCreate) -> AppResult<BookingCreated> {
    let customer_id = payload
        .customer_id
        .ok_or_else(|| AppError::required("customer_id"))?;
    let kind: ServiceKind = payload.service_type.parse().map_err(|_| {
        AppError::with_message(ErrorCode::UnknownServiceKind, messages::UNKNOWN_SERVICE)
            .with_detail("service_type", payload.service_type.clone())
    })?;
    let start = parse_start(&payload.start)?;
    if kind == ServiceKind::Overnight {
        validate_duration(payload.nights, "nights", MAX_NIGHTS)?;
    }
    if kind == ServiceKind::Hourly {
        validate_duration(payload.hours, "hours", MAX_HOURS)?;
    }

    let owner = customer::find_by_id(pool, customer_id)
        .await?
        .ok_or_else(|| customer_not_found(customer_id))?;

    let size = payload.size.as_deref().and_then(PetSize::parse);
    let quote = pricing::quote(kind, size, payload.nights, payload.hours);
    let outcome = pricing::apply_member_discount(quote.base_price, owner.member);

    let start_at = start.timestamp_millis();
    let booking = Booking {
        id: snowflake_id(),
        customer_id: owner.id,
        service_type: kind,
        size: quote.size,
        start_at,
        end_at: start_at + quote.duration.num_milliseconds(),
        price: pricing::to_f64(outcome.price),
        paid: false,
        created_at: now_millis(),
    };

    let mut tx = pool.begin().await.map_err(RepoError::from)?;
    booking::insert(&mut tx, &booking).await?;
    let customer_points = if outcome.points > 0 {
        customer::add_points(&mut tx, owner.id, outcome.points).await?
    } else {
        owner.points
    };
    tx.commit().await.map_err(RepoError::from)?;

    tracing::info!(
        booking_id = booking.id,
        customer_id = owner.id,
        service = %kind,
        price = booking.price,
        points_awarded = outcome.points,
        "Booking created"
    );

    Ok(BookingCreated {
        booking,
        points_awarded: outcome.points,
        customer_points,
    })
}

/// Booking plus its owner, for the checkout view
pub async fn get_detail(pool: &SqlitePool, id: i64) -> AppResult<BookingDetail> {
    let booking = booking::find_by_id(pool, id)
        .await?
        .ok_or_else(|| booking_not_found(id))?;
    let customer = customer::find_by_id(pool, booking.customer_id)
        .await?
        .ok_or_else(|| customer_not_found(booking.customer_id))?;
    Ok(BookingDetail { booking, customer })
}

/// Mark a booking paid. Repeating the call is a no-op reported as
/// [`PaymentTransition::AlreadyPaid`].
pub async fn mark_paid(pool: &SqlitePool, id: i64) -> AppResult<(Booking, PaymentTransition)> {
    let mut booking = booking::find_by_id(pool, id)
        .await?
        .ok_or_else(|| booking_not_found(id))?;

    if booking.mark_paid() == PaymentTransition::AlreadyPaid {
        return Ok((booking, PaymentTransition::AlreadyPaid));
    }

    // Another request may have paid it between the read and this write
    let transition = if booking::mark_paid(pool, id).await? {
        tracing::info!(booking_id = id, price = booking.price, "Booking paid");
        PaymentTransition::Paid
    } else {
        PaymentTransition::AlreadyPaid
    };

    Ok((booking, transition))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::summary;
    use shared::models::CustomerCreate;

    async fn setup(member: bool, points: i64) -> (SqlitePool, i64) {
        let pool = DbService::in_memory().await.unwrap().pool;
        let created = customer::create(
            &pool,
            CustomerCreate {
                name: "Sri".to_string(),
                member,
                ..Default::default()
            },
        )
        .await
        .unwrap();
        if points > 0 {
            let mut conn = pool.acquire().await.unwrap();
            customer::add_points(&mut conn, created.id, points).await.unwrap();
        }
        (pool, created.id)
    }

    fn request(customer_id: i64, service: &str, size: Option<&str>) -> BookingCreate {
        BookingCreate {
            customer_id: Some(customer_id),
            service_type: service.to_string(),
            size: size.map(str::to_string),
            start: "2026-10-16T09:00".to_string(),
            nights: None,
            hours: None,
        }
    }

    #[tokio::test]
    async fn test_member_overnight_two_nights() {
        let (pool, customer_id) = setup(true, 0).await;
        let mut req = request(customer_id, "overnight", Some("M"));
        req.nights = Some(2.0);

        let created = create_booking(&pool, req).await.unwrap();
        assert_eq!(created.booking.price, 900.0);
        assert_eq!(created.points_awarded, 90);
        assert_eq!(created.customer_points, 90);
        assert!(!created.booking.paid);
        assert_eq!(
            created.booking.end_at - created.booking.start_at,
            2 * 86_400_000
        );

        let owner = customer::find_by_id(&pool, customer_id).await.unwrap().unwrap();
        assert_eq!(owner.points, 90);
    }

    #[tokio::test]
    async fn test_non_member_pays_full_price_and_earns_nothing() {
        let (pool, customer_id) = setup(false, 0).await;
        let created = create_booking(&pool, request(customer_id, "groom", Some("L")))
            .await
            .unwrap();
        assert_eq!(created.booking.price, 450.0);
        assert_eq!(created.points_awarded, 0);
        assert_eq!(created.booking.end_at - created.booking.start_at, 3_600_000);

        let owner = customer::find_by_id(&pool, customer_id).await.unwrap().unwrap();
        assert_eq!(owner.points, 0);
    }

    #[tokio::test]
    async fn test_points_accumulate_on_existing_balance() {
        let (pool, customer_id) = setup(true, 120).await;
        let created = create_booking(&pool, request(customer_id, "groom", Some("S")))
            .await
            .unwrap();
        // 200 * 0.9 = 180 -> 18 points
        assert_eq!(created.booking.price, 180.0);
        assert_eq!(created.customer_points, 138);
    }

    #[tokio::test]
    async fn test_hourly_drops_size_and_clamps_hours() {
        let (pool, customer_id) = setup(false, 0).await;
        let mut req = request(customer_id, "hourly", Some("L"));
        req.hours = Some(0.0);
        let created = create_booking(&pool, req).await.unwrap();
        assert_eq!(created.booking.price, 100.0);
        assert!(created.booking.size.is_none());
        assert_eq!(created.booking.end_at - created.booking.start_at, 3_600_000);
    }

    #[tokio::test]
    async fn test_unknown_size_uses_default_rate() {
        let (pool, customer_id) = setup(false, 0).await;
        let created = create_booking(&pool, request(customer_id, "overnight", Some("XL")))
            .await
            .unwrap();
        assert_eq!(created.booking.price, 500.0);
        assert!(created.booking.size.is_none());
    }

    #[tokio::test]
    async fn test_lowercase_size_is_not_recognised() {
        let (pool, customer_id) = setup(false, 0).await;
        let created = create_booking(&pool, request(customer_id, "overnight", Some("s")))
            .await
            .unwrap();
        assert_eq!(created.booking.price, 500.0);
        assert!(created.booking.size.is_none());
    }

    #[tokio::test]
    async fn test_missing_customer_id_is_required() {
        let (pool, _) = setup(true, 0).await;
        let mut req = request(0, "groom", None);
        req.customer_id = None;
        let err = create_booking(&pool, req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(summary::admin_summary(&pool).await.unwrap().total_bookings, 0);
    }

    #[tokio::test]
    async fn test_unknown_service_kind_is_rejected() {
        let (pool, customer_id) = setup(true, 0).await;
        let err = create_booking(&pool, request(customer_id, "spa", None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownServiceKind);
        assert_eq!(summary::admin_summary(&pool).await.unwrap().total_bookings, 0);
    }

    #[tokio::test]
    async fn test_missing_customer_is_not_found() {
        let (pool, _) = setup(true, 0).await;
        let err = create_booking(&pool, request(424242, "groom", None))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CustomerNotFound);
    }

    #[tokio::test]
    async fn test_excessive_nights_rejected() {
        let (pool, customer_id) = setup(false, 0).await;
        let mut req = request(customer_id, "overnight", Some("S"));
        req.nights = Some(10_000.0);
        let err = create_booking(&pool, req).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn test_mark_paid_is_idempotent() {
        let (pool, customer_id) = setup(false, 0).await;
        let created = create_booking(&pool, request(customer_id, "groom", Some("S")))
            .await
            .unwrap();
        let id = created.booking.id;

        let (booking, transition) = mark_paid(&pool, id).await.unwrap();
        assert!(booking.paid);
        assert_eq!(transition, PaymentTransition::Paid);

        let (booking, transition) = mark_paid(&pool, id).await.unwrap();
        assert!(booking.paid);
        assert_eq!(transition, PaymentTransition::AlreadyPaid);

        let stats = summary::admin_summary(&pool).await.unwrap();
        assert_eq!(stats.revenue, 200.0);
        assert_eq!(stats.unpaid, 0);
    }

    #[tokio::test]
    async fn test_mark_paid_missing_booking() {
        let (pool, _) = setup(false, 0).await;
        let err = mark_paid(&pool, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingNotFound);
    }

    #[tokio::test]
    async fn test_detail_includes_customer() {
        let (pool, customer_id) = setup(true, 0).await;
        let created = create_booking(&pool, request(customer_id, "groom", None))
            .await
            .unwrap();
        let detail = get_detail(&pool, created.booking.id).await.unwrap();
        assert_eq!(detail.customer.id, customer_id);
        assert_eq!(detail.booking.price, 270.0);
    }
}
