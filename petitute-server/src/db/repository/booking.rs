//! Booking Repository

use super::RepoResult;
use shared::models::{Booking, BookingWithCustomer};
use sqlx::{SqliteConnection, SqlitePool};

const BOOKING_SELECT: &str = "SELECT id, customer_id, service_type, size, start_at, end_at, price, paid, created_at FROM booking";

const BOOKING_WITH_CUSTOMER_SELECT: &str = "SELECT b.id, b.customer_id, b.service_type, b.size, b.start_at, b.end_at, b.price, b.paid, b.created_at, c.name AS customer_name FROM booking b JOIN customer c ON c.id = b.customer_id";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Booking>> {
    let sql = format!("{BOOKING_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Booking>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Most recent bookings (by creation time) with their customer name
pub async fn find_recent(pool: &SqlitePool, limit: i64) -> RepoResult<Vec<BookingWithCustomer>> {
    let sql = format!("{BOOKING_WITH_CUSTOMER_SELECT} ORDER BY b.created_at DESC, b.id DESC LIMIT ?");
    let rows = sqlx::query_as::<_, BookingWithCustomer>(&sql)
        .bind(limit)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Insert a booking row (callers run this inside the points transaction)
pub async fn insert(conn: &mut SqliteConnection, booking: &Booking) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO booking (id, customer_id, service_type, size, start_at, end_at, price, paid, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(booking.id)
    .bind(booking.customer_id)
    .bind(booking.service_type)
    .bind(booking.size)
    .bind(booking.start_at)
    .bind(booking.end_at)
    .bind(booking.price)
    .bind(booking.paid)
    .bind(booking.created_at)
    .execute(conn)
    .await?;
    Ok(())
}

/// Flip `paid` from 0 to 1. Returns `false` when the row was already paid
/// (or does not exist), so concurrent submissions write at most once.
pub async fn mark_paid(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE booking SET paid = 1 WHERE id = ? AND paid = 0")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::customer;
    use shared::models::{Customer, PetSize, ServiceKind};

    async fn pool_with_customer() -> SqlitePool {
        let pool = DbService::in_memory().await.unwrap().pool;
        let mut conn = pool.acquire().await.unwrap();
        let owner = Customer {
            id: 1,
            name: "Som".to_string(),
            phone: None,
            email: None,
            member: false,
            points: 0,
            created_at: 0,
        };
        customer::insert(&mut conn, &owner).await.unwrap();
        drop(conn);
        pool
    }

    fn booking(id: i64, created_at: i64) -> Booking {
        Booking {
            id,
            customer_id: 1,
            service_type: ServiceKind::Overnight,
            size: Some(PetSize::M),
            start_at: 0,
            end_at: 86_400_000,
            price: 500.0,
            paid: false,
            created_at,
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let pool = pool_with_customer().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &booking(10, 5)).await.unwrap();
        drop(conn);

        let found = find_by_id(&pool, 10).await.unwrap().unwrap();
        assert_eq!(found.service_type, ServiceKind::Overnight);
        assert_eq!(found.size, Some(PetSize::M));
        assert_eq!(found.price, 500.0);
        assert!(!found.paid);
    }

    #[tokio::test]
    async fn test_hourly_booking_has_no_size() {
        let pool = pool_with_customer().await;
        let mut row = booking(11, 5);
        row.service_type = ServiceKind::Hourly;
        row.size = None;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &row).await.unwrap();
        drop(conn);

        let found = find_by_id(&pool, 11).await.unwrap().unwrap();
        assert_eq!(found.service_type, ServiceKind::Hourly);
        assert!(found.size.is_none());
    }

    #[tokio::test]
    async fn test_insert_rejects_unknown_customer() {
        let pool = pool_with_customer().await;
        let mut row = booking(12, 5);
        row.customer_id = 999;
        let mut conn = pool.acquire().await.unwrap();
        assert!(insert(&mut conn, &row).await.is_err());
    }

    #[tokio::test]
    async fn test_find_recent_is_bounded_and_ordered() {
        let pool = pool_with_customer().await;
        let mut conn = pool.acquire().await.unwrap();
        for i in 1..=25 {
            insert(&mut conn, &booking(i, i * 1_000)).await.unwrap();
        }
        drop(conn);

        let recent = find_recent(&pool, 20).await.unwrap();
        assert_eq!(recent.len(), 20);
        assert_eq!(recent[0].booking.id, 25);
        assert_eq!(recent[19].booking.id, 6);
        assert!(recent.iter().all(|r| r.customer_name == "Som"));
    }

    #[tokio::test]
    async fn test_mark_paid_writes_once() {
        let pool = pool_with_customer().await;
        let mut conn = pool.acquire().await.unwrap();
        insert(&mut conn, &booking(13, 5)).await.unwrap();
        drop(conn);

        assert!(mark_paid(&pool, 13).await.unwrap());
        assert!(!mark_paid(&pool, 13).await.unwrap());
        assert!(find_by_id(&pool, 13).await.unwrap().unwrap().paid);
        assert!(!mark_paid(&pool, 404).await.unwrap());
    }
}
