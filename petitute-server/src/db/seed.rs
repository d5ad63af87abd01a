//! Demo data for a fresh install

use super::repository::{RepoResult, booking, customer};
use shared::models::{Booking, Customer, PetSize, ServiceKind};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Insert two customers and two bookings, but only into an empty database.
///
/// Returns `true` when data was inserted.
pub async fn seed_demo_data(pool: &SqlitePool) -> RepoResult<bool> {
    if customer::count(pool).await? > 0 {
        tracing::info!("Customer table not empty, skipping demo seed");
        return Ok(false);
    }

    let now = now_millis();
    let member = Customer {
        id: snowflake_id(),
        name: "น.ส. ศรีสุข".to_string(),
        phone: Some("0812345678".to_string()),
        email: Some("sri@example.com".to_string()),
        member: true,
        points: 120,
        created_at: now,
    };
    let walk_in = Customer {
        id: member.id + 1,
        name: "นายสมชาย".to_string(),
        phone: Some("0898765432".to_string()),
        email: Some("som@example.com".to_string()),
        member: false,
        points: 0,
        created_at: now,
    };

    let stay = Booking {
        id: snowflake_id(),
        customer_id: member.id,
        service_type: ServiceKind::Overnight,
        size: Some(PetSize::M),
        start_at: now,
        end_at: now + DAY_MS,
        price: 500.0,
        paid: false,
        created_at: now,
    };
    let groom = Booking {
        id: stay.id + 1,
        customer_id: walk_in.id,
        service_type: ServiceKind::Groom,
        size: Some(PetSize::S),
        start_at: now,
        end_at: now + HOUR_MS,
        price: 200.0,
        paid: true,
        created_at: now,
    };

    let mut tx = pool.begin().await?;
    customer::insert(&mut tx, &member).await?;
    customer::insert(&mut tx, &walk_in).await?;
    booking::insert(&mut tx, &stay).await?;
    booking::insert(&mut tx, &groom).await?;
    tx.commit().await?;

    tracing::info!(customers = 2, bookings = 2, "Demo data seeded");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::summary;

    #[tokio::test]
    async fn test_seed_populates_empty_database() {
        let pool = DbService::in_memory().await.unwrap().pool;
        assert!(seed_demo_data(&pool).await.unwrap());

        let stats = summary::admin_summary(&pool).await.unwrap();
        assert_eq!(stats.customers, 2);
        assert_eq!(stats.total_bookings, 2);
        assert_eq!(stats.unpaid, 1);
        assert_eq!(stats.revenue, 200.0);

        let customers = customer::find_all(&pool).await.unwrap();
        let member = customers.iter().find(|c| c.member).unwrap();
        assert_eq!(member.points, 120);
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_customers_exist() {
        let pool = DbService::in_memory().await.unwrap().pool;
        assert!(seed_demo_data(&pool).await.unwrap());
        assert!(!seed_demo_data(&pool).await.unwrap());
        assert_eq!(customer::count(&pool).await.unwrap(), 2);
    }
}
