//! Customer Repository

use super::{RepoError, RepoResult};
use shared::models::{Customer, CustomerCreate};
use sqlx::{SqliteConnection, SqlitePool};

const CUSTOMER_SELECT: &str =
    "SELECT id, name, phone, email, member, points, created_at FROM customer";

/// All customers, newest first
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} ORDER BY created_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{CUSTOMER_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create a customer with a zero point balance
pub async fn create(pool: &SqlitePool, data: CustomerCreate) -> RepoResult<Customer> {
    let customer = Customer {
        id: shared::util::snowflake_id(),
        name: data.name,
        phone: data.phone,
        email: data.email,
        member: data.member,
        points: 0,
        created_at: shared::util::now_millis(),
    };
    let mut conn = pool.acquire().await?;
    insert(&mut conn, &customer).await?;
    Ok(customer)
}

/// Insert a fully-formed row (used by `create` and by seeding)
pub async fn insert(conn: &mut SqliteConnection, customer: &Customer) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO customer (id, name, phone, email, member, points, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )
    .bind(customer.id)
    .bind(&customer.name)
    .bind(&customer.phone)
    .bind(&customer.email)
    .bind(customer.member)
    .bind(customer.points)
    .bind(customer.created_at)
    .execute(conn)
    .await?;
    Ok(())
}

/// Credit loyalty points, returning the new balance
pub async fn add_points(conn: &mut SqliteConnection, id: i64, points: i64) -> RepoResult<i64> {
    if points < 0 {
        return Err(RepoError::Validation(format!(
            "points credit must be non-negative, got {points}"
        )));
    }
    let balance = sqlx::query_scalar::<_, i64>(
        "UPDATE customer SET points = points + ?1 WHERE id = ?2 RETURNING points",
    )
    .bind(points)
    .bind(id)
    .fetch_optional(conn)
    .await?;
    balance.ok_or_else(|| RepoError::NotFound(format!("Customer {id}")))
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customer")
        .fetch_one(pool)
        .await?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn test_pool() -> SqlitePool {
        DbService::in_memory().await.unwrap().pool
    }

    fn payload(name: &str, member: bool) -> CustomerCreate {
        CustomerCreate {
            name: name.to_string(),
            phone: Some("0812345678".to_string()),
            email: None,
            member,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let pool = test_pool().await;
        let created = create(&pool, payload("Sri", true)).await.unwrap();
        assert_eq!(created.points, 0);

        let found = find_by_id(&pool, created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "Sri");
        assert!(found.member);
        assert_eq!(found.phone.as_deref(), Some("0812345678"));
        assert!(found.email.is_none());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let pool = test_pool().await;
        assert!(find_by_id(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_newest_first() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        for (id, created_at) in [(1, 1_000), (2, 3_000), (3, 2_000)] {
            let customer = Customer {
                id,
                name: format!("c{id}"),
                phone: None,
                email: None,
                member: false,
                points: 0,
                created_at,
            };
            insert(&mut conn, &customer).await.unwrap();
        }
        drop(conn);

        let ids: Vec<i64> = find_all(&pool).await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(count(&pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_add_points_returns_balance() {
        let pool = test_pool().await;
        let created = create(&pool, payload("Sri", true)).await.unwrap();
        let mut conn = pool.acquire().await.unwrap();
        assert_eq!(add_points(&mut conn, created.id, 90).await.unwrap(), 90);
        assert_eq!(add_points(&mut conn, created.id, 10).await.unwrap(), 100);
    }

    #[tokio::test]
    async fn test_add_points_unknown_customer() {
        let pool = test_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let err = add_points(&mut conn, 7, 5).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
