//! Admin aggregates

use super::RepoResult;
use shared::models::AdminSummary;
use sqlx::SqlitePool;

/// Counts and paid revenue in one round trip
pub async fn admin_summary(pool: &SqlitePool) -> RepoResult<AdminSummary> {
    let summary = sqlx::query_as::<_, AdminSummary>(
        "SELECT \
            (SELECT COUNT(*) FROM booking) AS total_bookings, \
            (SELECT COUNT(*) FROM booking WHERE paid = 0) AS unpaid, \
            (SELECT COALESCE(SUM(price), 0.0) FROM booking WHERE paid = 1) AS revenue, \
            (SELECT COUNT(*) FROM customer) AS customers",
    )
    .fetch_one(pool)
    .await?;
    Ok(summary)
}
