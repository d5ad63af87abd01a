use axum::extract::State;

use crate::core::ServerState;
use crate::db::repository::summary as summary_repo;
use crate::utils::{ApiResponse, AppResult};
use shared::models::AdminSummary;

/// GET /api/admin/summary - 预约数、未付款数、收入、客户数
pub async fn summary(State(state): State<ServerState>) -> AppResult<ApiResponse<AdminSummary>> {
    let stats = summary_repo::admin_summary(&state.pool).await?;
    Ok(ApiResponse::success(stats))
}
