//! Booking API Handlers

use axum::{
    Extension,
    extract::{Path, State},
};

use crate::api::extract::ApiJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::booking;
use crate::messages;
use crate::services::booking as booking_service;
use crate::utils::{ApiResponse, AppResult};
use shared::models::{
    Booking, BookingCreate, BookingCreated, BookingDetail, BookingWithCustomer, PaymentTransition,
};

/// Rows shown on the landing dashboard
const RECENT_BOOKINGS_LIMIT: i64 = 20;

/// GET /api/bookings - 最近的预约
pub async fn list_recent(
    State(state): State<ServerState>,
) -> AppResult<ApiResponse<Vec<BookingWithCustomer>>> {
    let bookings = booking::find_recent(&state.pool, RECENT_BOOKINGS_LIMIT).await?;
    Ok(ApiResponse::success(bookings))
}

/// POST /api/bookings - 创建预约
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    ApiJson(payload): ApiJson<BookingCreate>,
) -> AppResult<ApiResponse<BookingCreated>> {
    let created = booking_service::create_booking(&state.pool, payload).await?;
    tracing::debug!(
        booking_id = created.booking.id,
        operator = %current_user.username,
        "Booking submitted"
    );
    Ok(ApiResponse::success_with_message(messages::BOOKING_CREATED, created))
}

/// GET /api/bookings/{id} - 结账页
pub async fn checkout(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<BookingDetail>> {
    let detail = booking_service::get_detail(&state.pool, id).await?;
    Ok(ApiResponse::success(detail))
}

/// POST /api/bookings/{id}/pay - 标记已付款
pub async fn pay(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Booking>> {
    let (booking, transition) = booking_service::mark_paid(&state.pool, id).await?;
    let message = match transition {
        PaymentTransition::Paid => messages::PAYMENT_DONE,
        PaymentTransition::AlreadyPaid => messages::ALREADY_PAID,
    };
    Ok(ApiResponse::success_with_message(message, booking))
}
