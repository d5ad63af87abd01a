//! Customer API Handlers

use axum::{Extension, extract::State};

use crate::api::extract::ApiJson;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::customer;
use crate::messages;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, normalize_optional, validate_optional_text,
    validate_required_text,
};
use crate::utils::{ApiResponse, AppResult};
use shared::models::{Customer, CustomerCreate};

/// GET /api/customers - 所有客户 (newest first)
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Customer>>> {
    let customers = customer::find_all(&state.pool).await?;
    Ok(ApiResponse::success(customers))
}

/// POST /api/customers - 创建客户
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    ApiJson(payload): ApiJson<CustomerCreate>,
) -> AppResult<ApiResponse<Customer>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    let payload = CustomerCreate {
        name: payload.name.trim().to_string(),
        phone: normalize_optional(payload.phone),
        email: normalize_optional(payload.email),
        member: payload.member,
    };
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let created = customer::create(&state.pool, payload).await?;

    tracing::info!(
        customer_id = created.id,
        member = created.member,
        operator = %current_user.username,
        "Customer created"
    );

    Ok(ApiResponse::success_with_message(messages::CUSTOMER_SAVED, created))
}
