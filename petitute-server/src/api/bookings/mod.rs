//! Booking API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/bookings | GET | 最近 20 条预约 |
//! | /api/bookings | POST | 创建预约 (未付款) |
//! | /api/bookings/{id} | GET | 结账页: 预约 + 客户 |
//! | /api/bookings/{id}/pay | POST | 标记已付款 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list_recent).post(handler::create))
        .route("/{id}", get(handler::checkout))
        .route("/{id}/pay", post(handler::pay))
}
