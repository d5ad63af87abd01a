//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// - /api/auth/login, /api/auth/logout: public
/// - /api/auth/me: requires a session (global require_auth middleware)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/logout", post(handler::logout).get(handler::logout))
        .route("/api/auth/me", get(handler::me))
}
