//! 请求体提取器
//!
//! `axum::Json` rejects malformed bodies with a plain-text 422. `ApiJson`
//! turns the rejection into an [`AppError`] so clients always get the
//! unified envelope.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};

use crate::utils::AppError;

/// JSON body extractor whose rejection is an [`AppError`] (400, `ValidationFailed`)
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text())
                .with_detail("rejection", rejection.status().as_u16())),
        }
    }
}
