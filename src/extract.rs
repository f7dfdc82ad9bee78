use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::error::AppError;

/// JSON body extractor whose rejections render as `422 {"detail": ...}`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unprocessable(rejection.body_text())
    }
}
