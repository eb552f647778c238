//! Request extractors whose rejections go through [`AppError`], so malformed
//! bodies get the same `{"error": {...}}` envelope as every other failure.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with an [`AppError`] rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
