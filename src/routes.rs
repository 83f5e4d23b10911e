use axum::{routing::get, Router};

use crate::error::AppError;
use crate::{checkout, pricing};

pub async fn root() -> &'static str {
    "Pricing API"
}

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub fn api_routes() -> Router {
    Router::new()
        .route("/api/pricing/estimate", get(pricing::api::estimate))
        .route("/api/pricing/tiers", get(pricing::api::list_tiers))
        .route("/api/checkout", get(checkout::create_checkout))
}
