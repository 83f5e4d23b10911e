use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Redirect,
};
use serde::Deserialize;

use super::error::CheckoutError;
use super::service::{CalculatorCheckout, CheckoutService};
use crate::error::AppResult;
use crate::pricing::api::{lenient_number, UsageQuery};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutQuery {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub companies: Option<String>,
    #[serde(flatten)]
    pub usage: UsageQuery,
}

/// key: checkout-api -> redirect to hosted checkout or manual quote
pub async fn create_checkout(
    Extension(service): Extension<Arc<CheckoutService>>,
    Query(query): Query<CheckoutQuery>,
) -> AppResult<Redirect> {
    let kind = query.kind.as_deref().map(str::trim).unwrap_or_default();
    if kind != "calculator" {
        return Err(CheckoutError::UnsupportedType(kind.to_string()).into());
    }

    let companies = match query.companies.as_deref() {
        Some(value) => lenient_number(Some(value)),
        None => 1.0,
    };
    let outcome = service
        .start_calculator_checkout(CalculatorCheckout {
            usage: query.usage.to_raw(),
            companies,
        })
        .await?;

    Ok(Redirect::to(outcome.redirect_url()))
}
