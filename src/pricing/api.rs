use axum::{extract::Query, Json};
use serde::{Deserialize, Serialize};

use super::estimate::{estimate as estimate_price, PriceEstimate};
use super::normalize::RawPricingInput;
use super::tiers::{
    TierBracket, BASE_PRICE_EUR, INCLUDED_INVOICES, INVOICE_TIERS, MAX_COMPANIES, MAX_INVOICES,
    MAX_MOVEMENTS, MOVEMENT_TIERS, PRICING_POLICY_VERSION,
};

/// Usage parameters as they arrive on the query string. Every field is kept as
/// text so malformed values degrade to the range minimum instead of a 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UsageQuery {
    #[serde(default)]
    pub invoices: Option<String>,
    #[serde(default)]
    pub movements: Option<String>,
    #[serde(default, rename = "bankingEnabled")]
    pub banking_enabled: Option<String>,
}

impl UsageQuery {
    pub fn to_raw(&self) -> RawPricingInput {
        RawPricingInput {
            invoices: lenient_number(self.invoices.as_deref()),
            movements: lenient_number(self.movements.as_deref()),
            banking_enabled: lenient_flag(self.banking_enabled.as_deref()),
        }
    }
}

pub(crate) fn lenient_number(value: Option<&str>) -> f64 {
    value
        .and_then(|value| value.trim().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

pub(crate) fn lenient_flag(value: Option<&str>) -> bool {
    value
        .map(|value| {
            let normalized = value.trim().to_ascii_lowercase();
            matches!(normalized.as_str(), "1" | "true" | "yes" | "on")
        })
        .unwrap_or(false)
}

/// key: pricing-api -> estimate endpoint
pub async fn estimate(Query(query): Query<UsageQuery>) -> Json<PriceEstimate> {
    let raw = query.to_raw();
    let estimate = estimate_price(raw);
    tracing::debug!(
        invoices = estimate.input.invoices,
        movements = estimate.input.movements,
        banking_enabled = estimate.input.banking_enabled,
        total = estimate.breakdown.total,
        "priced calculator input"
    );
    Json(estimate)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierCatalogResponse {
    pub policy_version: &'static str,
    pub currency: &'static str,
    pub base_price: u32,
    pub included_invoices: u32,
    pub max_invoices: u32,
    pub max_movements: u32,
    pub max_companies: u32,
    pub invoice_tiers: Vec<TierEntry>,
    pub movement_tiers: Vec<TierEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierEntry {
    #[serde(flatten)]
    pub bracket: TierBracket,
    pub label: String,
}

impl From<&TierBracket> for TierEntry {
    fn from(bracket: &TierBracket) -> Self {
        Self {
            bracket: *bracket,
            label: bracket.key.label(),
        }
    }
}

pub async fn list_tiers() -> Json<TierCatalogResponse> {
    Json(TierCatalogResponse {
        policy_version: PRICING_POLICY_VERSION,
        currency: "EUR",
        base_price: BASE_PRICE_EUR,
        included_invoices: INCLUDED_INVOICES,
        max_invoices: MAX_INVOICES,
        max_movements: MAX_MOVEMENTS,
        max_companies: MAX_COMPANIES,
        invoice_tiers: INVOICE_TIERS.iter().map(TierEntry::from).collect(),
        movement_tiers: MOVEMENT_TIERS.iter().map(TierEntry::from).collect(),
    })
}
