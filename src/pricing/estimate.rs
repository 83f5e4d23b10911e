use serde::Serialize;

use super::normalize::{normalize_input, PricingInput, RawPricingInput};
use super::resolver::{invoice_tier_key, movement_tier_key};
use super::tiers::{TierKey, BASE_PRICE_EUR};

/// Monthly price split into plan floor and per-dimension add-ons, in whole EUR.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub base: u32,
    pub invoice_addon: u32,
    pub movement_addon: u32,
    pub total: u32,
}

/// key: pricing-estimate -> normalized input, resolved tiers, breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    pub input: PricingInput,
    pub invoice_tier: Option<TierKey>,
    pub movement_tier: Option<TierKey>,
    pub breakdown: PriceBreakdown,
}

pub fn estimate(input: impl Into<RawPricingInput>) -> PriceEstimate {
    let input = normalize_input(input.into());
    let invoice_tier = invoice_tier_key(input.invoices);
    let movement_tier = movement_tier_key(input.movements);

    let invoice_addon = invoice_tier.map(|key| key.addon_eur()).unwrap_or(0);
    let movement_addon = movement_tier.map(|key| key.addon_eur()).unwrap_or(0);

    PriceEstimate {
        input,
        invoice_tier,
        movement_tier,
        breakdown: PriceBreakdown {
            base: BASE_PRICE_EUR,
            invoice_addon,
            movement_addon,
            total: BASE_PRICE_EUR + invoice_addon + movement_addon,
        },
    }
}

pub fn estimate_breakdown(input: impl Into<RawPricingInput>) -> PriceBreakdown {
    estimate(input).breakdown
}

pub fn estimate_net_eur(input: impl Into<RawPricingInput>) -> u32 {
    estimate_breakdown(input).total
}
