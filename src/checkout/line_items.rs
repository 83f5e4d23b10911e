use serde::Serialize;

use super::catalog::{PriceCatalog, PriceId, PriceSlot};
use super::error::CheckoutError;
use crate::pricing::{
    invoice_tier_key, movement_tier_key, PricingInput, RawPricingInput, MAX_COMPANIES,
    MAX_INVOICES, MAX_MOVEMENTS,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub price: PriceId,
    pub quantity: u32,
}

impl LineItem {
    fn new(price: &PriceId, quantity: u32) -> Self {
        Self {
            price: price.clone(),
            quantity,
        }
    }
}

/// True when requested usage is beyond every self-serve tier and needs a manual quote.
pub fn exceeds_self_serve(usage: &RawPricingInput, companies: f64) -> bool {
    above(usage.invoices, MAX_INVOICES)
        || (usage.banking_enabled && above(usage.movements, MAX_MOVEMENTS))
        || above(companies, MAX_COMPANIES)
}

fn above(value: f64, ceiling: u32) -> bool {
    value.is_finite() && value.floor() > f64::from(ceiling)
}

/// key: checkout-line-items -> base, seats, invoice tier, movement tier
pub fn build_line_items(
    catalog: &PriceCatalog,
    companies: u32,
    input: &PricingInput,
) -> Result<Vec<LineItem>, CheckoutError> {
    let mut items = vec![LineItem::new(catalog.price(PriceSlot::Base)?, 1)];

    let extra_companies = companies.saturating_sub(1);
    if extra_companies > 0 {
        items.push(LineItem::new(
            catalog.price(PriceSlot::Seat)?,
            extra_companies,
        ));
    }

    if let Some(key) = invoice_tier_key(input.invoices) {
        items.push(LineItem::new(catalog.price(PriceSlot::Tier(key))?, 1));
    }

    if input.banking_enabled {
        if let Some(key) = movement_tier_key(input.movements) {
            items.push(LineItem::new(catalog.price(PriceSlot::Tier(key))?, 1));
        }
    }

    Ok(items)
}
