use std::collections::HashMap;

use serde::Serialize;

use super::error::CheckoutError;
use crate::config::ConfigError;
use crate::pricing::TierKey;

/// Identifier of a recurring price at the billing provider (`price_...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PriceId(String);

impl PriceId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Every billable line a calculator checkout can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSlot {
    Base,
    Seat,
    Tier(TierKey),
}

impl PriceSlot {
    pub fn all() -> impl Iterator<Item = PriceSlot> {
        [PriceSlot::Base, PriceSlot::Seat]
            .into_iter()
            .chain(TierKey::ALL.into_iter().map(PriceSlot::Tier))
    }

    /// Environment variable that carries this slot's price identifier.
    pub fn env_var(&self) -> String {
        match self {
            PriceSlot::Base => "STRIPE_PRICE_BASE".to_string(),
            PriceSlot::Seat => "STRIPE_PRICE_SEAT".to_string(),
            PriceSlot::Tier(key) => format!("STRIPE_PRICE_{}", key.as_str().to_ascii_uppercase()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PriceSlot::Base => "base",
            PriceSlot::Seat => "seat",
            PriceSlot::Tier(key) => key.as_str(),
        }
    }
}

impl std::fmt::Display for PriceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// key: checkout-catalog -> slot to provider price mapping
#[derive(Debug, Clone, Default)]
pub struct PriceCatalog {
    prices: HashMap<PriceSlot, PriceId>,
}

impl PriceCatalog {
    /// Builds a complete catalog, reporting every missing identifier at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut prices = HashMap::new();
        let mut missing = Vec::new();
        for slot in PriceSlot::all() {
            let var = slot.env_var();
            match lookup(&var) {
                Some(value) if !value.trim().is_empty() => {
                    prices.insert(slot, PriceId::new(value.trim()));
                }
                _ => missing.push(var),
            }
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingPriceIds(missing));
        }
        Ok(Self { prices })
    }

    pub fn with_price(mut self, slot: PriceSlot, price: impl Into<String>) -> Self {
        self.prices.insert(slot, PriceId::new(price));
        self
    }

    pub fn price(&self, slot: PriceSlot) -> Result<&PriceId, CheckoutError> {
        self.prices
            .get(&slot)
            .ok_or(CheckoutError::MissingPrice { slot })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
