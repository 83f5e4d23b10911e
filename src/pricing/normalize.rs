use serde::{Deserialize, Serialize};

use super::tiers::{MAX_COMPANIES, MAX_INVOICES, MAX_MOVEMENTS, MIN_INVOICES};

/// Usage estimate as delivered by a form or query string, before any coercion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPricingInput {
    pub invoices: f64,
    pub movements: f64,
    pub banking_enabled: bool,
}

impl Default for RawPricingInput {
    fn default() -> Self {
        Self {
            invoices: f64::from(MIN_INVOICES),
            movements: 0.0,
            banking_enabled: false,
        }
    }
}

/// key: pricing-input -> clamped monthly usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingInput {
    pub invoices: u32,
    pub movements: u32,
    pub banking_enabled: bool,
}

impl PricingInput {
    pub fn normalized(self) -> Self {
        normalize_input(self.into())
    }
}

impl From<PricingInput> for RawPricingInput {
    fn from(input: PricingInput) -> Self {
        Self {
            invoices: f64::from(input.invoices),
            movements: f64::from(input.movements),
            banking_enabled: input.banking_enabled,
        }
    }
}

/// Coerces raw usage into the priced domain. Never fails.
pub fn normalize_input(raw: RawPricingInput) -> PricingInput {
    let invoices = clamp_count(raw.invoices, MIN_INVOICES, MAX_INVOICES);
    let movements = if raw.banking_enabled {
        clamp_count(raw.movements, 0, MAX_MOVEMENTS)
    } else {
        0
    };

    PricingInput {
        invoices,
        movements,
        banking_enabled: raw.banking_enabled,
    }
}

/// Companies billed on one subscription, at least one.
pub fn normalize_companies(raw: f64) -> u32 {
    clamp_count(raw, 1, MAX_COMPANIES)
}

/// Floors `value` and clamps it to `[min, max]`; non-finite input yields `min`.
pub(crate) fn clamp_count(value: f64, min: u32, max: u32) -> u32 {
    if !value.is_finite() {
        return min;
    }
    let floored = value.floor();
    if floored <= f64::from(min) {
        min
    } else if floored >= f64::from(max) {
        max
    } else {
        floored as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(invoices: f64, movements: f64, banking_enabled: bool) -> RawPricingInput {
        RawPricingInput {
            invoices,
            movements,
            banking_enabled,
        }
    }

    #[test]
    fn clamps_invoices_into_range() {
        assert_eq!(normalize_input(raw(0.0, 0.0, false)).invoices, 1);
        assert_eq!(normalize_input(raw(-25.0, 0.0, false)).invoices, 1);
        assert_eq!(normalize_input(raw(600.0, 0.0, false)).invoices, 500);
        assert_eq!(normalize_input(raw(42.9, 0.0, false)).invoices, 42);
    }

    #[test]
    fn movements_follow_banking_flag() {
        let enabled = normalize_input(raw(5.0, 1500.0, true));
        assert_eq!(enabled.movements, 1000);
        assert!(enabled.banking_enabled);

        let disabled = normalize_input(raw(5.0, 150.0, false));
        assert_eq!(disabled.movements, 0);
        assert!(!disabled.banking_enabled);

        assert_eq!(normalize_input(raw(5.0, -3.0, true)).movements, 0);
        assert_eq!(normalize_input(raw(5.0, 0.99, true)).movements, 0);
    }

    #[test]
    fn non_finite_values_fall_to_range_minimum() {
        let input = normalize_input(raw(f64::NAN, f64::INFINITY, true));
        assert_eq!(input.invoices, 1);
        assert_eq!(input.movements, 0);

        let input = normalize_input(raw(f64::NEG_INFINITY, f64::NAN, true));
        assert_eq!(input.invoices, 1);
        assert_eq!(input.movements, 0);
    }

    #[test]
    fn companies_default_to_one() {
        assert_eq!(normalize_companies(f64::NAN), 1);
        assert_eq!(normalize_companies(0.0), 1);
        assert_eq!(normalize_companies(3.7), 3);
        assert_eq!(normalize_companies(250.0), MAX_COMPANIES);
    }

    #[test]
    fn normalization_is_idempotent() {
        let samples = [
            raw(f64::NAN, 12.0, true),
            raw(-1.0, -1.0, false),
            raw(10.5, 100.5, true),
            raw(50.0, 200.0, true),
            raw(1e9, 1e9, true),
            raw(1e9, 1e9, false),
            raw(333.3, 777.7, false),
        ];
        for sample in samples {
            let once = normalize_input(sample);
            assert_eq!(once.normalized(), once, "sample {sample:?}");
            assert_eq!(normalize_input(once.into()), once);
        }
    }
}
