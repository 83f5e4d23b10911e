//! Tiered pricing for the invoicing plan: static tier tables, input
//! normalization, tier resolution, and the price estimator.

pub mod api;
pub mod calculator;
pub mod estimate;
pub mod normalize;
pub mod resolver;
pub mod tiers;

pub use calculator::PricingCalculator;
pub use estimate::{estimate, estimate_breakdown, estimate_net_eur, PriceBreakdown, PriceEstimate};
pub use normalize::{normalize_companies, normalize_input, PricingInput, RawPricingInput};
pub use resolver::{invoice_tier_key, movement_tier_key};
pub use tiers::{
    TierBracket, TierKey, UsageDimension, BASE_PRICE_EUR, INCLUDED_INVOICES, INVOICE_TIERS,
    MAX_COMPANIES, MAX_INVOICES, MAX_MOVEMENTS, MIN_INVOICES, MOVEMENT_TIERS,
    PRICING_POLICY_VERSION,
};
