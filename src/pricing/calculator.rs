use url::form_urlencoded;

use super::estimate::{estimate, PriceBreakdown, PriceEstimate};
use super::normalize::{normalize_companies, RawPricingInput};

/// Form state behind the pricing calculator. Holds raw values exactly as entered
/// and prices them on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingCalculator {
    usage: RawPricingInput,
    companies: f64,
}

impl Default for PricingCalculator {
    fn default() -> Self {
        Self {
            usage: RawPricingInput::default(),
            companies: 1.0,
        }
    }
}

impl PricingCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_invoices(&mut self, invoices: f64) -> &mut Self {
        self.usage.invoices = invoices;
        self
    }

    pub fn set_movements(&mut self, movements: f64) -> &mut Self {
        self.usage.movements = movements;
        self
    }

    pub fn set_banking_enabled(&mut self, enabled: bool) -> &mut Self {
        self.usage.banking_enabled = enabled;
        self
    }

    pub fn set_companies(&mut self, companies: f64) -> &mut Self {
        self.companies = companies;
        self
    }

    pub fn usage(&self) -> RawPricingInput {
        self.usage
    }

    pub fn companies(&self) -> u32 {
        normalize_companies(self.companies)
    }

    pub fn estimate(&self) -> PriceEstimate {
        estimate(self.usage)
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        self.estimate().breakdown
    }

    /// Link followed by the calculator's subscribe action. Counts are floored but
    /// not clamped so the checkout endpoint can route oversized usage to a quote.
    pub fn checkout_path(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("type", "calculator")
            .append_pair("companies", &query_count(self.companies))
            .append_pair("invoices", &query_count(self.usage.invoices))
            .append_pair("movements", &query_count(self.usage.movements))
            .append_pair(
                "bankingEnabled",
                if self.usage.banking_enabled { "true" } else { "false" },
            )
            .finish();
        format!("/api/checkout?{query}")
    }
}

fn query_count(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.floor() as i64)
    } else {
        String::new()
    }
}
