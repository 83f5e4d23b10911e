use std::sync::Arc;

use url::Url;

use super::catalog::PriceCatalog;
use super::error::CheckoutError;
use super::line_items::{build_line_items, exceeds_self_serve};
use super::provider::{CheckoutProvider, CheckoutSessionRequest, TRIAL_PERIOD_DAYS};
use crate::pricing::{
    normalize_companies, normalize_input, RawPricingInput, PRICING_POLICY_VERSION,
};

/// Redirect targets handed to the provider and used for manual quotes.
#[derive(Debug, Clone)]
pub struct CheckoutUrls {
    pub success_url: Url,
    pub cancel_url: Url,
    pub quote_url: Url,
}

/// A calculator checkout as requested by the browser, before normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorCheckout {
    pub usage: RawPricingInput,
    pub companies: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Hosted checkout created; redirect the browser to `url`.
    Session { id: String, url: String },
    /// Usage is beyond self-serve tiers; redirect to the quote form.
    ManualQuote { url: String },
}

impl CheckoutOutcome {
    pub fn redirect_url(&self) -> &str {
        match self {
            CheckoutOutcome::Session { url, .. } | CheckoutOutcome::ManualQuote { url } => url,
        }
    }
}

/// key: checkout-service -> quote routing, line items, provider session
pub struct CheckoutService {
    catalog: PriceCatalog,
    provider: Arc<dyn CheckoutProvider>,
    urls: CheckoutUrls,
}

impl CheckoutService {
    pub fn new(catalog: PriceCatalog, provider: Arc<dyn CheckoutProvider>, urls: CheckoutUrls) -> Self {
        Self {
            catalog,
            provider,
            urls,
        }
    }

    pub async fn start_calculator_checkout(
        &self,
        request: CalculatorCheckout,
    ) -> Result<CheckoutOutcome, CheckoutError> {
        if exceeds_self_serve(&request.usage, request.companies) {
            let url = self.quote_url(&request);
            tracing::info!(
                invoices = request.usage.invoices,
                movements = request.usage.movements,
                companies = request.companies,
                "usage exceeds self-serve tiers; routing to manual quote"
            );
            return Ok(CheckoutOutcome::ManualQuote { url });
        }

        let input = normalize_input(request.usage);
        let companies = normalize_companies(request.companies);
        let line_items = build_line_items(&self.catalog, companies, &input)?;

        let session = self
            .provider
            .create_session(&CheckoutSessionRequest {
                line_items,
                trial_period_days: TRIAL_PERIOD_DAYS,
                success_url: self.urls.success_url.to_string(),
                cancel_url: self.urls.cancel_url.to_string(),
                metadata: vec![
                    ("pricing_policy".to_string(), PRICING_POLICY_VERSION.to_string()),
                    ("companies".to_string(), companies.to_string()),
                    ("invoices".to_string(), input.invoices.to_string()),
                    ("movements".to_string(), input.movements.to_string()),
                    (
                        "banking_enabled".to_string(),
                        input.banking_enabled.to_string(),
                    ),
                ],
            })
            .await
            .map_err(|err| {
                tracing::error!(error = %format!("{err:#}"), "checkout session creation failed");
                CheckoutError::Provider(err)
            })?;

        tracing::info!(
            session_id = %session.id,
            invoices = input.invoices,
            movements = input.movements,
            companies,
            "created checkout session"
        );
        Ok(CheckoutOutcome::Session {
            id: session.id,
            url: session.url,
        })
    }

    fn quote_url(&self, request: &CalculatorCheckout) -> String {
        let mut url = self.urls.quote_url.clone();
        url.query_pairs_mut()
            .append_pair("invoices", &whole(request.usage.invoices))
            .append_pair("movements", &whole(request.usage.movements))
            .append_pair("companies", &whole(request.companies))
            .append_pair(
                "bankingEnabled",
                if request.usage.banking_enabled { "true" } else { "false" },
            );
        url.to_string()
    }
}

fn whole(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value.floor().max(0.0) as u64)
    } else {
        "0".to_string()
    }
}
