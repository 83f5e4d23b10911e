use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::line_items::LineItem;

/// Trial granted on every self-serve subscription.
pub const TRIAL_PERIOD_DAYS: u32 = 30;

/// Everything the provider needs to open a hosted subscription checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutSessionRequest {
    pub line_items: Vec<LineItem>,
    pub trial_period_days: u32,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: Vec<(String, String)>,
}

impl CheckoutSessionRequest {
    /// Form body in the provider's bracketed-key encoding.
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("mode".to_string(), "subscription".to_string()),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
            (
                "subscription_data[trial_period_days]".to_string(),
                self.trial_period_days.to_string(),
            ),
        ];
        for (index, item) in self.line_items.iter().enumerate() {
            fields.push((
                format!("line_items[{index}][price]"),
                item.price.as_str().to_string(),
            ));
            fields.push((
                format!("line_items[{index}][quantity]"),
                item.quantity.to_string(),
            ));
        }
        for (key, value) in &self.metadata {
            fields.push((format!("metadata[{key}]"), value.clone()));
            fields.push((format!("subscription_data[metadata][{key}]"), value.clone()));
        }
        fields
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub url: String,
}

/// key: checkout-provider -> hosted subscription checkout
#[async_trait]
pub trait CheckoutProvider: Send + Sync {
    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession>;
}

#[derive(Clone)]
pub struct StripeCheckoutClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
    #[serde(default)]
    url: Option<String>,
}

impl StripeCheckoutClient {
    pub fn new(base_url: impl Into<String>, secret_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("failed to build payment provider client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            secret_key: secret_key.into(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CheckoutProvider for StripeCheckoutClient {
    async fn create_session(&self, request: &CheckoutSessionRequest) -> Result<CheckoutSession> {
        let response = self
            .client
            .post(self.endpoint("v1/checkout/sessions"))
            .bearer_auth(&self.secret_key)
            .form(&request.form_fields())
            .send()
            .await
            .context("failed to contact payment provider")?
            .error_for_status()
            .context("payment provider rejected checkout session")?;

        let parsed: StripeSessionResponse = response
            .json()
            .await
            .context("failed to decode checkout session")?;

        let url = parsed
            .url
            .filter(|url| !url.is_empty())
            .ok_or_else(|| anyhow!("checkout session {} has no hosted url", parsed.id))?;

        Ok(CheckoutSession { id: parsed.id, url })
    }
}
