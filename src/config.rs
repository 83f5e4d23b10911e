use once_cell::sync::Lazy;
use thiserror::Error;
use url::Url;

use crate::checkout::{CheckoutUrls, PriceCatalog};

/// Address the HTTP server should bind to. Defaults to `0.0.0.0`.
pub static BIND_ADDRESS: Lazy<String> =
    Lazy::new(|| std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()));

/// Port the HTTP server should listen on. Defaults to `3000`.
pub static BIND_PORT: Lazy<u16> = Lazy::new(|| {
    std::env::var("BIND_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(3000)
});

/// Base URL of the billing provider API. Defaults to Stripe's public endpoint.
pub static STRIPE_API_BASE: Lazy<String> = Lazy::new(|| {
    read_optional_env("STRIPE_API_BASE").unwrap_or_else(|| "https://api.stripe.com".to_string())
});

/// Public origin of the web app; redirect targets default to paths below it.
pub static APP_BASE_URL: Lazy<String> = Lazy::new(|| {
    read_optional_env("APP_BASE_URL")
        .map(|value| value.trim_end_matches('/').to_string())
        .unwrap_or_else(|| "http://localhost:3000".to_string())
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing price identifiers: {}", .0.join(", "))]
    MissingPriceIds(Vec<String>),
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
}

pub(crate) fn read_optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Secret key presented to the billing provider. Required.
pub fn stripe_secret_key() -> Result<String, ConfigError> {
    read_optional_env("STRIPE_SECRET_KEY").ok_or(ConfigError::Missing("STRIPE_SECRET_KEY"))
}

/// key: billing-config -> price identifiers validated at boot
pub fn price_catalog_from_env() -> Result<PriceCatalog, ConfigError> {
    PriceCatalog::from_lookup(read_optional_env)
}

pub fn checkout_urls_from_env() -> Result<CheckoutUrls, ConfigError> {
    let base = APP_BASE_URL.as_str();
    Ok(CheckoutUrls {
        success_url: read_url(
            "CHECKOUT_SUCCESS_URL",
            format!("{base}/billing/success?session_id={{CHECKOUT_SESSION_ID}}"),
        )?,
        cancel_url: read_url("CHECKOUT_CANCEL_URL", format!("{base}/pricing"))?,
        quote_url: read_url("CHECKOUT_QUOTE_URL", format!("{base}/contact?topic=quote"))?,
    })
}

fn read_url(var: &'static str, default_value: String) -> Result<Url, ConfigError> {
    let value = read_optional_env(var).unwrap_or(default_value);
    Url::parse(&value).map_err(|err| ConfigError::InvalidUrl {
        var,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_price_ids_are_listed() {
        let err = ConfigError::MissingPriceIds(vec![
            "STRIPE_PRICE_BASE".to_string(),
            "STRIPE_PRICE_SEAT".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "missing price identifiers: STRIPE_PRICE_BASE, STRIPE_PRICE_SEAT"
        );
    }

    #[test]
    fn invalid_redirect_url_is_rejected() {
        std::env::set_var("CHECKOUT_CANCEL_URL", "not a url");
        let result = checkout_urls_from_env();
        std::env::remove_var("CHECKOUT_CANCEL_URL");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl {
                var: "CHECKOUT_CANCEL_URL",
                ..
            })
        ));
    }
}
