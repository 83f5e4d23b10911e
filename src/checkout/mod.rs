//! Calculator checkout: maps priced usage onto provider line items and opens a
//! hosted subscription checkout.

pub mod api;
pub mod catalog;
pub mod error;
pub mod line_items;
pub mod provider;
pub mod service;

pub use api::{create_checkout, CheckoutQuery};
pub use catalog::{PriceCatalog, PriceId, PriceSlot};
pub use error::CheckoutError;
pub use line_items::{build_line_items, exceeds_self_serve, LineItem};
pub use provider::{
    CheckoutProvider, CheckoutSession, CheckoutSessionRequest, StripeCheckoutClient,
    TRIAL_PERIOD_DAYS,
};
pub use service::{CalculatorCheckout, CheckoutOutcome, CheckoutService, CheckoutUrls};
