use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use axum_prometheus::PrometheusMetricLayer;
use pricing_backend::checkout::{CheckoutService, StripeCheckoutClient};
use pricing_backend::config;
use pricing_backend::routes::{api_routes, not_found, root};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    dotenvy::dotenv().ok();
    // Fail fast if any price identifier or redirect target is missing
    let catalog = config::price_catalog_from_env().map_err(|error| {
        tracing::error!(%error, "price catalog is incomplete");
        error
    })?;
    let urls = config::checkout_urls_from_env()?;
    let secret_key = config::stripe_secret_key()?;
    let provider = Arc::new(StripeCheckoutClient::new(
        config::STRIPE_API_BASE.as_str(),
        secret_key,
    )?);
    let checkout = Arc::new(CheckoutService::new(catalog, provider, urls));

    let (prometheus_layer, metrics_handle) = PrometheusMetricLayer::pair();
    let app = Router::new()
        .route("/", get(root))
        .route(
            "/metrics",
            get(move || async move { metrics_handle.render() }),
        )
        .merge(api_routes())
        .fallback(not_found)
        .layer(prometheus_layer)
        .layer(Extension(checkout));

    let addr: SocketAddr = format!("{}:{}", config::BIND_ADDRESS.as_str(), *config::BIND_PORT)
        .parse()
        .map_err(|error| Box::new(error) as Box<dyn std::error::Error>)?;
    tracing::info!(%addr, "Listening for incoming connections");
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
