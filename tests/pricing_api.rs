use axum::body::Body;
use axum::http::{Request, StatusCode};
use pricing_backend::routes::api_routes;
use serde_json::Value;
use tower::ServiceExt;

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = api_routes()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

// key: pricing-tests -> estimate endpoint scenarios
#[tokio::test]
async fn estimate_prices_movements_when_banking_enabled() {
    let (status, body) =
        get_json("/api/pricing/estimate?invoices=10&movements=150&bankingEnabled=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"]["invoices"], 10);
    assert_eq!(body["input"]["movements"], 150);
    assert_eq!(body["invoiceTier"], Value::Null);
    assert_eq!(body["movementTier"], "movements_101_200");
    assert_eq!(body["breakdown"]["base"], 19);
    assert_eq!(body["breakdown"]["invoiceAddon"], 0);
    assert_eq!(body["breakdown"]["movementAddon"], 5);
    assert_eq!(body["breakdown"]["total"], 24);
}

#[tokio::test]
async fn estimate_ignores_movements_without_banking() {
    let (status, body) =
        get_json("/api/pricing/estimate?invoices=30&movements=900&bankingEnabled=false").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"]["movements"], 0);
    assert_eq!(body["invoiceTier"], "invoices_11_50");
    assert_eq!(body["breakdown"]["total"], 23);
}

#[tokio::test]
async fn estimate_coerces_garbage_input() {
    let (status, body) = get_json("/api/pricing/estimate?invoices=abc&movements=-5").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"]["invoices"], 1);
    assert_eq!(body["input"]["bankingEnabled"], false);
    assert_eq!(body["breakdown"]["total"], 19);

    let (_, body) = get_json("/api/pricing/estimate?invoices=600").await;
    assert_eq!(body["input"]["invoices"], 500);
    assert_eq!(body["invoiceTier"], "invoices_201_500");
}

#[tokio::test]
async fn tiers_endpoint_lists_both_tables() {
    let (status, body) = get_json("/api/pricing/tiers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["currency"], "EUR");
    assert_eq!(body["basePrice"], 19);
    assert_eq!(body["includedInvoices"], 10);

    let invoice_tiers = body["invoiceTiers"].as_array().unwrap();
    assert_eq!(invoice_tiers.len(), 3);
    assert_eq!(invoice_tiers[0]["key"], "invoices_11_50");
    assert_eq!(invoice_tiers[0]["lower"], 11);
    assert_eq!(invoice_tiers[0]["upper"], 50);
    assert_eq!(invoice_tiers[0]["addonEur"], 4);
    assert_eq!(invoice_tiers[0]["label"], "11–50 invoices/month");

    let movement_tiers = body["movementTiers"].as_array().unwrap();
    assert_eq!(movement_tiers.len(), 4);
    assert_eq!(movement_tiers[3]["upper"], 1000);
}
