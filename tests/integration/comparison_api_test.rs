/// Integration tests for the comparison endpoints
///
/// Runs the real routes in-process with `actix_web::test`:
/// - POST /v1/comparisons computes and renders a comparison from FIRA figures
/// - POST /v1/comparisons/rescale rescales an existing comparison
/// - malformed input comes back as a JSON error body
use actix_web::{test, App};
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use fira_compare::app::configure_app;
use fira_compare::comparisons::models::ComparisonResult;
use fira_compare::comparisons::ComparisonView;
use fira_compare::middleware::RequestId;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::TestDataFactory;

#[derive(serde::Deserialize)]
struct ComparisonBody {
    comparison: ComparisonResult,
    display: ComparisonView,
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["processor"], "mock");
}

#[actix_web::test]
async fn test_create_comparison_from_fira_figures() {
    let app = test::init_service(
        App::new()
            .wrap(RequestId)
            .configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(TestDataFactory::fira_payload())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert!(resp.headers().contains_key("x-request-id"));

    let body: ComparisonBody = test::read_body_json(resp).await;
    assert_eq!(body.comparison.savings_amount, dec!(4700));
    assert_eq!(body.comparison.baseline_amount_received, dec!(421100));
    assert_eq!(body.display.headline, "You could save ₹4,700 with Skydo");
    assert_eq!(body.display.subheadline, "That's 1.1% less than your current provider");
    assert_eq!(body.display.baseline.amount_received, "₹4,21,100");
    assert_eq!(body.display.baseline.charges[0].display, "1.05%");
    assert_eq!(body.display.challenger.charges[1].display, "FREE");
}

#[actix_web::test]
async fn test_create_comparison_missing_field() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let mut payload = TestDataFactory::fira_payload();
    payload.as_object_mut().unwrap().remove("inrAmount");

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_create_comparison_malformed_json() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_rescale_comparison() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(TestDataFactory::fira_payload())
        .to_request();
    let created: ComparisonBody = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons/rescale")
        .set_json(json!({
            "comparison": created.comparison,
            "newTransactionAmount": 851900
        }))
        .to_request();
    let rescaled: ComparisonBody = test::call_and_read_body_json(&app, req).await;

    assert_eq!(rescaled.comparison.transaction_amount, dec!(851900));
    assert_eq!(rescaled.comparison.baseline.total_fee_on_transaction, dec!(9700));
    assert_eq!(rescaled.comparison.savings_amount, dec!(9400));
    assert_eq!(
        rescaled.comparison.baseline.effective_cost_percent,
        created.comparison.baseline.effective_cost_percent
    );
    assert_eq!(rescaled.comparison.source.unwrap().amount, dec!(10000));
    assert_eq!(rescaled.display.headline, "You could save ₹9,400 with Skydo");
}

#[actix_web::test]
async fn test_rescale_from_zero_amount_is_rejected() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(TestDataFactory::fira_payload())
        .to_request();
    let mut created: ComparisonBody = test::call_and_read_body_json(&app, req).await;
    created.comparison.transaction_amount = rust_decimal::Decimal::ZERO;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons/rescale")
        .set_json(json!({
            "comparison": created.comparison,
            "newTransactionAmount": 1000.0
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "DIVISION_BY_ZERO");
}

#[actix_web::test]
async fn test_out_of_range_figures_are_rejected() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    // Current provider keeps 1e-23 rupees, so the savings percentage overflows
    let mut payload = TestDataFactory::fira_payload();
    payload["platformFxFee"] = json!(4500);
    payload["inrAmount"] = json!("9350.00000000000000000000001");

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

#[actix_web::test]
async fn test_rescale_rejects_tampered_comparison() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(TestDataFactory::fira_payload())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    let mut negative = created["comparison"].clone();
    negative["baseline"]["totalFeeOnTransaction"] = json!("-5000");
    negative["baseline"]["grossAmount"] = json!("-1");

    let mut mismatched = created["comparison"].clone();
    mismatched["challenger"]["totalFeeOnTransaction"] = json!("1");

    for comparison in [negative, mismatched] {
        let req = test::TestRequest::post()
            .uri("/v1/comparisons/rescale")
            .set_json(json!({
                "comparison": comparison,
                "newTransactionAmount": 851900
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }
}

#[actix_web::test]
async fn test_rescale_rejects_negative_amount() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons")
        .set_json(TestDataFactory::fira_payload())
        .to_request();
    let created: ComparisonBody = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/v1/comparisons/rescale")
        .set_json(json!({
            "comparison": created.comparison,
            "newTransactionAmount": "-1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
