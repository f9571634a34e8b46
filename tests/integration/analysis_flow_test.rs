/// Integration tests for the document analysis flow
///
/// Tests:
/// - upload → mock processor → comparison (POST /v1/fira/analyze)
/// - upload validation (type, size, missing parameters)
/// - the HTTP processor against a local stand-in for the extraction API
use actix_web::{test, web, App, HttpResponse, HttpServer};
use rust_decimal_macros::dec;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use fira_compare::app::{configure_app, AppState};
use fira_compare::config::{DisplayConfig, FiraConfig};
use fira_compare::fira::services::HttpFiraProcessor;

#[path = "../helpers/mod.rs"]
mod helpers;
use helpers::TestDataFactory;

#[actix_web::test]
async fn test_analyze_pdf_with_mock_processor() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=fira-may.pdf&paymentMethod=wire&importerId=7")
        .insert_header(("content-type", "application/pdf"))
        .set_payload("%PDF-1.7 sample")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["processor"], "mock");
    assert!(body["analysisId"].as_str().is_some());
    assert_eq!(body["display"]["headline"], "You could save ₹4,700 with Skydo");
    assert_eq!(body["display"]["challenger"]["amountReceived"], "₹4,25,800");
    assert_eq!(body["comparison"]["source"]["currency"], "USD");
}

#[actix_web::test]
async fn test_analyze_rejects_unsupported_document() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=scan.png")
        .insert_header(("content-type", "image/png"))
        .set_payload("png bytes")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 415);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNSUPPORTED_DOCUMENT");
}

#[actix_web::test]
async fn test_analyze_rejects_empty_document() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=fira.pdf")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 415);
}

#[actix_web::test]
async fn test_analyze_rejects_oversized_document() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state_with_limit(8))),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=fira.pdf")
        .set_payload(vec![b'x'; 64])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 415);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "UNSUPPORTED_DOCUMENT");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("8 byte limit"));
}

#[actix_web::test]
async fn test_analyze_requires_file_name() {
    let app = test::init_service(
        App::new().configure(configure_app(TestDataFactory::app_state())),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?paymentMethod=wire")
        .set_payload("%PDF")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "INVALID_INPUT");
}

/// Stand-in for the external extraction API
async fn fake_process(query: web::Query<HashMap<String, String>>, body: web::Bytes) -> HttpResponse {
    match query.get("fileName").map(String::as_str) {
        Some("broken.pdf") => HttpResponse::Ok().json(json!({
            "success": false,
            "message": "Could not read document",
            "firaData": null,
            "processingTimeMs": 5,
            "errors": ["value date not found"]
        })),
        Some("outage.pdf") => HttpResponse::InternalServerError().finish(),
        _ if body.is_empty() || query.get("paymentMethod").is_none() => {
            HttpResponse::BadRequest().finish()
        }
        _ => HttpResponse::Ok().json(json!({
            "success": true,
            "message": "processed",
            "firaData": TestDataFactory::fira_payload(),
            "processingTimeMs": 5,
            "errors": []
        })),
    }
}

async fn app_with_http_processor() -> (web::Data<AppState>, actix_web::dev::ServerHandle) {
    let server = HttpServer::new(|| App::new().route("/fira/process", web::post().to(fake_process)))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let processor =
        HttpFiraProcessor::new(format!("http://{}", addr), Duration::from_secs(5)).unwrap();
    let state = web::Data::new(AppState::new(
        Arc::new(processor),
        DisplayConfig::default(),
        &FiraConfig::default(),
    ));

    (state, handle)
}

#[actix_web::test]
async fn test_http_processor_round_trip() {
    let (state, handle) = app_with_http_processor().await;
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=fira.xlsx&paymentMethod=wire")
        .set_payload("workbook")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["processor"], "http");
    assert_eq!(body["display"]["baseline"]["amountReceived"], "₹4,21,100");

    let comparison: fira_compare::comparisons::ComparisonResult =
        serde_json::from_value(body["comparison"].clone()).unwrap();
    assert_eq!(comparison.savings_amount, dec!(4700));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_http_processor_unreadable_document() {
    let (state, handle) = app_with_http_processor().await;
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=broken.pdf")
        .set_payload("%PDF")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], "PROCESSING_FAILED");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("value date not found"));

    handle.stop(true).await;
}

#[actix_web::test]
async fn test_http_processor_upstream_error() {
    let (state, handle) = app_with_http_processor().await;
    let app = test::init_service(App::new().configure(configure_app(state))).await;

    let req = test::TestRequest::post()
        .uri("/v1/fira/analyze?fileName=outage.pdf")
        .set_payload("%PDF")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    handle.stop(true).await;
}
