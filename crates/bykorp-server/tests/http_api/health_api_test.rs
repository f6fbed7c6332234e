//! Health endpoint integration tests

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use crate::common::{TestContext, failing_state};

#[actix_web::test]
async fn test_health_sqlite() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({
            "status": "OK",
            "message": "Bykorp API Server with SQLite is running"
        })
    );
}

#[actix_web::test]
async fn test_health_embedded() {
    let ctx = TestContext::embedded().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        body["message"],
        "Bykorp API Server with embedded RocksDB is running"
    );
}

#[actix_web::test]
async fn test_health_reports_storage_outage() {
    let app = init_app!(failing_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "DOWN");
}
