//! Reservation API integration tests
//!
//! Tests for POST /api/reservations and GET /api/reservations

use actix_web::{
    http::{StatusCode, header},
    test,
};
use chrono::{Duration, Utc};
use serde_json::{Value, json};

use crate::common::{ADMIN_TOKEN, TestContext, failing_state};

fn valid_submission() -> Value {
    json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "+1 555 0100",
        "company": "Acme Inc.",
        "service_type": "Website Building",
        "message": "We need a new landing page.",
    })
}

/// POST a JSON body to /api/reservations, yielding `(status, body)`
macro_rules! post_reservation {
    ($app:expr, $body:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/reservations")
            .set_json($body)
            .to_request();
        let resp = test::call_service($app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

#[actix_web::test]
async fn test_create_and_list_reservation() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let mut submission = valid_submission();
    let preferred = (Utc::now() + Duration::days(7)).date_naive();
    submission["preferred_date"] = json!(format!("{}T00:00:00.000Z", preferred));
    submission["name"] = json!("  Jane Doe  ");

    let (status, body) = post_reservation!(&app, &submission);
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Reservation created successfully");
    assert_eq!(body["id"], 1);

    let req = test::TestRequest::get().uri("/api/reservations").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Jane Doe");
    assert_eq!(list[0]["status"], "pending");
    assert_eq!(
        list[0]["preferred_date"],
        preferred.format("%Y-%m-%d").to_string()
    );
}

#[actix_web::test]
async fn test_create_reservation_embedded_returns_string_id() {
    let ctx = TestContext::embedded().await;
    let app = init_app!(ctx.state.clone());

    let (status, body) = post_reservation!(&app, &valid_submission());
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[actix_web::test]
async fn test_blank_optional_fields_stored_as_null() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let submission = json!({
        "name": "Sam",
        "email": "sam@example.com",
        "service_type": "AI Automations",
        "phone": "",
        "company": "   ",
        "preferred_date": "",
    });
    let (status, _) = post_reservation!(&app, &submission);
    assert_eq!(status, StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/reservations").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    assert!(list[0]["phone"].is_null());
    assert!(list[0]["company"].is_null());
    assert!(list[0]["message"].is_null());
    assert!(list[0]["preferred_date"].is_null());
}

#[actix_web::test]
async fn test_reservations_listed_newest_first() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    for name in ["First", "Second", "Third"] {
        let mut submission = valid_submission();
        submission["name"] = json!(name);
        let (status, _) = post_reservation!(&app, &submission);
        assert_eq!(status, StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/api/reservations").to_request();
    let list: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Third", "Second", "First"]);
}

#[actix_web::test]
async fn test_create_reservation_validation() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let yesterday = (Utc::now() - Duration::days(1)).date_naive();
    let last_week = (Utc::now() - Duration::days(7)).date_naive();

    let mut cases: Vec<(Value, &str)> = Vec::new();

    let mut missing_name = valid_submission();
    missing_name.as_object_mut().unwrap().remove("name");
    cases.push((missing_name, "Name, email, and service type are required"));

    for field in ["name", "email", "service_type"] {
        let mut null_field = valid_submission();
        null_field[field] = Value::Null;
        cases.push((null_field, "Name, email, and service type are required"));
    }

    let mut blank_service = valid_submission();
    blank_service["service_type"] = json!("   ");
    cases.push((blank_service, "Name, email, and service type are required"));

    let mut bad_email = valid_submission();
    bad_email["email"] = json!("not-an-email");
    cases.push((bad_email, "Valid email is required"));

    let mut long_message = valid_submission();
    long_message["message"] = json!("x".repeat(5001));
    cases.push((long_message, "Message must be at most 5000 characters"));

    let mut bad_date = valid_submission();
    bad_date["preferred_date"] = json!("next tuesday");
    cases.push((bad_date, "Preferred date must be a valid date"));

    let mut past_date = valid_submission();
    past_date["preferred_date"] = json!(last_week.to_string());
    cases.push((past_date, "Preferred date cannot be in the past"));

    for (submission, message) in cases {
        let (status, body) = post_reservation!(&app, &submission);
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", message);
        assert_eq!(body, json!({ "error": message }));
    }

    let mut tolerated = valid_submission();
    tolerated["preferred_date"] = json!(yesterday.to_string());
    let (status, _) = post_reservation!(&app, &tolerated);
    assert_eq!(status, StatusCode::CREATED);
}

#[actix_web::test]
async fn test_create_reservation_malformed_body() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::post()
        .uri("/api/reservations")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{\"name\": \"Jane\",")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request body:")
    );
}

#[actix_web::test]
async fn test_create_reservation_storage_failure() {
    let app = init_app!(failing_state());

    let (status, body) = post_reservation!(&app, &valid_submission());
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create reservation" }));

    let req = test::TestRequest::get().uri("/api/reservations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "error": "Failed to fetch reservations" }));
}

#[actix_web::test]
async fn test_list_reservations_requires_admin_token() {
    let ctx = TestContext::sqlite_with_admin_token().await;
    let app = init_app!(ctx.state.clone());

    // Submitting stays public
    let (status, _) = post_reservation!(&app, &valid_submission());
    assert_eq!(status, StatusCode::CREATED);

    let req = test::TestRequest::get().uri("/api/reservations").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/reservations")
        .insert_header((header::AUTHORIZATION, "Bearer wrong-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/api/reservations")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", ADMIN_TOKEN)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Value = test::read_body_json(resp).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}
