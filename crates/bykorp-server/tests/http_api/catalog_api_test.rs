//! Catalogue API integration tests
//!
//! Tests for /api/services, /api/portfolio and /api/reviews

use actix_web::{
    http::{StatusCode, header},
    test,
};
use serde_json::Value;

use crate::common::{TestContext, failing_state};

#[actix_web::test]
async fn test_list_services() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/api/services").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 4);
    assert_eq!(services[0]["id"], 1);
    assert_eq!(services[0]["name"], "Digital Marketing (Meta Ads)");
    assert_eq!(
        services[0]["features"],
        "Campaign Strategy,Ad Creation,Audience Targeting,Performance Analytics,Monthly Reports"
    );
    assert_eq!(services[3]["name"], "AI Automations");
    assert!(services.iter().all(|s| s["is_active"] == true));
    assert!(services[0]["created_at"].as_str().unwrap().ends_with('Z'));
}

#[actix_web::test]
async fn test_list_services_from_embedded_store() {
    let ctx = TestContext::embedded().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/api/services").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let services = body.as_array().unwrap();

    assert_eq!(services.len(), 4);
    assert!(services[0]["id"].is_string());
    assert_eq!(
        services[1]["features"],
        "Content Creation, Post Scheduling, Community Management, Analytics, Brand Voice Development"
    );
}

#[actix_web::test]
async fn test_list_portfolio_ordering() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    for uri in ["/api/portfolio", "/api/portfolio/featured"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let titles: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|item| item["title"].as_str().unwrap())
            .collect();

        assert_eq!(
            titles,
            vec![
                "SaaS Platform Website",
                "E-commerce Growth Campaign",
                "Brand Social Media Transformation",
                "Customer Service AI Bot",
            ],
            "unexpected order for {}",
            uri
        );
    }

    let req = test::TestRequest::get().uri("/api/portfolio").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["completion_date"], "2024-09-10");
    assert_eq!(body[0]["technologies"], "React,Tailwind,TypeScript,Cloudflare");
    assert!(body[0]["image_url"].is_null());
}

#[actix_web::test]
async fn test_list_reviews() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/api/reviews").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.as_array().unwrap().len(), 6);

    let req = test::TestRequest::get()
        .uri("/api/reviews/featured")
        .to_request();
    let featured: Value = test::call_and_read_body_json(&app, req).await;
    let featured = featured.as_array().unwrap();
    assert_eq!(featured.len(), 6);
    assert!(featured.iter().all(|r| r["is_featured"] == true));
    assert!(featured.iter().all(|r| r["rating"] == 5));
}

#[actix_web::test]
async fn test_catalogue_storage_failures() {
    let app = init_app!(failing_state());

    let cases = [
        ("/api/services", "Failed to fetch services"),
        ("/api/portfolio", "Failed to fetch portfolio items"),
        (
            "/api/portfolio/featured",
            "Failed to fetch featured portfolio items",
        ),
        ("/api/reviews", "Failed to fetch reviews"),
        ("/api/reviews/featured", "Failed to fetch featured reviews"),
    ];

    for (uri, message) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, serde_json::json!({ "error": message }));
    }
}

#[actix_web::test]
async fn test_cors_preflight() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/reservations")
        .insert_header((header::ORIGIN, "https://bykorp.com"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
}

#[actix_web::test]
async fn test_unknown_route() {
    let ctx = TestContext::sqlite().await;
    let app = init_app!(ctx.state.clone());

    let req = test::TestRequest::get().uri("/api/unknown").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
