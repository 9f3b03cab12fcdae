//! CORS Tests

use crate::test_utils::{Harness, test_config};
use rocket::http::{Header, Method, Status};

const APP_ORIGIN: &str = "https://books.example.com";

async fn cors_harness(origins: &[&str]) -> Harness {
    let mut config = test_config();
    config.server.cors.allowed_origins = origins.iter().map(ToString::to_string).collect();
    Harness::with_config(config, true).await
}

#[rocket::async_test]
async fn test_listed_origin_is_echoed() {
    let harness = cors_harness(&[APP_ORIGIN]).await;

    let response = harness
        .client
        .get("/live")
        .header(Header::new("Origin", APP_ORIGIN))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some(APP_ORIGIN)
    );
    assert_eq!(response.headers().get_one("Vary"), Some("Origin"));
}

#[rocket::async_test]
async fn test_unlisted_origin_gets_no_headers() {
    let harness = cors_harness(&[APP_ORIGIN]).await;

    let response = harness
        .client
        .get("/live")
        .header(Header::new("Origin", "https://evil.example.com"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none()
    );
}

#[rocket::async_test]
async fn test_cors_is_off_without_origins() {
    let harness = Harness::start().await;

    let response = harness
        .client
        .get("/live")
        .header(Header::new("Origin", APP_ORIGIN))
        .dispatch()
        .await;

    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Origin")
            .is_none()
    );
}

#[rocket::async_test]
async fn test_preflight_is_answered() {
    let harness = cors_harness(&["*"]).await;

    let response = harness
        .client
        .req(Method::Options, "/api/auth/login")
        .header(Header::new("Origin", APP_ORIGIN))
        .header(Header::new("Access-Control-Request-Method", "POST"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NoContent);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Methods"),
        Some("GET, POST, PUT, DELETE, OPTIONS")
    );
}
