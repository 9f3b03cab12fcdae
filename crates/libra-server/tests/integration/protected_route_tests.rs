//! Protected Route Tests
//!
//! Token verification and permission checks as seen by an HTTP client.

use crate::test_utils::{Harness, NOW, bearer, book_catalog, json_response, test_config};
use libra_domain::Principal;
use libra_domain::ports::TokenProvider;
use libra_infrastructure::auth::{FixedClock, JwtTokenService, PermissionCatalog};
use rocket::http::{Header, Method, Status};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

fn user() -> Principal {
    Principal::new(7, "USER")
}

fn admin() -> Principal {
    Principal::new(1, "ADMIN")
}

fn denied(reason: &str) -> serde_json::Value {
    json!({ "error": reason, "message": "Access denied" })
}

#[rocket::async_test]
async fn test_user_may_update_but_not_delete() {
    let harness = Harness::start().await;
    let token = bearer(&harness.token_for(&user()));

    let response = harness
        .send(Method::Put, "/api/books/7", Some(token.clone()))
        .await;
    assert_eq!(response.status(), Status::Ok);

    let (status, body) = json_response(
        harness
            .send(Method::Put, "/api/books/7/delete", Some(token.clone()))
            .await,
    )
    .await;
    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("ACCESS_DENIED"));

    let (status, body) = json_response(
        harness
            .send(Method::Delete, "/api/books/7/delete", Some(token))
            .await,
    )
    .await;
    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("ACCESS_DENIED"));
}

#[rocket::async_test]
async fn test_admin_may_delete() {
    let harness = Harness::start().await;
    let token = bearer(&harness.token_for(&admin()));

    let response = harness
        .send(Method::Put, "/api/books/7/delete", Some(token))
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.into_string().await.as_deref(),
        Some("book 7 deleted by ADMIN#1")
    );
}

#[rocket::async_test]
async fn test_user_may_read_but_not_create() {
    let harness = Harness::start().await;
    let token = bearer(&harness.token_for(&user()));

    let response = harness
        .send(Method::Get, "/api/books/42", Some(token.clone()))
        .await;
    assert_eq!(response.status(), Status::Ok);

    let (status, body) =
        json_response(harness.send(Method::Post, "/api/books", Some(token)).await).await;
    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("ACCESS_DENIED"));
}

#[rocket::async_test]
async fn test_unknown_role_is_denied() {
    let harness = Harness::start().await;
    let token = bearer(&harness.token_for(&Principal::new(9, "GUEST")));

    let (status, body) =
        json_response(harness.send(Method::Get, "/api/books/1", Some(token)).await).await;

    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("ACCESS_DENIED"));
}

#[rocket::async_test]
async fn test_missing_token_is_unauthorized() {
    let harness = Harness::start().await;

    let (status, body) =
        json_response(harness.send(Method::Get, "/api/books/1", None).await).await;

    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[rocket::async_test]
async fn test_other_scheme_is_unauthorized() {
    let harness = Harness::start().await;

    let response = harness
        .send(
            Method::Get,
            "/api/books/1",
            Some("Basic YWxpY2U6cGFzc3dvcmQ=".to_string()),
        )
        .await;

    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_blank_bearer_token_is_unauthorized() {
    let harness = Harness::start().await;

    let (status, body) = json_response(
        harness
            .send(Method::Get, "/api/books/1", Some("Bearer ".to_string()))
            .await,
    )
    .await;

    assert_eq!(status, Status::Unauthorized);
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[rocket::async_test]
async fn test_expired_token_is_rejected() {
    let harness = Harness::start().await;
    let token = harness
        .tokens
        .issue(7, "USER", Duration::from_secs(60))
        .expect("issue token");

    let response = harness
        .send(Method::Get, "/api/books/1", Some(bearer(&token)))
        .await;
    assert_eq!(response.status(), Status::Ok);

    harness.clock.advance(61);
    let (status, body) = json_response(
        harness
            .send(Method::Get, "/api/books/1", Some(bearer(&token)))
            .await,
    )
    .await;
    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("TOKEN_EXPIRED"));
}

#[rocket::async_test]
async fn test_token_signed_with_other_secret_is_tampered() {
    let harness = Harness::start().await;
    let forger = JwtTokenService::new(
        "a-completely-different-secret-of-32-bytes",
        Duration::from_secs(3_600),
        Arc::new(FixedClock::new(NOW)),
    )
    .expect("token service");
    let token = forger.issue(1, "ADMIN", Duration::from_secs(3_600)).expect("issue");

    let (status, body) = json_response(
        harness
            .send(Method::Put, "/api/books/1/delete", Some(bearer(&token)))
            .await,
    )
    .await;

    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("TOKEN_TAMPERED"));
}

#[rocket::async_test]
async fn test_garbage_token_is_malformed() {
    let harness = Harness::start().await;

    let (status, body) = json_response(
        harness
            .send(Method::Get, "/api/books/1", Some(bearer("not-a-token")))
            .await,
    )
    .await;

    assert_eq!(status, Status::Forbidden);
    assert_eq!(body, denied("TOKEN_MALFORMED"));
}

#[rocket::async_test]
async fn test_unpublished_catalog_is_not_ready() {
    let harness = Harness::with_config(test_config(), false).await;
    let token = bearer(&harness.token_for(&user()));

    let (status, body) = json_response(
        harness
            .send(Method::Get, "/api/books/1", Some(token.clone()))
            .await,
    )
    .await;
    assert_eq!(status, Status::ServiceUnavailable);
    assert_eq!(body["error"], "CATALOG_NOT_READY");

    harness
        .catalog
        .publish(PermissionCatalog::from_document(book_catalog()).expect("catalog"));
    let response = harness.send(Method::Get, "/api/books/1", Some(token)).await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn test_custom_header_and_prefix() {
    let mut config = test_config();
    config.auth.header = "X-Session".to_string();
    config.auth.token_prefix = "Token ".to_string();
    let harness = Harness::with_config(config, true).await;
    let token = harness.token_for(&user());

    let response = harness
        .client
        .get("/api/books/1")
        .header(Header::new("X-Session", format!("Token {token}")))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    // The default header is no longer consulted
    let response = harness
        .send(Method::Get, "/api/books/1", Some(bearer(&token)))
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
}

#[rocket::async_test]
async fn test_unknown_route_is_json_not_found() {
    let harness = Harness::start().await;

    let (status, body) =
        json_response(harness.send(Method::Get, "/nowhere", None).await).await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(body["error"], "NOT_FOUND");
}
