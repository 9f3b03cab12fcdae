//! Probe Tests

use crate::test_utils::{Harness, book_catalog, json_response, test_config};
use libra_infrastructure::auth::PermissionCatalog;
use rocket::http::Status;
use serde_json::json;

#[rocket::async_test]
async fn test_live_is_always_ok() {
    let harness = Harness::with_config(test_config(), false).await;

    let (status, body) = json_response(harness.client.get("/live").dispatch().await).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[rocket::async_test]
async fn test_ready_follows_catalog_publication() {
    let harness = Harness::with_config(test_config(), false).await;

    let (status, body) = json_response(harness.client.get("/ready").dispatch().await).await;
    assert_eq!(status, Status::ServiceUnavailable);
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["catalogReady"], false);

    harness
        .catalog
        .publish(PermissionCatalog::from_document(book_catalog()).expect("catalog"));

    let (status, body) = json_response(harness.client.get("/ready").dispatch().await).await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalogReady"], true);
    assert_eq!(body["ephemeralKeys"], false);
}
