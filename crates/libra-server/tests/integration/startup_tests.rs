//! Startup Tests
//!
//! Configuration file to running server, with the bcrypt-backed user store.

use crate::test_utils::{KEY_PAIR, TEST_SECRET, json_response};
use libra_infrastructure::auth::CatalogLoader;
use libra_infrastructure::crypto::{AsymmetricCipher, SymmetricCipher, seal_credential};
use libra_server::{AppState, build_rocket, load_config};
use rocket::http::{ContentType, Status};
use rocket::local::asynchronous::Client;
use serde_json::json;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_config(dir: &TempDir, rsa_mode: &str, with_rsa_keys: bool) -> PathBuf {
    let password_hash = bcrypt::hash("correct horse", 4).expect("hash password");
    let rsa_keys = if with_rsa_keys {
        format!(
            "public_key = \"{}\"\nprivate_key = \"{}\"\n",
            KEY_PAIR.public_key_base64().expect("public key"),
            KEY_PAIR.private_key_base64().expect("private key"),
        )
    } else {
        String::new()
    };

    let content = format!(
        r#"
[auth.jwt]
secret = "{TEST_SECRET}"
expiration_secs = 600

[[auth.users]]
id = 42
username = "librarian"
password_hash = "{password_hash}"
roles = ["ADMIN"]

[[auth.users]]
id = 43
username = "reader"
password_hash = "{password_hash}"

[[auth.users]]
id = 44
username = "retired"
password_hash = "{password_hash}"
status = "inactive"

[encryption.aes]
key = "{aes_key}"

[encryption.rsa]
mode = "{rsa_mode}"
{rsa_keys}
[[catalog.permissions]]
name = "BOOK_READ"
method = "get"
url = "/api/books/**"

[[catalog.roles]]
name = "admin"
permissions = ["BOOK_READ"]
"#,
        aes_key = SymmetricCipher::generate_key().to_base64(),
    );

    let path = dir.path().join("libra.toml");
    std::fs::write(&path, content).expect("write config");
    path
}

async fn start(path: &Path) -> Client {
    let config = load_config(Some(path)).expect("load config");
    let state = AppState::from_config(&config).expect("build state");
    state
        .catalog
        .publish(CatalogLoader::from_config(&config.catalog).expect("catalog"));
    assert!(!state.key_store.is_ephemeral());

    Client::tracked(build_rocket(state, &config))
        .await
        .expect("valid rocket instance")
}

async fn login(client: &Client, username: &str, password: &str) -> (Status, serde_json::Value) {
    let public_key = AsymmetricCipher::public_key_from_base64(
        &KEY_PAIR.public_key_base64().expect("public key"),
    )
    .expect("decode public key");
    let (encrypted_password, encrypted_key) =
        seal_credential(password, &public_key).expect("seal");

    let body = json!({
        "username": username,
        "encryptedPassword": encrypted_password,
        "encryptedAesKey": encrypted_key,
    });
    json_response(
        client
            .post("/api/auth/login")
            .header(ContentType::JSON)
            .body(body.to_string())
            .dispatch()
            .await,
    )
    .await
}

#[rocket::async_test]
async fn test_configured_server_accepts_bcrypt_users() {
    let dir = TempDir::new().expect("temp dir");
    let client = start(&write_config(&dir, "strict", true)).await;

    let (status, body) = login(&client, "librarian", "correct horse").await;
    assert_eq!(status, Status::Ok);
    assert_eq!(body["userId"], 42);
    assert_eq!(body["role"], "ADMIN");

    // Public key comes from configuration
    let (_, key) = json_response(
        client
            .get("/api/encryption/rsa/public-key")
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(
        key["publicKey"],
        KEY_PAIR.public_key_base64().expect("public key")
    );

    let ready = client.get("/ready").dispatch().await;
    assert_eq!(ready.status(), Status::Ok);
}

#[rocket::async_test]
async fn test_user_without_roles_gets_default_role() {
    let dir = TempDir::new().expect("temp dir");
    let client = start(&write_config(&dir, "strict", true)).await;

    let (status, body) = login(&client, "reader", "correct horse").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["role"], "USER");
}

#[rocket::async_test]
async fn test_inactive_user_cannot_log_in() {
    let dir = TempDir::new().expect("temp dir");
    let client = start(&write_config(&dir, "strict", true)).await;

    let (status, body) = login(&client, "retired", "correct horse").await;

    assert_eq!(status, Status::BadRequest);
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
}

#[test]
fn test_strict_mode_without_rsa_keys_is_fatal() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_config(&dir, "strict", false);

    let config = load_config(Some(path.as_path())).expect("load config");
    let err = AppState::from_config(&config).err().expect("strict mode must fail");

    assert!(err.is_fatal(), "{err}");
}
