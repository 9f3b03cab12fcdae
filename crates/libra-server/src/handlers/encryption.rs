//! Encryption routes
//!
//! The public key route is always mounted. The cipher routes expose the
//! server keys as an oracle and are mounted only when
//! `encryption.debug_endpoints` is set.

use crate::auth::ErrorResponse;
use crate::state::AppState;
use libra_domain::CryptoError;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Route, State, get, post, routes};
use serde::{Deserialize, Serialize};
use tracing::debug;

type CipherResult<T> = Result<Json<T>, (Status, Json<ErrorResponse>)>;

/// Server public key disclosure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    /// Base64 X.509 SubjectPublicKeyInfo DER
    pub public_key: String,
}

/// Text to encrypt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncryptRequest {
    pub plain_text: String,
}

/// Envelope to decrypt
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecryptRequest {
    pub cipher_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptResponse {
    pub encrypted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResponse {
    pub decrypted: String,
}

/// Base64 public key clients wrap their AES key with
#[get("/rsa/public-key")]
pub fn public_key(state: &State<AppState>) -> Json<PublicKeyResponse> {
    Json(PublicKeyResponse {
        public_key: state.unwrapper.public_key_base64(),
    })
}

/// Seal text under the server AES key
#[post("/aes/encrypt", data = "<body>")]
pub fn aes_encrypt(
    state: &State<AppState>,
    body: Json<EncryptRequest>,
) -> CipherResult<EncryptResponse> {
    state
        .key_store
        .seal(&body.plain_text)
        .map(encrypted)
        .map_err(failed)
}

/// Open an envelope sealed under the server AES key
#[post("/aes/decrypt", data = "<body>")]
pub fn aes_decrypt(
    state: &State<AppState>,
    body: Json<DecryptRequest>,
) -> CipherResult<DecryptResponse> {
    state
        .key_store
        .open(&body.cipher_text)
        .map(decrypted)
        .map_err(failed)
}

/// Encrypt with the server public key
#[post("/rsa/encrypt", data = "<body>")]
pub fn rsa_encrypt(
    state: &State<AppState>,
    body: Json<EncryptRequest>,
) -> CipherResult<EncryptResponse> {
    state
        .key_store
        .encrypt_with_public_key(body.plain_text.as_bytes())
        .map(encrypted)
        .map_err(failed)
}

/// Decrypt with the server private key
#[post("/rsa/decrypt", data = "<body>")]
pub fn rsa_decrypt(
    state: &State<AppState>,
    body: Json<DecryptRequest>,
) -> CipherResult<DecryptResponse> {
    state
        .key_store
        .decrypt_with_private_key(&body.cipher_text)
        .map(decrypted)
        .map_err(failed)
}

/// Wrap a Base64 AES key with the server public key, as a client would
#[post("/hybrid/encrypt-aes-key", data = "<body>")]
pub fn wrap_aes_key(
    state: &State<AppState>,
    body: Json<EncryptRequest>,
) -> CipherResult<EncryptResponse> {
    state
        .key_store
        .encrypt_with_public_key(body.plain_text.trim().as_bytes())
        .map(encrypted)
        .map_err(failed)
}

fn encrypted(encrypted: String) -> Json<EncryptResponse> {
    Json(EncryptResponse { encrypted })
}

fn decrypted(decrypted: String) -> Json<DecryptResponse> {
    Json(DecryptResponse { decrypted })
}

fn failed(e: CryptoError) -> (Status, Json<ErrorResponse>) {
    debug!(error = %e, "Debug encryption request failed");
    ErrorResponse::encryption_failed()
}

/// Routes always mounted at `/api/encryption`
pub fn routes() -> Vec<Route> {
    routes![public_key]
}

/// Cipher routes mounted at `/api/encryption` in debug mode
pub fn debug_routes() -> Vec<Route> {
    routes![aes_encrypt, aes_decrypt, rsa_encrypt, rsa_decrypt, wrap_aes_key]
}
