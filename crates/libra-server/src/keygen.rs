//! Key generation
//!
//! `libra keygen` prints a ready-to-paste `[encryption]` section with a fresh
//! AES key and RSA key pair.

use libra_domain::{Error, Result};
use libra_infrastructure::config::{AesConfig, EncryptionConfig, RsaConfig, RsaKeyMode};
use libra_infrastructure::crypto::{KeyPair, SymmetricCipher};
use serde::Serialize;

#[derive(Serialize)]
struct Snippet<'a> {
    encryption: &'a EncryptionConfig,
}

/// Generate a complete set of server keys
///
/// The RSA mode is `strict` so that a lost key fails loudly instead of being
/// replaced by an ephemeral pair.
pub fn generate_encryption_config() -> Result<EncryptionConfig> {
    let key_pair = KeyPair::generate()?;
    Ok(EncryptionConfig {
        aes: AesConfig {
            key: Some(SymmetricCipher::generate_key().to_base64()),
        },
        rsa: RsaConfig {
            public_key: Some(key_pair.public_key_base64()?),
            private_key: Some(key_pair.private_key_base64()?),
            mode: RsaKeyMode::Strict,
        },
        debug_endpoints: false,
    })
}

/// Render `config` as a TOML `[encryption]` section
pub fn render_snippet(config: &EncryptionConfig) -> Result<String> {
    toml::to_string_pretty(&Snippet { encryption: config })
        .map_err(|e| Error::internal(format!("Failed to render key configuration: {e}")))
}

/// Print freshly generated keys to stdout
pub fn run_keygen() -> Result<()> {
    let config = generate_encryption_config()?;
    let snippet = render_snippet(&config)?;
    println!("# Generated by `libra keygen`. Keep the private key secret.");
    println!("{snippet}");
    Ok(())
}
