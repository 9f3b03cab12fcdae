//! Symmetric Cipher Tests

use base64::{Engine as _, engine::general_purpose::STANDARD};
use libra_domain::CryptoError;
use libra_infrastructure::constants::AES_GCM_NONCE_SIZE;
use libra_infrastructure::crypto::{SymmetricCipher, SymmetricKey};

#[test]
fn test_round_trip() {
    let key = SymmetricCipher::generate_key();
    for plaintext in ["", "p@ssw0rd", "pässwörd ✓", &"x".repeat(4096)] {
        let envelope = SymmetricCipher::encrypt(plaintext, &key).unwrap();
        assert_eq!(SymmetricCipher::decrypt(&envelope, &key).unwrap(), plaintext);
    }
}

#[test]
fn test_single_byte_tamper_is_detected() {
    let key = SymmetricCipher::generate_key();
    let envelope = SymmetricCipher::encrypt("secret", &key).unwrap();
    let bytes = STANDARD.decode(&envelope).unwrap();

    for index in AES_GCM_NONCE_SIZE..bytes.len() {
        let mut tampered = bytes.clone();
        tampered[index] ^= 0x01;
        assert_eq!(
            SymmetricCipher::decrypt(&STANDARD.encode(&tampered), &key),
            Err(CryptoError::AuthenticationFailed),
            "flip at byte {index} was not detected"
        );
    }
}

#[test]
fn test_nonce_uniqueness() {
    let key = SymmetricCipher::generate_key();
    let first = SymmetricCipher::encrypt("same", &key).unwrap();
    let second = SymmetricCipher::encrypt("same", &key).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_wrong_key_fails_authentication() {
    let envelope = SymmetricCipher::encrypt("secret", &SymmetricCipher::generate_key()).unwrap();
    assert_eq!(
        SymmetricCipher::decrypt(&envelope, &SymmetricCipher::generate_key()),
        Err(CryptoError::AuthenticationFailed)
    );
}

#[test]
fn test_malformed_envelopes() {
    let key = SymmetricCipher::generate_key();
    assert_eq!(
        SymmetricCipher::decrypt("not base64!", &key),
        Err(CryptoError::InvalidCiphertext)
    );
    let short = STANDARD.encode([0u8; AES_GCM_NONCE_SIZE]);
    assert_eq!(
        SymmetricCipher::decrypt(&short, &key),
        Err(CryptoError::InvalidCiphertext)
    );
    assert_eq!(SymmetricCipher::decrypt("", &key), Err(CryptoError::InvalidCiphertext));
}

#[test]
fn test_key_base64_round_trip() {
    let key = SymmetricCipher::generate_key();
    let encoded = key.to_base64();
    assert_eq!(STANDARD.decode(&encoded).unwrap().len(), 32);
    assert_eq!(SymmetricKey::from_base64(&encoded).unwrap(), key);
}

#[test]
fn test_key_requires_exactly_32_bytes() {
    assert!(matches!(
        SymmetricKey::from_bytes(&[0u8; 16]),
        Err(CryptoError::InvalidKey(_))
    ));
    assert!(matches!(
        SymmetricKey::from_base64(&STANDARD.encode([0u8; 33])),
        Err(CryptoError::InvalidKey(_))
    ));
    assert!(SymmetricKey::from_bytes(&[7u8; 32]).is_ok());
}

#[test]
fn test_key_debug_is_redacted() {
    let key = SymmetricKey::from_bytes(&[0xAB; 32]).unwrap();
    assert_eq!(format!("{key:?}"), "SymmetricKey(<redacted>)");
}
