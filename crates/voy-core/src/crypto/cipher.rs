//! AES-256-GCM field encryption.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};

use super::cache::KeyCache;
use crate::error::{Result, VoyError};

/// Nonce size for AES-GCM (96 bits).
pub const NONCE_LENGTH: usize = 12;

/// Authentication tag appended to every ciphertext.
pub const TAG_LENGTH: usize = 16;

/// Returned by [`FieldCipher::decrypt_data`] when a value cannot be decrypted.
pub const PROTECTED_DATA_UNAVAILABLE: &str = "[Protected data unavailable]";

/// Encrypts and decrypts per-user display values.
///
/// Owns the session's [`KeyCache`]; call [`FieldCipher::logout`] when the
/// session ends.
#[derive(Debug, Default)]
pub struct FieldCipher {
    keys: KeyCache,
}

impl FieldCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing cache.
    pub fn with_cache(keys: KeyCache) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &KeyCache {
        &self.keys
    }

    /// Forget every derived key.
    pub fn logout(&self) {
        self.keys.clear();
    }

    /// Encrypt `plaintext` under the key for `user_id`.
    ///
    /// Output is `base64(nonce || ciphertext || tag)` with a fresh random
    /// nonce, so encrypting the same value twice gives different strings.
    /// Empty input returns an empty string without touching the cipher.
    ///
    /// # Errors
    ///
    /// Returns `VoyError::Crypto` if the random source or the cipher fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use voy_core::crypto::FieldCipher;
    ///
    /// let cipher = FieldCipher::new();
    /// let sealed = cipher.encrypt_data("AB123456", "user-123").unwrap();
    /// assert_eq!(cipher.decrypt_data(&sealed, "user-123"), "AB123456");
    /// ```
    pub fn encrypt_data(&self, plaintext: &str, user_id: &str) -> Result<String> {
        if plaintext.is_empty() {
            return Ok(String::new());
        }

        let key = self.keys.get_or_derive(user_id)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

        let mut nonce_bytes = [0u8; NONCE_LENGTH];
        getrandom::getrandom(&mut nonce_bytes)
            .map_err(|e| VoyError::Crypto(format!("Failed to generate nonce: {}", e)))?;
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| VoyError::Crypto(format!("Encryption failed: {}", e)))?;

        let mut payload = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        payload.extend_from_slice(&nonce_bytes);
        payload.extend_from_slice(&ciphertext);

        tracing::debug!(
            plaintext_len = plaintext.len(),
            payload_len = payload.len(),
            "Encrypted field"
        );

        Ok(STANDARD.encode(payload))
    }

    /// Decrypt a value produced by [`FieldCipher::encrypt_data`].
    ///
    /// Empty input returns an empty string.
    ///
    /// # Errors
    ///
    /// - `VoyError::Encoding` for malformed base64, a payload too short to
    ///   hold a nonce and tag, or plaintext that is not valid UTF-8
    /// - `VoyError::Crypto` when authentication fails (wrong user or
    ///   modified data)
    pub fn try_decrypt(&self, ciphertext_b64: &str, user_id: &str) -> Result<String> {
        if ciphertext_b64.is_empty() {
            return Ok(String::new());
        }

        let payload = STANDARD.decode(ciphertext_b64.trim())?;
        if payload.len() < NONCE_LENGTH + TAG_LENGTH {
            return Err(VoyError::Encoding(format!(
                "Ciphertext too short: {} bytes",
                payload.len()
            )));
        }

        let key = self.keys.get_or_derive(user_id)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes()));

        let (nonce_bytes, ciphertext) = payload.split_at(NONCE_LENGTH);
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| {
                VoyError::Crypto("Decryption failed: wrong key or corrupted data".to_string())
            })?;

        Ok(String::from_utf8(plaintext)?)
    }

    /// Decrypt for display.
    ///
    /// Never fails: anything that cannot be decrypted comes back as
    /// [`PROTECTED_DATA_UNAVAILABLE`] and the cause is logged at `warn`.
    pub fn decrypt_data(&self, ciphertext_b64: &str, user_id: &str) -> String {
        match self.try_decrypt(ciphertext_b64, user_id) {
            Ok(plaintext) => plaintext,
            Err(err) => {
                tracing::warn!(error = %err, "Protected field could not be decrypted");
                PROTECTED_DATA_UNAVAILABLE.to_string()
            }
        }
    }
}
