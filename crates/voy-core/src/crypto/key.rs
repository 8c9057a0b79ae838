//! Key derivation using PBKDF2-HMAC-SHA256.
//!
//! Each user id is stretched into a 256-bit AES key over a fixed
//! application-wide salt.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, VoyError};

/// PBKDF2 iteration count.
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Application-wide salt shared by every user.
pub const APP_SALT: &[u8] = b"voy-field-encryption-salt-v1";

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
const KEY_LENGTH: usize = 32;

const MIN_SALT_LENGTH: usize = 16;

/// A symmetric key derived from a user id.
///
/// Key material is zeroized from memory when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive the field-encryption key for `user_id`.
///
/// The raw UTF-8 bytes of `user_id` are the PBKDF2 password; any id,
/// including the empty string, is accepted. The same id and salt always
/// produce the same key.
///
/// # Security
///
/// Confidentiality rests on the user id staying unknown to an attacker and
/// on the iteration cost. This is an obfuscation layer for display values,
/// not a secret-based scheme.
///
/// # Examples
///
/// ```
/// use voy_core::crypto::{derive_key, APP_SALT};
///
/// let key = derive_key("user-123", APP_SALT).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(user_id: &str, salt: &[u8]) -> Result<DerivedKey> {
    if salt.len() < MIN_SALT_LENGTH {
        return Err(VoyError::InvalidInput(format!(
            "Salt must be at least {} bytes",
            MIN_SALT_LENGTH
        )));
    }

    let mut key_bytes = [0u8; KEY_LENGTH];
    pbkdf2_hmac::<Sha256>(user_id.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key_bytes);
    let key = DerivedKey::from_bytes(key_bytes);
    key_bytes.zeroize();

    Ok(key)
}
