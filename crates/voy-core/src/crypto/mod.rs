//! Client-side protection of sensitive display values.
//!
//! Values such as document numbers are encrypted per user before they are
//! stored, and decrypted only for display:
//! - **PBKDF2-HMAC-SHA256**: 256-bit key per user id, 100,000 iterations,
//!   fixed application salt
//! - **AES-256-GCM**: authenticated encryption with a fresh 12-byte nonce
//!   per value, encoded as `base64(nonce || ciphertext || tag)`
//!
//! ## Threat Model
//!
//! The user id is the only key material. We defend against:
//! - Casual exposure of stored values (shoulder-surfing, screenshots of raw rows)
//! - Silent tampering: modified ciphertext never decrypts to other plaintext
//!
//! We do NOT defend against:
//! - An attacker who knows (or can enumerate) the user id
//! - Access to an unlocked session / process memory
//!
//! Decryption is display-oriented: failures degrade to
//! [`PROTECTED_DATA_UNAVAILABLE`] instead of surfacing an error. Use
//! [`FieldCipher::try_decrypt`] on any path where a failure must be seen.

pub mod cache;
pub mod cipher;
pub mod key;

pub use cache::KeyCache;
pub use cipher::{FieldCipher, NONCE_LENGTH, PROTECTED_DATA_UNAVAILABLE, TAG_LENGTH};
pub use key::{derive_key, DerivedKey, APP_SALT, PBKDF2_ITERATIONS};
