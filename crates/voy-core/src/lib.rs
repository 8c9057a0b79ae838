//! # VOY Core
//!
//! Core library for VOY - a companion app for immigrants settling in Portugal.
//!
//! This crate holds the self-contained logic the app relies on, independent of
//! any UI or hosted backend.
//!
//! ## Architecture
//!
//! - **calendar**: Portuguese public holidays (fixed dates plus Easter-derived feasts)
//! - **moderation**: Offensive-content detection and masking over a static lexicon
//! - **crypto**: Per-user key derivation and AES-256-GCM protection of display values

pub mod calendar;
pub mod crypto;
pub mod error;
pub mod moderation;

pub use calendar::{is_portugal_holiday, portugal_holidays, Holiday};
pub use crypto::{FieldCipher, KeyCache, PROTECTED_DATA_UNAVAILABLE};
pub use error::{Result, VoyError};
pub use moderation::{contains_offensive_content, mask_offensive_content, Moderator, OffenseCheck};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
