//! Application-level utilities for the VOY CLI.
//!
//! This module provides:
//! - Config path resolution
//! - The per-run context shared by command handlers

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{missing_config_hint, resolve_config_path};
