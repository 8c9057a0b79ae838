//! UI primitives for the VOY CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and color styles
//! - **Render**: Tables, headers, receipts, hints
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{header, table, Column};
//!
//! let ui = ctx.ui_context(args.json);
//! if ui.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! print(&ui, &header(&ui, "holidays", Some("2024")));
//! println!("{}", table(&ui, &columns, &rows));
//! ```

mod context;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, receipt, table, Column};
