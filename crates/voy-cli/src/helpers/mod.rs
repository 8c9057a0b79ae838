//! Shared helpers for command handlers.

mod input;
mod parsing;

pub use input::{read_text, TextSource};
pub use parsing::parse_date;
