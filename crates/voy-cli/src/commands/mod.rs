//! Command handlers for the VOY CLI.

pub mod config;
pub mod crypt;
pub mod holidays;
pub mod misc;
pub mod moderate;
