//! VOY CLI - holidays, moderation and field encryption from the command line
//!
//! This is the command-line interface for VOY. It exposes every operation of
//! the core library for scripting and manual inspection.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use voy_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{config as config_cmd, crypt, holidays, misc, moderate};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    logging::init(cli.verbose, cli.quiet, &ctx.log_filter());

    let result = run(&ctx, &cli);
    ctx.logout();

    if let Err(e) = result {
        let ui_ctx = ctx.ui_context(false);
        let (message, hint) = split_hint(&format!("{}", e));
        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing "Hint: ..." line off an error message.
fn split_hint(error: &str) -> (String, Option<String>) {
    for marker in ["\nHint:", "\nhint:"] {
        if let Some(idx) = error.find(marker) {
            let hint = error[idx + marker.len()..].trim().to_string();
            return (error[..idx].to_string(), Some(hint));
        }
    }
    (error.to_string(), None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Holidays(args)) => {
            holidays::handle_holidays(ctx, args)?;
        }
        Some(Commands::Moderate(command)) => {
            moderate::handle_moderate(ctx, command)?;
        }
        Some(Commands::Encrypt(args)) => {
            crypt::handle_encrypt(ctx, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            crypt::handle_decrypt(ctx, args)?;
        }
        Some(Commands::Config(command)) => {
            config_cmd::handle_config(ctx, command)?;
        }
        Some(Commands::Completions { shell }) => {
            misc::handle_completions(*shell)?;
        }
        None => {
            println!("VOY v{}", VERSION);
            println!("\nRun `voy --help` for usage information.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) = split_hint("Not found\nHint: Run `voy holidays 2024`.");
        assert_eq!(message, "Not found");
        assert_eq!(hint.as_deref(), Some("Run `voy holidays 2024`."));
    }

    #[test]
    fn test_split_without_hint() {
        let (message, hint) = split_hint("boom");
        assert_eq!(message, "boom");
        assert!(hint.is_none());
    }
}
