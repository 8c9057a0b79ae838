use dialoguer::Confirm;

use crate::app::{missing_config_hint, AppContext};
use crate::cli::ConfigSubcommand;
use crate::config::{write_config, VoyConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt, UiContext};

pub fn handle_config(ctx: &AppContext, command: &ConfigSubcommand) -> anyhow::Result<()> {
    match command {
        ConfigSubcommand::Init { force } => handle_init(ctx, *force),
        ConfigSubcommand::Show { json } => handle_show(ctx, *json),
        ConfigSubcommand::Path => handle_path(ctx),
    }
}

fn handle_init(ctx: &AppContext, force: bool) -> anyhow::Result<()> {
    let path = ctx.config_path()?;

    if path.exists() && !force {
        let overwrite = UiContext::is_interactive()
            && Confirm::new()
                .with_prompt(format!("Overwrite {}?", path.display()))
                .default(false)
                .interact()
                .map_err(|e| anyhow::anyhow!("Failed to read answer: {}", e))?;
        if !overwrite {
            return Err(CliError::invalid_input(format!(
                "Config already exists at {}\nHint: Pass --force to overwrite it.",
                path.display()
            ))
            .into());
        }
    }

    write_config(&path, &VoyConfig::default())?;
    tracing::debug!(path = %path.display(), "Wrote default config");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let display = path.display().to_string();
        print(&ui, &receipt(&ui, "Wrote config", &[("Path", &display)]));
    }
    Ok(())
}

fn handle_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let config = ctx.config()?;

    if json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        let contents =
            toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
        print!("{}", contents);
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> anyhow::Result<()> {
    let path = ctx.config_path()?;
    println!("{}", path.display());

    if !path.exists() && !ctx.quiet() {
        let ui = ctx.ui_context(false);
        if ui.mode.is_pretty() {
            eprintln!("{}", hint(&ui, &missing_config_hint(&path)));
        }
    }
    Ok(())
}
