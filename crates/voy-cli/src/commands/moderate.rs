use crate::app::AppContext;
use crate::cli::ModerateSubcommand;
use crate::helpers::read_text;
use crate::output::offense_json;
use crate::ui::{badge, kv, print, Badge};

pub fn handle_moderate(ctx: &AppContext, command: &ModerateSubcommand) -> anyhow::Result<()> {
    match command {
        ModerateSubcommand::Check { text, json } => handle_check(ctx, text.as_deref(), *json),
        ModerateSubcommand::Mask { text } => handle_mask(ctx, text.as_deref()),
    }
}

fn handle_check(ctx: &AppContext, text: Option<&str>, json: bool) -> anyhow::Result<()> {
    let text = read_text(text)?.require("text")?;
    let check = ctx.moderator()?.check(&text);
    let ui = ctx.ui_context(json);

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&offense_json(&check))?);
        return Ok(());
    }

    if ui.mode.is_pretty() {
        let line = if check.is_offensive {
            badge(&ui, Badge::Warn, "Offensive content found")
        } else {
            badge(&ui, Badge::Ok, "No offensive content")
        };
        print(&ui, &line);
    } else {
        print(&ui, &kv(&ui, "Offensive", &check.is_offensive.to_string()));
    }

    if let (Some(word), Some(kind)) = (&check.matched_word, check.match_kind) {
        print(&ui, &kv(&ui, "Matched Word", word));
        print(&ui, &kv(&ui, "Match", kind.as_str()));
    }

    Ok(())
}

fn handle_mask(ctx: &AppContext, text: Option<&str>) -> anyhow::Result<()> {
    let text = read_text(text)?.require("text")?;
    println!("{}", ctx.moderator()?.mask(&text));
    Ok(())
}
