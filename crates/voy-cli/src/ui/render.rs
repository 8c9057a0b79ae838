//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{styled, styles, Badge};
use crate::constants::BIN_NAME;

/// Render a header line for a command.
///
/// Pretty mode: "VOY · command (context)"
/// Plain mode: "voy command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("VOY", styles::bold(), ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("{} {}", BIN_NAME, command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let badge_text = kind.display(ctx.unicode);
    let colored_badge = styled(badge_text, kind.style(), ctx.color);

    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
///
/// Pretty mode: "Hint: text" with dim styling
/// Plain mode: "hint=text"
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a table using comfy-table for pretty mode.
///
/// Pretty mode: Styled table with borders
/// Plain mode: Space-separated values (no header)
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();

        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_MARKDOWN);
        }

        table
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));

        let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
        table.set_header(headers);

        for row in rows {
            table.add_row(row);
        }

        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() && !message.is_empty() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            width: 80,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_pretty() {
        let h = header(&pretty_ctx(), "holidays", Some("2024"));
        assert_eq!(h, "VOY \u{00B7} holidays (2024)");
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "holidays", None), "voy holidays");
    }

    #[test]
    fn test_badge_ok() {
        let b = badge(&plain_ctx(), Badge::Ok, "Done");
        assert_eq!(b, "[OK] Done");
    }

    #[test]
    fn test_kv_pretty() {
        let line = kv(&pretty_ctx(), "Name", "Natal");
        assert_eq!(line, "Name: Natal");
    }

    #[test]
    fn test_kv_plain() {
        let line = kv(&plain_ctx(), "Matched Word", "merda");
        assert_eq!(line, "matched_word=merda");
    }

    #[test]
    fn test_hint_plain() {
        assert_eq!(hint(&plain_ctx(), "try this"), "hint=try this");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Wrote config", &[("Path", "/tmp/c.toml")]);
        assert_eq!(r, "status=ok\npath=/tmp/c.toml");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(&pretty_ctx(), "Wrote config", &[("Path", "/tmp/c.toml")]);
        assert!(r.starts_with("[\u{2713}] Wrote config"));
        assert!(r.contains("  Path: /tmp/c.toml"));
    }

    #[test]
    fn test_table_plain() {
        let columns = [Column::new("Date"), Column::new("Name")];
        let rows = vec![
            vec!["2024-01-01".to_string(), "Ano Novo".to_string()],
            vec!["2024-12-25".to_string(), "Natal".to_string()],
        ];
        let t = table(&plain_ctx(), &columns, &rows);
        assert_eq!(t, "2024-01-01 Ano Novo\n2024-12-25 Natal");
    }

    #[test]
    fn test_table_pretty() {
        let columns = [Column::new("Date"), Column::new("Name")];
        let rows = vec![vec!["2024-06-10".to_string(), "Dia de Portugal".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("Date"));
        assert!(t.contains("Name"));
        assert!(t.contains("Dia de Portugal"));
        assert!(t.contains('\u{256D}')); // rounded corner
    }

    #[test]
    fn test_table_empty_rows_keeps_headers() {
        let columns = [Column::new("Date"), Column::new("Name")];
        let t = table(&pretty_ctx(), &columns, &[]);
        assert!(t.contains("Date"));
        assert!(t.contains("Name"));
    }

    #[test]
    fn test_error_message_modes() {
        let e = error_message(&pretty_ctx(), "Something went wrong", Some("Try again"));
        assert!(e.contains("[\u{2717}] Something went wrong"));
        assert!(e.contains("Hint: Try again"));

        let e_plain = error_message(&plain_ctx(), "Something went wrong", Some("Try again"));
        assert_eq!(e_plain, "error=Something went wrong\nhint=Try again");
    }
}
