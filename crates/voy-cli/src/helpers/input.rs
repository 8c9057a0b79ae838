//! Reading command input from arguments or stdin.

use std::io::{self, IsTerminal, Read};

use crate::errors::CliError;

/// Where a command's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Argument(String),
    Stdin(String),
    /// No argument and stdin is a terminal
    Terminal,
}

impl TextSource {
    /// The text, or an input error naming what was expected.
    pub fn require(self, what: &str) -> anyhow::Result<String> {
        match self {
            TextSource::Argument(text) | TextSource::Stdin(text) => Ok(text),
            TextSource::Terminal => Err(CliError::invalid_input(format!(
                "No {} provided. Pass it as an argument or pipe it via stdin.",
                what
            ))
            .into()),
        }
    }
}

/// Use `arg` when given, otherwise read all of stdin unless it is a terminal.
///
/// A single trailing newline is dropped from stdin input.
pub fn read_text(arg: Option<&str>) -> anyhow::Result<TextSource> {
    if let Some(value) = arg {
        return Ok(TextSource::Argument(value.to_string()));
    }

    if io::stdin().is_terminal() {
        return Ok(TextSource::Terminal);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(TextSource::Stdin(strip_trailing_newline(buffer)))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins() {
        let source = read_text(Some("olá")).unwrap();
        assert_eq!(source, TextSource::Argument("olá".to_string()));
    }

    #[test]
    fn test_strip_single_trailing_newline() {
        assert_eq!(strip_trailing_newline("abc\n".into()), "abc");
        assert_eq!(strip_trailing_newline("abc\r\n".into()), "abc");
        assert_eq!(strip_trailing_newline("abc\n\n".into()), "abc\n");
        assert_eq!(strip_trailing_newline("abc".into()), "abc");
    }

    #[test]
    fn test_terminal_requires_text() {
        let err = TextSource::Terminal.require("text").unwrap_err();
        assert!(err.to_string().contains("No text provided"));
    }
}
