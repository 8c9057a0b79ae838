use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use voy_core::VERSION;

/// VOY - holidays, moderation and field encryption for the VOY app
#[derive(Parser)]
#[command(name = "voy")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "VOY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging (debug level on stderr)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Plain output even on a terminal
    #[arg(long, global = true)]
    pub plain: bool,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// ASCII symbols and borders only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List Portuguese public holidays
    Holidays(HolidaysArgs),

    /// Check or mask offensive content
    #[command(subcommand)]
    Moderate(ModerateSubcommand),

    /// Encrypt a value for a user
    Encrypt(EncryptArgs),

    /// Decrypt a value for a user
    Decrypt(DecryptArgs),

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigSubcommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `holidays` command
#[derive(Args)]
#[command(args_conflicts_with_subcommands = true)]
pub struct HolidaysArgs {
    #[command(subcommand)]
    pub command: Option<HolidaysSubcommand>,

    /// Year to list (defaults to the current year)
    #[arg(value_name = "YEAR")]
    pub year: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum HolidaysSubcommand {
    /// Check whether a date is a holiday (exit 3 if not)
    Check {
        /// Date (YYYY-MM-DD or RFC 3339)
        #[arg(value_name = "DATE")]
        date: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the next holiday
    Next {
        /// Start after this date instead of today
        #[arg(long, value_name = "DATE")]
        after: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List holidays between two dates (inclusive)
    Range {
        #[arg(value_name = "FROM")]
        from: String,

        #[arg(value_name = "TO")]
        to: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ModerateSubcommand {
    /// Check text for offensive content
    Check {
        /// Text to check (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mask offensive words in text
    Mask {
        /// Text to mask (reads stdin when omitted)
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// User id the value belongs to
    #[arg(short, long, value_name = "ID")]
    pub user: String,

    /// Value to encrypt (reads stdin or prompts when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// User id the value belongs to
    #[arg(short, long, value_name = "ID")]
    pub user: String,

    /// Base64 ciphertext (reads stdin when omitted)
    #[arg(value_name = "CIPHERTEXT")]
    pub ciphertext: Option<String>,

    /// Fail with exit code 5 instead of printing the placeholder
    #[arg(long)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the config file path
    Path,
}
