//! Command-line front end for readscope.
//!
//! The parser and command implementations live in this library so tests and
//! doc generators can reach them; `main.rs` only wires up config, logging,
//! and dispatch.
//!
//! - [`Cli`] / [`GlobalArgs`]: clap derive definitions
//! - [`Commands`]: `score`, `simplify`, `info`, and `serve`
//! - [`commands`]: one module per subcommand
//! - `server`: the MCP tool server (feature `mcp`)

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use readscope_core::LogLevel;

/// When to colorize terminal output.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Let owo-colors detect the terminal.
    #[default]
    Auto,
    /// Force colors on.
    Always,
    /// Force colors off.
    Never,
}

impl ColorChoice {
    /// Set the process-wide color override. Call once at startup.
    pub fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                   Log filter (e.g., debug, readscope=trace)
    READSCOPE_LOG_PATH         Write logs to this file as well as stderr
    READSCOPE_LOG_DIR          Write logs to readscope.log in this directory
    READSCOPE_<SETTING>        Override a config setting (e.g., READSCOPE_MAX_SENTENCE_WORDS=30)
";

/// Readability scoring and simplification suggestions for prose.
#[derive(Parser)]
#[command(name = "readscope", version, arg_required_else_help = true)]
#[command(about = "Readability scoring and simplification suggestions for prose")]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the bare version number and exit
    #[arg(long)]
    pub version_only: bool,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags accepted before or after any subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Load this config file on top of discovered ones
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Change to DIR before doing anything else
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub chdir: Option<PathBuf>,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log level, overriding the config file
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,
}

/// Subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Score readability and suggest simplifications
    Score(commands::score::ScoreArgs),

    /// Rewrite verbose words and phrases with plainer ones
    Simplify(commands::simplify::SimplifyArgs),

    /// Show package and effective configuration
    Info(commands::info::InfoArgs),

    /// Serve the scorer as MCP tools on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// The clap command, for man pages and completions.
pub fn command() -> clap::Command {
    Cli::command()
}
