//! Flags accepted before or after any subcommand.
//!
//! Verbosity only shapes the stderr log stream. Prompts always go to the
//! terminal, so `-q` never silences a question the workflow still needs
//! answered.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log more of the workflow on stderr: checkpoints (-v), state loads and
    /// resolved answers (-vv), everything (-vvv). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print only errors, prompts and `--output-format json` documents.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Plain, uncolored output. Also set by a non-empty `NO_COLOR`.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Settings file to read instead of the per-user `config.toml`.
    /// `CLAWGEN_*` environment variables still override it.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shape of command results on stdout, and of log lines on stderr.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    Human,
    Plain,
    /// One JSON document per command and JSON log lines.
    Json,
}
