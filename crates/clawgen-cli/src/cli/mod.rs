//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No workflow logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use clawgen_core::domain::ProjectKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "clawgen",
    bin_name = "clawgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Resumable scaffolding for OpenClaw skills, plugins and web apps",
    long_about = "clawgen walks a project through init, prd, generating and ready. \
                  Every answer is checkpointed to .clawgen/state.json, so an \
                  interrupted run picks up where it stopped.",
    after_help = "EXAMPLES:\n\
        \x20 clawgen new --type skill --quick --output ./weather\n\
        \x20 clawgen init --output ./portal\n\
        \x20 clawgen prd --output ./portal\n\
        \x20 clawgen generate --output ./portal\n\
        \x20 clawgen validate ./portal/portal",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// One-shot flow: type, basics, options, then generation.
    #[command(
        visible_alias = "n",
        about = "Create a project in one resumable run",
        after_help = "EXAMPLES:\n\
            \x20 clawgen new\n\
            \x20 clawgen new --type plugin --output ./tools\n\
            \x20 clawgen new --type web --quick --output ./portal"
    )]
    New(NewArgs),

    /// Collect project basics, gateway and modules.
    #[command(
        about = "Start a staged project",
        after_help = "EXAMPLES:\n\
            \x20 clawgen init --output ./portal\n\
            \x20 clawgen init --quick"
    )]
    Init(InitArgs),

    /// Collect requirements for an initialized project.
    #[command(
        about = "Record product requirements",
        after_help = "EXAMPLES:\n\
            \x20 clawgen prd --output ./portal\n\
            \x20 clawgen prd --revise"
    )]
    Prd(PrdArgs),

    /// Render and write the project from the staged state.
    #[command(
        visible_alias = "gen",
        about = "Generate project files",
        after_help = "EXAMPLES:\n\
            \x20 clawgen generate --output ./portal\n\
            \x20 clawgen generate --type web --quick"
    )]
    Generate(GenerateArgs),

    /// Show the persisted workflow state.
    #[command(about = "Show workflow status")]
    Status(StatusArgs),

    /// Check a generated project's structure.
    #[command(
        about = "Validate a generated project",
        after_help = "EXAMPLES:\n\
            \x20 clawgen validate ./weather/weather\n\
            \x20 clawgen validate ."
    )]
    Validate(ValidateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 clawgen completions bash > ~/.local/share/bash-completion/completions/clawgen\n\
            \x20 clawgen completions zsh  > ~/.zfunc/_clawgen\n\
            \x20 clawgen completions fish > ~/.config/fish/completions/clawgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the clawgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 clawgen config init\n\
            \x20 clawgen config get defaults.author\n\
            \x20 clawgen config list"
    )]
    Config(ConfigCommands),
}

/// Directory holding `.clawgen/` and the generated project.
#[derive(Debug, Clone, Args)]
pub struct TargetArgs {
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Target directory (default: current directory)"
    )]
    pub output: PathBuf,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    #[arg(short = 't', long = "type", value_name = "TYPE", value_enum, help = "Project type")]
    pub kind: Option<ProjectType>,

    /// Answer every question with its default.
    #[arg(long = "quick", help = "Skip all questions and use defaults")]
    pub quick: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long = "quick", help = "Skip all questions and use defaults")]
    pub quick: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct PrdArgs {
    /// Drop recorded requirements and ask again.
    #[arg(long = "revise", help = "Re-collect requirements from scratch")]
    pub revise: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[arg(short = 't', long = "type", value_name = "TYPE", value_enum, help = "Project type")]
    pub kind: Option<ProjectType>,

    /// Also allows generating before requirements are recorded.
    #[arg(long = "quick", help = "Use defaults for anything still missing")]
    pub quick: bool,

    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub target: TargetArgs,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(value_name = "DIR", default_value = ".", help = "Generated project directory")]
    pub dir: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration file.
    Init {
        /// Overwrite an existing file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.author`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Project variants accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ProjectType {
    Skill,
    Plugin,
    /// Also accepted as `webapp`.
    #[value(alias = "webapp")]
    Web,
}

impl From<ProjectType> for ProjectKind {
    fn from(value: ProjectType) -> Self {
        match value {
            ProjectType::Skill => ProjectKind::Skill,
            ProjectType::Plugin => ProjectKind::Plugin,
            ProjectType::Web => ProjectKind::Web,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
