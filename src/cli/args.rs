//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The default verb takes a
//! bare destination path (`genctemplate src/main.c`), so the destination
//! is a top-level positional and the remaining verbs are subcommands.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Genctemplate - Generate source-file skeletons from per-user templates.
#[derive(Debug, Parser)]
#[command(name = "genctemplate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Destination path for the generated file
    #[arg(value_name = "DEST")]
    pub dest: Option<PathBuf>,

    /// Template to generate (defaults to "c")
    #[arg(short = 't', long, value_name = "NAME")]
    pub template: Option<String>,

    /// Template root directory (overrides ~/.genctemplate/templates)
    #[arg(long, global = true, env = "GENCTEMPLATE_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List available templates
    Templates(TemplatesArgs),

    /// Provision the template root with the stock templates
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `templates` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TemplatesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Overwrite template files that already exist
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
