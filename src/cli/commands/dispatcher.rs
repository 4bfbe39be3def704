//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use clap::CommandFactory;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    root: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher with an optional template-root override.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    /// Get the template-root override.
    pub fn root(&self) -> Option<&PathBuf> {
        self.root.as_ref()
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. With no subcommand, a destination path must be
    /// present and the default generate verb runs.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Templates(args)) => {
                let cmd = super::templates::TemplatesCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(self.root.clone(), args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => match &cli.dest {
                Some(dest) => {
                    let cmd = super::generate::GenerateCommand::new(
                        self.root.clone(),
                        cli.template.clone(),
                        dest.clone(),
                    );
                    cmd.execute(ui)
                }
                None => {
                    let usage = Cli::command().render_usage().to_string();
                    ui.error(&format!("Missing destination path\n{}", usage));
                    Ok(CommandResult::failure(2))
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatcher_holds_root_override() {
        let dispatcher = CommandDispatcher::new(Some(PathBuf::from("/tpl")));
        assert_eq!(dispatcher.root(), Some(&PathBuf::from("/tpl")));
    }

    #[test]
    fn missing_destination_is_usage_error() {
        let cli = Cli::parse_from(["genctemplate"]);
        let dispatcher = CommandDispatcher::new(None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.errors().iter().any(|e| e.contains("Usage")));
    }

    #[test]
    fn template_flag_without_destination_is_usage_error() {
        let cli = Cli::parse_from(["genctemplate", "-t", "makefile"]);
        let dispatcher = CommandDispatcher::new(None);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
    }
}
