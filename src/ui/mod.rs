//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] for terminal usage
//! - [`MockUI`] for capturing output in tests
//!
//! # Example
//!
//! ```
//! use genctemplate::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Quiet);
//! ui.success("Template generated");
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, GenctemplateTheme};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status messages.
    #[default]
    Normal,
    /// Show nothing except errors.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_mode_shows_status() {
        assert!(OutputMode::Normal.shows_status());
        assert!(!OutputMode::Quiet.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }
}
