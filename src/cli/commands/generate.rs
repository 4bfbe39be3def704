//! Generate command implementation.
//!
//! The default verb: `genctemplate [-t NAME] <DEST>` materializes the
//! named template (or the `c` default) at the destination path.

use std::path::PathBuf;

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::materialize::materialize;
use crate::registry::{resolve_root, TemplateKind};
use crate::ui::UserInterface;

/// The generate command implementation.
pub struct GenerateCommand {
    root: Option<PathBuf>,
    template: Option<String>,
    dest: PathBuf,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(root: Option<PathBuf>, template: Option<String>, dest: PathBuf) -> Self {
        Self {
            root,
            template,
            dest,
        }
    }

    /// Get the destination path.
    pub fn dest(&self) -> &PathBuf {
        &self.dest
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let kind = match self.template.as_deref() {
            Some(name) => match TemplateKind::resolve(name) {
                Some(kind) => kind,
                None => {
                    let valid: Vec<&str> = TemplateKind::ALL.iter().map(|k| k.name()).collect();
                    ui.error(&format!(
                        "Unknown template: {} (valid names: {})",
                        name,
                        valid.join(", ")
                    ));
                    return Ok(CommandResult::failure(2));
                }
            },
            None => TemplateKind::DEFAULT,
        };

        let root = resolve_root(self.root.clone())?;
        let bytes = materialize(kind, &root, &self.dest)?;
        tracing::debug!(template = %kind, bytes, "materialized {}", self.dest.display());

        ui.success(&format!("Template generated: {}", self.dest.display()));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_root() -> TempDir {
        let temp = TempDir::new().unwrap();
        for kind in TemplateKind::ALL {
            fs::write(
                temp.path().join(kind.file_name()),
                format!("content of {}", kind.name()),
            )
            .unwrap();
        }
        temp
    }

    #[test]
    fn generates_default_c_template() {
        let root = setup_root();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("main.c");
        let cmd = GenerateCommand::new(Some(root.path().to_path_buf()), None, dest.clone());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "content of c");
        assert!(ui.successes().iter().any(|m| m.contains("main.c")));
    }

    #[test]
    fn generates_named_template() {
        let root = setup_root();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("Makefile");
        let cmd = GenerateCommand::new(
            Some(root.path().to_path_buf()),
            Some("makefile".into()),
            dest.clone(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(fs::read_to_string(&dest).unwrap(), "content of makefile");
    }

    #[test]
    fn unknown_template_fails_and_lists_valid_names() {
        let root = setup_root();
        let out = TempDir::new().unwrap();
        let dest = out.path().join("out");
        let cmd = GenerateCommand::new(
            Some(root.path().to_path_buf()),
            Some("bogus".into()),
            dest.clone(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(!dest.exists(), "no file may be written");
        let err = &ui.errors()[0];
        assert!(err.contains("bogus"));
        assert!(err.contains("gnuplot-splot"));
    }

    #[test]
    fn prefix_of_valid_name_is_unknown() {
        let root = setup_root();
        let out = TempDir::new().unwrap();
        let cmd = GenerateCommand::new(
            Some(root.path().to_path_buf()),
            Some("make".into()),
            out.path().join("out"),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
    }

    #[test]
    fn missing_template_root_propagates_error() {
        let out = TempDir::new().unwrap();
        let cmd = GenerateCommand::new(
            Some(PathBuf::from("/nonexistent/root")),
            None,
            out.path().join("out.c"),
        );
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();

        assert!(err.to_string().contains("c.template"));
    }
}
