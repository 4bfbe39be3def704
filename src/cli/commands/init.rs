//! Init command implementation.
//!
//! The `genctemplate init` command provisions the per-user template root
//! with the stock templates shipped in the binary. Materialization never
//! reads the embedded copies; they exist only to seed the root, which is
//! the single source of truth afterwards (editing a seeded file changes
//! future output immediately).

use std::fs;
use std::path::PathBuf;

use anyhow::anyhow;
use include_dir::{include_dir, Dir};

use crate::cli::args::InitArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::registry::{resolve_root, template_path, TemplateKind};
use crate::ui::UserInterface;

/// Stock templates embedded at compile time.
static STOCK_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The init command implementation.
pub struct InitCommand {
    root: Option<PathBuf>,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(root: Option<PathBuf>, args: InitArgs) -> Self {
        Self { root, args }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = resolve_root(self.root.clone())?;
        fs::create_dir_all(&root)?;

        for kind in TemplateKind::ALL {
            let dest = template_path(kind, &root);

            if dest.exists() && !self.args.force {
                ui.warning(&format!(
                    "{} already exists (use --force to overwrite)",
                    dest.display()
                ));
                continue;
            }

            let stock = STOCK_TEMPLATES
                .get_file(kind.file_name())
                .ok_or_else(|| anyhow!("stock template {} missing from binary", kind.file_name()))?;
            fs::write(&dest, stock.contents())?;
            ui.success(&format!("Created {}", dest.display()));
        }

        Ok(CommandResult::success())
    }
}
