//! Templates command implementation.
//!
//! The `genctemplate templates` command lists the registered templates,
//! one name per line, in registry order. The listing is pure metadata and
//! never consults the filesystem, so it works before `init` has run.

use serde::Serialize;

use crate::cli::args::TemplatesArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::registry::TemplateKind;
use crate::ui::UserInterface;

/// One row of `templates --json` output.
#[derive(Debug, Serialize)]
struct TemplateInfo {
    name: &'static str,
    file: &'static str,
    description: &'static str,
}

impl From<TemplateKind> for TemplateInfo {
    fn from(kind: TemplateKind) -> Self {
        Self {
            name: kind.name(),
            file: kind.file_name(),
            description: kind.description(),
        }
    }
}

/// The templates command implementation.
pub struct TemplatesCommand {
    args: TemplatesArgs,
}

impl TemplatesCommand {
    /// Create a new templates command.
    pub fn new(args: TemplatesArgs) -> Self {
        Self { args }
    }
}

impl Command for TemplatesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let rows: Vec<TemplateInfo> = TemplateKind::ALL.into_iter().map(Into::into).collect();
            let json = serde_json::to_string_pretty(&rows).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            for kind in TemplateKind::ALL {
                ui.message(kind.name());
            }
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn lists_names_one_per_line_in_fixed_order() {
        let cmd = TemplatesCommand::new(TemplatesArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert_eq!(ui.messages(), ["c", "makefile", "gnuplot-splot"]);
    }

    #[test]
    fn listing_is_stable_across_calls() {
        let cmd = TemplatesCommand::new(TemplatesArgs::default());
        let mut first = MockUI::new();
        let mut second = MockUI::new();

        cmd.execute(&mut first).unwrap();
        cmd.execute(&mut second).unwrap();

        assert_eq!(first.messages(), second.messages());
    }

    #[test]
    fn json_output_contains_all_fields() {
        let cmd = TemplatesCommand::new(TemplatesArgs { json: true });
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let json: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        let rows = json.as_array().unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0]["name"], "c");
        assert_eq!(rows[1]["file"], "Makefile.template");
        assert!(rows[2]["description"].as_str().unwrap().contains("gnuplot"));
    }
}
