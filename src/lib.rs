//! Genctemplate - Generate source-file skeletons from per-user templates.
//!
//! Genctemplate resolves a template name against a closed registry and
//! copies the template's bytes from `~/.genctemplate/templates/` (or an
//! explicit `--root`) into a destination file, overwriting it.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`materialize`] - Byte-exact template materialization
//! - [`registry`] - The closed template registry and root resolution
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use genctemplate::registry::{template_path, TemplateKind};
//!
//! let kind = TemplateKind::resolve("c").unwrap();
//! let path = template_path(kind, std::path::Path::new("/home/user/.genctemplate/templates"));
//! assert!(path.ends_with("c.template"));
//! ```

pub mod cli;
pub mod error;
pub mod materialize;
pub mod registry;
pub mod ui;

pub use error::{GenctemplateError, Result};
