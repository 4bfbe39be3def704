//! Template registry for genctemplate.
//!
//! The registry is a closed, build-time mapping from template names to
//! template files under the per-user template root:
//! - [`kind`] - The [`TemplateKind`] enumeration and name/path tables
//! - [`root`] - Template root resolution (`--root` override or `~/.genctemplate/templates`)
//!
//! Listing and resolution are pure metadata operations; nothing in this
//! module touches the filesystem.
//!
//! # Example
//!
//! ```
//! use genctemplate::registry::TemplateKind;
//!
//! let kind = TemplateKind::resolve("makefile").unwrap();
//! assert_eq!(kind.file_name(), "Makefile.template");
//! ```

pub mod kind;
pub mod root;

pub use kind::{template_path, TemplateKind};
pub use root::resolve_root;
