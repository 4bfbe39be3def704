//! Template root resolution.

use crate::error::{GenctemplateError, Result};
use std::path::PathBuf;

/// Resolve the template root for this invocation.
///
/// An explicit override (`--root` flag or `GENCTEMPLATE_ROOT` env var)
/// wins; otherwise the root is `~/.genctemplate/templates`. Fails with
/// [`GenctemplateError::NoHomeDirectory`] when no override is given and
/// the home directory cannot be determined.
///
/// The caller threads the resolved root into the registry and the
/// materializer; nothing stores it globally.
pub fn resolve_root(override_root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = override_root {
        return Ok(root);
    }

    let home = dirs::home_dir().ok_or(GenctemplateError::NoHomeDirectory)?;
    Ok(home.join(".genctemplate").join("templates"))
}
