//! Template materialization.
//!
//! Materializing copies a template's content, byte for byte, from the
//! template root to a destination file. The destination is truncated and
//! overwritten unconditionally; there is no prompt, no backup, and no
//! atomic replace (an interrupted write can leave a partial file, matching
//! the historical behavior of this tool).
//!
//! Failures are classified by site: a template that cannot be read is a
//! local installation problem ([`TemplateUnavailable`]), a destination
//! that cannot be created is a caller mistake ([`DestinationUnwritable`]),
//! and a short write mid-transfer is a plain IO error. The template is
//! read in full before the destination is opened, so a missing template
//! never touches an existing destination file.
//!
//! [`TemplateUnavailable`]: crate::error::GenctemplateError::TemplateUnavailable
//! [`DestinationUnwritable`]: crate::error::GenctemplateError::DestinationUnwritable

use crate::error::{GenctemplateError, Result};
use crate::registry::{template_path, TemplateKind};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Copy `kind`'s template from `root` to `dest`, overwriting `dest`.
///
/// Returns the number of bytes written. Content is read fresh from disk
/// on every call; nothing is cached across invocations.
pub fn materialize(kind: TemplateKind, root: &Path, dest: &Path) -> Result<u64> {
    let source = template_path(kind, root);

    let content = fs::read(&source).map_err(|e| GenctemplateError::TemplateUnavailable {
        path: source.clone(),
        reason: e.to_string(),
    })?;
    tracing::debug!(template = %kind, bytes = content.len(), "read {}", source.display());

    let mut file = File::create(dest).map_err(|e| GenctemplateError::DestinationUnwritable {
        path: dest.to_path_buf(),
        reason: e.to_string(),
    })?;

    // write_all surfaces a short write as ErrorKind::WriteZero; the
    // destination is left as the storage layer left it.
    file.write_all(&content)?;
    tracing::debug!(bytes = content.len(), "wrote {}", dest.display());

    Ok(content.len() as u64)
}
