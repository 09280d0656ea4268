//! Output sink: writes a dashboard document to disk as indented JSON.
//!
//! The document is encoded in memory first, then written to a temporary file
//! beside the destination and renamed into place. A failed run never leaves a
//! truncated dashboard at the destination path.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::dashboard::DashboardDocument;

/// Destination file name, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "grafana_dashboard.json";

/// Requested mode for the written file, before the process umask applies.
#[cfg(unix)]
const OUTPUT_MODE: u32 = 0o644;

/// Errors produced while persisting a dashboard.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The temporary file next to the destination could not be created.
    #[error("failed to create output file in {}: {source}", dir.display())]
    Create {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be encoded as JSON.
    #[error("failed to encode dashboard: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing or flushing the encoded bytes failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The finished file could not be moved over the destination.
    #[error("failed to move output into place at {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encode a dashboard as JSON with 2-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns [`WriteError::Encode`] if serialization fails.
pub fn render_json(dashboard: &DashboardDocument) -> Result<String, WriteError> {
    let mut rendered = serde_json::to_string_pretty(dashboard)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write `dashboard` to `path`, replacing any existing file atomically.
///
/// # Errors
///
/// Returns a [`WriteError`] naming the failed stage. On error the destination
/// is left as it was and the temporary file is removed.
pub fn write_dashboard(path: &Path, dashboard: &DashboardDocument) -> Result<(), WriteError> {
    let rendered = render_json(dashboard)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut file = create_temp_in(&dir).map_err(|source| WriteError::Create { dir: dir.clone(), source })?;
    file.write_all(rendered.as_bytes())
        .and_then(|()| file.as_file().sync_all())
        .map_err(|source| WriteError::Write { path: file.path().to_path_buf(), source })?;

    file.persist(path)
        .map_err(|error| WriteError::Persist { path: path.to_path_buf(), source: error.error })?;

    tracing::info!(path = %path.display(), panels = dashboard.panels.len(), bytes = rendered.len(), "wrote dashboard");
    Ok(())
}

// tempfile defaults to 0600; the dashboard gets the usual 0644 (umask applies).
#[cfg(unix)]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(std::fs::Permissions::from_mode(OUTPUT_MODE))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

#[cfg(test)]
#[path = "output_test.rs"]
mod tests;
