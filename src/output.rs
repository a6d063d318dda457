//! PNG persistence
//!
//! Images are encoded in memory, written to a temp file next to the target
//! and renamed into place, so a failed save never leaves a truncated PNG at
//! the output path.

use std::io::{Cursor, Write};
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{GenerateError, Result};

pub fn save_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(GenerateError::MissingOutputDir(dir.to_path_buf()));
    }

    let mut encoded = Cursor::new(Vec::new());
    canvas.write_to(&mut encoded, ImageFormat::Png)?;
    let bytes = encoded.into_inner();

    let io_err = |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(&bytes).map_err(io_err)?;
    tmp.as_file().sync_all().map_err(io_err)?;

    // Temp files are created owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }

    tmp.persist(path).map_err(|e| GenerateError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
