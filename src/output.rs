//! Output writing: persist the rendered bitmap to its destination path.

use crate::rendering::Bitmap;
use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Completion metadata for one written artifact
#[derive(Debug, Clone)]
pub struct OutputArtifact {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    pub bytes_written: usize,
}

/// Write the bitmap to `path`, overwriting any existing file.
///
/// Parent directories are created on demand; any other failure is fatal with
/// no retry and no alternate path.
pub fn write_bitmap(bitmap: &Bitmap, path: &Path) -> Result<OutputArtifact> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Write(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
    }
    std::fs::write(path, &bitmap.png_data)
        .map_err(|e| Error::Write(format!("cannot write {}: {}", path.display(), e)))?;
    log::debug!("wrote {} bytes to {}", bitmap.png_data.len(), path.display());

    Ok(OutputArtifact {
        path: path.to_path_buf(),
        width: bitmap.width,
        height: bitmap.height,
        bytes_written: bitmap.png_data.len(),
    })
}
