use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{IconError, IconResult};

/// Create `path`'s parent directory (and ancestors) when missing.
pub fn ensure_parent_dir(path: &Path) -> IconResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| {
            format!("failed to create output directory '{}'", parent.display())
        })?;
    }
    Ok(())
}

struct TempFileGuard(Option<PathBuf>);

impl TempFileGuard {
    fn disarm(&mut self) {
        self.0 = None;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

fn temp_sibling(path: &Path) -> IconResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| IconError::encode(format!("'{}' has no file name", path.display())))?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(".{}.tmp", std::process::id()));
    Ok(path.with_file_name(tmp_name))
}

/// Write `bytes` to a hidden sibling of `path`, then rename it into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> IconResult<()> {
    let tmp = temp_sibling(path)?;
    let mut guard = TempFileGuard(Some(tmp.clone()));

    std::fs::write(&tmp, bytes)
        .map_err(|e| IconError::encode(format!("write '{}': {e}", path.display())))?;
    std::fs::rename(&tmp, path)
        .map_err(|e| IconError::encode(format!("replace '{}': {e}", path.display())))?;

    guard.disarm();
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/fs.rs"]
mod tests;
