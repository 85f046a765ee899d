use std::path::Path;

use crate::encode::fs::write_atomic;
use crate::foundation::core::PixelBuffer;
use crate::foundation::error::{IconError, IconResult};

/// Edge lengths packed into `favicon.ico` unless configured otherwise.
pub const DEFAULT_ICO_SIZES: [u32; 3] = [16, 32, 48];

/// Largest edge an ICO directory entry can declare.
pub const MAX_ICO_EDGE: u32 = 256;

/// Check a list of container edge lengths: non-empty, within `1..=256`, no duplicates.
pub fn validate_ico_sizes(sizes: &[u32]) -> IconResult<()> {
    if sizes.is_empty() {
        return Err(IconError::invalid_container("ico size list is empty"));
    }
    for (i, &size) in sizes.iter().enumerate() {
        if size == 0 || size > MAX_ICO_EDGE {
            return Err(IconError::invalid_container(format!(
                "ico size {size} must be in 1..={MAX_ICO_EDGE}"
            )));
        }
        if sizes[..i].contains(&size) {
            return Err(IconError::invalid_container(format!(
                "ico size {size} listed more than once"
            )));
        }
    }
    Ok(())
}

/// Ordered, validated set of square images for one multi-size icon file.
#[derive(Debug)]
pub struct IconContainer<'a> {
    entries: Vec<&'a PixelBuffer>,
}

impl<'a> IconContainer<'a> {
    pub fn new(entries: impl IntoIterator<Item = &'a PixelBuffer>) -> IconResult<Self> {
        let entries: Vec<&PixelBuffer> = entries.into_iter().collect();
        if let Some(bad) = entries.iter().find(|e| !e.is_square()) {
            return Err(IconError::invalid_container(format!(
                "ico entry {}x{} is not square",
                bad.width(),
                bad.height()
            )));
        }
        let sizes: Vec<u32> = entries.iter().map(|e| e.width()).collect();
        validate_ico_sizes(&sizes)?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared edge length of each entry, in order.
    pub fn sizes(&self) -> Vec<u32> {
        self.entries.iter().map(|e| e.width()).collect()
    }

    /// Serialize every entry as an independent image inside one ICO directory.
    pub fn encode(&self) -> IconResult<Vec<u8>> {
        let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);
        for entry in &self.entries {
            let image = ico::IconImage::from_rgba_data(
                entry.width(),
                entry.height(),
                entry.as_raw().to_vec(),
            );
            let encoded = ico::IconDirEntry::encode(&image).map_err(|e| {
                IconError::encode(format!(
                    "ico entry {}x{} encode failed: {e}",
                    entry.width(),
                    entry.height()
                ))
            })?;
            icon_dir.add_entry(encoded);
        }

        let mut out = Vec::new();
        icon_dir
            .write(&mut out)
            .map_err(|e| IconError::encode(format!("ico directory write failed: {e}")))?;
        Ok(out)
    }
}

/// Pack `entries` into an in-memory ICO file.
pub fn encode_ico(entries: &[PixelBuffer]) -> IconResult<Vec<u8>> {
    IconContainer::new(entries)?.encode()
}

/// Pack `entries` into an ICO file written atomically to `path`.
pub fn encode_multi(entries: &[PixelBuffer], path: &Path) -> IconResult<()> {
    let container = IconContainer::new(entries)?;
    let bytes = container.encode()?;
    tracing::info!(
        path = %path.display(),
        sizes = ?container.sizes(),
        "writing ico"
    );
    write_atomic(path, &bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ico.rs"]
mod tests;
