use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::fs::{ensure_parent_dir, write_atomic};
use crate::foundation::error::IconResult;
use crate::pipeline::manifest::{AssetKind, AssetRequest};

/// Destination for encoded assets.
///
/// Ordering contract: `write_asset` is called in manifest order, once per request, between a
/// single `begin` and a single `end`. A failed write aborts the run; `end` is then not called.
pub trait AssetSink {
    /// Called once with the full request list before any asset is written.
    fn begin(&mut self, requests: &[AssetRequest]) -> IconResult<()>;
    /// Store the encoded bytes for one request.
    fn write_asset(&mut self, request: &AssetRequest, bytes: &[u8]) -> IconResult<()>;
    /// Called once after the last asset is written.
    fn end(&mut self) -> IconResult<()>;
}

/// Writes each asset atomically to its request path, creating the output directory on `begin`.
#[derive(Debug)]
pub struct DirSink {
    dir: PathBuf,
    bytes_written: u64,
}

impl DirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            bytes_written: 0,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

impl AssetSink for DirSink {
    fn begin(&mut self, requests: &[AssetRequest]) -> IconResult<()> {
        std::fs::create_dir_all(&self.dir).with_context(|| {
            format!("failed to create output directory '{}'", self.dir.display())
        })?;
        for request in requests {
            ensure_parent_dir(&request.path)?;
        }
        Ok(())
    }

    fn write_asset(&mut self, request: &AssetRequest, bytes: &[u8]) -> IconResult<()> {
        write_atomic(&request.path, bytes)?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    fn end(&mut self) -> IconResult<()> {
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    requests: Vec<AssetRequest>,
    assets: Vec<(AssetKind, Vec<u8>)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests announced in `begin`.
    pub fn requests(&self) -> &[AssetRequest] {
        &self.requests
    }

    /// Encoded assets in write order.
    pub fn assets(&self) -> &[(AssetKind, Vec<u8>)] {
        &self.assets
    }

    pub fn get(&self, kind: AssetKind) -> Option<&[u8]> {
        self.assets
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, bytes)| bytes.as_slice())
    }

    /// `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl AssetSink for InMemorySink {
    fn begin(&mut self, requests: &[AssetRequest]) -> IconResult<()> {
        self.requests = requests.to_vec();
        self.assets.clear();
        self.finished = false;
        Ok(())
    }

    fn write_asset(&mut self, request: &AssetRequest, bytes: &[u8]) -> IconResult<()> {
        self.assets.push((request.kind, bytes.to_vec()));
        Ok(())
    }

    fn end(&mut self) -> IconResult<()> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
