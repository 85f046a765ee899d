use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::encode::ico::{DEFAULT_ICO_SIZES, validate_ico_sizes};
use crate::foundation::core::{PaddingSpec, Rgba8};
use crate::foundation::error::{IconError, IconResult};

/// The fixed set of assets derived from one source image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AssetKind {
    AdaptiveIcon,
    SplashIcon,
    Favicon,
    /// Multi-size favicon container.
    FaviconIco,
}

impl AssetKind {
    /// Fixed file name inside the output directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::AdaptiveIcon => "adaptive-icon.png",
            Self::SplashIcon => "splash-icon.png",
            Self::Favicon => "favicon.png",
            Self::FaviconIco => "favicon.ico",
        }
    }

    /// Name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::AdaptiveIcon => "adaptive-icon",
            Self::SplashIcon => "splash-icon",
            Self::Favicon => "favicon",
            Self::FaviconIco => "favicon-ico",
        }
    }
}

/// How a request's pixels are serialized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetFormat {
    /// One lossless RGBA PNG at `spec.size`.
    Png,
    /// One ICO container with an entry per edge length, all padded alike.
    Ico { sizes: Vec<u32> },
}

/// One output asset: what to produce, where, and with which padding.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetRequest {
    pub kind: AssetKind,
    pub path: PathBuf,
    /// For [`AssetFormat::Ico`] `spec.size` is the largest entry; each entry reuses the padding
    /// ratio and background.
    pub spec: PaddingSpec,
    pub format: AssetFormat,
}

/// Size and padding ratio of one single-frame asset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssetSpec {
    pub size: u32,
    pub padding: f64,
}

impl AssetSpec {
    pub const fn new(size: u32, padding: f64) -> Self {
        Self { size, padding }
    }
}

/// Default adaptive icon: 1024px with 12% padding per side.
pub const DEFAULT_ADAPTIVE: AssetSpec = AssetSpec::new(1024, 0.12);
/// Default splash icon: 1024px with 8% padding per side.
pub const DEFAULT_SPLASH: AssetSpec = AssetSpec::new(1024, 0.08);
/// Default favicon: 48px, unpadded.
pub const DEFAULT_FAVICON: AssetSpec = AssetSpec::new(48, 0.0);

/// Everything the pipeline needs to know about the assets to derive.
///
/// Loadable from JSON; missing keys take the built-in defaults, unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub adaptive: AssetSpec,
    pub splash: AssetSpec,
    pub favicon: AssetSpec,
    /// Also emit `favicon.ico`.
    pub favicon_ico: bool,
    pub ico_sizes: Vec<u32>,
    pub background: Rgba8,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            adaptive: DEFAULT_ADAPTIVE,
            splash: DEFAULT_SPLASH,
            favicon: DEFAULT_FAVICON,
            favicon_ico: false,
            ico_sizes: DEFAULT_ICO_SIZES.to_vec(),
            background: Rgba8::transparent(),
        }
    }
}

impl Manifest {
    pub fn from_json_str(s: &str) -> IconResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| IconError::invalid_spec(format!("manifest json: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> IconResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            IconError::invalid_spec(format!("read manifest '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text).map_err(|e| match e {
            IconError::InvalidSpec(msg) => {
                IconError::invalid_spec(format!("'{}': {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Validate every parameter and expand into ordered requests rooted at `output_dir`.
    ///
    /// Order is adaptive icon, splash icon, favicon, then the optional ICO container.
    pub fn requests(&self, output_dir: &Path) -> IconResult<Vec<AssetRequest>> {
        let mut out = Vec::with_capacity(4);
        for (kind, asset) in [
            (AssetKind::AdaptiveIcon, self.adaptive),
            (AssetKind::SplashIcon, self.splash),
            (AssetKind::Favicon, self.favicon),
        ] {
            out.push(AssetRequest {
                kind,
                path: output_dir.join(kind.file_name()),
                spec: self.padding_spec(kind, asset)?,
                format: AssetFormat::Png,
            });
        }

        if self.favicon_ico {
            let kind = AssetKind::FaviconIco;
            validate_ico_sizes(&self.ico_sizes)?;
            let largest = self.ico_sizes.iter().copied().max().unwrap_or(0);
            out.push(AssetRequest {
                kind,
                path: output_dir.join(kind.file_name()),
                spec: self.padding_spec(kind, AssetSpec::new(largest, self.favicon.padding))?,
                format: AssetFormat::Ico {
                    sizes: self.ico_sizes.clone(),
                },
            });
        }
        Ok(out)
    }

    fn padding_spec(&self, kind: AssetKind, asset: AssetSpec) -> IconResult<PaddingSpec> {
        PaddingSpec::new(asset.size, asset.padding)
            .map(|spec| spec.with_background(self.background))
            .map_err(|e| match e {
                IconError::InvalidSpec(msg) => {
                    IconError::invalid_spec(format!("{}: {msg}", kind.name()))
                }
                other => other,
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/manifest.rs"]
mod tests;
