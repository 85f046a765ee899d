//! padicon derives a fixed set of platform icon assets from one source raster image.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: `path -> PixelBuffer` (straight RGBA8), exactly once per run
//! 2. **Pad + resize**: `PixelBuffer + PaddingSpec -> PixelBuffer`, the source scaled uniformly
//!    into the padded interior of a square canvas, centered and alpha-composited
//! 3. **Encode**: lossless PNG per asset, plus an optional multi-size ICO container
//! 4. **Write**: through an [`AssetSink`]; [`DirSink`] writes atomically into a directory
//!
//! The default manifest produces `adaptive-icon.png` (1024px, 12% padding), `splash-icon.png`
//! (1024px, 8% padding), `favicon.png` (48px, unpadded) and, on request, `favicon.ico` with
//! 16/32/48px entries.
#![forbid(unsafe_code)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod pipeline;
mod resize;

pub use assets::decode::{decode, decode_image};
pub use effects::composite::{StraightRgba8, over, over_at};
pub use encode::fs::{ensure_parent_dir, write_atomic};
pub use encode::ico::{
    DEFAULT_ICO_SIZES, IconContainer, MAX_ICO_EDGE, encode_ico, encode_multi, validate_ico_sizes,
};
pub use encode::png::{encode_png, encode_single};
pub use encode::sink::{AssetSink, DirSink, InMemorySink};
pub use foundation::core::{PaddingSpec, PixelBuffer, Rgba8};
pub use foundation::error::{IconError, IconResult};
pub use pipeline::generate::{
    GenerateOpts, GenerateStats, generate, generate_to_dir, generate_with, render_asset,
};
pub use pipeline::manifest::{
    AssetFormat, AssetKind, AssetRequest, AssetSpec, DEFAULT_ADAPTIVE, DEFAULT_FAVICON,
    DEFAULT_SPLASH, Manifest,
};
pub use resize::padded::{PadLayout, pad_layout, pad_resize, pad_resize_with};
pub use resize::resample::{LanczosResampler, Resampler};
