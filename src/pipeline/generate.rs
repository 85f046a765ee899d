use std::path::PathBuf;

use rayon::prelude::*;

use crate::assets::decode::decode;
use crate::encode::ico::encode_ico;
use crate::encode::png::encode_png;
use crate::encode::sink::{AssetSink, DirSink};
use crate::foundation::core::{PaddingSpec, PixelBuffer};
use crate::foundation::error::{IconError, IconResult};
use crate::pipeline::manifest::{AssetFormat, AssetKind, AssetRequest, Manifest};
use crate::resize::padded::pad_resize_with;
use crate::resize::resample::{LanczosResampler, Resampler};

/// Inputs for one pipeline run.
#[derive(Clone, Debug)]
pub struct GenerateOpts {
    /// Source raster, decoded exactly once.
    pub input: PathBuf,
    /// Directory receiving every asset under its fixed file name.
    pub output_dir: PathBuf,
    pub manifest: Manifest,
    /// Render assets on a dedicated rayon pool before writing them in manifest order.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            input: PathBuf::from("./assets/icon.png"),
            output_dir: PathBuf::from("./assets"),
            manifest: Manifest::default(),
            parallel: false,
            threads: None,
        }
    }
}

/// Summary of a successful run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateStats {
    pub source_width: u32,
    pub source_height: u32,
    /// Assets in write order.
    pub assets: Vec<(AssetKind, PathBuf)>,
    /// Total encoded bytes handed to the sink.
    pub bytes_written: u64,
}

/// Run the manifest and write every asset into `opts.output_dir`.
pub fn generate_to_dir(opts: &GenerateOpts) -> IconResult<GenerateStats> {
    let mut sink = DirSink::new(&opts.output_dir);
    generate(opts, &mut sink)
}

/// Run the manifest with the default Lanczos resampler.
pub fn generate(opts: &GenerateOpts, sink: &mut dyn AssetSink) -> IconResult<GenerateStats> {
    generate_with(opts, sink, &LanczosResampler)
}

/// Decode the source once, then resize and encode each requested asset into `sink`.
///
/// Stops at the first error; assets already handed to the sink stay written.
#[tracing::instrument(skip(opts, sink, resampler), fields(input = %opts.input.display()))]
pub fn generate_with(
    opts: &GenerateOpts,
    sink: &mut dyn AssetSink,
    resampler: &dyn Resampler,
) -> IconResult<GenerateStats> {
    let requests = opts.manifest.requests(&opts.output_dir)?;
    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };

    let src = decode(&opts.input)?;
    let mut stats = GenerateStats {
        source_width: src.width(),
        source_height: src.height(),
        ..GenerateStats::default()
    };

    sink.begin(&requests)?;
    match pool {
        Some(pool) => {
            let rendered = pool.install(|| {
                requests
                    .par_iter()
                    .map(|request| render_asset(&src, request, resampler))
                    .collect::<Vec<_>>()
            });
            for (request, bytes) in requests.iter().zip(rendered) {
                write_one(sink, request, &bytes?, &mut stats)?;
            }
        }
        None => {
            for request in &requests {
                let bytes = render_asset(&src, request, resampler)?;
                write_one(sink, request, &bytes, &mut stats)?;
            }
        }
    }
    sink.end()?;

    Ok(stats)
}

/// Resize and encode one request into its final file bytes.
pub fn render_asset(
    src: &PixelBuffer,
    request: &AssetRequest,
    resampler: &dyn Resampler,
) -> IconResult<Vec<u8>> {
    match &request.format {
        AssetFormat::Png => {
            let buf = pad_resize_with(src, &request.spec, resampler)?;
            encode_png(&buf)
        }
        AssetFormat::Ico { sizes } => {
            let entries = sizes
                .iter()
                .map(|&size| {
                    let spec = PaddingSpec {
                        size,
                        ..request.spec
                    };
                    pad_resize_with(src, &spec, resampler)
                })
                .collect::<IconResult<Vec<_>>>()?;
            encode_ico(&entries)
        }
    }
}

fn write_one(
    sink: &mut dyn AssetSink,
    request: &AssetRequest,
    bytes: &[u8],
    stats: &mut GenerateStats,
) -> IconResult<()> {
    tracing::info!(
        asset = request.kind.name(),
        path = %request.path.display(),
        size = request.spec.size,
        bytes = bytes.len(),
        "writing asset"
    );
    sink.write_asset(request, bytes)?;
    stats.assets.push((request.kind, request.path.clone()));
    stats.bytes_written += bytes.len() as u64;
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> IconResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(IconError::invalid_spec("'threads' must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| IconError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/generate.rs"]
mod tests;
