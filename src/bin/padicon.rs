use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing::Level;

/// Generate favicon, adaptive icon and splash icon from a source image.
///
/// Example: padicon --input ./assets/icon.png --output ./assets --favicon-ico -v
#[derive(Parser, Debug)]
#[command(name = "padicon", version)]
struct Cli {
    /// Source raster image.
    #[arg(long, default_value = "./assets/icon.png")]
    input: PathBuf,

    /// Output directory (created if absent).
    #[arg(long, default_value = "./assets")]
    output: PathBuf,

    /// JSON manifest with asset sizes, paddings and background; flags override it.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Adaptive icon edge length [default: 1024].
    #[arg(long)]
    adaptive_size: Option<u32>,

    /// Splash icon edge length [default: 1024].
    #[arg(long)]
    splash_size: Option<u32>,

    /// Favicon edge length [default: 48].
    #[arg(long)]
    favicon_size: Option<u32>,

    /// Adaptive icon padding ratio per side, in [0, 0.5) [default: 0.12].
    #[arg(long)]
    adaptive_padding: Option<f64>,

    /// Splash icon padding ratio per side, in [0, 0.5) [default: 0.08].
    #[arg(long)]
    splash_padding: Option<f64>,

    /// Favicon padding ratio per side, in [0, 0.5); also used for favicon.ico [default: 0.0].
    #[arg(long)]
    favicon_padding: Option<f64>,

    /// Also write favicon.ico containing several sizes.
    #[arg(long)]
    favicon_ico: bool,

    /// Edge lengths packed into favicon.ico [default: 16,32,48].
    #[arg(long, value_delimiter = ',')]
    ico_sizes: Option<Vec<u32>>,

    /// Canvas background as #RRGGBB, #RRGGBBAA or `transparent` [default: transparent].
    #[arg(long)]
    background: Option<padicon::Rgba8>,

    /// Render assets in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Increase logging verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let opts = build_opts(cli)?;
    let stats = padicon::generate_to_dir(&opts)
        .with_context(|| format!("generate icons from '{}'", opts.input.display()))?;

    for (_, path) in &stats.assets {
        eprintln!("wrote {}", path.display());
    }
    tracing::info!(
        assets = stats.assets.len(),
        bytes = stats.bytes_written,
        "All assets generated successfully"
    );
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn build_opts(cli: Cli) -> anyhow::Result<padicon::GenerateOpts> {
    let mut manifest = match &cli.config {
        Some(path) => padicon::Manifest::from_path(path)?,
        None => padicon::Manifest::default(),
    };

    if let Some(size) = cli.adaptive_size {
        manifest.adaptive.size = size;
    }
    if let Some(size) = cli.splash_size {
        manifest.splash.size = size;
    }
    if let Some(size) = cli.favicon_size {
        manifest.favicon.size = size;
    }
    if let Some(padding) = cli.adaptive_padding {
        manifest.adaptive.padding = padding;
    }
    if let Some(padding) = cli.splash_padding {
        manifest.splash.padding = padding;
    }
    if let Some(padding) = cli.favicon_padding {
        manifest.favicon.padding = padding;
    }
    if cli.favicon_ico {
        manifest.favicon_ico = true;
    }
    if let Some(sizes) = cli.ico_sizes {
        manifest.ico_sizes = sizes;
    }
    if let Some(background) = cli.background {
        manifest.background = background;
    }

    tracing::debug!(?manifest, "resolved manifest");
    Ok(padicon::GenerateOpts {
        input: cli.input,
        output_dir: cli.output,
        manifest,
        parallel: cli.parallel,
        threads: cli.threads,
    })
}
