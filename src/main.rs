use anyhow::{Context, Result};
use chamfermap::{ChamferTransform, ChamferWeights, LogListener, DEFAULT_MASK_LABEL};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input binary image; pixels equal to the mask label are foreground
    input: PathBuf,

    /// Output distance map image
    #[arg(short, long, default_value = "distance.png")]
    output: PathBuf,

    /// Weight of an orthogonal unit step
    #[arg(long, default_value_t = 1.0)]
    ortho: f32,

    /// Weight of a diagonal unit step
    #[arg(long, default_value_t = std::f32::consts::SQRT_2)]
    diag: f32,

    /// Keep raw chamfer sums instead of normalizing by the orthogonal weight
    #[arg(long)]
    raw: bool,

    /// Pixel value that marks foreground
    #[arg(long, default_value_t = DEFAULT_MASK_LABEL)]
    mask_label: u8,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("Chamfermap starting");

    let mask = image::open(&args.input)
        .with_context(|| format!("Failed to open mask image at {}", args.input.display()))?
        .into_luma8();

    tracing::info!("Mask: {}x{}", mask.width(), mask.height());
    tracing::info!("Weights: ortho={}, diag={}", args.ortho, args.diag);

    let weights =
        ChamferWeights::new(args.ortho, args.diag).context("Invalid chamfer weights")?;
    let transform = ChamferTransform::new(weights)
        .normalize(!args.raw)
        .mask_label(args.mask_label);

    let start = Instant::now();
    let mut listener = LogListener::default();
    let map = transform
        .distance_map_with(&mask, &mut listener)
        .context("Failed to compute distance map")?;
    let elapsed = start.elapsed();

    let (_, max) = map.calibration();
    tracing::info!(
        "Distance map computed in {:.1}ms, max distance {:.3}",
        elapsed.as_secs_f64() * 1000.0,
        max
    );

    map.to_gray_image()
        .save(&args.output)
        .with_context(|| format!("Failed to write distance map to {}", args.output.display()))?;

    tracing::info!("Wrote {}", args.output.display());

    Ok(())
}
