// Example runner: feeds a still image through the same path a camera frame takes.
// The image is encoded to NV21, sampled, and the closest named color is printed.

use anyhow::{Context, Result};
use clap::Parser;
use color_vision::core_modules::utils::image_helper::image_helper::load_nv21;
use color_vision::{ColorPipeline, PaletteKind, PipelineConfig, RegionPolicy, SampleRect};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Name the color at the centre of an image", long_about = None)]
struct Args {
    /// Image to sample (PNG, JPEG, ...)
    image: std::path::PathBuf,

    /// Explicit sample rectangle `x1,y1,x2,y2` (half-open); defaults to the centred view-port
    #[arg(short, long, value_parser = parse_rect)]
    rect: Option<SampleRect>,

    /// Size of the centred view-port, `WIDTHxHEIGHT`
    #[arg(short, long, value_parser = parse_size, default_value = "32x32")]
    sample: (u32, u32),

    /// Reference palette: `basic` or `shades`
    #[arg(short, long, default_value = "basic")]
    palette: PaletteKind,

    /// Clip rectangles that overhang the image instead of rejecting them
    #[arg(long)]
    clip: bool,

    /// Also list this many runner-up colors
    #[arg(short, long, default_value_t = 0)]
    alternatives: usize,
}

fn parse_rect(value: &str) -> std::result::Result<SampleRect, String> {
    let parts: Vec<u32> = value
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<std::result::Result<_, _>>()
        .map_err(|e| format!("invalid rectangle `{value}`: {e}"))?;
    match parts.as_slice() {
        [x1, y1, x2, y2] => Ok(SampleRect::new(*x1, *y1, *x2, *y2)),
        _ => Err(format!("rectangle `{value}` needs four values: x1,y1,x2,y2")),
    }
}

fn parse_size(value: &str) -> std::result::Result<(u32, u32), String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("size `{value}` must look like 32x32"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid size `{value}`: {e}"))
    };
    Ok((parse(width)?, parse(height)?))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let frame = load_nv21(&args.image)
        .with_context(|| format!("failed to load {}", args.image.display()))?;
    info!(width = frame.width, height = frame.height, "encoded image as NV21");

    let (sample_width, sample_height) = args.sample;
    let config = PipelineConfig::default()
        .with_frame_size(frame.width, frame.height)
        .with_sample_size(sample_width, sample_height)
        .with_palette(args.palette)
        .with_region_policy(if args.clip {
            RegionPolicy::Clip
        } else {
            RegionPolicy::Strict
        });
    let rect = args.rect.unwrap_or_else(|| config.sample_rect());
    let pipeline = ColorPipeline::new(config);

    let report = pipeline
        .classify_region(&frame.data, frame.width, frame.height, rect)
        .with_context(|| format!("failed to classify region {rect}"))?;

    println!("{}", report.display_name());
    println!("  hex:      {}", report.hex_code);
    println!(
        "  rgb:      ({}, {}, {})",
        report.averaged.red, report.averaged.green, report.averaged.blue
    );
    println!("  distance: {:.2}", report.distance);

    if args.alternatives > 0 {
        println!("  also close:");
        for candidate in pipeline
            .nearest(&report.averaged, args.alternatives + 1)
            .iter()
            .skip(1)
        {
            println!(
                "    {} {} ({:.2})",
                candidate.entry.display_name(),
                candidate.entry.color.hex_code(),
                candidate.distance
            );
        }
    }

    Ok(())
}
