use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use seedcut::capture::{ImageFileSource, IntensitySource};
use seedcut::output::{CutSink, PngSink};
use seedcut::segmentation::{
    self, Channel, CutMode, PixelCoord, Propagation, SeedBinding, SegmentationConfig, Segmenter,
};
use std::path::PathBuf;
use std::time::Instant;

/// Class kept in the output image
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Keep {
    /// Zero foreground pixels
    Background,
    /// Zero background pixels
    Foreground,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input image
    #[arg(short, long)]
    input: PathBuf,

    /// Path for the cut image
    #[arg(short, long, default_value = "cut.png")]
    output: PathBuf,

    /// Optional path for an original | cut comparison image
    #[arg(long)]
    comparison: Option<PathBuf>,

    /// Channel segmented
    #[arg(long, value_enum, default_value_t = Channel::Red)]
    channel: Channel,

    /// Foreground seed as ROW,COL
    #[arg(long)]
    source: Option<PixelCoord>,

    /// Background seed as ROW,COL
    #[arg(long)]
    sink: Option<PixelCoord>,

    /// Bandwidth of the unary term
    #[arg(long, default_value_t = 0.5)]
    sigma_unary: f32,

    /// Bandwidth of the pairwise term
    #[arg(long, default_value_t = 5.0)]
    sigma_pairwise: f32,

    /// Energy cutoff against the source for labeling foreground
    #[arg(long, default_value_t = 0.5)]
    foreground_threshold: f32,

    /// Energy cutoff against the sink for labeling background
    #[arg(long, default_value_t = 0.2)]
    background_threshold: f32,

    /// Class kept in the output
    #[arg(long, value_enum, default_value_t = Keep::Background)]
    keep: Keep,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn config(&self) -> SegmentationConfig {
        SegmentationConfig {
            sigma_unary: self.sigma_unary,
            sigma_pairwise: self.sigma_pairwise,
            foreground_threshold: self.foreground_threshold,
            background_threshold: self.background_threshold,
        }
    }

    fn cut_mode(&self) -> CutMode {
        match self.keep {
            Keep::Background => CutMode::SuppressForeground,
            Keep::Foreground => CutMode::SuppressBackground,
        }
    }

    fn seeds(&self) -> SeedBinding {
        let mut seeds = SeedBinding::new();
        if let Some(source) = self.source {
            seeds.bind_source(source);
        }
        if let Some(sink) = self.sink {
            seeds.bind_sink(sink);
        }
        seeds
    }
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

    tracing::info!("seedcut starting");

    let mut source = ImageFileSource::new(&args.input, args.channel);

    let mut sink = PngSink::new(&args.output);
    if let Some(path) = &args.comparison {
        sink = sink.with_comparison(path);
    }

    let mut segmenter = segmentation::create_default_segmenter(args.config(), args.cut_mode())
        .context("Invalid segmentation parameters")?;

    run_pipeline(&mut source, &mut sink, segmenter.as_mut(), &args.seeds())?;

    Ok(())
}

fn run_pipeline<S, O>(
    source: &mut S,
    sink: &mut O,
    segmenter: &mut dyn Segmenter,
    seeds: &SeedBinding,
) -> Result<()>
where
    S: IntensitySource,
    O: CutSink,
{
    let field = source.load().context("Failed to load intensity field")?;
    let (width, height) = source.resolution();

    if let Some((src, snk)) = seeds.pair() {
        tracing::info!("Seeds: source={}, sink={}", src, snk);
    } else {
        tracing::warn!("Both --source and --sink are needed; the image will not be segmented");
    }

    let segment_start = Instant::now();
    let result = segmenter
        .segment(&field, seeds)
        .context("Failed to segment image")?;
    let segment_ms = segment_start.elapsed().as_secs_f64() * 1000.0;

    match result.propagation {
        Propagation::Completed {
            foreground,
            background,
        } => tracing::info!(
            "Segmented {}x{} in {:.1}ms: foreground={}, background={}",
            width,
            height,
            segment_ms,
            foreground,
            background
        ),
        Propagation::Skipped => tracing::info!("Segmentation skipped, writing input unchanged"),
    }

    sink.write_cut(&field, &result.cut)
        .context("Failed to write output")?;

    Ok(())
}
