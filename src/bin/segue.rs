use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use segue::{Ease, Effect, EffectSpec, Frame, SequenceOpts, parse_effect};

#[derive(Parser, Debug)]
#[command(name = "segue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single transition frame as a PNG.
    Frame(FrameArgs),
    /// Render a whole transition as numbered PNGs.
    Sequence(SequenceArgs),
}

#[derive(Args, Debug)]
struct EffectArgs {
    /// Image shown at progress 0.
    #[arg(long)]
    from: PathBuf,

    /// Image shown at progress 1 (same size as `--from`).
    #[arg(long)]
    to: PathBuf,

    /// Effect kind: dissolve, wipe, slide, pixelate, tile_dissolve.
    #[arg(long, default_value = "dissolve")]
    effect: String,

    /// Effect parameters as a JSON object, e.g. '{"dir":"rtl"}'.
    #[arg(long)]
    params: Option<String>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    effect: EffectArgs,

    /// Transition progress in [0, 1].
    #[arg(long, allow_hyphen_values = true)]
    progress: f32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    effect: EffectArgs,

    /// Number of frames, first at progress 0 and last at progress 1.
    #[arg(long, default_value_t = 30)]
    frames: u32,

    /// Easing curve applied to the progress samples.
    #[arg(long, default_value = "linear")]
    ease: Ease,

    /// Render frames in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory for `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (effect, source, destination) = load_inputs(&args.effect)?;
    let frame = effect.render(&source, &destination, args.progress)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let (effect, source, destination) = load_inputs(&args.effect)?;
    let opts = SequenceOpts {
        frames: args.frames,
        ease: args.ease,
        parallel: args.parallel,
        threads: args.threads,
    };
    let frames = segue::render_sequence(&effect, &source, &destination, &opts)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    for (i, frame) in frames.iter().enumerate() {
        write_png(&args.out_dir.join(format!("frame_{i:04}.png")), frame)?;
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}

fn load_inputs(args: &EffectArgs) -> anyhow::Result<(segue::EffectKind, Frame, Frame)> {
    let params = match &args.params {
        None => serde_json::Value::Null,
        Some(json) => serde_json::from_str(json).context("parse --params JSON")?,
    };
    let spec = EffectSpec {
        kind: args.effect.clone(),
        params,
    };
    let effect = parse_effect(&spec)?;
    let source = load_frame(&args.from)?;
    let destination = load_frame(&args.to)?;
    tracing::info!(
        effect = effect.name(),
        width = source.width(),
        height = source.height(),
        "inputs loaded"
    );
    Ok((effect, source, destination))
}

fn load_frame(path: &Path) -> anyhow::Result<Frame> {
    let img = image::open(path).with_context(|| format!("decode image '{}'", path.display()))?;
    Ok(Frame::from_image(&img)?)
}

fn write_png(path: &Path, frame: &Frame) -> anyhow::Result<()> {
    image::save_buffer_with_format(
        path,
        &frame.to_rgba8(),
        frame.width(),
        frame.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
