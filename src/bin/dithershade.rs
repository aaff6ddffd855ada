use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use dithershade::{
    Configuration, DriverOpts, FrameDriver, FrameState, IntervalTicker, PngSequenceSurface,
    RenderThreading, Renderer, decode_image, output_canvas, presets,
};

#[derive(Parser, Debug)]
#[command(name = "dithershade", version)]
struct Cli {
    /// Log per-frame timing.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Run the live loop for a while and write the frames as a PNG sequence.
    Run(RunArgs),
    /// List the built-in palettes.
    Palettes,
    /// Print the default configuration as JSON.
    Defaults,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Configuration JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source image (PNG, JPEG or WEBP).
    #[arg(long)]
    image: Option<PathBuf>,

    /// Elapsed time in seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f64,

    /// Normalized pointer position `x,y` (y = 0 at the bottom).
    #[arg(long, value_parser = parse_pointer)]
    pointer: Option<(f64, f64)>,

    /// Canvas side for generator frames.
    #[arg(long, default_value_t = 800)]
    size: u32,

    /// Shade rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Configuration JSON; defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source image (PNG, JPEG or WEBP).
    #[arg(long)]
    image: Option<PathBuf>,

    /// Wall-clock seconds to run.
    #[arg(long, default_value_t = 2.0)]
    seconds: f64,

    /// Tick rate.
    #[arg(long, default_value_t = IntervalTicker::DEFAULT_HZ)]
    fps: f64,

    /// Canvas side for generator frames.
    #[arg(long, default_value_t = 800)]
    size: u32,

    /// Write every Nth frame.
    #[arg(long, default_value_t = 1)]
    every: u32,

    /// Shade rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Output directory for `frame_NNNNN.png`.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Run(args) => cmd_run(args),
        Command::Palettes => cmd_palettes(),
        Command::Defaults => cmd_defaults(),
    }
}

fn parse_pointer(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{s}'"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("pointer x: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("pointer y: {e}"))?;
    Ok((x, y))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Configuration> {
    match path {
        Some(p) => Ok(Configuration::from_path(p)?),
        None => Ok(Configuration::default()),
    }
}

fn read_image_bytes(path: &Path) -> anyhow::Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let image = match &args.image {
        Some(p) => Some(
            decode_image(&read_image_bytes(p)?)
                .with_context(|| format!("decode image '{}'", p.display()))?,
        ),
        None => None,
    };

    let mut state = FrameState::at(args.time);
    if let Some((x, y)) = args.pointer {
        state = state.with_pointer(x, y);
    }
    let canvas = output_canvas(&config, image.as_ref(), args.size)?;
    let renderer = Renderer::new(RenderThreading {
        parallel: args.parallel,
        threads: args.threads,
    })?;
    let frame = renderer.render(&config, canvas, state, image.as_ref());

    ensure_parent(&args.out)?;
    frame.save_png(&args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let surface = PngSequenceSurface::new(&args.out_dir, args.every);
    let opts = DriverOpts {
        generator_resolution: args.size,
        threading: RenderThreading {
            parallel: args.parallel,
            threads: args.threads,
        },
    };
    let driver = FrameDriver::new(surface, config, opts);
    if let Some(p) = &args.image {
        driver
            .handles()
            .image
            .load_blocking(&read_image_bytes(p)?)
            .with_context(|| format!("decode image '{}'", p.display()))?;
    }

    let ticker = IntervalTicker::new(args.fps)?.with_limit(args.seconds)?;
    let running = driver.spawn(ticker)?;
    while !running.is_finished() {
        std::thread::sleep(Duration::from_millis(20));
    }
    let stopped = running.stop()?;
    let stats = stopped.stats();
    eprintln!(
        "rendered {} frames, wrote {} to {}",
        stats.frames_rendered,
        stopped.surface().written(),
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_palettes() -> anyhow::Result<()> {
    for p in presets() {
        let hex: Vec<String> = p
            .colors
            .iter()
            .map(|c| {
                let [r, g, b, _] = c.to_rgba8();
                format!("#{r:02x}{g:02x}{b:02x}")
            })
            .collect();
        println!("{:<30} {}", p.name, hex.join(" "));
    }
    Ok(())
}

fn cmd_defaults() -> anyhow::Result<()> {
    println!("{}", Configuration::default().to_json_string()?);
    Ok(())
}
