//! Headless runner for the demo scene.
//!
//! Steps the demo at a fixed (or wall-clock) interval, renders every tick
//! into a recording surface, and optionally writes the particle trajectory
//! as JSON.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use tween_canvas::animation::DrawableState;
use tween_canvas::demo::DemoScene;
use tween_canvas::error::MotionError;
use tween_canvas::options::Options;
use tween_canvas::renderer::recording::RecordingSurface;
use tween_canvas::util::frame_timing::FrameTiming;

/// Run the tween-canvas demo without a browser
#[derive(Parser, Debug)]
#[command(name = "tween-canvas")]
#[command(about = "Run the tween-canvas demo scene headless")]
#[command(version)]
struct Args {
    /// Options preset (TOML)
    #[arg(short, long)]
    options: Option<PathBuf>,

    /// Scene time to simulate, in milliseconds
    #[arg(short, long, default_value = "10000")]
    duration_ms: f64,

    /// Tick interval in milliseconds (overrides the preset)
    #[arg(long)]
    step_ms: Option<f64>,

    /// Canvas width in CSS pixels
    #[arg(long, default_value = "800")]
    width: f64,

    /// Canvas height in CSS pixels
    #[arg(long, default_value = "600")]
    height: f64,

    /// Device pixels per CSS pixel
    #[arg(long, default_value = "1")]
    pixel_ratio: f64,

    /// Sleep between ticks and feed the measured wall-clock time
    #[arg(long)]
    realtime: bool,

    /// Write the particle state after every tick to this JSON file
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Write the options JSON schema to this file and exit
    #[arg(long)]
    schema: Option<PathBuf>,
}

#[derive(Serialize)]
struct TraceSample {
    t: f64,
    #[serde(flatten)]
    state: DrawableState,
}

fn write_json<T: Serialize>(
    path: &Path,
    value: &T,
) -> Result<(), MotionError> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value).map_err(std::io::Error::from)?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn run(args: &Args) -> Result<(), MotionError> {
    if let Some(path) = &args.schema {
        return write_json(path, &Options::json_schema());
    }

    let mut options = match &args.options {
        Some(path) => {
            log::info!("Loading options from {}", path.display());
            Options::load(path)?
        }
        None => Options::default(),
    };
    if let Some(step_ms) = args.step_ms {
        options.frame.step_ms = step_ms;
    }
    options.validate()?;
    let step_ms = options.frame.step_ms;

    let mut scene = DemoScene::new(&options, args.width, args.height);
    let mut surface = RecordingSurface::new();
    let mut clock = FrameTiming::new();
    let mut trace = Vec::new();
    let mut draw_calls = 0usize;

    log::info!(
        "Running {} ms of scene time at {step_ms} ms per tick{}",
        args.duration_ms,
        if args.realtime { " (realtime)" } else { "" }
    );
    while scene.clock() < args.duration_ms {
        let elapsed = if args.realtime {
            std::thread::sleep(Duration::from_secs_f64(step_ms / 1000.0));
            clock.tick()
        } else {
            let _ = clock.tick();
            step_ms
        };
        scene.step(elapsed)?;

        surface.clear();
        scene.render(&mut surface, args.pixel_ratio)?;
        draw_calls += surface.calls().len();

        if args.trace.is_some() {
            trace.push(TraceSample {
                t: scene.clock(),
                state: scene.particle.state.clone(),
            });
        }
    }

    let p = &scene.particle.state;
    log::info!(
        "{} ticks, {draw_calls} draw calls, callback fired {} time(s)",
        clock.ticks(),
        scene.callbacks_fired()
    );
    log::info!(
        "Particle at ({:.1}, {:.1}), scale {:.2}, rotate {:.3}, fill {}",
        p.x,
        p.y,
        p.scale,
        p.rotate,
        p.fill_color.to_css()
    );
    if args.realtime {
        log::info!("{:.1} fps", clock.fps());
    }

    if let Some(path) = &args.trace {
        write_json(path, &trace)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
