//! raster-lab: interactive rasterization demos in the terminal.
//!
//! Run: `raster-lab` (interactive), `raster-lab snapshot --demo circles`,
//! `raster-lab preview --demo clipping`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use raster_lab::app::App;
use raster_lab::config::Config;
use raster_lab::logging::{self, LogTarget};
use raster_lab::prelude::*;

/// raster-lab: Bresenham lines, midpoint circles and Liang-Barsky clipping
#[derive(Parser, Debug)]
#[command(name = "raster-lab")]
#[command(version)]
#[command(about = "Interactive rasterization demos", long_about = None)]
struct Cli {
    /// Config file path (default: <config dir>/raster-lab/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log file for the interactive mode
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open the interactive demo (default)
    Run {
        /// Demo to start with
        #[arg(short, long, value_parser = parse_demo)]
        demo: Option<Demo>,
    },
    /// Render one demo to a PNG file
    Snapshot {
        /// Demo to render
        #[arg(short, long, value_parser = parse_demo, default_value = "lines")]
        demo: Demo,
        /// Output path
        #[arg(short, long, default_value = "raster-lab.png")]
        out: PathBuf,
        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
    /// Print one demo to stdout as colored text
    Preview {
        /// Demo to render
        #[arg(short, long, value_parser = parse_demo, default_value = "lines")]
        demo: Demo,
        /// Output width in terminal columns
        #[arg(long, default_value = "80")]
        columns: u32,
        /// Plain ASCII instead of colored half-blocks
        #[arg(long)]
        ascii: bool,
        /// Width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
}

fn parse_demo(s: &str) -> std::result::Result<Demo, String> {
    s.parse().map_err(|e: raster_lab::Error| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::resolve(cli.config.as_deref()).context("loading configuration")?;

    match cli.command.unwrap_or(Command::Run { demo: None }) {
        Command::Run { demo } => {
            let path = cli.log_file.unwrap_or_else(logging::default_log_file);
            let _guard = logging::init(&config.global.log_level, &LogTarget::File(path.clone()))
                .with_context(|| format!("opening log file {}", path.display()))?;
            if let Some(demo) = demo {
                config.global.demo = demo;
            }
            App::new(config).run().context("running interactive demo")?;
        }
        Command::Snapshot { demo, out, width, height } => {
            let _guard = logging::init(&config.global.log_level, &LogTarget::Stderr)?;
            let fb = render_demo(&config, demo, width, height)?;
            PngEncoder::new()
                .title(demo.title())
                .write_to_file(&fb, &out)
                .with_context(|| format!("writing {}", out.display()))?;
            tracing::info!(%demo, path = %out.display(), "snapshot written");
        }
        Command::Preview { demo, columns, ascii, width, height } => {
            let _guard = logging::init(&config.global.log_level, &LogTarget::Stderr)?;
            let fb = render_demo(&config, demo, width, height)?;
            let mode = if ascii { TerminalMode::Ascii } else { TerminalMode::HalfBlock };
            let text = TerminalEncoder::new()
                .mode(mode)
                .columns(columns)
                .background(demo.background())
                .render(&fb);
            print!("{text}");
        }
    }

    Ok(())
}

/// Render `demo` headless at the configured size, with optional overrides.
fn render_demo(
    config: &Config,
    demo: Demo,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<Framebuffer> {
    let base = config.bounds();
    let bounds = DisplayBounds::new(
        width.unwrap_or(base.width()),
        height.unwrap_or(base.height()),
    );
    let mut scenes = Scenes::new(&config.scene_settings(), bounds);
    scenes.select(demo);

    let mut fb = Framebuffer::for_bounds(bounds).context("allocating framebuffer")?;
    scenes.render(&mut fb);

    let stats = fb.stats(demo.background());
    tracing::info!(
        %demo,
        width = bounds.width(),
        height = bounds.height(),
        drawn = stats.drawn,
        coverage = format_args!("{:.1}%", stats.drawn_fraction() * 100.0),
        luma_min = stats.min_luma,
        luma_max = stats.max_luma,
        luma_mean = stats.mean_luma,
        backend = ?stats.backend,
        "rendered"
    );
    if stats.is_blank() {
        tracing::warn!(%demo, "scene drew nothing; check the configured sizes");
    }
    Ok(fb)
}
