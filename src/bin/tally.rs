//! tally: draw tally-mark illustrations from words and numbers.
//!
//! Run: `tally morse sos` for a terminal preview, or
//! `tally preset solar-system-ln -o solar.png` to write an image.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tally_viz::config::Config;
use tally_viz::normalize::Transform;
use tally_viz::output::{TerminalEncoder, TerminalMode};
use tally_viz::pipeline::{Illustration, Source};
use tally_viz::plots::TickChart;
use tally_viz::presets::Preset;

/// tally: baseline-and-tick illustrations
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Encode words and magnitudes as tally-mark illustrations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output file (.png or .svg); a directory for `demo`. Omit for a terminal preview
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Plain ASCII terminal preview
    #[arg(long, global = true)]
    ascii: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One tick per bit of each character code
    Binary {
        /// Word to encode
        word: String,
    },
    /// Morse code, with a gap between letters
    Morse {
        /// Word to encode (lowercase a-z)
        word: String,
    },
    /// Tick lengths proportional to the given values
    Magnitudes {
        /// Values to draw
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f32>,

        /// Transform applied before normalizing (linear, sqrt, log10, ln)
        #[arg(short, long, default_value = "linear")]
        transform: Transform,
    },
    /// A named example illustration
    Preset {
        /// Preset name, e.g. solar-system-ln
        name: Preset,
    },
    /// Draw every preset
    Demo,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let style = config.chart_style()?;

    match &cli.command {
        Command::Binary { word } => {
            draw(cli, &config.illustration(Source::Binary(word.clone()))?, style)
        }
        Command::Morse { word } => {
            draw(cli, &config.illustration(Source::Morse(word.clone()))?, style)
        }
        Command::Magnitudes { values, transform } => {
            let illustration =
                config.illustration(Source::Magnitudes(values.clone()))?.transform(*transform);
            draw(cli, &illustration, style)
        }
        Command::Preset { name } => {
            draw(cli, &name.illustration().normalizer(config.normalizer()?), style)
        }
        Command::Demo => demo(cli, &config, &style),
    }
}

/// File from `--config`, else the default location if present, else defaults.
/// `--width`/`--height` override the file.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => match Config::default_path().filter(|p| p.exists()) {
            Some(path) => Config::load(&path)?,
            None => Config::default(),
        },
    };

    if let Some(width) = cli.width {
        config.render.width = width;
    }
    if let Some(height) = cli.height {
        config.render.height = height;
    }
    Ok(config)
}

fn draw(cli: &Cli, illustration: &Illustration, style: TickChart) -> Result<()> {
    let chart = illustration
        .chart_with(style)
        .with_context(|| format!("drawing {}", illustration.source()))?;

    match &cli.output {
        Some(path) => write(&chart, path),
        None => preview(cli, &chart),
    }
}

fn write(chart: &TickChart, path: &Path) -> Result<()> {
    chart.render_to_file(path).with_context(|| format!("writing {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn preview(cli: &Cli, chart: &TickChart) -> Result<()> {
    let mode = if cli.ascii { TerminalMode::Ascii } else { TerminalMode::UnicodeHalfBlock };
    let fb = chart.to_framebuffer()?;
    TerminalEncoder::new().mode(mode).print(&fb)?;
    Ok(())
}

fn demo(cli: &Cli, config: &Config, style: &TickChart) -> Result<()> {
    let normalizer = config.normalizer()?;

    if let Some(dir) = &cli.output {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for preset in Preset::ALL {
        let chart =
            preset.illustration().normalizer(normalizer).chart_with(style.clone())?;
        match &cli.output {
            Some(dir) => write(&chart, &dir.join(format!("{preset}.png")))?,
            None => {
                println!("{preset}: {}", preset.description());
                preview(cli, &chart)?;
            }
        }
    }
    Ok(())
}
