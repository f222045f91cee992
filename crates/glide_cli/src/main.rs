//! Glide CLI
//!
//! Drive the animation core from a terminal: play the sweep demo and inspect
//! easing curves.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glide_animation::Easing;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;
mod curves;
mod demo;

use config::{DemoOverrides, GlideConfig, DEFAULT_CONFIG_FILE};

#[derive(Parser)]
#[command(name = "glide")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Glide animation CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep a marker across a text track
    Run {
        /// Easing curve (e.g. easeInOutCubic, ease_out_sine)
        #[arg(short, long)]
        easing: Option<Easing>,

        /// Seconds per sweep
        #[arg(short, long)]
        duration: Option<f32>,

        /// Frames per second
        #[arg(long)]
        fps: Option<u32>,

        /// Track width in columns
        #[arg(short, long)]
        width: Option<usize>,

        /// Number of sweeps
        #[arg(short, long)]
        cycles: Option<u32>,

        /// Pace frames to wall-clock time and redraw in place
        #[arg(long)]
        realtime: bool,

        /// Config file (defaults to ./glide.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print sampled values of one curve, or all of them
    Curves {
        /// Curve name
        name: Option<Easing>,

        /// Number of samples between 0 and 1 inclusive
        #[arg(short, long, default_value = "11")]
        samples: usize,
    },

    /// List available easing curves
    List,

    /// Write a glide.toml with default settings in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            easing,
            duration,
            fps,
            width,
            cycles,
            realtime,
            config,
        } => {
            let overrides = DemoOverrides {
                easing,
                duration,
                fps,
                width,
                cycles,
            };
            cmd_run(config, &overrides, realtime)
        }

        Commands::Curves { name, samples } => cmd_curves(name, samples),

        Commands::List => curves::write_names(&mut io::stdout().lock()),

        Commands::Init { force } => cmd_init(force),
    }
}

fn cmd_run(config_path: Option<PathBuf>, overrides: &DemoOverrides, realtime: bool) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
    let config = GlideConfig::load(config_path.as_deref(), &cwd)?;
    let demo = config
        .demo
        .merged(overrides)
        .context("Invalid demo settings")?;

    info!(
        "Running {} sweep(s) of {}s with {} at {} fps",
        demo.cycles, demo.duration, demo.easing, demo.fps
    );

    let summary = demo::run(&demo, realtime, &mut io::stdout().lock())?;
    info!(
        "Rendered {} frames over {} sweep(s), marker ended at column {}",
        summary.frames, summary.sweeps, summary.final_column
    );
    Ok(())
}

fn cmd_curves(name: Option<Easing>, samples: usize) -> Result<()> {
    let selected: Vec<Easing> = match name {
        Some(easing) => vec![easing],
        None => Easing::ALL.to_vec(),
    };
    curves::write_table(&selected, samples, &mut io::stdout().lock())
}

fn cmd_init(force: bool) -> Result<()> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    if path.exists() && !force {
        anyhow::bail!("{} already exists. Pass --force to overwrite it.", path.display());
    }

    let content = GlideConfig::default().to_toml()?;
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Wrote {}", path.display());
    Ok(())
}
