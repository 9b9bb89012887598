//! `windows` CLI — list the bookable free windows of a working day.
//!
//! ## Usage
//!
//! ```sh
//! # Built-in reference day (09:00-21:00 with five appointments)
//! windows
//!
//! # Day and appointments from a JSON config file
//! windows -c day.json
//!
//! # Config from stdin, rendered as JSON
//! cat day.json | windows -c - --format json
//!
//! # Everything from flags (custom bounds start from an empty busy list)
//! windows --start 08:00 --end 12:00 -b 09:15-09:40 -b 10:30-11:00 --slot 15
//!
//! # Config file day, ignoring its appointments
//! windows -c day.json --no-busy
//!
//! # Diagnostic logging to stderr
//! windows -v
//! RUST_LOG=window_engine=trace windows
//! ```

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use window_engine::format::{format_schedule, to_json};
use window_engine::{generate_with, BusyRecord, GeneratorConfig, OverlapPolicy};

#[derive(Parser)]
#[command(
    name = "windows",
    version,
    about = "List bookable free windows between appointments in a working day"
)]
struct Cli {
    /// JSON config file ("-" reads stdin). Built-in defaults are used if omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Day start (HH:MM), overrides the config
    #[arg(long)]
    start: Option<String>,

    /// Day end (HH:MM), overrides the config
    #[arg(long)]
    end: Option<String>,

    /// Busy interval as HH:MM-HH:MM; repeat to add more. Replaces the config's list
    #[arg(short, long = "busy", value_name = "SPAN")]
    busy: Vec<String>,

    /// Drop all busy intervals from the config
    #[arg(long, conflicts_with = "busy")]
    no_busy: bool,

    /// Free window length in minutes, overrides the config
    #[arg(long, value_name = "MINUTES")]
    slot: Option<i64>,

    /// Accept overlapping busy intervals instead of failing
    #[arg(long)]
    allow_overlap: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log diagnostics to stderr (debug level unless RUST_LOG is set)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    debug!(
        day_start = %config.day_start,
        day_end = %config.day_end,
        busy = config.busy.len(),
        "resolved configuration"
    );

    let schedule = generate_with(&config).context("Failed to generate free windows")?;

    match cli.format {
        OutputFormat::Text => print!("{}", format_schedule(&schedule)),
        OutputFormat::Json => {
            let json = to_json(&schedule).context("Failed to render schedule as JSON")?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Start from the config file (or built-in defaults) and apply flag overrides.
fn build_config(cli: &Cli) -> Result<GeneratorConfig> {
    let mut config = match cli.config.as_deref() {
        Some("-") => {
            let json = read_stdin()?;
            GeneratorConfig::from_json(&json).context("Failed to parse config from stdin")?
        }
        Some(path) => GeneratorConfig::from_path(path)
            .with_context(|| format!("Failed to load config: {}", path))?,
        None => {
            let mut config = GeneratorConfig::default();
            // The built-in appointments belong to the built-in day only.
            if cli.start.is_some() || cli.end.is_some() {
                config.busy.clear();
            }
            config
        }
    };

    if let Some(start) = &cli.start {
        config.day_start = start.clone();
    }
    if let Some(end) = &cli.end {
        config.day_end = end.clone();
    }
    if cli.no_busy {
        config.busy.clear();
    } else if !cli.busy.is_empty() {
        config.busy = cli
            .busy
            .iter()
            .map(|span| BusyRecord::from_span(span))
            .collect::<Result<_, _>>()
            .context("Invalid --busy span")?;
    }
    if let Some(slot) = cli.slot {
        config.slot_minutes = slot;
    }
    if cli.allow_overlap {
        config.overlap = OverlapPolicy::Allow;
    }

    Ok(config)
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read from stdin")?;
    Ok(buf)
}
