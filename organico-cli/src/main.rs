//! # organico
//!
//! Command-line companion for the Organico landing page.
//!
//! ## Usage
//!
//! ```bash
//! # Static snapshot of the page with two items in the cart
//! organico render --cart 2 --out snapshot.html
//!
//! # Growth chart as a standalone SVG
//! organico chart --width 800 --height 300 --out growth.svg
//!
//! # Replay interactions on a virtual clock (JSON lines)
//! organico simulate add:1 email:a@b.com subscribe wait:3000
//! ```
//!
//! Developed by The Organico Team (c)2025

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use organico_core::chart::render_svg;
use organico_core::script::{Simulation, parse_steps};
use organico_core::{ChartConfig, ViewState, catalog};
use organico_storefront::render_page;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "organico")]
#[command(about = "Snapshots, chart export and interaction replay for the Organico landing page")]
#[command(version)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a static HTML snapshot of the page
    Render(RenderArgs),
    /// Print the best-seller catalog
    Catalog {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the monthly growth series
    Series {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Render the growth chart as a standalone SVG
    Chart {
        /// Output file (stdout when omitted)
        #[arg(long, short)]
        out: Option<PathBuf>,
        /// Surface width in pixels
        #[arg(long, default_value_t = 1200)]
        width: u32,
        /// Surface height in pixels
        #[arg(long, default_value_t = 400)]
        height: u32,
    },
    /// Replay interaction steps and print the state after each one
    ///
    /// Steps: menu, add:<id>, email:<text>, subscribe, wait:<ms>
    Simulate {
        #[arg(required = true, value_name = "STEPS")]
        steps: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Output file (stdout when omitted)
    #[arg(long, short)]
    out: Option<PathBuf>,
    /// Load the view state from a JSON file
    #[arg(long, value_name = "FILE")]
    state: Option<PathBuf>,
    /// Override the cart count
    #[arg(long)]
    cart: Option<u32>,
    /// Override the email draft
    #[arg(long)]
    email: Option<String>,
    /// Render with the mobile menu open
    #[arg(long)]
    menu_open: bool,
    /// Render with the subscribe banner visible
    #[arg(long)]
    subscribed: bool,
}

impl RenderArgs {
    fn view_state(&self) -> Result<ViewState> {
        let mut state = match &self.state {
            Some(path) => load_state(path)?,
            None => ViewState::default(),
        };
        if let Some(cart) = self.cart {
            state.cart_count = cart;
        }
        if let Some(email) = &self.email {
            state.email_draft = email.clone();
        }
        if self.menu_open {
            state.menu_open = true;
        }
        if self.subscribed {
            state.subscribe_success_visible = true;
        }
        Ok(state)
    }
}

// ============================================================================
// Commands
// ============================================================================

fn load_state(path: &Path) -> Result<ViewState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid view state JSON in {}", path.display()))
}

/// Write to `out`, or stdout when no file was given.
fn emit(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} ({} bytes)", path.display(), content.len());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

fn render(args: &RenderArgs) -> Result<()> {
    let state = args.view_state()?;
    debug!(?state, "rendering snapshot");
    let html = render_page(&state);
    emit(args.out.as_deref(), &html)
}

fn print_catalog(json: bool) -> Result<()> {
    let items = catalog::items();
    if json {
        return emit(None, &serde_json::to_string_pretty(items)?);
    }

    let mut table = String::new();
    for item in items {
        table.push_str(&format!(
            "{:>2}  {:<22} {:>7}  {} stars\n",
            item.id,
            item.name,
            item.price.to_string(),
            item.rating
        ));
    }
    emit(None, &table)
}

fn print_series(json: bool) -> Result<()> {
    let series = catalog::series();
    if json {
        return emit(None, &serde_json::to_string_pretty(series)?);
    }

    let mut table = String::new();
    for point in series {
        table.push_str(&format!("{:<4} {:>6}\n", point.label, point.value));
    }
    emit(None, &table)
}

fn chart(out: Option<&Path>, width: u32, height: u32) -> Result<()> {
    let config = ChartConfig::growth().with_size(width, height);
    let svg = render_svg(catalog::series(), &config)
        .with_context(|| format!("Failed to draw a {width}x{height} chart"))?;
    emit(out, &svg)
}

fn simulate(raw: &[String]) -> Result<()> {
    let steps = parse_steps(raw).context("Invalid simulation script")?;
    info!("Replaying {} steps", steps.len());

    let mut simulation = Simulation::new();
    let mut stdout = io::stdout().lock();
    for step in &steps {
        let frame = simulation.step(step);
        writeln!(stdout, "{}", serde_json::to_string(&frame)?)?;
    }
    Ok(())
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the command output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    debug!("organico v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Command::Render(args) => render(args),
        Command::Catalog { json } => print_catalog(*json),
        Command::Series { json } => print_series(*json),
        Command::Chart { out, width, height } => chart(out.as_deref(), *width, *height),
        Command::Simulate { steps } => simulate(steps),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Reader went away (e.g. `organico render | head`)
            let err_str = format!("{:?}", e);
            if err_str.contains("Broken pipe") || err_str.contains("os error 32") {
                ExitCode::SUCCESS
            } else {
                eprintln!("[organico] Error: {:#}", e);
                ExitCode::FAILURE
            }
        }
    }
}
