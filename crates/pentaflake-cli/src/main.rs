//! pentaflake - command line front end for pentaflake rendering
//!
//! Usage:
//!   pentaflake render [-n 3] [-o out.svg] [--png out.png]   Render to SVG/PNG
//!   pentaflake render -c scene.yaml                         Render a scene file
//!   pentaflake stats [-n 3] [--json]                        Report tile counts

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use cli::{RenderArgs, StatsArgs, cmd_render, cmd_stats};

#[derive(Parser, Debug)]
#[command(name = "pentaflake", version, about = "Pentaflake fractal generator")]
struct Cli {
    /// Show debug logging (RUST_LOG overrides)
    #[arg(short = 'd', long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build pentaflakes and write an SVG
    Render(RenderArgs),
    /// Print tile counts and sizes
    Stats(StatsArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    match &cli.command {
        Command::Render(args) => cmd_render(args),
        Command::Stats(args) => cmd_stats(args),
    }
}
