use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use stationmap_assign::{AssignConfig, Strategy};
use stationmap_cli::{console, pipeline};
use stationmap_query::QueryEngine;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stationmap")]
#[command(about = "Assign houses to their nearest station and query the result", long_about = None)]
#[command(version)]
struct Cli {
    /// Binary grid file (u32 width, u32 height, width*height cell bytes)
    grid_file: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Nearest-station search
    #[arg(long, value_enum, env = "STATIONMAP_STRATEGY", default_value_t = StrategyFlag::Auto)]
    strategy: StrategyFlag,

    /// Station count at which `auto` switches to the spatial index
    #[arg(long, default_value_t = 64)]
    spatial_threshold: usize,

    /// Write houses, stations and assignments as JSON once loaded
    #[arg(long)]
    export_json: Option<PathBuf>,

    /// Prompt printed before each command
    #[arg(long, default_value = "")]
    prompt: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // stdout is reserved for query replies
    builder.target(env_logger::Target::Stderr).init();

    let config = AssignConfig {
        strategy: cli.strategy.as_domain(),
        spatial_threshold: cli.spatial_threshold,
    };

    let index = pipeline::load(&cli.grid_file, config)?;
    if let Some(path) = &cli.export_json {
        pipeline::export_json(&index, path)?;
    }

    let engine = QueryEngine::new(&index);
    console::run(&engine, io::stdin().lock(), io::stdout().lock(), &cli.prompt)
        .context("Console session failed")?;
    Ok(())
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyFlag {
    Auto,
    BruteForce,
    Spatial,
}

impl StrategyFlag {
    const fn as_domain(self) -> Strategy {
        match self {
            Self::Auto => Strategy::Auto,
            Self::BruteForce => Strategy::BruteForce,
            Self::Spatial => Strategy::Spatial,
        }
    }
}
