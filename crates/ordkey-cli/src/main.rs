#![doc = include_str!("../README.md")]

mod commands;
mod config;
mod telemetry;

use clap::Parser;
use config::{CliArgs, CliConfig};
use std::io::{BufWriter, Write};
use telemetry::init_telemetry;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    init_telemetry()?;
    let config = CliConfig::try_from(args)?;

    tracing::debug!(
        alphabet = %config.generator.alphabet(),
        max_count = config.max_count,
        "configuration loaded"
    );

    let mut out = BufWriter::new(std::io::stdout().lock());
    commands::run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}
