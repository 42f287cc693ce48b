//! Command-line entry point: registry document in, generated header out.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vulkinit_codegen::{CodegenError, GenConfig, generate_from_file};

/// Generates a header of typed initializer functions for Vulkan API
/// structs from a vk.xml registry document.
#[derive(Debug, Parser)]
#[command(name = "vulkinit", version, about)]
struct Args {
    /// Path to the vk.xml registry document.
    registry: PathBuf,

    /// JSON file overriding the built-in skip sets and enum-code overrides.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the generated header here instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CodegenError> {
    let config = match &args.config {
        Some(path) => GenConfig::from_json_file(path)?,
        None => GenConfig::default(),
    };

    let header = generate_from_file(&args.registry, &config)?;

    match &args.output {
        Some(path) => std::fs::write(path, header)?,
        None => {
            use std::io::Write;
            std::io::stdout().write_all(header.as_bytes())?;
        }
    }
    Ok(())
}
