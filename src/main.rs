use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};

use pxl::{compress, decompress};

/// PXL compressor: pair substitution + run-length encoding.
#[derive(Parser, Debug)]
#[command(name = "pxl")]
#[command(version)]
#[command(about = "Compress and decompress files in the PXL format")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print the summary as JSON on stdout
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file into a .pxl file
    Compress {
        /// The input file to compress
        input: PathBuf,
        /// Output path (default: <input>.pxl)
        output: Option<PathBuf>,
    },
    /// Decompress a .pxl file
    Decompress {
        /// The .pxl file to decompress
        input: PathBuf,
        /// Output path (default: <input> without its .pxl extension)
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    // Logs go to stderr so --json output stays machine-readable.
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Compress { input, output } => run_compress(&input, output, cli.json),
        Command::Decompress { input, output } => run_decompress(&input, output, cli.json),
    }
}

fn run_compress(input: &Path, output: Option<PathBuf>, json: bool) -> Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("input file '{}' not found or unreadable", input.display()))?;

    if data.is_empty() {
        warn!("input file is empty, creating an empty .pxl file");
    }

    let (compressed, stats) = compress(&data);

    let output = output.unwrap_or_else(|| default_pxl_path(input));
    fs::write(&output, &compressed)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    info!(
        "compressed '{}' -> '{}': {} -> {} bytes ({:.2}%)",
        input.display(),
        output.display(),
        stats.original_size,
        stats.compressed_size,
        stats.ratio() * 100.0
    );
    if json {
        println!("{}", serde_json::to_string(&stats)?);
    }
    Ok(())
}

fn run_decompress(input: &Path, output: Option<PathBuf>, json: bool) -> Result<()> {
    let data = fs::read(input)
        .with_context(|| format!("input file '{}' not found or unreadable", input.display()))?;

    let (restored, stats) = decompress(&data)
        .with_context(|| format!("failed to decompress '{}'", input.display()))?;

    let output = match output {
        Some(path) => path,
        None => strip_pxl_extension(input)?,
    };
    fs::write(&output, &restored)
        .with_context(|| format!("failed to write '{}'", output.display()))?;

    info!(
        "decompressed '{}' -> '{}': {} -> {} bytes",
        input.display(),
        output.display(),
        stats.compressed_size,
        stats.decompressed_size
    );
    if json {
        println!("{}", serde_json::to_string(&stats)?);
    }
    Ok(())
}

fn default_pxl_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(".pxl");
    PathBuf::from(name)
}

fn strip_pxl_extension(input: &Path) -> Result<PathBuf> {
    if input.extension().and_then(|e| e.to_str()) == Some("pxl") {
        Ok(input.with_extension(""))
    } else {
        bail!(
            "'{}' has no .pxl extension, pass an explicit output path",
            input.display()
        )
    }
}
