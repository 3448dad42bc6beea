//! OxiLZ CLI - raw FastLZ block compressor
//!
//! Reads a whole file, compresses or decompresses it as one block and writes
//! the bare stream. No container header is written.

mod commands;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    CompressionLevel, cmd_bench, cmd_compress, cmd_decompress, cmd_info, cmd_test, parse_level,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Default `--max-size` for decompression (64 MiB).
const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024;

#[derive(Parser)]
#[command(name = "oxilz")]
#[command(
    author,
    version,
    about = "Pure Rust FastLZ-compatible block compressor"
)]
#[command(long_about = "
OxiLZ compresses a file as a single FastLZ block (level 1 or level 2).
The output is the raw token stream; the level is stored in its first byte.

Examples:
  oxilz compress data.bin data.flz
  oxilz compress -l high data.bin data.flz
  oxilz decompress data.flz data.bin --max-size 1048576
  oxilz test data.bin --json
  oxilz bench data.bin -n 20
  oxilz info data.flz
")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a raw block
    #[command(alias = "c")]
    Compress {
        /// File to compress
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Compression level (fast, high, 1 or 2)
        #[arg(short = 'l', long, value_parser = parse_level, default_value = "fast")]
        level: CompressionLevel,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress a raw block into a file
    #[command(alias = "d")]
    Decompress {
        /// Compressed block
        input: PathBuf,

        /// Output file
        output: PathBuf,

        /// Largest decompressed size accepted, in bytes
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_SIZE)]
        max_size: usize,

        /// Overwrite an existing output file
        #[arg(short, long)]
        force: bool,
    },

    /// Round-trip a file at both levels and verify the result
    #[command(alias = "t")]
    Test {
        /// File to test
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Measure in-memory compression and decompression speed
    Bench {
        /// File to benchmark
        input: PathBuf,

        /// Compression level (both if omitted)
        #[arg(short = 'l', long, value_parser = parse_level)]
        level: Option<CompressionLevel>,

        /// Iterations per measurement
        #[arg(short = 'n', long, default_value_t = 10)]
        iterations: u32,
    },

    /// Show information about a compressed block
    #[command(alias = "i")]
    Info {
        /// Compressed block
        input: PathBuf,

        /// Largest decompressed size tried, in bytes
        #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_SIZE)]
        max_size: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            level,
            force,
        } => cmd_compress(&input, &output, level, force),
        Commands::Decompress {
            input,
            output,
            max_size,
            force,
        } => cmd_decompress(&input, &output, max_size, force),
        Commands::Test { input, json } => cmd_test(&input, json),
        Commands::Bench {
            input,
            level,
            iterations,
        } => cmd_bench(&input, level, iterations),
        Commands::Info { input, max_size } => cmd_info(&input, max_size),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
