//! gzmember CLI - decode and verify single GZIP members.

mod commands;
mod utils;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use commands::{DecodeOptions, cmd_decode, cmd_info, cmd_test};
use gzmember_decode::InflateStrategy;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gzmember")]
#[command(author, version, about = "Decode and verify GZIP members (RFC 1952)")]
#[command(long_about = "
gzmember decodes single-member GZIP files with a strict RFC 1952 decoder,
or with flate2's gzip decoder when --strategy native is selected.

Examples:
  gzmember decode response.gz
  gzmember decode response.gz -o response.json --strategy fallback
  gzmember info response.gz --json
  gzmember test *.gz
  gzmember completions bash
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a GZIP member to a file
    #[command(alias = "d")]
    Decode {
        /// GZIP file to decode
        input: PathBuf,

        /// Output file (defaults to the stored filename or the input without .gz)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Gzip primitive to decode with
        #[arg(short, long, value_enum, default_value = "fallback")]
        strategy: Strategy,

        /// Refuse payloads larger than this many bytes
        #[arg(long)]
        max_size: Option<usize>,

        /// Overwrite the output without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Show header and trailer fields of a GZIP member
    #[command(alias = "i")]
    Info {
        /// GZIP file to inspect
        input: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Verify GZIP members without writing output
    #[command(alias = "t")]
    Test {
        /// GZIP files to verify
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Show progress bar
        #[arg(short = 'P', long, default_value = "true")]
        progress: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

/// Gzip primitive selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// flate2's gzip decoder
    Native,
    /// Built-in RFC 1952 member decoder
    Fallback,
}

impl From<Strategy> for InflateStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Native => InflateStrategy::Native,
            Strategy::Fallback => InflateStrategy::Fallback,
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Decode {
            input,
            output,
            strategy,
            max_size,
            force,
        } => cmd_decode(
            &input,
            &DecodeOptions {
                output,
                strategy: strategy.into(),
                max_size,
                force,
            },
        ),
        Commands::Info { input, json } => cmd_info(&input, json),
        Commands::Test { inputs, progress } => cmd_test(&inputs, progress),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "gzmember", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
