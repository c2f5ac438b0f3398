//! include-trace CLI
//!
//! Builds include graphs, directory rollups and include-order listings
//! from compiler show-includes traces.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use include_trace::commands::{
    display_version, execute_analyze, validate_args, validate_report_file, AnalyzeArgs,
};
use include_trace::parser::Dialect;
use include_trace::utils::config::{DEFAULT_TOP_HEADERS, NOTE_PREFIX_ENV};

/// include-trace - header dependency analysis from show-includes traces
#[derive(Parser, Debug)]
#[command(name = "include-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a show-includes trace
    Analyze {
        /// Trace file (g++ -H stderr or cl.exe /showIncludes output)
        trace: PathBuf,

        /// Trace dialect: gcc or msvc (sniffed when omitted)
        #[arg(long)]
        dialect: Option<Dialect>,

        /// Translated "Note: including file:" prefix of a localized cl.exe
        #[arg(long, env = NOTE_PREFIX_ENV)]
        note_prefix: Option<String>,

        /// Directory relative header paths are resolved against
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Output path for the include graph (DOT)
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Output path for the directory rollup graph (DOT)
        #[arg(long)]
        paths_dot: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "includes.json")]
        json: PathBuf,

        /// Skip the JSON report
        #[arg(long)]
        no_json: bool,

        /// Output path for the replayed include order
        #[arg(long)]
        order: Option<PathBuf>,

        /// Number of heaviest headers and directories to report
        #[arg(long, default_value_t = DEFAULT_TOP_HEADERS)]
        top_headers: usize,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Analyze {
            trace,
            dialect,
            note_prefix,
            base_dir,
            dot,
            paths_dot,
            json,
            no_json,
            order,
            top_headers,
            summary,
        } => {
            let args = AnalyzeArgs {
                trace,
                dialect,
                note_prefix,
                base_dir,
                output_dot: dot,
                output_paths_dot: paths_dot,
                output_json: (!no_json).then_some(json),
                output_order: order,
                top_headers,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_analyze(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
