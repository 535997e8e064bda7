//! Overtone CLI - Harmonic overlap search and note mapping for frequencies
//!
//! This binary provides commands for resolving frequencies to musical notes,
//! listing bounded multiple series, and scanning the audible range for
//! frequencies that share harmonic multiples with a base frequency.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

// Use modules from the library crate
use overtone_cli::commands;

/// Overtone - Harmonic Overlap Search
#[derive(Parser)]
#[command(name = "overtone")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a frequency to its nearest musical note and cents offset
    Note {
        /// Frequency in Hz (must be positive)
        #[arg(short, long)]
        freq: f64,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the odd and even multiples of a frequency with their note names
    Series {
        /// Base frequency in Hz (must be positive)
        #[arg(short, long)]
        freq: f64,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Scan 20-8372.02 Hz for frequencies sharing multiples with the base
    Scan {
        /// Base frequency in Hz (must be between 20 and 20000, exclusive)
        #[arg(short, long)]
        freq: f64,

        /// Maximum number of candidates to display
        #[arg(short, long, default_value = "200")]
        limit: usize,

        /// Write the full JSON report to a file
        #[arg(short, long)]
        output: Option<String>,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Note { freq, json } => commands::note::run(freq, json),
        Commands::Series { freq, json } => commands::series::run(freq, json),
        Commands::Scan {
            freq,
            limit,
            output,
            json,
        } => commands::scan::run(freq, limit, output.as_deref(), json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
