//! # certanchor CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use certanchor_cli::digest::{run_digest, DigestArgs};
use certanchor_cli::issue::{run_issue, IssueArgs};
use certanchor_cli::verify::{run_verify, VerifyArgs};

/// certanchor — participation certificates anchored to a distributed
/// ledger.
///
/// Canonicalizes certificate records, computes their SHA-256 fingerprints,
/// anchors them in memo transactions, and verifies claimed certificates
/// against their anchors.
#[derive(Parser, Debug)]
#[command(name = "certanchor", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the canonical form and fingerprint of a record (offline).
    Digest(DigestArgs),

    /// Anchor a certificate on the configured ledger.
    Issue(IssueArgs),

    /// Verify a claimed certificate against its anchoring transaction.
    Verify(VerifyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Digest(args) => run_digest(&args),
        Commands::Issue(args) => run_issue(&args),
        Commands::Verify(args) => run_verify(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
