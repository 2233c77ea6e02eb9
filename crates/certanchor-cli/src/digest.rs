//! # `certanchor digest`
//!
//! Offline canonical form and fingerprint computation. Useful for checking
//! what a record will hash to before anchoring, or for re-deriving the
//! fingerprint of an issued certificate without touching the network.

use std::path::PathBuf;

use clap::Args;

use certanchor_core::{CanonicalBytes, Fingerprint};

use crate::RecordFile;

/// Arguments for the digest subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Record JSON file to canonicalize and fingerprint.
    #[arg(long, conflicts_with = "text")]
    pub record: Option<PathBuf>,

    /// Raw text to fingerprint (UTF-8 encode, then hash).
    #[arg(long)]
    pub text: Option<String>,
}

/// Run the digest subcommand. Returns the process exit code.
pub fn run_digest(args: &DigestArgs) -> anyhow::Result<u8> {
    match (&args.record, &args.text) {
        (Some(path), _) => {
            let record = RecordFile::read(path)?.into_complete_record()?;
            let canonical = CanonicalBytes::from_record(&record)?;
            let fingerprint = Fingerprint::of_canonical(&canonical);

            println!("canonical_form: {}", canonical.as_str());
            println!("fingerprint:    {fingerprint}");
            Ok(0)
        }
        (None, Some(text)) => {
            println!("fingerprint: {}", Fingerprint::of_text(text));
            Ok(0)
        }
        (None, None) => {
            anyhow::bail!("pass either --record <file> or --text <string>");
        }
    }
}
