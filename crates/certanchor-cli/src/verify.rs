//! # `certanchor verify`
//!
//! Verification pipeline: fetch the anchoring transaction, decode its
//! memo, recompute the fingerprint from the record file, compare. Exit
//! code 0 only when the certificate is authentic, so the command composes
//! in scripts.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use certanchor_ledger::{HttpLedgerClient, LedgerConfig};
use certanchor_service::CertificateService;

use crate::RecordFile;

/// Arguments for the verify subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Transaction id the certificate was anchored under.
    #[arg(long)]
    pub txid: String,

    /// Record JSON file with the exact issued values (uuid and issued_at
    /// required).
    #[arg(long)]
    pub record: PathBuf,
}

/// Run the verify subcommand. Returns the process exit code: 0 when
/// authentic, 1 otherwise.
pub fn run_verify(args: &VerifyArgs) -> anyhow::Result<u8> {
    let record = RecordFile::read(&args.record)?.into_complete_record()?;

    let config = LedgerConfig::from_env()?;
    let client = Arc::new(HttpLedgerClient::new(&config)?);
    // Verification needs no signing credential.
    let service = CertificateService::new(client, None, config.network.clone(), config.issuer);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(service.verify(&args.txid, &record))?;

    let output = serde_json::json!({
        "transaction_id": args.txid,
        "found": result.found,
        "authentic": result.authentic,
        "fingerprint_on_chain": result.fingerprint_on_chain.map(|fp| fp.to_hex()),
        "fingerprint_recomputed": result.fingerprint_recomputed.to_hex(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(if result.authentic { 0 } else { 1 })
}
