//! # `certanchor issue`
//!
//! Full issuance pipeline against the configured node: canonicalize,
//! fingerprint, encode the masked memo, and anchor. Prints the receipt as
//! JSON, including the complete record the holder must keep for later
//! verification.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Args;

use certanchor_ledger::{HttpLedgerClient, LedgerConfig, WalletSigner};
use certanchor_service::CertificateService;

use crate::RecordFile;

/// Arguments for the issue subcommand.
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Record JSON file. `uuid` and `issued_at` are generated when absent.
    #[arg(long)]
    pub record: PathBuf,

    /// Wallet keypair file, overriding `LEDGER_WALLET_PATH`.
    #[arg(long)]
    pub wallet: Option<PathBuf>,
}

/// Run the issue subcommand. Returns the process exit code.
pub fn run_issue(args: &IssueArgs) -> anyhow::Result<u8> {
    let record = RecordFile::read(&args.record)?.into_record()?;

    let mut config = LedgerConfig::from_env()?;
    if let Some(wallet) = &args.wallet {
        config.wallet_path = Some(wallet.clone());
    }

    let wallet_path = config
        .wallet_path
        .clone()
        .context("no wallet configured: pass --wallet or set LEDGER_WALLET_PATH")?;
    let signer = WalletSigner::from_keypair_file(&wallet_path)?;

    let client = Arc::new(HttpLedgerClient::new(&config)?);
    let service = CertificateService::new(
        client,
        Some(Arc::new(signer)),
        config.network.clone(),
        config.issuer.clone(),
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let receipt = runtime.block_on(service.issue(&record))?;

    let output = serde_json::json!({
        "certificate": {
            "event": record.event,
            "uuid": record.uuid,
            "name": record.name,
            "email": record.email,
            "certificate_code": record.certificate_code,
            "issued_at": record.issued_at.to_canonical_string(),
        },
        "fingerprint": receipt.fingerprint.to_hex(),
        "transaction_id": receipt.transaction_id,
        "canonical_form": receipt.canonical_form,
        "network": receipt.network,
        "explorer_url": config.explorer_tx_url(&receipt.transaction_id),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(0)
}
