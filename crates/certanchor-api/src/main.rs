//! # certanchor-api — Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to a configurable port
//! (default 8223).

use std::sync::Arc;

use certanchor_api::auth::{ApiKeyConfig, SecretKey};
use certanchor_api::state::AppState;
use certanchor_ledger::{HttpLedgerClient, LedgerConfig, WalletSigner};
use certanchor_service::CertificateService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8223);

    let auth_config = ApiKeyConfig {
        key: std::env::var("API_KEY").ok().map(SecretKey::new),
    };
    if auth_config.key.is_none() {
        tracing::warn!("API_KEY not set; the API is running open (development mode)");
    }

    // Ledger configuration and node client.
    let ledger_config = LedgerConfig::from_env().map_err(|e| {
        tracing::error!("Ledger configuration failed: {e}");
        e
    })?;
    let client = Arc::new(HttpLedgerClient::new(&ledger_config)?);

    // Signing credential: resolved once at startup. A missing wallet means
    // verification still works but issuance returns 503 — never a
    // fabricated transaction id.
    let signer = match &ledger_config.wallet_path {
        Some(path) => match WalletSigner::from_keypair_file(path) {
            Ok(signer) => {
                tracing::info!(public_key = %signer.public_key_hex(), "wallet loaded");
                Some(Arc::new(signer))
            }
            Err(e) => {
                tracing::error!("Failed to load wallet from {}: {e}", path.display());
                return Err(e.into());
            }
        },
        None => {
            tracing::warn!("LEDGER_WALLET_PATH not set; issuance is disabled");
            None
        }
    };

    let service = Arc::new(CertificateService::new(
        client,
        signer,
        ledger_config.network.clone(),
        ledger_config.issuer.clone(),
    ));
    let state = AppState::new(service, Arc::new(ledger_config));

    let app = certanchor_api::app(state, auth_config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("certanchor API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
