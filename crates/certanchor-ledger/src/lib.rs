#![deny(missing_docs)]

//! # certanchor-ledger — Ledger Collaborators
//!
//! Everything that talks to (or stands in for) the distributed ledger lives
//! here, behind the [`LedgerClient`] trait. The rest of the workspace never
//! issues an HTTP request or touches key material directly.
//!
//! ## Implementations
//!
//! - [`HttpLedgerClient`] — JSON-RPC 2.0 client for a real node, with a
//!   configured request timeout. Transport failures are
//!   [`LedgerError::Unavailable`], never a hang and never a fake result.
//! - [`InMemoryLedger`] — deterministic in-process ledger for tests and
//!   local development. It is always an explicit construction choice; the
//!   HTTP path never silently degrades into it.
//!
//! ## Credentials
//!
//! [`WalletSigner`] loads the standard 64-byte JSON-array keypair file and
//! signs memo bytes with Ed25519. The provider yields `Option<WalletSigner>`;
//! anchoring without a signer fails fast upstream rather than fabricating
//! transaction ids.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod signer;

pub use client::{LedgerClient, NetworkInfo, TransactionLogs};
pub use config::{ConfigError, LedgerConfig};
pub use error::{CredentialsError, LedgerError};
pub use http::HttpLedgerClient;
pub use memory::InMemoryLedger;
pub use signer::{MemoSignature, WalletSigner};
