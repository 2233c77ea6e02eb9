//! # Wallet Signer
//!
//! The signing credential for memo submission: an Ed25519 keypair loaded
//! from the standard 64-byte JSON-array wallet file produced by the node
//! toolchain's keygen (secret seed in the first 32 bytes, public key in the
//! last 32).
//!
//! The raw file buffer is zeroized after the key is constructed, and the
//! `Debug` implementation never prints key material.

use std::path::Path;

use ed25519_dalek::{Signer, SigningKey};
use zeroize::Zeroize;

use crate::error::CredentialsError;

/// A detached Ed25519 signature over memo bytes, hex-encoded for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoSignature {
    /// Hex-encoded 32-byte public key of the signer.
    pub public_key: String,
    /// Hex-encoded 64-byte signature.
    pub signature: String,
}

/// The ledger signing credential.
pub struct WalletSigner {
    key: SigningKey,
}

impl std::fmt::Debug for WalletSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletSigner")
            .field("public_key", &self.public_key_hex())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

impl WalletSigner {
    /// Load a signer from a 64-byte JSON-array keypair file.
    ///
    /// The last 32 bytes must equal the verifying key derived from the
    /// first 32 — a mismatched file is rejected rather than silently
    /// producing signatures the node would discard.
    pub fn from_keypair_file(path: &Path) -> Result<Self, CredentialsError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CredentialsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let mut bytes: Vec<u8> = serde_json::from_str(&raw)
            .map_err(|e| CredentialsError::Malformed(format!("not a JSON byte array: {e}")))?;

        if bytes.len() != 64 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(CredentialsError::Malformed(format!(
                "expected 64 bytes, found {len}"
            )));
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes[..32]);
        let key = SigningKey::from_bytes(&seed);
        seed.zeroize();

        let matches = key.verifying_key().as_bytes()[..] == bytes[32..];
        bytes.zeroize();
        if !matches {
            return Err(CredentialsError::KeypairMismatch);
        }

        Ok(Self { key })
    }

    /// Generate a fresh random signer (local development and tests).
    pub fn generate() -> Self {
        Self {
            key: SigningKey::generate(&mut rand_core::OsRng),
        }
    }

    /// Hex-encoded public key of this signer.
    pub fn public_key_hex(&self) -> String {
        hex::encode(self.key.verifying_key().as_bytes())
    }

    /// Sign memo bytes, producing the wire-format detached signature.
    pub fn sign(&self, memo: &[u8]) -> MemoSignature {
        let signature = self.key.sign(memo);
        MemoSignature {
            public_key: self.public_key_hex(),
            signature: hex::encode(signature.to_bytes()),
        }
    }
}
