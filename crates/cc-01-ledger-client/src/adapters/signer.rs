//! Signing identity providers.

use k256::ecdsa::SigningKey;
use sha3::{Digest, Keccak256};

use shared_types::Address;

use crate::domain::{SignerError, SignerIdentity};
use crate::ports::outbound::SignerProvider;

/// Development signer backed by a fixed secp256k1 key.
///
/// The address is derived Ethereum-style: Keccak-256 of the uncompressed
/// public key (tag byte stripped), last 20 bytes.
#[derive(Debug)]
pub struct DevSigner {
    identity: SignerIdentity,
}

impl DevSigner {
    /// Build a signer from 32 bytes of key material.
    pub fn from_seed(seed: [u8; 32]) -> Result<Self, SignerError> {
        let key = SigningKey::from_slice(&seed).map_err(|e| SignerError::InvalidKey {
            message: e.to_string(),
        })?;
        let point = key.verifying_key().to_encoded_point(false);
        let digest = Keccak256::digest(&point.as_bytes()[1..]);
        let mut address: Address = [0u8; 20];
        address.copy_from_slice(&digest[12..]);
        Ok(Self {
            identity: SignerIdentity { address },
        })
    }

    /// The well-known development identity.
    pub fn dev() -> Self {
        let mut seed = [0u8; 32];
        seed[31] = 1;
        Self::from_seed(seed).expect("dev seed is a valid scalar")
    }
}

impl Default for DevSigner {
    fn default() -> Self {
        Self::dev()
    }
}

#[async_trait::async_trait]
impl SignerProvider for DevSigner {
    async fn resolve(&self) -> Result<SignerIdentity, SignerError> {
        Ok(self.identity.clone())
    }
}

/// A provider with no configured identity, for exercising the
/// `NoSignerAvailable` configuration fault.
#[derive(Default)]
pub struct EmptySignerProvider;

#[async_trait::async_trait]
impl SignerProvider for EmptySignerProvider {
    async fn resolve(&self) -> Result<SignerIdentity, SignerError> {
        Err(SignerError::NoSignerAvailable)
    }
}
