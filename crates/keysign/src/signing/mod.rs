mod signer;
mod rsa;

use sha2::{Digest, Sha256};

pub use signer::{MessageSigner, MessageVerifier};
pub use self::rsa::{RSA_ALGORITHM, RsaSigningKey, RsaVerifyingKey};

use crate::error::Result;

/// SHA-256 of the message; the only digest this crate signs.
pub fn message_digest(message: &[u8]) -> Vec<u8> {
    Sha256::digest(message).to_vec()
}

/// A parsed private key, bound to signing.
///
/// One variant per supported key algorithm.
#[derive(Debug)]
pub enum SigningKey {
    Rsa(RsaSigningKey),
}

impl SigningKey {
    pub fn modulus_len(&self) -> usize {
        match self {
            SigningKey::Rsa(key) => key.modulus_len(),
        }
    }

    /// The matching verification capability.
    pub fn verifying_key(&self) -> VerifyingKey {
        match self {
            SigningKey::Rsa(key) => VerifyingKey::Rsa(key.verifying_key()),
        }
    }
}

impl MessageSigner for SigningKey {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        match self {
            SigningKey::Rsa(key) => key.sign(message),
        }
    }

    fn algorithm(&self) -> &str {
        match self {
            SigningKey::Rsa(key) => key.algorithm(),
        }
    }
}

/// A parsed public key, bound to verification.
#[derive(Debug)]
pub enum VerifyingKey {
    Rsa(RsaVerifyingKey),
}

impl VerifyingKey {
    pub fn modulus_len(&self) -> usize {
        match self {
            VerifyingKey::Rsa(key) => key.modulus_len(),
        }
    }
}

impl MessageVerifier for VerifyingKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        match self {
            VerifyingKey::Rsa(key) => key.verify(message, signature),
        }
    }

    fn algorithm(&self) -> &str {
        match self {
            VerifyingKey::Rsa(key) => key.algorithm(),
        }
    }
}
