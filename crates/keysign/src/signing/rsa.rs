use std::fmt;

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Sign, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use tracing::debug;

use super::message_digest;
use super::signer::{MessageSigner, MessageVerifier};
use crate::error::{Result, SignatureError};

pub const RSA_ALGORITHM: &str = "rsa-pkcs1v15-sha256";

fn scheme() -> Pkcs1v15Sign {
    Pkcs1v15Sign::new::<Sha256>()
}

/// Fresh CSPRNG for one signing call. Only feeds RSA blinding, so the
/// signature bytes themselves stay deterministic.
fn blinding_rng() -> Result<ChaCha20Rng> {
    let mut seed = [0u8; 32];
    getrandom::getrandom(&mut seed)?;
    Ok(ChaCha20Rng::from_seed(seed))
}

/// RSA PKCS#1 v1.5 signer with SHA-256 digest.
pub struct RsaSigningKey {
    private_key: RsaPrivateKey,
}

impl RsaSigningKey {
    pub fn new(private_key: RsaPrivateKey) -> Self {
        Self { private_key }
    }

    /// Signature length in bytes.
    pub fn modulus_len(&self) -> usize {
        self.private_key.size()
    }

    pub fn verifying_key(&self) -> RsaVerifyingKey {
        RsaVerifyingKey::new(self.private_key.to_public_key())
    }
}

impl fmt::Debug for RsaSigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigningKey")
            .field("modulus_bits", &(self.modulus_len() * 8))
            .finish_non_exhaustive()
    }
}

impl MessageSigner for RsaSigningKey {
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let digest = message_digest(message);
        debug!(
            algorithm = RSA_ALGORITHM,
            message_len = message.len(),
            digest = %hex::encode(&digest),
            "signing message"
        );

        let mut rng = blinding_rng()?;
        self.private_key
            .sign_with_rng(&mut rng, scheme(), &digest)
            .map_err(SignatureError::Signing)
    }

    fn algorithm(&self) -> &str {
        RSA_ALGORITHM
    }
}

/// RSA PKCS#1 v1.5 verifier with SHA-256 digest.
pub struct RsaVerifyingKey {
    public_key: RsaPublicKey,
}

impl RsaVerifyingKey {
    pub fn new(public_key: RsaPublicKey) -> Self {
        Self { public_key }
    }

    /// Expected signature length in bytes.
    pub fn modulus_len(&self) -> usize {
        self.public_key.size()
    }
}

impl fmt::Debug for RsaVerifyingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaVerifyingKey")
            .field("modulus_bits", &(self.modulus_len() * 8))
            .finish_non_exhaustive()
    }
}

impl MessageVerifier for RsaVerifyingKey {
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()> {
        let digest = message_digest(message);
        debug!(
            algorithm = RSA_ALGORITHM,
            message_len = message.len(),
            digest = %hex::encode(&digest),
            "verifying signature"
        );

        self.public_key
            .verify(scheme(), &digest, signature)
            .map_err(SignatureError::Verification)
    }

    fn algorithm(&self) -> &str {
        RSA_ALGORITHM
    }
}
