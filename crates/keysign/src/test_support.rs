use std::sync::LazyLock;

use rand_chacha::ChaCha20Rng;
use rand_chacha::rand_core::SeedableRng;
use rsa::RsaPrivateKey;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use sha2::{Digest, Sha256};

const RSA_KEY_BITS: usize = 2048;

static PRIVATE_KEY: LazyLock<RsaPrivateKey> = LazyLock::new(|| key_from_seed("test-seed"));
static OTHER_PRIVATE_KEY: LazyLock<RsaPrivateKey> = LazyLock::new(|| key_from_seed("other-seed"));

/// The SHA-256 hash of the seed seeds a deterministic CSPRNG for key generation.
pub fn key_from_seed(seed: &str) -> RsaPrivateKey {
    let hash = Sha256::digest(seed.as_bytes());
    let mut rng = ChaCha20Rng::from_seed(hash.into());
    RsaPrivateKey::new(&mut rng, RSA_KEY_BITS).expect("generating RSA key from seed")
}

/// PKCS#1 `RSA PRIVATE KEY` PEM.
pub fn to_private_pem(key: &RsaPrivateKey) -> String {
    key.to_pkcs1_pem(LineEnding::LF)
        .expect("encoding RSA private key to PEM")
        .to_string()
}

/// SubjectPublicKeyInfo `PUBLIC KEY` PEM of the key's public half.
pub fn to_public_pem(key: &RsaPrivateKey) -> String {
    key.to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .expect("encoding RSA public key to PEM")
}

pub fn private_key() -> &'static RsaPrivateKey {
    &PRIVATE_KEY
}

pub fn other_private_key() -> &'static RsaPrivateKey {
    &OTHER_PRIVATE_KEY
}

pub fn private_key_pem() -> String {
    to_private_pem(private_key())
}

pub fn public_key_pem() -> String {
    to_public_pem(private_key())
}

pub fn other_public_key_pem() -> String {
    to_public_pem(other_private_key())
}
