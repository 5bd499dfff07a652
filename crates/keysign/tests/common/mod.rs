#![allow(dead_code)]

#[path = "../../src/test_support.rs"]
mod test_support;

use std::sync::LazyLock;

use test_support::{key_from_seed, to_private_pem, to_public_pem};

pub struct TestKeyPair {
    pub private_pem: String,
    pub public_pem: String,
}

impl TestKeyPair {
    pub fn from_seed(seed: &str) -> Self {
        let private_key = key_from_seed(seed);
        Self {
            private_pem: to_private_pem(&private_key),
            public_pem: to_public_pem(&private_key),
        }
    }
}

pub static KEY_A: LazyLock<TestKeyPair> = LazyLock::new(|| TestKeyPair::from_seed("key-a"));
pub static KEY_B: LazyLock<TestKeyPair> = LazyLock::new(|| TestKeyPair::from_seed("key-b"));

/// 8192-bit pair generated with `openssl genrsa -traditional 8192`.
pub const RSA_8192_PRIVATE_PEM: &str = include_str!("../data/rsa8192_private.pem");
pub const RSA_8192_PUBLIC_PEM: &str = include_str!("../data/rsa8192_public.pem");

/// 384-bit key: too small to hold a PKCS#1 v1.5 SHA-256 DigestInfo.
pub const RSA_384_PRIVATE_PEM: &str = include_str!("../data/rsa384_private.pem");
