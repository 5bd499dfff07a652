//! Key parser: PEM container in, typed signing/verification capability out.

use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::spki::{self, SubjectPublicKeyInfoRef};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use tracing::debug;

use crate::error::KeyError;
use crate::signing::{
    MessageSigner, MessageVerifier, RsaSigningKey, RsaVerifyingKey, SigningKey, VerifyingKey,
};

/// PEM label of a PKCS#1 `RSAPrivateKey`.
pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
/// PEM label of an X.509 `SubjectPublicKeyInfo`.
pub const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// Largest public modulus accepted, in bits. The private-key path has no
/// cap, so anything signable must also be verifiable.
pub const MAX_PUBLIC_MODULUS_BITS: usize = 16384;

/// Finds the first PEM block in the blob. Text around the block is ignored.
fn decode_container(blob: &[u8]) -> Result<pem::Pem, KeyError> {
    pem::parse(blob).map_err(|_| KeyError::Format)
}

/// Decodes an rsaEncryption SubjectPublicKeyInfo without the `rsa` crate's
/// default 4096-bit ceiling.
fn decode_rsa_spki(der: &[u8]) -> Result<RsaPublicKey, KeyError> {
    let info = SubjectPublicKeyInfoRef::try_from(der).map_err(KeyError::payload)?;
    info.algorithm
        .assert_algorithm_oid(rsa::pkcs1::ALGORITHM_OID)
        .map_err(KeyError::payload)?;

    let key_bytes = info
        .subject_public_key
        .as_bytes()
        .ok_or_else(|| KeyError::payload(spki::Error::KeyMalformed))?;
    let key = rsa::pkcs1::RsaPublicKey::try_from(key_bytes).map_err(KeyError::payload)?;

    let n = BigUint::from_bytes_be(key.modulus.as_bytes());
    let e = BigUint::from_bytes_be(key.public_exponent.as_bytes());
    RsaPublicKey::new_with_max_size(n, e, MAX_PUBLIC_MODULUS_BITS).map_err(KeyError::payload)
}

fn unsupported(label: &str) -> KeyError {
    KeyError::UnsupportedType {
        label: label.to_owned(),
    }
}

/// Parse a PEM-encoded PKCS#1 RSA private key into a signing capability.
pub fn parse_private_key(blob: &[u8]) -> Result<SigningKey, KeyError> {
    let container = decode_container(blob)?;

    let key = match container.tag() {
        RSA_PRIVATE_KEY_LABEL => {
            let private_key =
                RsaPrivateKey::from_pkcs1_der(container.contents()).map_err(KeyError::payload)?;
            SigningKey::Rsa(RsaSigningKey::new(private_key))
        }
        label => return Err(unsupported(label)),
    };

    debug!(
        algorithm = key.algorithm(),
        modulus_bits = key.modulus_len() * 8,
        "parsed private key"
    );
    Ok(key)
}

/// Parse a PEM-encoded SubjectPublicKeyInfo into a verification capability.
///
/// Only RSA public keys are recognized; an SPKI carrying any other
/// algorithm fails as a malformed payload.
pub fn parse_public_key(blob: &[u8]) -> Result<VerifyingKey, KeyError> {
    let container = decode_container(blob)?;

    let key = match container.tag() {
        PUBLIC_KEY_LABEL => {
            let public_key = decode_rsa_spki(container.contents())?;
            VerifyingKey::Rsa(RsaVerifyingKey::new(public_key))
        }
        label => return Err(unsupported(label)),
    };

    debug!(
        algorithm = key.algorithm(),
        modulus_bits = key.modulus_len() * 8,
        "parsed public key"
    );
    Ok(key)
}
