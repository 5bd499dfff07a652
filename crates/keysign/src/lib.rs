//! Sign and verify byte payloads with PEM-encoded RSA keys.
//!
//! Signatures are RSASSA-PKCS1-v1_5 over a SHA-256 digest of the message,
//! carried as standard padded base64.

pub mod encoding;
pub mod error;
pub mod key;
pub mod signing;

#[cfg(test)]
mod test_support;

use tracing::warn;

pub use encoding::{decode_signature, encode_signature};
pub use error::{ErrorKind, KeyError, Result, SignatureError};
pub use key::{parse_private_key, parse_public_key};
pub use signing::{MessageSigner, MessageVerifier, SigningKey, VerifyingKey};

/// Sign `message` with a PEM `RSA PRIVATE KEY` and return the base64 signature.
pub fn generate(private_key: &[u8], message: &[u8]) -> Result<String> {
    let result = parse_private_key(private_key)
        .map_err(SignatureError::PrivateKey)
        .and_then(|key| key.sign(message))
        .map(|signature| encode_signature(&signature));

    if let Err(error) = &result {
        warn!(kind = ?error.kind(), "{error}");
    }
    result
}

/// Check a base64 signature over `message` against a PEM `PUBLIC KEY`.
///
/// `Ok(())` means the signature is valid. A mismatch is reported as
/// [`SignatureError::Verification`].
pub fn verify(signature: &str, public_key: &[u8], message: &[u8]) -> Result<()> {
    let result = parse_public_key(public_key)
        .map_err(SignatureError::PublicKey)
        .and_then(|key| {
            let signature = decode_signature(signature)?;
            key.verify(message, &signature)
        });

    if let Err(error) = &result {
        warn!(kind = ?error.kind(), "{error}");
    }
    result
}
