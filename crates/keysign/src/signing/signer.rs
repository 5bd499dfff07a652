use crate::error::Result;

/// Something that can sign messages.
///
/// Implementations are sync; signing is CPU-bound.
pub trait MessageSigner: Send + Sync {
    /// Hash and sign the message. Returns raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;

    /// Algorithm identifier string (e.g. "rsa-pkcs1v15-sha256").
    fn algorithm(&self) -> &str;
}

/// Something that can check a signature against a message.
pub trait MessageVerifier: Send + Sync {
    /// Hash the message and check the raw signature bytes against it.
    fn verify(&self, message: &[u8], signature: &[u8]) -> Result<()>;

    fn algorithm(&self) -> &str;
}
