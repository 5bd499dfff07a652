/// Flat view of every way a sign or verify call can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input is not a recognizable PEM container.
    KeyFormat,
    /// Container label is not one this crate accepts for the operation.
    UnsupportedKeyType,
    /// Container recognized but its DER payload is malformed.
    KeyPayloadParse,
    /// Signature text is not valid base64.
    SignatureDecode,
    /// The signing primitive rejected the key or digest.
    Signing,
    /// The platform RNG could not supply entropy.
    Entropy,
    /// The signature does not match the message under the given key.
    VerificationFailure,
}

/// Failures of the key parser.
#[derive(Debug, thiserror::Error)]
pub enum KeyError {
    #[error("no key was found")]
    Format,
    #[error("key type not supported: {label}")]
    UnsupportedType { label: String },
    #[error("malformed key payload")]
    Payload(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl KeyError {
    pub(crate) fn payload<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Payload(Box::new(error))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            KeyError::Format => ErrorKind::KeyFormat,
            KeyError::UnsupportedType { .. } => ErrorKind::UnsupportedKeyType,
            KeyError::Payload(_) => ErrorKind::KeyPayloadParse,
        }
    }
}

/// Failures of the top-level [`generate`](crate::generate) and
/// [`verify`](crate::verify) operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("failed to parse the private key")]
    PrivateKey(#[source] KeyError),
    #[error("failed to parse the public key")]
    PublicKey(#[source] KeyError),
    #[error("invalid signature encoding")]
    SignatureDecode(#[from] base64::DecodeError),
    #[error("could not sign the message")]
    Signing(#[source] rsa::Error),
    #[error("could not gather entropy for signing")]
    Entropy(#[from] getrandom::Error),
    #[error("signature verification failed")]
    Verification(#[source] rsa::Error),
}

impl SignatureError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SignatureError::PrivateKey(error) | SignatureError::PublicKey(error) => error.kind(),
            SignatureError::SignatureDecode(_) => ErrorKind::SignatureDecode,
            SignatureError::Signing(_) => ErrorKind::Signing,
            SignatureError::Entropy(_) => ErrorKind::Entropy,
            SignatureError::Verification(_) => ErrorKind::VerificationFailure,
        }
    }

    /// True when the signature simply did not match, as opposed to a fault
    /// in the inputs or environment.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, SignatureError::Verification(_))
    }
}

pub type Result<T, E = SignatureError> = std::result::Result<T, E>;
