//! Transport text form of raw signatures: standard base64 with padding.

use std::borrow::Cow;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub fn encode_signature(signature: &[u8]) -> String {
    STANDARD.encode(signature)
}

/// Padding required. Line breaks (`\r`, `\n`) anywhere are skipped so
/// wrapped output such as `openssl base64` decodes; any other whitespace
/// is rejected.
pub fn decode_signature(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let text = if text.contains(['\r', '\n']) {
        Cow::Owned(text.replace(['\r', '\n'], ""))
    } else {
        Cow::Borrowed(text)
    };
    STANDARD.decode(text.as_bytes())
}
