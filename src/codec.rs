use base64::{engine::general_purpose, Engine as _};

use crate::error::Error;

/// Standard base64, padded, no line wrapping.
pub fn b64_encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn b64_decode(text: &str) -> Result<Vec<u8>, Error> {
    Ok(general_purpose::STANDARD.decode(text)?)
}
