use thiserror::Error;

/// Failure classes for the four operations and their I/O boundaries.
///
/// Verification failure is deliberately an error variant rather than a
/// boolean result, so a forged or corrupted signature cannot be ignored
/// by a caller that forgets to inspect a flag.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Key parse error: {0}")]
    KeyParse(String),

    #[error("Key decrypt error: {0}")]
    KeyDecrypt(String),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Decrypted bytes are not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Crypto error: {0}")]
    Crypto(#[from] rsa::Error),

    #[error("Signature verification failed")]
    Verification,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
