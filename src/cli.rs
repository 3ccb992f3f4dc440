use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rsautil",
    version,
    about = "RSA-OAEP encryption and RSA-PSS signatures over PEM keys."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Encrypt a message under an RSA public key
    Encrypt(EncryptArgs),

    /// Decrypt an OAEP ciphertext with an RSA private key
    Decrypt(DecryptArgs),

    /// Sign a base64 message with an RSA private key
    Sign(SignArgs),

    /// Verify a PSS signature against an RSA public key
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct EncryptArgs {
    /// UTF-8 plaintext to encrypt
    pub message: String,

    /// Public key: PEM text, a path to a PEM file, or `-` for stdin
    pub public_key: String,
}

#[derive(Args)]
pub struct DecryptArgs {
    /// Base64 ciphertext to decrypt
    pub ciphertext: String,

    /// Private key: PEM text, a path to a PEM file, or `-` for stdin
    pub private_key: String,

    /// Password for an encrypted private key; empty means none
    pub password: Option<String>,
}

#[derive(Args)]
pub struct SignArgs {
    /// Base64 message to sign
    pub message: String,

    /// Private key: PEM text, a path to a PEM file, or `-` for stdin
    pub private_key: String,

    /// Password for an encrypted private key; empty means none
    pub password: Option<String>,
}

#[derive(Args)]
pub struct VerifyArgs {
    /// Base64 message that was signed
    pub message: String,

    /// Base64 signature to check
    pub signature: String,

    /// Public key: PEM text, a path to a PEM file, or `-` for stdin
    pub public_key: String,
}
