// operations.rs
//
// Copyright (c) 2025 RoscoeEH
//
// This source code is licensed under the MIT License.
// See the LICENSE file in the project root for full license information.
//
// Author: RoscoeEH
//
// Description:
// One handler per CLI command. Each handler resolves key material, loads the
// key, decodes the payload, performs the single crypto call, and returns the
// line to print.

use std::fs;
use std::io::{self, Read};

use crate::asymmetric_crypto::{rsa_oaep_decrypt, rsa_oaep_encrypt, rsa_pss_sign, rsa_pss_verify};
use crate::cli::{DecryptArgs, EncryptArgs, SignArgs, VerifyArgs};
use crate::codec::{b64_decode, b64_encode};
use crate::error::Error;
use crate::key_loading::{load_private_key, load_public_key, normalize_password};

const PEM_HEADER: &str = "-----BEGIN";

/// Resolves a key argument to PEM text.
///
/// Literal PEM (anything containing a `-----BEGIN` header) is used as-is,
/// `-` reads standard input, and any other value is treated as a path to a
/// PEM file. Accepting files and stdin keeps key material out of process
/// argument lists.
fn read_key_material(arg: &str) -> Result<String, Error> {
    if arg.contains(PEM_HEADER) {
        return Ok(arg.to_string());
    }
    if arg == "-" {
        let mut pem = String::new();
        io::stdin().read_to_string(&mut pem)?;
        return Ok(pem);
    }
    Ok(fs::read_to_string(arg)?)
}

/// OAEP-encrypts the UTF-8 message and returns base64 ciphertext.
pub fn encrypt_op(args: EncryptArgs) -> Result<String, Error> {
    let pem = read_key_material(&args.public_key)?;
    let public_key = load_public_key(&pem)?;
    let ciphertext = rsa_oaep_encrypt(&public_key, args.message.as_bytes())?;
    Ok(b64_encode(&ciphertext))
}

/// OAEP-decrypts base64 ciphertext and returns the UTF-8 plaintext.
pub fn decrypt_op(args: DecryptArgs) -> Result<String, Error> {
    let pem = read_key_material(&args.private_key)?;
    let password = normalize_password(args.password);
    let private_key = load_private_key(&pem, password.as_ref())?;
    let ciphertext = b64_decode(&args.ciphertext)?;
    let plaintext = rsa_oaep_decrypt(&private_key, &ciphertext)?;
    Ok(String::from_utf8(plaintext)?)
}

/// PSS-signs the base64-decoded message and returns a base64 signature.
pub fn sign_op(args: SignArgs) -> Result<String, Error> {
    let pem = read_key_material(&args.private_key)?;
    let password = normalize_password(args.password);
    let private_key = load_private_key(&pem, password.as_ref())?;
    let message = b64_decode(&args.message)?;
    let signature = rsa_pss_sign(&private_key, &message)?;
    Ok(b64_encode(&signature))
}

/// Verifies a PSS signature and returns the literal text `true`.
///
/// A mismatch propagates [`Error::Verification`]; there is no `false`
/// output.
pub fn verify_op(args: VerifyArgs) -> Result<String, Error> {
    let pem = read_key_material(&args.public_key)?;
    let public_key = load_public_key(&pem)?;
    let message = b64_decode(&args.message)?;
    let signature = b64_decode(&args.signature)?;
    rsa_pss_verify(&public_key, &message, &signature)?;
    Ok("true".to_string())
}
