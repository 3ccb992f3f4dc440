// asymmetric_crypto.rs
//
// Copyright (c) 2025 RoscoeEH
//
// This source code is licensed under the MIT License.
// See the LICENSE file in the project root for full license information.
//
// Author: RoscoeEH
//
// Description:
// The four RSA operations: OAEP encryption and decryption, PSS signing and
// verification. Padding parameters are fixed to a single interoperable
// profile: SHA-256 for both the main digest and MGF1, empty OAEP label,
// maximum PSS salt length.

use rand::thread_rng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pss, RsaPrivateKey, RsaPublicKey};
use sha2::{Digest, Sha256};

use crate::error::Error;

/// Maximum PSS salt length for a modulus, `emLen - hLen - 2`.
fn max_salt_len(modulus_bits: usize) -> usize {
    let em_len = (modulus_bits - 1 + 7) / 8;
    em_len - <Sha256 as Digest>::output_size() - 2
}

fn pss_padding(modulus_bits: usize) -> Pss {
    Pss::new_with_salt::<Sha256>(max_salt_len(modulus_bits))
}

/// Encrypts data under an RSA public key with OAEP, SHA-256 for both the
/// digest and MGF1, and an empty label.
///
/// # Errors
///
/// Returns [`Error::Crypto`] if the plaintext exceeds the maximum OAEP
/// payload for the key (`keyBytes - 2 * 32 - 2`).
pub fn rsa_oaep_encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
    let ciphertext = public_key.encrypt(&mut thread_rng(), Oaep::new::<Sha256>(), plaintext)?;
    Ok(ciphertext)
}

/// Decrypts an OAEP ciphertext with an RSA private key, SHA-256/SHA-256.
///
/// # Errors
///
/// Returns [`Error::Crypto`] on any decryption or padding failure,
/// including ciphertext produced under a different key.
pub fn rsa_oaep_decrypt(private_key: &RsaPrivateKey, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
    let plaintext = private_key.decrypt(Oaep::new::<Sha256>(), ciphertext)?;
    Ok(plaintext)
}

/// Signs a message with RSA-PSS, SHA-256 digest and MGF1, salt length at
/// the maximum the key size permits.
pub fn rsa_pss_sign(private_key: &RsaPrivateKey, message: &[u8]) -> Result<Vec<u8>, Error> {
    let digest = Sha256::digest(message);
    let padding = pss_padding(private_key.n().bits());
    let signature = private_key.sign_with_rng(&mut thread_rng(), padding, digest.as_slice())?;
    Ok(signature)
}

/// Verifies an RSA-PSS signature, SHA-256/SHA-256 with maximum salt length.
///
/// A signature that does not match is an error, never a `false`: see
/// [`Error::Verification`].
pub fn rsa_pss_verify(
    public_key: &RsaPublicKey,
    message: &[u8],
    signature: &[u8],
) -> Result<(), Error> {
    let digest = Sha256::digest(message);
    let padding = pss_padding(public_key.n().bits());
    public_key
        .verify(padding, digest.as_slice(), signature)
        .map_err(|_| Error::Verification)
}

// Testing for encryption, decryption, signing and verifying
#[cfg(test)]
mod tests {
    use super::*;

    fn test_keypair(bits: usize) -> (RsaPrivateKey, RsaPublicKey) {
        let private_key = RsaPrivateKey::new(&mut thread_rng(), bits).expect("keygen failed");
        let public_key = RsaPublicKey::from(&private_key);
        (private_key, public_key)
    }

    #[test]
    fn test_oaep_enc_dec_kat() -> Result<(), Error> {
        let plaintext = b"hello";
        let (private_key, public_key) = test_keypair(2048);

        let ciphertext = rsa_oaep_encrypt(&public_key, plaintext)?;
        // A 2048-bit modulus always yields a 256-byte OAEP block.
        assert_eq!(ciphertext.len(), 256);

        let decrypted = rsa_oaep_decrypt(&private_key, &ciphertext)?;
        assert_eq!(
            decrypted, plaintext,
            "Decrypted data does not match original"
        );

        Ok(())
    }

    #[test]
    fn test_oaep_rejects_oversized_plaintext() {
        let (_, public_key) = test_keypair(2048);

        // OAEP limit for 2048-bit with SHA-256 is 256 - 2*32 - 2 = 190.
        assert!(rsa_oaep_encrypt(&public_key, &[0u8; 190]).is_ok());
        let err = rsa_oaep_encrypt(&public_key, &[0u8; 191]).unwrap_err();
        assert!(matches!(err, Error::Crypto(_)));
    }

    #[test]
    fn test_oaep_rejects_wrong_key() -> Result<(), Error> {
        let (_, public_key) = test_keypair(2048);
        let (other_private_key, _) = test_keypair(2048);

        let ciphertext = rsa_oaep_encrypt(&public_key, b"secret")?;
        let err = rsa_oaep_decrypt(&other_private_key, &ciphertext).unwrap_err();
        assert!(matches!(err, Error::Crypto(_)));

        Ok(())
    }

    #[test]
    fn test_pss_sign_verify_kat() -> Result<(), Error> {
        let message = b"Test vector: PSS signing test";
        let (private_key, public_key) = test_keypair(2048);

        let signature = rsa_pss_sign(&private_key, message)?;
        rsa_pss_verify(&public_key, message, &signature)?;

        Ok(())
    }

    #[test]
    fn test_pss_detects_tampered_signature() -> Result<(), Error> {
        let message = b"tamper detection";
        let (private_key, public_key) = test_keypair(2048);

        let signature = rsa_pss_sign(&private_key, message)?;
        for index in [0, signature.len() / 2, signature.len() - 1] {
            let mut tampered = signature.clone();
            tampered[index] ^= 0x01;
            let err = rsa_pss_verify(&public_key, message, &tampered).unwrap_err();
            assert!(matches!(err, Error::Verification));
        }

        Ok(())
    }

    #[test]
    fn test_pss_detects_tampered_message() -> Result<(), Error> {
        let message = b"original message".to_vec();
        let (private_key, public_key) = test_keypair(2048);

        let signature = rsa_pss_sign(&private_key, &message)?;
        let mut tampered = message.clone();
        tampered[0] ^= 0x01;
        let err = rsa_pss_verify(&public_key, &tampered, &signature).unwrap_err();
        assert!(matches!(err, Error::Verification));

        Ok(())
    }

    #[test]
    fn test_pss_rejects_wrong_public_key() -> Result<(), Error> {
        let message = b"wrong key rejection";
        let (private_key, _) = test_keypair(2048);
        let (_, other_public_key) = test_keypair(2048);

        let signature = rsa_pss_sign(&private_key, message)?;
        let err = rsa_pss_verify(&other_public_key, message, &signature).unwrap_err();
        assert!(matches!(err, Error::Verification));

        Ok(())
    }

    #[test]
    fn test_max_salt_len_matches_key_size() {
        // 2048-bit: emLen = 256, salt = 256 - 32 - 2.
        assert_eq!(max_salt_len(2048), 222);
        // emLen rounds up from modulus_bits - 1, not modulus_bits.
        assert_eq!(max_salt_len(2049), 222);
    }
}
