//! RSA-PSS signature primitive
//!
//! # Parameters
//! - **Hash**: SHA-512 over the canonical payload
//! - **Mask generation**: MGF1 with SHA-512
//! - **Salt length**: equal to the digest length (64 bytes)
//! - **Signing**: blinded, to mask the private exponent operation against timing
//!
//! PSS is randomized, so two signatures of the same payload differ while both verify.

use crate::error::{Result, SignatureError};
use crate::keys::{PrivateKey, PublicKey};
use crate::traits::SignaturePrimitive;
use rand::rngs::OsRng;
use rsa::pss::{BlindedSigningKey, Signature, VerifyingKey};
use sha2::Sha512;
use signature::{RandomizedSigner, SignatureEncoding, Verifier};

/// RSA-PSS primitive (SHA-512)
#[derive(Debug, Clone, Copy, Default)]
pub struct PssPrimitive;

impl SignaturePrimitive for PssPrimitive {
    /// Sign payload with RSA-PSS
    ///
    /// # Errors
    /// - Returns `PrimitiveFailure` if the key is not an RSA key
    /// - Returns `PrimitiveFailure` if the key is too small for SHA-512 PSS encoding
    fn sign(&self, key: &PrivateKey, payload: &[u8]) -> Result<Vec<u8>> {
        let PrivateKey::Rsa(private_key) = key else {
            return Err(SignatureError::PrimitiveFailure(format!(
                "RSA-PSS cannot sign with a {} key",
                key.key_type()
            )));
        };

        let signing_key = BlindedSigningKey::<Sha512>::new(private_key.clone());
        let signature = signing_key
            .try_sign_with_rng(&mut OsRng, payload)
            .map_err(|e| {
                SignatureError::PrimitiveFailure(format!("RSA-PSS signing failed: {}", e))
            })?;

        Ok(signature.to_vec())
    }

    fn verify(&self, key: &PublicKey, payload: &[u8], digest: &[u8]) -> Result<bool> {
        let PublicKey::Rsa(public_key) = key else {
            return Err(SignatureError::PrimitiveFailure(format!(
                "RSA-PSS cannot verify with a {} key",
                key.key_type()
            )));
        };

        let Ok(signature) = Signature::try_from(digest) else {
            return Ok(false);
        };

        let verifying_key = VerifyingKey::<Sha512>::new(public_key.clone());
        Ok(verifying_key.verify(payload, &signature).is_ok())
    }

    fn name(&self) -> &str {
        "RSA-PSS-SHA512"
    }
}
