//! DSS signature primitive (FIPS 186)
//!
//! One algorithm tag covers two key families:
//! - **DSA** keys: finite-field DSA over SHA-256, nonces derived per RFC 6979
//! - **ECC** keys: ECDSA on NIST P-256 over SHA-256, nonces derived per RFC 6979
//!
//! Signatures are emitted as ASN.1 DER `SEQUENCE { r, s }`. On verification
//! the presented bytes must be the exact canonical DER of the decoded
//! signature, so trailing bytes or alternative encodings are rejected.

use crate::error::{Result, SignatureError};
use crate::keys::{PrivateKey, PublicKey};
use crate::traits::SignaturePrimitive;
use signature::{SignatureEncoding, Signer, Verifier};

/// DSA / ECDSA primitive (SHA-256)
#[derive(Debug, Clone, Copy, Default)]
pub struct DssPrimitive;

impl DssPrimitive {
    fn sign_dsa(key: &dsa::SigningKey, payload: &[u8]) -> Result<Vec<u8>> {
        let signature: dsa::Signature = key
            .try_sign(payload)
            .map_err(|e| SignatureError::PrimitiveFailure(format!("DSA signing failed: {}", e)))?;
        Ok(signature.to_vec())
    }

    fn sign_ecdsa(key: &p256::ecdsa::SigningKey, payload: &[u8]) -> Result<Vec<u8>> {
        let signature: p256::ecdsa::Signature = key.try_sign(payload).map_err(|e| {
            SignatureError::PrimitiveFailure(format!("ECDSA signing failed: {}", e))
        })?;
        Ok(signature.to_der().as_bytes().to_vec())
    }

    fn verify_dsa(key: &dsa::VerifyingKey, payload: &[u8], digest: &[u8]) -> bool {
        let Ok(signature) = dsa::Signature::try_from(digest) else {
            return false;
        };
        if signature.to_vec() != digest {
            return false;
        }
        key.verify(payload, &signature).is_ok()
    }

    fn verify_ecdsa(key: &p256::ecdsa::VerifyingKey, payload: &[u8], digest: &[u8]) -> bool {
        let Ok(signature) = p256::ecdsa::Signature::from_der(digest) else {
            return false;
        };
        if signature.to_der().as_bytes() != digest {
            return false;
        }
        key.verify(payload, &signature).is_ok()
    }
}

impl SignaturePrimitive for DssPrimitive {
    /// Sign payload with DSA or ECDSA depending on the key family
    ///
    /// # Errors
    /// - Returns `PrimitiveFailure` for RSA keys
    /// - Returns `PrimitiveFailure` if the underlying signer rejects the key
    fn sign(&self, key: &PrivateKey, payload: &[u8]) -> Result<Vec<u8>> {
        match key {
            PrivateKey::Dsa(signing_key) => Self::sign_dsa(signing_key, payload),
            PrivateKey::Ecc(signing_key) => Self::sign_ecdsa(signing_key, payload),
            PrivateKey::Rsa(_) => Err(SignatureError::PrimitiveFailure(
                "DSS cannot sign with a RSA key".to_string(),
            )),
        }
    }

    fn verify(&self, key: &PublicKey, payload: &[u8], digest: &[u8]) -> Result<bool> {
        match key {
            PublicKey::Dsa(verifying_key) => Ok(Self::verify_dsa(verifying_key, payload, digest)),
            PublicKey::Ecc(verifying_key) => {
                Ok(Self::verify_ecdsa(verifying_key, payload, digest))
            }
            PublicKey::Rsa(_) => Err(SignatureError::PrimitiveFailure(
                "DSS cannot verify with a RSA key".to_string(),
            )),
        }
    }

    fn name(&self) -> &str {
        "DSS-SHA256"
    }
}
