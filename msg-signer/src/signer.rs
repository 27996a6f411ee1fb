//! Timestamped message signatures
//!
//! # Canonical payload
//!
//! The bytes handed to a primitive are never the raw message. Both signing
//! and verification first fold the message and the signing instant into a
//! fixed-width digest:
//!
//! ```text
//! payload = SHA-512( SHA-512(message) || timestamp_utc as i64 big-endian )
//! ```
//!
//! This binding is part of the signature format: changing it invalidates
//! every signature produced so far.
//!
//! # Example
//!
//! ```rust
//! use msg_signer::keygen::generate_keypair;
//! use msg_signer::{sign_message, verify_message_signature, KeyGenParameters, KeyType};
//!
//! let keypair = generate_keypair(KeyType::Ecc, &KeyGenParameters::default())?;
//!
//! let signature = sign_message(&keypair.private_key, b"Hello", "DSS")?;
//! verify_message_signature(&keypair.public_key, b"Hello", &signature, "DSS")?;
//!
//! assert!(verify_message_signature(&keypair.public_key, b"Hellx", &signature, "DSS").is_err());
//! # Ok::<(), msg_signer::SignatureError>(())
//! ```

use crate::error::{Result, SignatureError};
use crate::keys::{PrivateKey, PublicKey};
use crate::registry::{check_compatibility, resolve};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Length of the canonical payload in bytes
pub const CANONICAL_PAYLOAD_LEN: usize = 64;

/// Signature over a message at a given instant
///
/// Carries no algorithm tag: the verifier must name the same algorithm the
/// signer used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Raw primitive output over the canonical payload
    #[serde(with = "base64_bytes")]
    pub digest: Vec<u8>,
    /// Signing instant, seconds since the Unix epoch (UTC)
    pub timestamp_utc: i64,
}

impl Signature {
    /// Canonical payload this signature claims to cover for `message`
    pub fn canonical_payload(&self, message: &[u8]) -> [u8; CANONICAL_PAYLOAD_LEN] {
        canonical_payload(message, self.timestamp_utc)
    }
}

/// Bind message and timestamp into the bytes fed to the primitive
pub fn canonical_payload(message: &[u8], timestamp_utc: i64) -> [u8; CANONICAL_PAYLOAD_LEN] {
    let message_hash = Sha512::digest(message);

    let mut hasher = Sha512::new();
    hasher.update(message_hash);
    hasher.update(timestamp_utc.to_be_bytes());

    let mut payload = [0u8; CANONICAL_PAYLOAD_LEN];
    payload.copy_from_slice(&hasher.finalize());
    payload
}

/// Sign `message` with `key` using the named algorithm
///
/// The signing instant is taken from the system clock; callers cannot
/// supply it.
///
/// # Errors
/// - `UnknownSignatureAlgorithm` if `algorithm_name` is not registered
/// - `IncompatibleKeyType` if the algorithm does not accept the key's family
/// - `PrimitiveFailure` if the underlying primitive rejects the key
pub fn sign_message(key: &PrivateKey, message: &[u8], algorithm_name: &str) -> Result<Signature> {
    let spec = resolve(algorithm_name)?;
    check_compatibility(spec, key.key_type())?;

    let timestamp_utc = Utc::now().timestamp();
    let payload = canonical_payload(message, timestamp_utc);

    let digest = spec.primitive.sign(key, &payload)?;

    tracing::debug!(
        "Signed message: algo={}, key_type={}, msg_len={} bytes, digest_len={} bytes, timestamp_utc={}",
        spec.algorithm,
        key.key_type(),
        message.len(),
        digest.len(),
        timestamp_utc
    );

    Ok(Signature {
        digest,
        timestamp_utc,
    })
}

/// Verify that `signature` covers `message` under `key`
///
/// The algorithm and key type are checked before the signature fields are
/// looked at. Every cryptographic rejection, whatever its cause, surfaces as
/// the same `InvalidSignature` error.
///
/// # Errors
/// - `UnknownSignatureAlgorithm` if `algorithm_name` is not registered
/// - `IncompatibleKeyType` if the algorithm does not accept the key's family
/// - `InvalidSignature` if the signature does not verify
/// - `PrimitiveFailure` if the primitive cannot use the key at all
pub fn verify_message_signature(
    key: &PublicKey,
    message: &[u8],
    signature: &Signature,
    algorithm_name: &str,
) -> Result<()> {
    let spec = resolve(algorithm_name)?;
    check_compatibility(spec, key.key_type())?;

    let payload = signature.canonical_payload(message);

    let is_valid = spec.primitive.verify(key, &payload, &signature.digest)?;

    if !is_valid {
        tracing::warn!("{} signature verification failed", spec.algorithm);
        return Err(SignatureError::InvalidSignature {
            algorithm: spec.algorithm,
        });
    }

    tracing::debug!(
        "Signature verified: algo={}, key_type={}, msg_len={} bytes, timestamp_utc={}",
        spec.algorithm,
        key.key_type(),
        message.len(),
        signature.timestamp_utc
    );

    Ok(())
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
