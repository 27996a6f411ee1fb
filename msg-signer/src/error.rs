/// Error type definitions
use crate::keys::KeyType;
use crate::registry::SignatureAlgorithm;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Unknown signature algorithm: {0}")]
    UnknownSignatureAlgorithm(String),

    /// The algorithm exists but does not accept this family of key.
    #[error("Incompatible key type {actual} for {algorithm} signature (expected {expected})")]
    IncompatibleKeyType {
        algorithm: SignatureAlgorithm,
        expected: String,
        actual: KeyType,
    },

    /// Verification failed. Never carries the cause.
    #[error("Failed {algorithm} signature verification")]
    InvalidSignature { algorithm: SignatureAlgorithm },

    #[error("Signature primitive failure: {0}")]
    PrimitiveFailure(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl SignatureError {
    /// True when the error is the verification predicate being false.
    pub fn is_invalid_signature(&self) -> bool {
        matches!(self, SignatureError::InvalidSignature { .. })
    }
}

pub type Result<T> = std::result::Result<T, SignatureError>;
