/// Unified interface for signature primitives
use crate::error::Result;
use crate::keys::{PrivateKey, PublicKey};

/// Signature primitive provider
///
/// Implementations only run the underlying math over an already canonical
/// payload. Key type policy is enforced by the registry before any call.
pub trait SignaturePrimitive: Send + Sync {
    /// Sign payload, returning the raw primitive output
    fn sign(&self, key: &PrivateKey, payload: &[u8]) -> Result<Vec<u8>>;

    /// Verify raw primitive output against payload
    ///
    /// `Ok(false)` covers every form of rejection, including a digest that
    /// cannot even be decoded.
    fn verify(&self, key: &PublicKey, payload: &[u8], digest: &[u8]) -> Result<bool>;

    /// Primitive name
    fn name(&self) -> &str;
}
