//! Closed table of signature algorithms
//!
//! Every algorithm tag maps to exactly one primitive and a fixed set of
//! compatible key types. The table is a `static` so the supported surface is
//! fixed at build time; there is no runtime registration.
//!
//! | Algorithm | Key types | Primitive            |
//! |-----------|-----------|----------------------|
//! | `PSS`     | RSA       | RSA-PSS, SHA-512     |
//! | `DSS`     | DSA, ECC  | DSA / ECDSA, SHA-256 |

use crate::dss::DssPrimitive;
use crate::error::{Result, SignatureError};
use crate::keys::KeyType;
use crate::pss::PssPrimitive;
use crate::traits::SignaturePrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signature algorithm tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignatureAlgorithm {
    Pss,
    Dss,
}

impl SignatureAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Pss => "PSS",
            SignatureAlgorithm::Dss => "DSS",
        }
    }

    /// Registry entry for this algorithm
    pub fn spec(&self) -> &'static AlgorithmSpec {
        match self {
            SignatureAlgorithm::Pss => &REGISTRY[0],
            SignatureAlgorithm::Dss => &REGISTRY[1],
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self> {
        resolve(s).map(|spec| spec.algorithm)
    }
}

/// Registry entry: compatible key types and the primitive to run
pub struct AlgorithmSpec {
    pub algorithm: SignatureAlgorithm,
    pub compatible_key_types: &'static [KeyType],
    pub primitive: &'static dyn SignaturePrimitive,
}

impl AlgorithmSpec {
    pub fn accepts(&self, key_type: KeyType) -> bool {
        self.compatible_key_types.contains(&key_type)
    }
}

impl fmt::Debug for AlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmSpec")
            .field("algorithm", &self.algorithm)
            .field("compatible_key_types", &self.compatible_key_types)
            .field("primitive", &self.primitive.name())
            .finish()
    }
}

static REGISTRY: [AlgorithmSpec; 2] = [
    AlgorithmSpec {
        algorithm: SignatureAlgorithm::Pss,
        compatible_key_types: &[KeyType::Rsa],
        primitive: &PssPrimitive,
    },
    AlgorithmSpec {
        algorithm: SignatureAlgorithm::Dss,
        compatible_key_types: &[KeyType::Dsa, KeyType::Ecc],
        primitive: &DssPrimitive,
    },
];

/// Look up an algorithm by its exact name ("PSS", "DSS")
///
/// # Errors
/// - Returns `UnknownSignatureAlgorithm` for any other name
pub fn resolve(algorithm_name: &str) -> Result<&'static AlgorithmSpec> {
    REGISTRY
        .iter()
        .find(|spec| spec.algorithm.as_str() == algorithm_name)
        .ok_or_else(|| SignatureError::UnknownSignatureAlgorithm(algorithm_name.to_string()))
}

/// Ensure `key_type` is accepted by `spec`
///
/// Must run before any primitive is invoked.
///
/// # Errors
/// - Returns `IncompatibleKeyType` naming the expected and actual key types
pub fn check_compatibility(spec: &AlgorithmSpec, key_type: KeyType) -> Result<()> {
    if spec.accepts(key_type) {
        return Ok(());
    }

    let expected = spec
        .compatible_key_types
        .iter()
        .map(KeyType::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    Err(SignatureError::IncompatibleKeyType {
        algorithm: spec.algorithm,
        expected,
        actual: key_type,
    })
}

/// All registered algorithms
pub fn supported_algorithms() -> impl Iterator<Item = SignatureAlgorithm> {
    REGISTRY.iter().map(|spec| spec.algorithm)
}
