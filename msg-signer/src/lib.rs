//! Timestamped message signatures over RSA, DSA and ECC keys
//!
//! Every signature binds the message to the UTC instant it was produced, so
//! changing the message, the signature bytes, or the claimed timestamp makes
//! verification fail. Two algorithms are available:
//!
//! | Algorithm | Key types | Primitive            |
//! |-----------|-----------|----------------------|
//! | `PSS`     | RSA       | RSA-PSS, SHA-512     |
//! | `DSS`     | DSA, ECC  | DSA / ECDSA, SHA-256 |
//!
//! # Quick Start
//!
//! ```rust
//! use msg_signer::keygen::generate_keypair;
//! use msg_signer::{sign_message, verify_message_signature, KeyGenParameters, KeyType};
//!
//! // Generate keypair
//! let keypair = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();
//!
//! // Sign message
//! let message = b"Audit report data";
//! let signature = sign_message(&keypair.private_key, message, "DSS").unwrap();
//!
//! // Verify signature
//! verify_message_signature(&keypair.public_key, message, &signature, "DSS").unwrap();
//! ```

pub mod config;
pub mod dss;
pub mod error;
pub mod keygen;
pub mod keys;
pub mod pss;
pub mod registry;
pub mod signer;
pub mod traits;

// Re-export commonly used types
pub use config::KeyGenParameters;
pub use error::{Result, SignatureError};
pub use keygen::generate_keypair;
pub use keys::{KeyPair, KeyType, PrivateKey, PublicKey};
pub use registry::{AlgorithmSpec, SignatureAlgorithm};
pub use signer::{sign_message, verify_message_signature, Signature};
pub use traits::SignaturePrimitive;
