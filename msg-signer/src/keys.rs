//! Key handles tagged by asymmetric family
//!
//! Keys are caller-owned and only ever read by the signing core. Each handle
//! is a tagged union over the supported families so that compatibility checks
//! are exhaustive `match`es rather than runtime type inspection.

use crate::error::SignatureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Asymmetric cryptosystem family of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeyType {
    Rsa,
    Dsa,
    Ecc,
}

impl KeyType {
    pub const ALL: [KeyType; 3] = [KeyType::Rsa, KeyType::Dsa, KeyType::Ecc];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyType::Rsa => "RSA",
            KeyType::Dsa => "DSA",
            KeyType::Ecc => "ECC",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyType::ALL
            .into_iter()
            .find(|key_type| key_type.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SignatureError::KeyGeneration(format!("Unknown key type: {}", s)))
    }
}

/// Private (signing) key handle
#[derive(Clone)]
pub enum PrivateKey {
    Rsa(rsa::RsaPrivateKey),
    Dsa(dsa::SigningKey),
    Ecc(p256::ecdsa::SigningKey),
}

impl PrivateKey {
    pub fn key_type(&self) -> KeyType {
        match self {
            PrivateKey::Rsa(_) => KeyType::Rsa,
            PrivateKey::Dsa(_) => KeyType::Dsa,
            PrivateKey::Ecc(_) => KeyType::Ecc,
        }
    }

    /// Derive the matching public key
    pub fn public_key(&self) -> PublicKey {
        match self {
            PrivateKey::Rsa(key) => PublicKey::Rsa(key.to_public_key()),
            PrivateKey::Dsa(key) => PublicKey::Dsa(key.verifying_key().clone()),
            PrivateKey::Ecc(key) => PublicKey::Ecc(*key.verifying_key()),
        }
    }
}

// Never print private key material.
impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("key_type", &self.key_type())
            .finish_non_exhaustive()
    }
}

impl From<rsa::RsaPrivateKey> for PrivateKey {
    fn from(key: rsa::RsaPrivateKey) -> Self {
        PrivateKey::Rsa(key)
    }
}

impl From<dsa::SigningKey> for PrivateKey {
    fn from(key: dsa::SigningKey) -> Self {
        PrivateKey::Dsa(key)
    }
}

impl From<p256::ecdsa::SigningKey> for PrivateKey {
    fn from(key: p256::ecdsa::SigningKey) -> Self {
        PrivateKey::Ecc(key)
    }
}

/// Public (verifying) key handle
#[derive(Clone, PartialEq)]
pub enum PublicKey {
    Rsa(rsa::RsaPublicKey),
    Dsa(dsa::VerifyingKey),
    Ecc(p256::ecdsa::VerifyingKey),
}

impl PublicKey {
    pub fn key_type(&self) -> KeyType {
        match self {
            PublicKey::Rsa(_) => KeyType::Rsa,
            PublicKey::Dsa(_) => KeyType::Dsa,
            PublicKey::Ecc(_) => KeyType::Ecc,
        }
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("key_type", &self.key_type())
            .finish_non_exhaustive()
    }
}

impl From<rsa::RsaPublicKey> for PublicKey {
    fn from(key: rsa::RsaPublicKey) -> Self {
        PublicKey::Rsa(key)
    }
}

impl From<dsa::VerifyingKey> for PublicKey {
    fn from(key: dsa::VerifyingKey) -> Self {
        PublicKey::Dsa(key)
    }
}

impl From<p256::ecdsa::VerifyingKey> for PublicKey {
    fn from(key: p256::ecdsa::VerifyingKey) -> Self {
        PublicKey::Ecc(key)
    }
}

/// Private key together with its public half
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl KeyPair {
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    pub fn key_type(&self) -> KeyType {
        self.private_key.key_type()
    }
}
