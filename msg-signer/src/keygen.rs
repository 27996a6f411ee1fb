//! Key generation provider
//!
//! Produces tagged key handles for the signing core. The core itself never
//! sees the parameters, only the resulting `KeyPair` and its key type.
//!
//! # Cost
//! - RSA-2048: prime search, typically well under a second in release builds
//! - DSA-2048: domain parameter generation dominates, up to several seconds
//! - ECC P-256: a single scalar draw

use crate::config::{validate_keygen_config, KeyGenParameters};
use crate::error::{Result, SignatureError};
use crate::keys::{KeyPair, KeyType, PrivateKey};
use rand::rngs::OsRng;

/// Generate a fresh keypair of the requested family
///
/// # Errors
/// - Returns `Config` if `params` fail validation
/// - Returns `KeyGeneration` if the RSA prime search fails
pub fn generate_keypair(key_type: KeyType, params: &KeyGenParameters) -> Result<KeyPair> {
    validate_keygen_config(params)?;

    let private_key = match key_type {
        KeyType::Rsa => generate_rsa(params.rsa_key_length_bits)?,
        KeyType::Dsa => generate_dsa(params.dsa_key_length_bits)?,
        KeyType::Ecc => generate_ecc(&params.ecc_curve)?,
    };

    Ok(KeyPair::from_private_key(private_key))
}

fn generate_rsa(key_length_bits: usize) -> Result<PrivateKey> {
    let key = rsa::RsaPrivateKey::new(&mut OsRng, key_length_bits).map_err(|e| {
        SignatureError::KeyGeneration(format!("RSA-{} generation failed: {}", key_length_bits, e))
    })?;

    tracing::info!("Generated RSA keypair: key_length={} bits", key_length_bits);
    Ok(PrivateKey::Rsa(key))
}

fn generate_dsa(key_length_bits: usize) -> Result<PrivateKey> {
    let key_size = match key_length_bits {
        2048 => dsa::KeySize::DSA_2048_256,
        3072 => dsa::KeySize::DSA_3072_256,
        other => {
            return Err(SignatureError::KeyGeneration(format!(
                "Unsupported DSA key length: {} bits",
                other
            )))
        }
    };

    let components = dsa::Components::generate(&mut OsRng, key_size);
    let key = dsa::SigningKey::generate(&mut OsRng, components);

    tracing::info!("Generated DSA keypair: key_length={} bits", key_length_bits);
    Ok(PrivateKey::Dsa(key))
}

fn generate_ecc(curve: &str) -> Result<PrivateKey> {
    match curve {
        "p256" => {
            let key = p256::ecdsa::SigningKey::random(&mut OsRng);
            tracing::info!("Generated ECC keypair: curve={}", curve);
            Ok(PrivateKey::Ecc(key))
        }
        other => Err(SignatureError::KeyGeneration(format!(
            "Unsupported ECC curve: {}",
            other
        ))),
    }
}
