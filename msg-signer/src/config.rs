//! Key generation parameters
//!
//! Loaded from a configuration file (TOML, JSON, YAML) or from environment
//! variables, then validated before any key is generated.

use crate::error::{Result, SignatureError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix, e.g. `MSG_SIGNER_RSA_KEY_LENGTH_BITS`
pub const ENV_PREFIX: &str = "MSG_SIGNER";

/// DSA modulus sizes with a matching FIPS 186 subgroup size
pub const SUPPORTED_DSA_KEY_LENGTHS: [usize; 2] = [2048, 3072];

/// Elliptic curves available for ECC keys
pub const SUPPORTED_CURVES: [&str; 1] = ["p256"];

const MIN_RSA_KEY_LENGTH: usize = 2048;
const MAX_RSA_KEY_LENGTH: usize = 8192;

/// Parameters handed to the key generation provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyGenParameters {
    /// RSA modulus size in bits
    #[serde(default = "default_rsa_key_length_bits")]
    pub rsa_key_length_bits: usize,

    /// DSA modulus size in bits (2048 or 3072)
    #[serde(default = "default_dsa_key_length_bits")]
    pub dsa_key_length_bits: usize,

    /// Curve name for ECC keys
    #[serde(default = "default_ecc_curve")]
    pub ecc_curve: String,
}

fn default_rsa_key_length_bits() -> usize {
    2048
}

fn default_dsa_key_length_bits() -> usize {
    2048
}

fn default_ecc_curve() -> String {
    "p256".to_string()
}

impl Default for KeyGenParameters {
    fn default() -> Self {
        Self {
            rsa_key_length_bits: default_rsa_key_length_bits(),
            dsa_key_length_bits: default_dsa_key_length_bits(),
            ecc_curve: default_ecc_curve(),
        }
    }
}

/// Load key generation parameters from a configuration file
///
/// Missing fields fall back to their defaults.
///
/// # Errors
/// - Returns `Config` if the file cannot be read or parsed
/// - Returns `Config` if a parameter is out of range
pub fn load_keygen_config<P: AsRef<Path>>(config_path: P) -> Result<KeyGenParameters> {
    let config = Config::builder()
        .add_source(File::from(config_path.as_ref()))
        .build()
        .map_err(|e| SignatureError::Config(format!("Failed to load config file: {}", e)))?;

    let params: KeyGenParameters = config
        .try_deserialize()
        .map_err(|e| SignatureError::Config(format!("Failed to parse config: {}", e)))?;

    validate_keygen_config(&params)?;

    Ok(params)
}

/// Load key generation parameters from `MSG_SIGNER_*` environment variables
pub fn load_keygen_config_from_env() -> Result<KeyGenParameters> {
    let config = Config::builder()
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()
        .map_err(|e| SignatureError::Config(format!("Failed to load env vars: {}", e)))?;

    let params: KeyGenParameters = config
        .try_deserialize()
        .map_err(|e| SignatureError::Config(format!("Failed to parse env config: {}", e)))?;

    validate_keygen_config(&params)?;

    Ok(params)
}

/// Check that every parameter is one the key generation provider supports
pub fn validate_keygen_config(params: &KeyGenParameters) -> Result<()> {
    if params.rsa_key_length_bits < MIN_RSA_KEY_LENGTH
        || params.rsa_key_length_bits > MAX_RSA_KEY_LENGTH
    {
        return Err(SignatureError::Config(format!(
            "rsa_key_length_bits must be between {} and {}, got {}",
            MIN_RSA_KEY_LENGTH, MAX_RSA_KEY_LENGTH, params.rsa_key_length_bits
        )));
    }

    if !SUPPORTED_DSA_KEY_LENGTHS.contains(&params.dsa_key_length_bits) {
        return Err(SignatureError::Config(format!(
            "dsa_key_length_bits must be one of {:?}, got {}",
            SUPPORTED_DSA_KEY_LENGTHS, params.dsa_key_length_bits
        )));
    }

    if !SUPPORTED_CURVES.contains(&params.ecc_curve.as_str()) {
        return Err(SignatureError::Config(format!(
            "Unsupported ecc_curve: {}",
            params.ecc_curve
        )));
    }

    Ok(())
}
