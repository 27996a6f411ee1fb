//! Sign a message with each key family and show what verification rejects

use anyhow::{Context, Result};
use msg_signer::{
    generate_keypair, sign_message, verify_message_signature, KeyGenParameters, KeyType,
    Signature,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let params = KeyGenParameters::default();
    let message = "Mon hât èst joli".as_bytes();

    for (key_type, algorithm) in [
        (KeyType::Rsa, "PSS"),
        (KeyType::Dsa, "DSS"),
        (KeyType::Ecc, "DSS"),
    ] {
        println!("=== {} key, {} signature ===", key_type, algorithm);

        let keypair = generate_keypair(key_type, &params)
            .with_context(|| format!("generating {} keypair", key_type))?;

        let signature = sign_message(&keypair.private_key, message, algorithm)?;
        println!("✓ Signed: {}", serde_json::to_string(&signature)?);

        verify_message_signature(&keypair.public_key, message, &signature, algorithm)?;
        println!("✓ Verification successful");

        let forward_dated = Signature {
            timestamp_utc: signature.timestamp_utc + 1,
            ..signature.clone()
        };
        match verify_message_signature(&keypair.public_key, message, &forward_dated, algorithm) {
            Err(e) => println!("✓ Shifted timestamp rejected: {}", e),
            Ok(()) => println!("✗ Critical error: shifted timestamp was accepted!"),
        }

        let mut tampered = message.to_vec();
        tampered.push(b'X');
        match verify_message_signature(&keypair.public_key, &tampered, &signature, algorithm) {
            Err(e) => println!("✓ Tampered message rejected: {}", e),
            Ok(()) => println!("✗ Critical error: tampered message was accepted!"),
        }
        println!();
    }

    Ok(())
}
