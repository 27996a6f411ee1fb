//! Sign/verify integration tests across all key families

use chrono::Utc;
use msg_signer::{
    generate_keypair, sign_message, verify_message_signature, KeyGenParameters, KeyPair, KeyType,
    Signature, SignatureAlgorithm, SignatureError,
};
use once_cell::sync::Lazy;

static RSA_KEYPAIR: Lazy<KeyPair> =
    Lazy::new(|| generate_keypair(KeyType::Rsa, &KeyGenParameters::default()).unwrap());

static DSA_KEYPAIR: Lazy<KeyPair> =
    Lazy::new(|| generate_keypair(KeyType::Dsa, &KeyGenParameters::default()).unwrap());

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn assert_invalid(result: msg_signer::Result<()>, algorithm: SignatureAlgorithm) {
    match result {
        Err(SignatureError::InvalidSignature { algorithm: a }) => assert_eq!(a, algorithm),
        other => panic!("Expected InvalidSignature, got {:?}", other),
    }
}

fn common_signature_checks(
    keypair: &KeyPair,
    message: &[u8],
    signature: &Signature,
    algorithm_name: &str,
) {
    let algorithm: SignatureAlgorithm = algorithm_name.parse().unwrap();

    // 1. Timestamp is the signing instant
    let now = Utc::now().timestamp();
    assert!(now - 10 <= signature.timestamp_utc && signature.timestamp_utc <= now);

    // 2. Valid signature verifies, repeatedly
    verify_message_signature(&keypair.public_key, message, signature, algorithm_name).unwrap();
    verify_message_signature(&keypair.public_key, message, signature, algorithm_name).unwrap();

    // 3. Appended message byte
    let mut longer = message.to_vec();
    longer.push(b'X');
    assert_invalid(
        verify_message_signature(&keypair.public_key, &longer, signature, algorithm_name),
        algorithm,
    );

    // 4. Appended digest byte
    let mut corrupted = signature.clone();
    corrupted.digest.push(b'x');
    assert_invalid(
        verify_message_signature(&keypair.public_key, message, &corrupted, algorithm_name),
        algorithm,
    );

    // 5. Timestamp moved forward by one second
    let mut corrupted = signature.clone();
    corrupted.timestamp_utc += 1;
    assert_invalid(
        verify_message_signature(&keypair.public_key, message, &corrupted, algorithm_name),
        algorithm,
    );

    // 6. Flipped bits in the digest
    let len = signature.digest.len();
    for index in [0, len / 2, len - 1] {
        let mut corrupted = signature.clone();
        corrupted.digest[index] ^= 0x01;
        assert_invalid(
            verify_message_signature(&keypair.public_key, message, &corrupted, algorithm_name),
            algorithm,
        );
    }

    // 7. Flipped bits in the message
    if !message.is_empty() {
        let mut flipped = message.to_vec();
        flipped[0] ^= 0x80;
        assert_invalid(
            verify_message_signature(&keypair.public_key, &flipped, signature, algorithm_name),
            algorithm,
        );
    }
}

#[test]
fn test_sign_and_verify_with_rsa_key() {
    init_tracing();
    let message = b"Hello";

    let keypair = &*RSA_KEYPAIR;
    let signature = sign_message(&keypair.private_key, message, "PSS").unwrap();

    // 2048-bit modulus
    assert_eq!(signature.digest.len(), 256);
    common_signature_checks(keypair, message, &signature, "PSS");
}

#[test]
fn test_sign_and_verify_with_dsa_key() {
    init_tracing();
    let message = "Mon hât èst joli".as_bytes();

    let keypair = &*DSA_KEYPAIR;
    let signature = sign_message(&keypair.private_key, message, "DSS").unwrap();

    common_signature_checks(keypair, message, &signature, "DSS");
}

#[test]
fn test_sign_and_verify_with_ecc_key() {
    init_tracing();
    let message = "Msd sd 867_ss".as_bytes();

    let keypair = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();
    let signature = sign_message(&keypair.private_key, message, "DSS").unwrap();

    common_signature_checks(&keypair, message, &signature, "DSS");
}

#[test]
fn test_empty_and_long_messages() {
    let keypair = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();
    let long_message = "Very long message ".repeat(1000);

    for message in [b"".as_slice(), long_message.as_bytes()] {
        let signature = sign_message(&keypair.private_key, message, "DSS").unwrap();
        common_signature_checks(&keypair, message, &signature, "DSS");
    }
}

#[test]
fn test_generic_signature_errors() {
    init_tracing();
    let message = b"Hello";
    let keypair = &*RSA_KEYPAIR;

    match sign_message(&keypair.private_key, message, "EIXH") {
        Err(e @ SignatureError::UnknownSignatureAlgorithm(_)) => {
            assert!(e.to_string().contains("Unknown signature algorithm"));
        }
        other => panic!("Expected UnknownSignatureAlgorithm, got {:?}", other),
    }

    // RSA key not accepted here
    match sign_message(&keypair.private_key, message, "DSS") {
        Err(e @ SignatureError::IncompatibleKeyType { .. }) => {
            let msg = e.to_string();
            assert!(msg.contains("Incompatible key type"));
            assert!(msg.contains("RSA"));
            assert!(msg.contains("DSA, ECC"));
        }
        other => panic!("Expected IncompatibleKeyType, got {:?}", other),
    }

    let empty = Signature {
        digest: Vec::new(),
        timestamp_utc: 0,
    };
    match verify_message_signature(&keypair.public_key, message, &empty, "XPZH") {
        Err(e @ SignatureError::UnknownSignatureAlgorithm(_)) => {
            assert!(e.to_string().contains("Unknown signature algorithm"));
        }
        other => panic!("Expected UnknownSignatureAlgorithm, got {:?}", other),
    }
}

#[test]
fn test_wrong_algorithm_at_verify_time() {
    let keypair = &*DSA_KEYPAIR;
    let signature = sign_message(&keypair.private_key, b"Hello", "DSS").unwrap();

    let result = verify_message_signature(&keypair.public_key, b"Hello", &signature, "PSS");
    assert!(matches!(
        result,
        Err(SignatureError::IncompatibleKeyType {
            actual: KeyType::Dsa,
            ..
        })
    ));
}

#[test]
fn test_signature_from_other_key_is_invalid() {
    let signer = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();
    let other = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();

    let signature = sign_message(&signer.private_key, b"Hello", "DSS").unwrap();
    assert_invalid(
        verify_message_signature(&other.public_key, b"Hello", &signature, "DSS"),
        SignatureAlgorithm::Dss,
    );
}

#[test]
fn test_dsa_signature_not_valid_under_ecc_key() {
    let ecc = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();
    let signature = sign_message(&DSA_KEYPAIR.private_key, b"Hello", "DSS").unwrap();

    assert_invalid(
        verify_message_signature(&ecc.public_key, b"Hello", &signature, "DSS"),
        SignatureAlgorithm::Dss,
    );
}

#[test]
fn test_signature_survives_json_transport() {
    let keypair = &*RSA_KEYPAIR;
    let signature = sign_message(&keypair.private_key, b"Hello", "PSS").unwrap();

    let json = serde_json::to_string(&signature).unwrap();
    let restored: Signature = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, signature);
    verify_message_signature(&keypair.public_key, b"Hello", &restored, "PSS").unwrap();
}

#[test]
fn test_concurrent_sign_and_verify_share_keys() {
    let keypair = generate_keypair(KeyType::Ecc, &KeyGenParameters::default()).unwrap();

    std::thread::scope(|scope| {
        for i in 0..8 {
            let keypair = &keypair;
            scope.spawn(move || {
                let message = format!("message {}", i);
                let signature = sign_message(&keypair.private_key, message.as_bytes(), "DSS")
                    .unwrap();
                verify_message_signature(
                    &keypair.public_key,
                    message.as_bytes(),
                    &signature,
                    "DSS",
                )
                .unwrap();
            });
        }
    });
}
