use kpso_utils::{seed_from_str, seed_to_hex};

#[test]
fn test_seed_from_str() {
    assert_eq!(seed_from_str("kpso"), seed_from_str("kpso"));
    assert_ne!(seed_from_str("kpso"), seed_from_str("kpso2"));
    assert_eq!(seed_from_str(""), *blake3::hash(b"").as_bytes());
}

#[test]
fn test_seed_to_hex() {
    let mut seed = [0u8; 32];
    seed[0] = 0xab;
    seed[31] = 0x01;
    let hex = seed_to_hex(&seed);
    assert_eq!(hex.len(), 64);
    assert!(hex.starts_with("ab00"));
    assert!(hex.ends_with("01"));
    assert_eq!(seed_to_hex(&seed_from_str("")), blake3::hash(b"").to_hex().as_str());
}
