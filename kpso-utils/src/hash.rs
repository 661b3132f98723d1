/// Derives a 32 byte seed from an arbitrary string.
pub fn seed_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Hex rendering of a seed, for logging.
pub fn seed_to_hex(seed: &[u8; 32]) -> String {
    hex::encode(seed)
}
