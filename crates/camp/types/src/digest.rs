/// Reduce the blake3 digest of `input` into `0..modulus`.
///
/// Stable across runs and platforms; used for derived codes and serials.
pub fn digest_mod(input: &str, modulus: u64) -> u64 {
    let hash = blake3::hash(input.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head) % modulus.max(1)
}
