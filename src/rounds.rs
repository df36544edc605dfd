//! One round of keyed additive substitution over a byte sequence.
//!
//! Both directions are length-preserving and cycle the key across the
//! input. All arithmetic wraps mod 256.

/// Adds `key[i % key.len()]` to the byte at each position `i`.
pub(crate) fn round_encrypt(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, &b)| b.wrapping_add(key[i % key.len()]))
        .collect()
}

/// Inverse of [`round_encrypt`]: subtracts the same cycled key values.
pub(crate) fn round_decrypt(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, &b)| b.wrapping_sub(key[i % key.len()]))
        .collect()
}
