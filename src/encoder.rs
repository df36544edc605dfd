//! High-level encode facade: validate, PBR, cipher rounds, base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CipherError;
use crate::keys::{derive_key, evolve_key};
use crate::options::Options;
use crate::pbr::pbr_encode;
use crate::rounds::round_encrypt;

/// Encodes `plaintext` under `password` into a base64 token.
///
/// Pipeline: UTF-8 bytes → PBR stage (if enabled) → `rounds` applications
/// of the additive round cipher, with the key evolving after each round →
/// base64.
///
/// Deterministic by design: identical inputs always produce an identical
/// token (no salt, no nonce). That is a compatibility property of the
/// scheme, not an accident.
///
/// # Errors
///
/// - [`CipherError::InvalidInput`] — empty `plaintext` or `password`.
/// - [`CipherError::InvalidParameter`] — `rounds` or `block_size` below 1.
pub fn encode(plaintext: &str, password: &str, options: &Options) -> Result<String, CipherError> {
    if plaintext.is_empty() {
        return Err(CipherError::InvalidInput("payload must not be empty"));
    }
    if password.is_empty() {
        return Err(CipherError::InvalidInput("password must not be empty"));
    }
    options.validate()?;

    let mut data = plaintext.as_bytes().to_vec();
    if options.use_pbr {
        data = pbr_encode(data, password, options.block_size)?;
    }

    let mut key = derive_key(password)?;
    for _ in 0..options.rounds {
        data = round_encrypt(&data, &key);
        key = evolve_key(&key);
    }

    Ok(STANDARD.encode(data))
}
