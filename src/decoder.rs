//! High-level decode facade: base64, inverse cipher rounds, PBR inverse,
//! UTF-8.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::CipherError;
use crate::keys::key_sequence;
use crate::options::Options;
use crate::pbr::pbr_decode;
use crate::rounds::round_decrypt;

/// Decodes a base64 token produced by [`encode`](crate::encode) back into
/// plaintext.
///
/// Mirror image of the encode pipeline: base64 decode → the forward key
/// sequence is rebuilt and walked in reverse order, undoing each round's
/// substitution in the opposite order it was applied → PBR inverse stage
/// (if enabled) → UTF-8.
///
/// # Errors
///
/// - [`CipherError::InvalidInput`] — empty `ciphertext` or `password`.
/// - [`CipherError::InvalidParameter`] — `rounds` or `block_size` below 1.
/// - [`CipherError::MalformedInput`] — `ciphertext` is not valid base64.
/// - [`CipherError::PbrDecode`] — the PBR inverse stage failed.
/// - [`CipherError::TextDecode`] — the inverted bytes are not valid UTF-8,
///   typically because the password or options differ from encode time.
///   The scheme has no integrity tag, so this detection is probabilistic:
///   a mismatch can also yield garbled-but-valid text.
pub fn decode(ciphertext: &str, password: &str, options: &Options) -> Result<String, CipherError> {
    if ciphertext.is_empty() {
        return Err(CipherError::InvalidInput("payload must not be empty"));
    }
    if password.is_empty() {
        return Err(CipherError::InvalidInput("password must not be empty"));
    }
    options.validate()?;

    let mut data = STANDARD.decode(ciphertext)?;

    let keys = key_sequence(password, options.rounds)?;
    for key in keys.iter().rev() {
        data = round_decrypt(&data, key);
    }

    if options.use_pbr {
        data = pbr_decode(data, password, options.block_size)?;
    }

    Ok(String::from_utf8(data)?)
}
