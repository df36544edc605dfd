//! PBR stage: padding, polyalphabetic substitution, and fixed-size block
//! reversal.
//!
//! This stage is keyed by the password directly (its derived byte key,
//! cycled), not by the evolving round key, and runs exactly once: before
//! all cipher rounds on encode, after all rounds are undone on decode.

use crate::consts::PAD_BYTE;
use crate::error::CipherError;
use crate::keys::derive_key;

/// Appends [`PAD_BYTE`] until the length is a multiple of `block_size`.
/// Already-aligned input gets no padding.
///
/// Known ambiguity, preserved from the original scheme: a payload whose
/// content ends in the sentinel loses that trailing run on decode, since
/// trailing sentinels are stripped unconditionally there.
fn pad(data: &mut Vec<u8>, block_size: usize) {
    let rem = data.len() % block_size;
    if rem != 0 {
        data.resize(data.len() + (block_size - rem), PAD_BYTE);
    }
}

/// Cycles the keyword bytes to exactly `len` values. When the lengths
/// already match, the stream is the keyword itself.
fn key_stream(len: usize, keyword: &[u8]) -> Vec<u8> {
    keyword.iter().copied().cycle().take(len).collect()
}

/// Positional wrapping addition between data and keystream.
fn substitute(data: &mut [u8], stream: &[u8]) {
    for (b, k) in data.iter_mut().zip(stream) {
        *b = b.wrapping_add(*k);
    }
}

/// Inverse of [`substitute`]: positional wrapping subtraction.
fn unsubstitute(data: &mut [u8], stream: &[u8]) {
    for (b, k) in data.iter_mut().zip(stream) {
        *b = b.wrapping_sub(*k);
    }
}

/// Reverses each consecutive `block_size` chunk independently; chunk order
/// is preserved. Self-inverse for lengths that are a multiple of the
/// block size, which padding guarantees on the encode path.
fn reverse_blocks(data: &mut [u8], block_size: usize) {
    for chunk in data.chunks_mut(block_size) {
        chunk.reverse();
    }
}

/// Forward PBR transform: pad, substitute with the password keystream,
/// reverse blocks.
///
/// Substitution runs on the padded content so the keystream spans the full
/// padded length; reversal runs last so block boundaries align with it.
pub(crate) fn pbr_encode(
    mut data: Vec<u8>,
    password: &str,
    block_size: usize,
) -> Result<Vec<u8>, CipherError> {
    let key = derive_key(password)?;
    pad(&mut data, block_size);
    let stream = key_stream(data.len(), &key);
    substitute(&mut data, &stream);
    reverse_blocks(&mut data, block_size);
    Ok(data)
}

/// Inverse PBR transform: reverse blocks, unsubstitute with a keystream
/// regenerated from the reversed data's length, strip trailing sentinels.
pub(crate) fn pbr_decode(
    mut data: Vec<u8>,
    password: &str,
    block_size: usize,
) -> Result<Vec<u8>, CipherError> {
    if data.is_empty() {
        // pbr_encode of a validated non-empty payload always emits at
        // least one block
        return Err(CipherError::PbrDecode("empty byte sequence"));
    }
    let key = derive_key(password)?;
    reverse_blocks(&mut data, block_size);
    let stream = key_stream(data.len(), &key);
    unsubstitute(&mut data, &stream);
    while data.last() == Some(&PAD_BYTE) {
        data.pop();
    }
    Ok(data)
}
