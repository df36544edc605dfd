//! Password-keyed, reversible text-to-text obfuscation.
//!
//! `avscipher` turns a plaintext string into a copy/paste-safe base64
//! token and back, keyed by a password and three tunables. The pipeline
//! combines a multi-round additive byte cipher (the key evolves
//! deterministically each round) with an optional PBR stage —
//! polyalphabetic substitution plus fixed-size block reversal — applied
//! before the rounds on encode and undone after them on decode.
//!
//! # This is not secure encryption
//!
//! The scheme is an obfuscation layer, nothing more. There is no
//! authenticated encryption, no key derivation function, and output is
//! fully deterministic (no salt or nonce). Wrong-password detection relies
//! on the final UTF-8 decode rejecting the garbled bytes, which is
//! probabilistic. Do not use this where confidentiality against a capable
//! attacker matters.
//!
//! # Architecture
//!
//! ```text
//! encode: plaintext ─UTF-8→ bytes ─PBR?→ round cipher × N ─base64→ token
//! decode: token ─base64→ bytes ─round cipher⁻¹ × N (reverse key order)→
//!         ─PBR⁻¹?→ bytes ─UTF-8→ plaintext
//! ```
//!
//! # Examples
//!
//! Round trip with the defaults (3 rounds, PBR on, 8-byte blocks):
//!
//! ```
//! use avscipher::{decode, encode, Options};
//!
//! let options = Options::new();
//! let token = encode("Hello, World!", "test123", &options)?;
//! assert_eq!(decode(&token, "test123", &options)?, "Hello, World!");
//! # Ok::<(), avscipher::CipherError>(())
//! ```
//!
//! A wrong password is surfaced as a recoverable decode failure (or, less
//! often, visibly garbled text — there is no integrity tag):
//!
//! ```
//! use avscipher::{decode, encode, Options};
//!
//! let options = Options::new();
//! let token = encode("Hello, World!", "test123", &options)?;
//! match decode(&token, "wrong", &options) {
//!     Ok(garbled) => assert_ne!(garbled, "Hello, World!"),
//!     Err(_) => {}
//! }
//! # Ok::<(), avscipher::CipherError>(())
//! ```
//!
//! Custom tunables; decode must use the same ones:
//!
//! ```
//! use avscipher::{decode, encode, Options};
//!
//! let options = Options::new().with_rounds(5).with_block_size(4);
//! let token = encode("payload", "pw", &options)?;
//! assert_eq!(decode(&token, "pw", &options)?, "payload");
//! # Ok::<(), avscipher::CipherError>(())
//! ```

pub mod consts;
pub mod error;
pub mod options;

mod decoder;
mod encoder;
mod keys;
mod pbr;
mod rounds;

// High-level API — this is what callers import
pub use decoder::decode;
pub use encoder::encode;
pub use error::CipherError;
pub use options::Options;
