//! Global constants: pipeline defaults, bounds, and the key-evolution
//! parameters.

/// Default number of cipher rounds.
pub const DEFAULT_ROUNDS: u32 = 3;

/// Minimum allowed number of cipher rounds.
pub const MIN_ROUNDS: u32 = 1;

/// Default block size for the PBR block-reversal stage.
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Minimum allowed PBR block size.
pub const MIN_BLOCK_SIZE: usize = 1;

/// Whether the PBR stage runs by default.
pub const DEFAULT_USE_PBR: bool = true;

/// Sentinel byte appended by the PBR padding stage.
///
/// Trailing runs of this byte are stripped unconditionally on decode, so
/// payloads whose content ends in it lose that run (a known ambiguity of
/// the scheme, preserved for ciphertext compatibility).
pub const PAD_BYTE: u8 = b'~';

/// Multiplier in the key-evolution step `v -> v * 7 + 3 (mod 256)`.
pub const KEY_EVOLVE_MUL: u8 = 7;

/// Increment in the key-evolution step.
pub const KEY_EVOLVE_ADD: u8 = 3;
