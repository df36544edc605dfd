//! Pipeline tunables.

use crate::consts::{
    DEFAULT_BLOCK_SIZE, DEFAULT_ROUNDS, DEFAULT_USE_PBR, MIN_BLOCK_SIZE, MIN_ROUNDS,
};
use crate::error::CipherError;

/// Tunables for the encode/decode pipeline.
///
/// Strong defaults: 3 rounds, PBR enabled, 8-byte blocks. Decode must be
/// given the same values that were used at encode time; any mismatch
/// yields garbage or a [`CipherError::TextDecode`].
///
/// # Thread Safety
///
/// `Options` is plain `Copy` data (`Send + Sync`). Pipeline invocations
/// share no state, so the same options value can drive any number of
/// concurrent calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Number of cipher rounds (minimum 1).
    pub rounds: u32,
    /// Whether the PBR pre/post stage runs.
    pub use_pbr: bool,
    /// Block size for the PBR block-reversal stage (minimum 1).
    pub block_size: usize,
}

impl Options {
    /// Creates options with the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            use_pbr: DEFAULT_USE_PBR,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Sets the round count. Out-of-range values are rejected by
    /// `encode`/`decode`, not clamped here.
    #[must_use]
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    /// Enables or disables the PBR stage. With PBR disabled the pipeline
    /// reduces to the plain multi-round cipher.
    #[must_use]
    pub fn with_pbr(mut self, use_pbr: bool) -> Self {
        self.use_pbr = use_pbr;
        self
    }

    /// Sets the PBR block size. Out-of-range values are rejected by
    /// `encode`/`decode`, not clamped here.
    #[must_use]
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Range checks, run before any transformation. The block size is
    /// validated even when the PBR stage is disabled.
    pub(crate) fn validate(&self) -> Result<(), CipherError> {
        if self.rounds < MIN_ROUNDS {
            return Err(CipherError::InvalidParameter("rounds must be at least 1"));
        }
        if self.block_size < MIN_BLOCK_SIZE {
            return Err(CipherError::InvalidParameter(
                "block size must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
