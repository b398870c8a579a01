//! Error kinds reported by fixed-width operations.
//!
//! Only three conditions are failures. Everything else the library does
//! (shifting by the full width or more, rotating by any amount, wrapping on
//! addition, complementing boundary values) is defined behavior and returns a
//! value.

/// A failed fixed-width operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BitError {
    /// A shift was requested with a negative amount.
    ///
    /// Rotates never produce this: their amount is reduced modulo the width.
    #[error("invalid argument: shift amount {amount} is negative")]
    InvalidArgument {
        /// The rejected shift amount.
        amount: i64,
    },

    /// A parse needed more bytes than remain after `offset`.
    #[error("insufficient data: need {needed} bytes at offset {offset}, slice holds {len}")]
    InsufficientData {
        /// Bytes required by the target width.
        needed: usize,
        /// Requested start position.
        offset: usize,
        /// Length of the whole input slice.
        len: usize,
    },

    /// A strict numeric conversion would exceed 2^53 - 1, the largest
    /// integer an `f64` holds exactly.
    #[error("precision exceeded: high half {high:#010x} exceeds 0x001fffff")]
    PrecisionExceeded {
        /// High half of the rejected value.
        high: u32,
    },
}

/// Result alias for fixed-width operations.
pub type Result<T> = core::result::Result<T, BitError>;
