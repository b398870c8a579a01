//! widebits - Fixed-Width Unsigned Bit Operations
//!
//! Bitwise logic, shifts, rotates, modular addition and byte-order codecs
//! over 16-, 32- and 64-bit unsigned values, with every edge case pinned
//! down: shift amounts at or beyond the width, negative amounts, sign fill,
//! carries, and short byte slices.
//!
//! # Widths
//!
//! | Width | Native form | Module | Composite form |
//! |-------|-------------|--------|----------------|
//! | 16 | `u16` | [`w16`] | |
//! | 32 | `u32` | [`w32`] | |
//! | 64 | `u64` | [`w64`] | [`Wide64`] |
//!
//! All of them implement [`FixedWidth`], so generic code can be written once
//! against the trait.
//!
//! # Layers
//!
//! ```text
//! w16 / w32 / w64         free functions over native integers
//!        |
//! FixedWidth              one trait, one semantics, four implementations
//!        |
//! Wide64 + WideOps        64-bit ops composed from 32-bit halves
//!        |
//! Primitives32            and/or/xor/not/shifts on u32
//!   NativePrimitives      host operators
//!   ArithmeticPrimitives  only + - * / % on u64
//! ```
//!
//! The composite layer exists for hosts whose widest exact bitwise unit is
//! 32 bits. Its results are identical to the native `u64` ones; the
//! cross-verification tests and [`selftest`] hold both to that.
//!
//! # Shift Semantics
//!
//! - `lshift`/`rshift` by `n >= W` give zero.
//! - `arshift` by `n >= W` gives all ones if the sign bit was set, else zero.
//! - `rol`/`ror` use `n mod W`; negative amounts rotate the other way.
//! - Negative amounts to the three shifts are [`BitError::InvalidArgument`].
//!
//! # Example
//!
//! ```
//! use widebits::{w32, w64, FixedWidth, Wide64};
//!
//! assert_eq!(w32::rol(0x1234_5678, 8), 0x3456_7812);
//! assert_eq!(w32::arshift(0x8000_0000, 1), Ok(0xC000_0000));
//! assert_eq!(w64::to_le_bytes(0x0102_0304_0506_0708)[0], 0x08);
//!
//! let x = Wide64::new(0x1234_5678, 0x9ABC_DEF0);
//! assert_eq!(x.rol(16), Wide64::new(0x5678_9ABC, 0xDEF0_1234));
//! assert_eq!(u64::from(x).rol(16), 0x5678_9ABC_DEF0_1234);
//! ```

#![warn(missing_docs)]

mod error;
mod width;

pub mod primitives;
pub mod selftest;
pub mod wide;

pub use error::{BitError, Result};
pub use primitives::Backend;
pub use wide::Wide64;
pub use width::api::{w16, w32, w64};
pub use width::FixedWidth;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string.
pub fn version() -> &'static str {
    VERSION
}
