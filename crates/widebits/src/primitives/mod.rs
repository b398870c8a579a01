//! The 32-bit primitive interface behind the composite 64-bit layer.
//!
//! [`Wide64`](crate::Wide64) never touches a 64-bit integer: every one of its
//! operations is composed from the seven primitives below, applied to the
//! high and low halves. Which concrete implementation backs the primitives
//! is a strategy choice:
//!
//! - [`NativePrimitives`]: native `u32` operators
//! - [`ArithmeticPrimitives`]: integer `+ - * / %` only
//!
//! [`Backend`] names a strategy and is itself a `Primitives32`, selected once
//! per process.
//!
//! # Contract
//!
//! Every primitive returns a canonical `u32`. Shift primitives accept every
//! amount: `n == 0` is the identity, `n >= 32` yields zero (or the sign fill
//! for `arshift32`). They never fail; rejecting negative amounts is the job
//! of the signed public API above them.

mod arithmetic;
mod backend;

pub use arithmetic::ArithmeticPrimitives;
pub use backend::{Backend, ParseBackendError};

/// The 32-bit operations a backend must supply.
///
/// # Example Implementation
///
/// ```
/// use widebits::primitives::Primitives32;
///
/// struct Portable;
///
/// impl Primitives32 for Portable {
///     fn and32(&self, a: u32, b: u32) -> u32 { a & b }
///     fn or32(&self, a: u32, b: u32) -> u32 { a | b }
///     fn xor32(&self, a: u32, b: u32) -> u32 { a ^ b }
///     fn not32(&self, a: u32) -> u32 { !a }
///     fn lshift32(&self, a: u32, n: u32) -> u32 { a.checked_shl(n).unwrap_or(0) }
///     fn rshift32(&self, a: u32, n: u32) -> u32 { a.checked_shr(n).unwrap_or(0) }
///     fn arshift32(&self, a: u32, n: u32) -> u32 {
///         ((a as i32) >> n.min(31)) as u32
///     }
/// }
/// ```
pub trait Primitives32 {
    /// Bitwise AND.
    fn and32(&self, a: u32, b: u32) -> u32;

    /// Bitwise OR.
    fn or32(&self, a: u32, b: u32) -> u32;

    /// Bitwise XOR.
    fn xor32(&self, a: u32, b: u32) -> u32;

    /// Bitwise NOT, `0xFFFF_FFFF - a`.
    fn not32(&self, a: u32) -> u32;

    /// Logical left shift; zero for `n >= 32`.
    fn lshift32(&self, a: u32, n: u32) -> u32;

    /// Logical right shift; zero for `n >= 32`.
    fn rshift32(&self, a: u32, n: u32) -> u32;

    /// Arithmetic right shift on bit 31; sign fill for `n >= 32`.
    fn arshift32(&self, a: u32, n: u32) -> u32;
}

/// Native `u32` operators.
///
/// The reference strategy, and the one [`Backend::detect`] picks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativePrimitives;

impl Primitives32 for NativePrimitives {
    #[inline(always)]
    fn and32(&self, a: u32, b: u32) -> u32 {
        a & b
    }

    #[inline(always)]
    fn or32(&self, a: u32, b: u32) -> u32 {
        a | b
    }

    #[inline(always)]
    fn xor32(&self, a: u32, b: u32) -> u32 {
        a ^ b
    }

    #[inline(always)]
    fn not32(&self, a: u32) -> u32 {
        !a
    }

    #[inline(always)]
    fn lshift32(&self, a: u32, n: u32) -> u32 {
        a.checked_shl(n).unwrap_or(0)
    }

    #[inline(always)]
    fn rshift32(&self, a: u32, n: u32) -> u32 {
        a.checked_shr(n).unwrap_or(0)
    }

    #[inline(always)]
    fn arshift32(&self, a: u32, n: u32) -> u32 {
        // i32 >> 31 already smears the sign across every bit
        ((a as i32) >> n.min(31)) as u32
    }
}
