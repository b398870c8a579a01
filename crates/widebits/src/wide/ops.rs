//! Composite 64-bit operations built from 32-bit primitives.
//!
//! `WideOps` gives every [`Primitives32`] strategy the full 64-bit operation
//! set on [`Wide64`] pairs. No 64-bit integer is involved except in `add`,
//! where the low-half sum is formed in a wider host integer so the carry can
//! be read off and threaded into the high half.
//!
//! # Half Crossing
//!
//! ```text
//! lshift by n (0 < n < 32):
//!   high' = (high << n) | (low >> (32 - n))
//!   low'  =  low  << n
//!
//! lshift by n (32 <= n < 64):
//!   high' = low << (n - 32)
//!   low'  = 0
//! ```
//!
//! Right shifts mirror this. Rotates by more than 32 are rotates by `n - 32`
//! of the half-swapped pair.

use super::Wide64;
use crate::error::Result;
use crate::primitives::Primitives32;
use crate::width::{rotate_amount, shift_amount};

/// 2^32, the radix between the halves.
const HALF_RADIX: u64 = 1 << 32;

/// 64-bit operations on [`Wide64`], derived from the 32-bit primitives.
///
/// Implemented for every `Primitives32`, so any strategy can be used
/// directly:
///
/// ```
/// use widebits::Wide64;
/// use widebits::primitives::ArithmeticPrimitives;
/// use widebits::wide::WideOps;
///
/// let x = Wide64::new(0x1234_5678, 0x9ABC_DEF0);
/// let r = ArithmeticPrimitives.wide_rol(x, 16);
/// assert_eq!(r, Wide64::new(0x5678_9ABC, 0xDEF0_1234));
/// ```
pub trait WideOps: Primitives32 {
    /// Half-wise AND.
    #[inline]
    fn wide_and(&self, a: Wide64, b: Wide64) -> Wide64 {
        Wide64::new(self.and32(a.high(), b.high()), self.and32(a.low(), b.low()))
    }

    /// Half-wise OR.
    #[inline]
    fn wide_or(&self, a: Wide64, b: Wide64) -> Wide64 {
        Wide64::new(self.or32(a.high(), b.high()), self.or32(a.low(), b.low()))
    }

    /// Half-wise XOR.
    #[inline]
    fn wide_xor(&self, a: Wide64, b: Wide64) -> Wide64 {
        Wide64::new(self.xor32(a.high(), b.high()), self.xor32(a.low(), b.low()))
    }

    /// Half-wise NOT.
    #[inline]
    fn wide_not(&self, a: Wide64) -> Wide64 {
        Wide64::new(self.not32(a.high()), self.not32(a.low()))
    }

    /// Logical left shift across the half boundary.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n` is negative.
    fn wide_lshift(&self, x: Wide64, n: i64) -> Result<Wide64> {
        let Some(n) = shift_amount(n, 64)? else {
            return Ok(Wide64::ZERO);
        };
        Ok(match n {
            0 => x,
            1..=31 => Wide64::new(
                self.or32(self.lshift32(x.high(), n), self.rshift32(x.low(), 32 - n)),
                self.lshift32(x.low(), n),
            ),
            _ => Wide64::new(self.lshift32(x.low(), n - 32), 0),
        })
    }

    /// Logical right shift across the half boundary.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n` is negative.
    fn wide_rshift(&self, x: Wide64, n: i64) -> Result<Wide64> {
        let Some(n) = shift_amount(n, 64)? else {
            return Ok(Wide64::ZERO);
        };
        Ok(match n {
            0 => x,
            1..=31 => Wide64::new(
                self.rshift32(x.high(), n),
                self.or32(self.rshift32(x.low(), n), self.lshift32(x.high(), 32 - n)),
            ),
            _ => Wide64::new(0, self.rshift32(x.high(), n - 32)),
        })
    }

    /// Arithmetic right shift; bit 31 of the high half is the sign.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when `n` is negative.
    fn wide_arshift(&self, x: Wide64, n: i64) -> Result<Wide64> {
        let fill = if self.rshift32(x.high(), 31) == 1 {
            self.not32(0)
        } else {
            0
        };
        let Some(n) = shift_amount(n, 64)? else {
            return Ok(Wide64::new(fill, fill));
        };
        Ok(match n {
            0 => x,
            1..=31 => Wide64::new(
                self.arshift32(x.high(), n),
                self.or32(self.rshift32(x.low(), n), self.lshift32(x.high(), 32 - n)),
            ),
            _ => Wide64::new(fill, self.arshift32(x.high(), n - 32)),
        })
    }

    /// Rotate left by `n mod 64`.
    fn wide_rol(&self, x: Wide64, n: i64) -> Wide64 {
        match rotate_amount(n, 64) {
            0 => x,
            32 => x.swap_halves(),
            n @ 1..=31 => rol_pair(self, x.high(), x.low(), n),
            n => rol_pair(self, x.low(), x.high(), n - 32),
        }
    }

    /// Rotate right by `n mod 64`.
    fn wide_ror(&self, x: Wide64, n: i64) -> Wide64 {
        match rotate_amount(n, 64) {
            0 => x,
            32 => x.swap_halves(),
            n @ 1..=31 => ror_pair(self, x.high(), x.low(), n),
            n => ror_pair(self, x.low(), x.high(), n - 32),
        }
    }

    /// Addition modulo 2^64 with the low-half carry threaded explicitly.
    #[inline]
    fn wide_add(&self, a: Wide64, b: Wide64) -> Wide64 {
        let mut low = u64::from(a.low()) + u64::from(b.low());
        let carry = if low >= HALF_RADIX {
            low -= HALF_RADIX;
            1
        } else {
            0
        };
        let high = (u64::from(a.high()) + u64::from(b.high()) + carry) % HALF_RADIX;
        Wide64::new(high as u32, low as u32)
    }
}

impl<P: Primitives32 + ?Sized> WideOps for P {}

/// Rotate the pair `(high, low)` left by `0 < n < 32`.
#[inline]
fn rol_pair<P: Primitives32 + ?Sized>(p: &P, high: u32, low: u32, n: u32) -> Wide64 {
    Wide64::new(
        p.or32(p.lshift32(high, n), p.rshift32(low, 32 - n)),
        p.or32(p.lshift32(low, n), p.rshift32(high, 32 - n)),
    )
}

/// Rotate the pair `(high, low)` right by `0 < n < 32`.
#[inline]
fn ror_pair<P: Primitives32 + ?Sized>(p: &P, high: u32, low: u32, n: u32) -> Wide64 {
    Wide64::new(
        p.or32(p.rshift32(high, n), p.lshift32(low, 32 - n)),
        p.or32(p.rshift32(low, n), p.lshift32(high, 32 - n)),
    )
}
