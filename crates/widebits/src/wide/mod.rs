//! 64-bit values as a pair of 32-bit halves.
//!
//! [`Wide64`] is the composite form of the 64-bit width: a `(high, low)`
//! pair whose operations are built solely from the 32-bit primitives of the
//! active [`Backend`]. It agrees bit for bit with the native `u64`
//! implementation and converts to and from it losslessly.
//!
//! # Example
//!
//! ```
//! use widebits::{FixedWidth, Wide64};
//!
//! let a = Wide64::new(0, 0xFFFF_FFFF);
//! assert_eq!(a.add_mod(Wide64::new(0, 1)), Wide64::new(1, 0));
//!
//! let neg = Wide64::new(0x8000_0000, 0);
//! assert_eq!(neg.arshift(63), Ok(Wide64::ONES));
//! ```

use core::fmt;

use crate::error::{BitError, Result};
use crate::primitives::Backend;
use crate::width::{codec, FixedWidth};

mod ops;

pub use ops::WideOps;

/// Largest high half whose value still fits in 53 bits.
pub const MAX_SAFE_HIGH: u32 = 0x001F_FFFF;

/// 2^32 as a double.
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A 64-bit unsigned value held as `high * 2^32 + low`.
///
/// Plain immutable value: every operation returns a new pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wide64 {
    high: u32,
    low: u32,
}

impl Wide64 {
    /// Zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// All 64 bits set.
    pub const ONES: Self = Self::new(u32::MAX, u32::MAX);

    /// Build from halves.
    #[inline]
    pub const fn new(high: u32, low: u32) -> Self {
        Self { high, low }
    }

    /// Upper 32 bits.
    #[inline]
    pub const fn high(self) -> u32 {
        self.high
    }

    /// Lower 32 bits.
    #[inline]
    pub const fn low(self) -> u32 {
        self.low
    }

    /// Both halves zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// The pair with its halves exchanged (a rotation by 32).
    #[inline]
    pub const fn swap_halves(self) -> Self {
        Self::new(self.low, self.high)
    }

    /// `high * 2^32 + low` as a double.
    ///
    /// With `strict` set, values above 2^53 - 1 are refused instead of being
    /// rounded to the nearest representable double.
    ///
    /// # Errors
    ///
    /// [`BitError::PrecisionExceeded`] in strict mode when the high half
    /// exceeds [`MAX_SAFE_HIGH`].
    pub fn to_number(self, strict: bool) -> Result<f64> {
        if strict && self.high > MAX_SAFE_HIGH {
            return Err(BitError::PrecisionExceeded { high: self.high });
        }
        Ok(f64::from(self.high) * TWO_POW_32 + f64::from(self.low))
    }

    /// Strict [`to_number`](Self::to_number).
    ///
    /// # Errors
    ///
    /// [`BitError::PrecisionExceeded`] when the value exceeds 2^53 - 1.
    pub fn to_number_strict(self) -> Result<f64> {
        self.to_number(true)
    }

    /// Split a double into halves.
    ///
    /// `v` is floored first. Negative values wrap modulo 2^64 like
    /// [`FixedWidth::mask`] (`-1.0` gives all ones); NaN and infinities give
    /// zero.
    pub fn from_number(v: f64) -> Self {
        let v = v.floor();
        let high = (v / TWO_POW_32).floor();
        // exact: both terms are integers and the difference lies in [0, 2^32)
        let low = v - high * TWO_POW_32;
        // `as` maps NaN to 0
        Self::new(high.rem_euclid(TWO_POW_32) as u32, low as u32)
    }
}

impl From<u64> for Wide64 {
    #[inline]
    fn from(v: u64) -> Self {
        Self::new((v >> 32) as u32, v as u32)
    }
}

impl From<Wide64> for u64 {
    #[inline]
    fn from(w: Wide64) -> Self {
        (u64::from(w.high) << 32) | u64::from(w.low)
    }
}

impl From<(u32, u32)> for Wide64 {
    #[inline]
    fn from((high, low): (u32, u32)) -> Self {
        Self::new(high, low)
    }
}

impl fmt::Debug for Wide64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wide64({:#010x}, {:#010x})", self.high, self.low)
    }
}

impl fmt::Display for Wide64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}{:08x}", self.high, self.low)
    }
}

impl fmt::LowerHex for Wide64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&u64::from(*self), f)
    }
}

impl fmt::UpperHex for Wide64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&u64::from(*self), f)
    }
}

/// The composite operation set, run on [`Backend::active`].
impl FixedWidth for Wide64 {
    const BITS: u32 = 64;
    const BYTES: usize = 8;
    const ZERO: Self = Wide64::ZERO;
    const ONES: Self = Wide64::ONES;

    type Bytes = [u8; 8];

    #[inline]
    fn mask(n: i128) -> Self {
        // bits 32..63 and 0..31 of the two's-complement form
        Self::new((n >> 32) as u32, n as u32)
    }

    #[inline]
    fn band(self, other: Self) -> Self {
        Backend::active().wide_and(self, other)
    }

    #[inline]
    fn bor(self, other: Self) -> Self {
        Backend::active().wide_or(self, other)
    }

    #[inline]
    fn bxor(self, other: Self) -> Self {
        Backend::active().wide_xor(self, other)
    }

    #[inline]
    fn bnot(self) -> Self {
        Backend::active().wide_not(self)
    }

    #[inline]
    fn lshift(self, n: i64) -> Result<Self> {
        Backend::active().wide_lshift(self, n)
    }

    #[inline]
    fn rshift(self, n: i64) -> Result<Self> {
        Backend::active().wide_rshift(self, n)
    }

    #[inline]
    fn arshift(self, n: i64) -> Result<Self> {
        Backend::active().wide_arshift(self, n)
    }

    #[inline]
    fn rol(self, n: i64) -> Self {
        Backend::active().wide_rol(self, n)
    }

    #[inline]
    fn ror(self, n: i64) -> Self {
        Backend::active().wide_ror(self, n)
    }

    #[inline]
    fn add_mod(self, other: Self) -> Self {
        Backend::active().wide_add(self, other)
    }

    #[inline]
    fn sign_bit(self) -> bool {
        self.high.sign_bit()
    }

    fn encode_be(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.high.encode_be());
        out[4..].copy_from_slice(&self.low.encode_be());
        out
    }

    fn encode_le(self) -> [u8; 8] {
        let mut out = [0u8; 8];
        out[..4].copy_from_slice(&self.low.encode_le());
        out[4..].copy_from_slice(&self.high.encode_le());
        out
    }

    fn decode_be(bytes: &[u8], offset: usize) -> Result<Self> {
        let window = codec::window::<8>(bytes, offset)?;
        Ok(Self::new(
            u32::decode_be(&window, 0)?,
            u32::decode_be(&window, 4)?,
        ))
    }

    fn decode_le(bytes: &[u8], offset: usize) -> Result<Self> {
        let window = codec::window::<8>(bytes, offset)?;
        Ok(Self::new(
            u32::decode_le(&window, 4)?,
            u32::decode_le(&window, 0)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves() {
        let w = Wide64::from(0x1234_5678_9ABC_DEF0u64);
        assert_eq!(w.high(), 0x1234_5678);
        assert_eq!(w.low(), 0x9ABC_DEF0);
        assert_eq!(u64::from(w), 0x1234_5678_9ABC_DEF0);
        assert_eq!(Wide64::from((1, 2)), Wide64::new(1, 2));
        assert_eq!(w.swap_halves(), Wide64::new(0x9ABC_DEF0, 0x1234_5678));
    }

    #[test]
    fn test_eq_and_zero() {
        assert!(Wide64::ZERO.is_zero());
        assert!(!Wide64::new(0, 1).is_zero());
        assert!(!Wide64::new(1, 0).is_zero());
        assert_eq!(Wide64::new(7, 9), Wide64::new(7, 9));
        assert_ne!(Wide64::new(7, 9), Wide64::new(9, 7));
    }

    #[test]
    fn test_mask() {
        assert_eq!(Wide64::mask(-1), Wide64::ONES);
        assert_eq!(Wide64::mask(1 << 64), Wide64::ZERO);
        assert_eq!(Wide64::mask((1 << 64) + (5 << 32) + 3), Wide64::new(5, 3));
        assert_eq!(Wide64::mask(-(1 << 32)), Wide64::new(u32::MAX, 0));
    }

    #[test]
    fn test_codec() {
        let w = Wide64::new(0x0102_0304, 0x0506_0708);
        assert_eq!(w.encode_be(), [1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(w.encode_le(), [8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(Wide64::decode_be(&w.encode_be(), 0), Ok(w));
        assert_eq!(Wide64::decode_le(&w.encode_le(), 0), Ok(w));

        let padded = [0xFF, 1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(Wide64::decode_be(&padded, 1), Ok(w));
        assert_eq!(
            Wide64::decode_be(&padded, 2),
            Err(BitError::InsufficientData {
                needed: 8,
                offset: 2,
                len: 9
            })
        );
    }

    #[test]
    fn test_to_number() {
        assert_eq!(Wide64::new(0, 42).to_number_strict(), Ok(42.0));
        assert_eq!(
            Wide64::new(MAX_SAFE_HIGH, u32::MAX).to_number_strict(),
            Ok(9_007_199_254_740_991.0)
        );
        assert_eq!(
            Wide64::new(0x0020_0000, 0).to_number_strict(),
            Err(BitError::PrecisionExceeded { high: 0x0020_0000 })
        );
        assert_eq!(
            Wide64::new(0x0020_0000, 0).to_number(false),
            Ok(9_007_199_254_740_992.0)
        );
        assert_eq!(
            Wide64::ONES.to_number(false),
            Ok(18_446_744_073_709_551_616.0)
        );
    }

    #[test]
    fn test_from_number() {
        assert_eq!(Wide64::from_number(0.0), Wide64::ZERO);
        assert_eq!(Wide64::from_number(4_294_967_296.0), Wide64::new(1, 0));
        assert_eq!(Wide64::from_number(4_294_967_297.9), Wide64::new(1, 1));
        assert_eq!(
            Wide64::from_number(9_007_199_254_740_991.0),
            Wide64::new(MAX_SAFE_HIGH, u32::MAX)
        );
        assert_eq!(Wide64::from_number(-1.0), Wide64::ONES);
        assert_eq!(
            Wide64::from_number(-4_294_967_296.0),
            Wide64::new(u32::MAX, 0)
        );
        assert_eq!(Wide64::from_number(f64::NAN), Wide64::ZERO);
        assert_eq!(Wide64::from_number(f64::INFINITY), Wide64::ZERO);
        assert_eq!(Wide64::from_number(f64::NEG_INFINITY), Wide64::ZERO);
        // 2^64 wraps to zero
        assert_eq!(
            Wide64::from_number(18_446_744_073_709_551_616.0),
            Wide64::ZERO
        );
    }

    #[test]
    fn test_number_round_trip() {
        for w in [
            Wide64::ZERO,
            Wide64::new(0, u32::MAX),
            Wide64::new(1, 0),
            Wide64::new(0x0012_3456, 0x789A_BCDE),
            Wide64::new(MAX_SAFE_HIGH, u32::MAX),
        ] {
            let n = w.to_number_strict().unwrap();
            assert_eq!(Wide64::from_number(n), w);
        }
    }

    #[test]
    fn test_formatting() {
        let w = Wide64::new(0x1234_5678, 0x9ABC_DEF0);
        assert_eq!(format!("{w:?}"), "Wide64(0x12345678, 0x9abcdef0)");
        assert_eq!(w.to_string(), "0x123456789abcdef0");
        assert_eq!(format!("{w:#x}"), "0x123456789abcdef0");
        assert_eq!(format!("{:X}", Wide64::new(0, 0xAB)), "AB");
    }
}
