//! Fixed-width unsigned operation set.
//!
//! The `FixedWidth` trait captures the single operation set this crate
//! defines, parameterized by width. It is implemented natively for `u16`,
//! `u32` and `u64`, and compositionally for [`Wide64`](crate::Wide64).
//!
//! # Canonical Form
//!
//! A value of width `W` lives in `[0, 2^W - 1]`. For the native types the
//! type system guarantees it; [`FixedWidth::mask`] folds any other integer
//! into that range (`-1` becomes all ones).
//!
//! # Shift Amounts
//!
//! | Operation | `n < 0` | `n == 0` | `0 < n < W` | `n >= W` |
//! |-----------|---------|----------|-------------|----------|
//! | `lshift` | `InvalidArgument` | identity | shift | `0` |
//! | `rshift` | `InvalidArgument` | identity | shift | `0` |
//! | `arshift` | `InvalidArgument` | identity | sign-filling shift | sign fill |
//! | `rol` / `ror` | `n mod W` | identity | rotate | `n mod W` |

use core::fmt;

use crate::error::{BitError, Result};

pub(crate) mod api;
pub(crate) mod codec;

/// A fixed-width unsigned integer with the full operation set.
///
/// # Example
///
/// ```
/// use widebits::FixedWidth;
///
/// assert_eq!(0x1234_5678u32.rol(8), 0x3456_7812);
/// assert_eq!(0x8000_0000u32.arshift(1), Ok(0xC000_0000));
/// assert_eq!(u16::mask(-1), 0xFFFF);
/// assert_eq!(u32::decode_be(&[0x12, 0x34, 0x56, 0x78], 0), Ok(0x1234_5678));
/// ```
pub trait FixedWidth: Copy + Default + Eq + fmt::Debug + Sized {
    /// Width in bits.
    const BITS: u32;

    /// Width in bytes.
    const BYTES: usize;

    /// All bits clear.
    const ZERO: Self;

    /// All bits set (`2^BITS - 1`).
    const ONES: Self;

    /// Encoded byte form, exactly `BYTES` long.
    type Bytes: Copy + Eq + fmt::Debug + AsRef<[u8]>;

    /// Reduce any integer to its canonical representative, `n mod 2^BITS`.
    fn mask(n: i128) -> Self;

    /// Bitwise AND.
    fn band(self, other: Self) -> Self;

    /// Bitwise OR.
    fn bor(self, other: Self) -> Self;

    /// Bitwise XOR.
    fn bxor(self, other: Self) -> Self;

    /// Bitwise complement, `(2^BITS - 1) - self`.
    fn bnot(self) -> Self;

    /// Logical left shift. Bits moved past the top are discarded.
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidArgument`] when `n` is negative.
    fn lshift(self, n: i64) -> Result<Self>;

    /// Logical right shift, zero-filling from the top.
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidArgument`] when `n` is negative.
    fn rshift(self, n: i64) -> Result<Self>;

    /// Arithmetic right shift, filling from the top with the sign bit.
    ///
    /// # Errors
    ///
    /// [`BitError::InvalidArgument`] when `n` is negative.
    fn arshift(self, n: i64) -> Result<Self>;

    /// Rotate left by `n mod BITS`.
    fn rol(self, n: i64) -> Self;

    /// Rotate right by `n mod BITS`.
    fn ror(self, n: i64) -> Self;

    /// Addition modulo `2^BITS`.
    fn add_mod(self, other: Self) -> Self;

    /// Bit `BITS - 1`.
    fn sign_bit(self) -> bool;

    /// Big-endian bytes, most significant first.
    fn encode_be(self) -> Self::Bytes;

    /// Little-endian bytes, least significant first.
    fn encode_le(self) -> Self::Bytes;

    /// Parse `BYTES` big-endian bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`BitError::InsufficientData`] when fewer than `BYTES` bytes remain.
    fn decode_be(bytes: &[u8], offset: usize) -> Result<Self>;

    /// Parse `BYTES` little-endian bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// [`BitError::InsufficientData`] when fewer than `BYTES` bytes remain.
    fn decode_le(bytes: &[u8], offset: usize) -> Result<Self>;
}

/// Validate a shift amount against `bits`.
///
/// `Ok(None)` means the amount is at least the width, so every bit leaves.
#[inline]
pub(crate) fn shift_amount(n: i64, bits: u32) -> Result<Option<u32>> {
    if n < 0 {
        return Err(BitError::InvalidArgument { amount: n });
    }
    Ok(u32::try_from(n).ok().filter(|&n| n < bits))
}

/// Reduce a rotate amount to `[0, bits)`.
#[inline]
pub(crate) fn rotate_amount(n: i64, bits: u32) -> u32 {
    // rem_euclid keeps negative amounts in range: -1 rotates by bits - 1
    n.rem_euclid(i64::from(bits)) as u32
}

// -----------------------------------------------------------------------------
// Native implementations
// -----------------------------------------------------------------------------

macro_rules! impl_fixed_width_native {
    ($ty:ty, $bits:expr) => {
        impl FixedWidth for $ty {
            const BITS: u32 = $bits;
            const BYTES: usize = $bits / 8;
            const ZERO: Self = 0;
            const ONES: Self = <$ty>::MAX;

            type Bytes = [u8; $bits / 8];

            #[inline]
            fn mask(n: i128) -> Self {
                // two's-complement truncation is reduction mod 2^BITS
                n as $ty
            }

            #[inline(always)]
            fn band(self, other: Self) -> Self {
                self & other
            }

            #[inline(always)]
            fn bor(self, other: Self) -> Self {
                self | other
            }

            #[inline(always)]
            fn bxor(self, other: Self) -> Self {
                self ^ other
            }

            #[inline(always)]
            fn bnot(self) -> Self {
                !self
            }

            #[inline]
            fn lshift(self, n: i64) -> Result<Self> {
                Ok(match shift_amount(n, Self::BITS)? {
                    Some(n) => self << n,
                    None => Self::ZERO,
                })
            }

            #[inline]
            fn rshift(self, n: i64) -> Result<Self> {
                Ok(match shift_amount(n, Self::BITS)? {
                    Some(n) => self >> n,
                    None => Self::ZERO,
                })
            }

            #[inline]
            fn arshift(self, n: i64) -> Result<Self> {
                let fill = if self.sign_bit() {
                    Self::ONES
                } else {
                    Self::ZERO
                };
                Ok(match shift_amount(n, Self::BITS)? {
                    Some(0) => self,
                    Some(n) => (self >> n) | (fill << (Self::BITS - n)),
                    None => fill,
                })
            }

            #[inline]
            fn rol(self, n: i64) -> Self {
                self.rotate_left(rotate_amount(n, Self::BITS))
            }

            #[inline]
            fn ror(self, n: i64) -> Self {
                self.rotate_right(rotate_amount(n, Self::BITS))
            }

            #[inline(always)]
            fn add_mod(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline(always)]
            fn sign_bit(self) -> bool {
                self >> (Self::BITS - 1) == 1
            }

            #[inline]
            fn encode_be(self) -> Self::Bytes {
                self.to_be_bytes()
            }

            #[inline]
            fn encode_le(self) -> Self::Bytes {
                self.to_le_bytes()
            }

            #[inline]
            fn decode_be(bytes: &[u8], offset: usize) -> Result<Self> {
                codec::window::<{ $bits / 8 }>(bytes, offset).map(<$ty>::from_be_bytes)
            }

            #[inline]
            fn decode_le(bytes: &[u8], offset: usize) -> Result<Self> {
                codec::window::<{ $bits / 8 }>(bytes, offset).map(<$ty>::from_le_bytes)
            }
        }
    };
}

impl_fixed_width_native!(u16, 16);
impl_fixed_width_native!(u32, 32);
impl_fixed_width_native!(u64, 64);
