//! Per-width free functions.
//!
//! Each of `w16`, `w32` and `w64` exposes the operation set as plain
//! functions over the native unsigned type of that width, for callers that
//! prefer `w32::rol(x, 8)` over `x.rol(8)`.

macro_rules! width_api {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        pub mod $name {
            use crate::error::Result;
            use crate::width::FixedWidth;

            /// Width in bits.
            pub const BITS: u32 = <$ty as FixedWidth>::BITS;

            /// Width in bytes.
            pub const BYTES: usize = <$ty as FixedWidth>::BYTES;

            /// Reduce any integer modulo `2^BITS`.
            #[inline]
            pub fn mask(n: i128) -> $ty {
                <$ty as FixedWidth>::mask(n)
            }

            /// Bitwise AND.
            #[inline]
            pub fn and(a: $ty, b: $ty) -> $ty {
                a.band(b)
            }

            /// Bitwise OR.
            #[inline]
            pub fn or(a: $ty, b: $ty) -> $ty {
                a.bor(b)
            }

            /// Bitwise XOR.
            #[inline]
            pub fn xor(a: $ty, b: $ty) -> $ty {
                a.bxor(b)
            }

            /// Bitwise complement.
            #[inline]
            pub fn not(a: $ty) -> $ty {
                a.bnot()
            }

            /// Logical left shift; `0` once `n >= BITS`.
            ///
            /// # Errors
            ///
            /// `InvalidArgument` when `n` is negative.
            #[inline]
            pub fn lshift(a: $ty, n: i64) -> Result<$ty> {
                a.lshift(n)
            }

            /// Logical right shift; `0` once `n >= BITS`.
            ///
            /// # Errors
            ///
            /// `InvalidArgument` when `n` is negative.
            #[inline]
            pub fn rshift(a: $ty, n: i64) -> Result<$ty> {
                a.rshift(n)
            }

            /// Sign-extending right shift; all ones or zero once `n >= BITS`.
            ///
            /// # Errors
            ///
            /// `InvalidArgument` when `n` is negative.
            #[inline]
            pub fn arshift(a: $ty, n: i64) -> Result<$ty> {
                a.arshift(n)
            }

            /// Rotate left by `n mod BITS`.
            #[inline]
            pub fn rol(x: $ty, n: i64) -> $ty {
                x.rol(n)
            }

            /// Rotate right by `n mod BITS`.
            #[inline]
            pub fn ror(x: $ty, n: i64) -> $ty {
                x.ror(n)
            }

            /// Wrapping addition.
            #[inline]
            pub fn add(a: $ty, b: $ty) -> $ty {
                a.add_mod(b)
            }

            /// Most significant byte first.
            #[inline]
            pub fn to_be_bytes(x: $ty) -> <$ty as FixedWidth>::Bytes {
                x.encode_be()
            }

            /// Least significant byte first.
            #[inline]
            pub fn to_le_bytes(x: $ty) -> <$ty as FixedWidth>::Bytes {
                x.encode_le()
            }

            /// Parse big-endian bytes at `offset`.
            ///
            /// # Errors
            ///
            /// `InsufficientData` when fewer than `BYTES` bytes remain.
            #[inline]
            pub fn from_be_bytes(bytes: &[u8], offset: usize) -> Result<$ty> {
                <$ty as FixedWidth>::decode_be(bytes, offset)
            }

            /// Parse little-endian bytes at `offset`.
            ///
            /// # Errors
            ///
            /// `InsufficientData` when fewer than `BYTES` bytes remain.
            #[inline]
            pub fn from_le_bytes(bytes: &[u8], offset: usize) -> Result<$ty> {
                <$ty as FixedWidth>::decode_le(bytes, offset)
            }
        }
    };
}

width_api!(
    /// 16-bit operations over `u16`.
    w16,
    u16
);
width_api!(
    /// 32-bit operations over `u32`.
    ///
    /// ```
    /// use widebits::w32;
    ///
    /// assert_eq!(w32::rol(0x1234_5678, 8), 0x3456_7812);
    /// assert_eq!(w32::to_le_bytes(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
    /// assert!(w32::from_be_bytes(&[0, 0, 0, 0], 5).is_err());
    /// ```
    w32,
    u32
);
width_api!(
    /// 64-bit operations over the native `u64`.
    ///
    /// See [`Wide64`](crate::Wide64) for the same operations composed from
    /// 32-bit halves.
    w64,
    u64
);
