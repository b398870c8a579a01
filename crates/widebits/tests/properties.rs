//! Property-based tests for the fixed-width operations.
//!
//! Uses proptest to check the algebraic laws every width must satisfy. Each
//! law is written once against `FixedWidth` and instantiated per width.

use proptest::collection::vec;
use proptest::prelude::*;
use widebits::{w16, w32, w64, BitError, FixedWidth, Wide64};

fn wide64() -> impl Strategy<Value = Wide64> {
    any::<u64>().prop_map(Wide64::from)
}

// =============================================================================
// Generic Laws
// =============================================================================

fn check_involutions<T: FixedWidth>(x: T) -> Result<(), TestCaseError> {
    prop_assert_eq!(x.bnot().bnot(), x);
    prop_assert_eq!(x.bxor(x), T::ZERO);
    prop_assert_eq!(x.bxor(T::ZERO), x);
    prop_assert_eq!(x.band(x.bnot()), T::ZERO);
    prop_assert_eq!(x.bor(x.bnot()), T::ONES);
    Ok(())
}

fn check_add<T: FixedWidth>(a: T, b: T) -> Result<(), TestCaseError> {
    prop_assert_eq!(a.add_mod(b), b.add_mod(a));
    prop_assert_eq!(a.add_mod(T::ZERO), a);
    // x + !x is all ones, so adding one more wraps to zero
    prop_assert_eq!(a.add_mod(a.bnot()).add_mod(T::mask(1)), T::ZERO);
    Ok(())
}

fn check_shift_boundaries<T: FixedWidth>(x: T, extra: i64) -> Result<(), TestCaseError> {
    let n = i64::from(T::BITS) + extra;
    let fill = if x.sign_bit() { T::ONES } else { T::ZERO };
    prop_assert_eq!(x.lshift(n), Ok(T::ZERO));
    prop_assert_eq!(x.rshift(n), Ok(T::ZERO));
    prop_assert_eq!(x.arshift(n), Ok(fill));
    prop_assert_eq!(x.lshift(0), Ok(x));
    prop_assert_eq!(x.rshift(0), Ok(x));
    prop_assert_eq!(x.arshift(0), Ok(x));
    Ok(())
}

fn check_negative_shift<T: FixedWidth>(x: T, n: i64) -> Result<(), TestCaseError> {
    let err = Err(BitError::InvalidArgument { amount: n });
    prop_assert_eq!(x.lshift(n), err);
    prop_assert_eq!(x.rshift(n), err);
    prop_assert_eq!(x.arshift(n), err);
    Ok(())
}

fn check_rotates<T: FixedWidth>(x: T, n: i64) -> Result<(), TestCaseError> {
    prop_assert_eq!(x.rol(n).ror(n), x);
    prop_assert_eq!(x.rol(n), x.ror(-n));
    prop_assert_eq!(x.rol(n), x.rol(n + i64::from(T::BITS)));
    prop_assert_eq!(x.rol(i64::from(T::BITS)), x);
    Ok(())
}

fn check_shift_composition<T: FixedWidth>(x: T, n: i64) -> Result<(), TestCaseError> {
    // for 0 < n < W a rotate is the OR of the two complementary shifts
    let w = i64::from(T::BITS);
    let n = n.rem_euclid(w - 1) + 1;
    let composed = x.lshift(n)?.bor(x.rshift(w - n)?);
    prop_assert_eq!(x.rol(n), composed);
    Ok(())
}

fn check_codec<T: FixedWidth>(x: T, prefix: usize) -> Result<(), TestCaseError> {
    let be = x.encode_be();
    let le = x.encode_le();
    let reversed: Vec<u8> = be.as_ref().iter().rev().copied().collect();
    prop_assert_eq!(le.as_ref(), reversed.as_slice());

    let mut buf = vec![0xA5; prefix];
    buf.extend_from_slice(be.as_ref());
    prop_assert_eq!(T::decode_be(&buf, prefix), Ok(x));
    prop_assert_eq!(
        T::decode_be(&buf, prefix + 1),
        Err(BitError::InsufficientData {
            needed: T::BYTES,
            offset: prefix + 1,
            len: buf.len(),
        })
    );
    prop_assert_eq!(T::decode_le(&reversed, 0), Ok(x));
    Ok(())
}

// =============================================================================
// Mask
// =============================================================================

proptest! {
    /// mask is idempotent and agrees with two's-complement truncation
    #[test]
    fn prop_mask(n: i128) {
        prop_assert_eq!(w16::mask(i128::from(w16::mask(n))), w16::mask(n));
        prop_assert_eq!(w32::mask(i128::from(w32::mask(n))), w32::mask(n));
        prop_assert_eq!(w64::mask(i128::from(w64::mask(n))), w64::mask(n));
        prop_assert_eq!(w32::mask(n), n.rem_euclid(1 << 32) as u32);
        prop_assert_eq!(u64::from(Wide64::mask(n)), w64::mask(n));
    }

    /// masking a value already in range is the identity
    #[test]
    fn prop_mask_in_range(x: u64) {
        prop_assert_eq!(w64::mask(i128::from(x)), x);
        prop_assert_eq!(Wide64::mask(i128::from(x)), Wide64::from(x));
    }
}

// =============================================================================
// Bitwise Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_involutions_16(x: u16) { check_involutions(x)?; }

    #[test]
    fn prop_involutions_32(x: u32) { check_involutions(x)?; }

    #[test]
    fn prop_involutions_64(x: u64) { check_involutions(x)?; }

    #[test]
    fn prop_involutions_wide(x in wide64()) { check_involutions(x)?; }

    /// De Morgan: !(a & b) = !a | !b
    #[test]
    fn prop_de_morgan(a: u32, b: u32) {
        prop_assert_eq!(w32::not(w32::and(a, b)), w32::or(w32::not(a), w32::not(b)));
        prop_assert_eq!(w32::not(w32::or(a, b)), w32::and(w32::not(a), w32::not(b)));
    }
}

// =============================================================================
// Addition
// =============================================================================

proptest! {
    #[test]
    fn prop_add_16(a: u16, b: u16) {
        check_add(a, b)?;
        prop_assert_eq!(w16::add(a, b), a.wrapping_add(b));
    }

    #[test]
    fn prop_add_32(a: u32, b: u32) {
        check_add(a, b)?;
        prop_assert_eq!(w32::add(a, b), a.wrapping_add(b));
    }

    #[test]
    fn prop_add_64(a: u64, b: u64) {
        check_add(a, b)?;
        prop_assert_eq!(w64::add(a, b), a.wrapping_add(b));
    }

    #[test]
    fn prop_add_wide(a in wide64(), b in wide64()) { check_add(a, b)?; }
}

// =============================================================================
// Shifts and Rotates
// =============================================================================

proptest! {
    #[test]
    fn prop_shift_boundaries_16(x: u16, extra in 0i64..1000) { check_shift_boundaries(x, extra)?; }

    #[test]
    fn prop_shift_boundaries_32(x: u32, extra in 0i64..1000) { check_shift_boundaries(x, extra)?; }

    #[test]
    fn prop_shift_boundaries_64(x: u64, extra in 0i64..1000) { check_shift_boundaries(x, extra)?; }

    #[test]
    fn prop_shift_boundaries_wide(x in wide64(), extra in 0i64..1000) {
        check_shift_boundaries(x, extra)?;
    }

    #[test]
    fn prop_negative_shift(x: u32, w in wide64(), n in i64::MIN..0) {
        check_negative_shift(x, n)?;
        check_negative_shift(u64::from(w), n)?;
        check_negative_shift(w, n)?;
    }

    #[test]
    fn prop_rotates_16(x: u16, n in -1000i64..1000) { check_rotates(x, n)?; }

    #[test]
    fn prop_rotates_32(x: u32, n in -1000i64..1000) { check_rotates(x, n)?; }

    #[test]
    fn prop_rotates_64(x: u64, n in -1000i64..1000) { check_rotates(x, n)?; }

    #[test]
    fn prop_rotates_wide(x in wide64(), n in -1000i64..1000) { check_rotates(x, n)?; }

    #[test]
    fn prop_rotate_is_shift_pair(a: u32, b: u64, w in wide64(), n: i64) {
        check_shift_composition(a, n)?;
        check_shift_composition(b, n)?;
        check_shift_composition(w, n)?;
    }

    /// arshift fills with the sign bit, rshift with zero
    #[test]
    fn prop_arshift_vs_rshift(x: u32, n in 1i64..32) {
        let logical = w32::rshift(x, n)?;
        let arith = w32::arshift(x, n)?;
        if x & 0x8000_0000 == 0 {
            prop_assert_eq!(arith, logical);
        } else {
            let fill = !(u32::MAX >> n);
            prop_assert_eq!(arith, logical | fill);
        }
    }
}

// =============================================================================
// Byte Codecs
// =============================================================================

proptest! {
    #[test]
    fn prop_codec_16(x: u16, prefix in 0usize..8) { check_codec(x, prefix)?; }

    #[test]
    fn prop_codec_32(x: u32, prefix in 0usize..8) { check_codec(x, prefix)?; }

    #[test]
    fn prop_codec_64(x: u64, prefix in 0usize..8) { check_codec(x, prefix)?; }

    #[test]
    fn prop_codec_wide(x in wide64(), prefix in 0usize..8) { check_codec(x, prefix)?; }

    /// The composite and native 64-bit forms serialize identically.
    #[test]
    fn prop_codec_wide_matches_native(x: u64) {
        prop_assert_eq!(Wide64::from(x).encode_be(), x.encode_be());
        prop_assert_eq!(Wide64::from(x).encode_le(), x.encode_le());
    }

    /// Any slice too short for the width is rejected with the exact shortfall.
    #[test]
    fn prop_short_slice(bytes in vec(any::<u8>(), 0..8), offset in 0usize..10) {
        let len = bytes.len();
        prop_assert_eq!(
            w64::from_be_bytes(&bytes, offset),
            Err(BitError::InsufficientData {
                needed: 8,
                offset,
                len,
            })
        );
    }
}

// =============================================================================
// Numeric Conversion
// =============================================================================

proptest! {
    /// Every value up to 2^53 - 1 survives to_number / from_number.
    #[test]
    fn prop_number_round_trip(v in 0u64..(1 << 53)) {
        let w = Wide64::from(v);
        let n = w.to_number_strict()?;
        prop_assert_eq!(n, v as f64);
        prop_assert_eq!(Wide64::from_number(n), w);
    }

    /// Strict conversion refuses exactly the values above 2^53 - 1.
    #[test]
    fn prop_number_strict_limit(v: u64) {
        let w = Wide64::from(v);
        prop_assert_eq!(w.to_number_strict().is_ok(), v < (1 << 53));
        prop_assert!(w.to_number(false).is_ok());
    }

    /// Fractions are floored before splitting.
    #[test]
    fn prop_from_number_floors(v in 0u64..(1 << 40), frac in 0.0f64..0.99) {
        prop_assert_eq!(Wide64::from_number(v as f64 + frac), Wide64::from(v));
    }
}
