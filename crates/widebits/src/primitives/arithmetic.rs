//! Arithmetic-only primitives.
//!
//! Computes every 32-bit primitive with integer `+ - * / %` on `u64`
//! intermediates, never a bitwise operator. Each operand is walked as 32
//! base-2 digits; shifts multiply or divide by a power of two taken from a
//! table built by repeated doubling.
//!
//! Intermediates stay below 2^63: the largest product is
//! `(2^32 - 1) * 2^31` in `lshift32`.

use super::Primitives32;

/// `POW2[i] == 2^i` for `i` in `0..=32`.
const POW2: [u64; 33] = {
    let mut table = [1u64; 33];
    let mut i = 1;
    while i < 33 {
        table[i] = table[i - 1] * 2;
        i += 1;
    }
    table
};

/// 2^32.
const MODULUS: u64 = POW2[32];

/// Portable fallback strategy using integer arithmetic only.
///
/// Orders of magnitude slower than [`NativePrimitives`](super::NativePrimitives);
/// it exists for targets that cannot be trusted with native fixed-width
/// operators and as an independent oracle in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticPrimitives;

impl ArithmeticPrimitives {
    /// Apply a single-digit truth function to every base-2 digit pair.
    #[inline]
    fn digitwise(a: u32, b: u32, digit: impl Fn(u64, u64) -> u64) -> u32 {
        let (mut a, mut b) = (u64::from(a), u64::from(b));
        let mut out = 0u64;
        for place in &POW2[..32] {
            out += digit(a % 2, b % 2) * place;
            a /= 2;
            b /= 2;
        }
        (out % MODULUS) as u32
    }
}

impl Primitives32 for ArithmeticPrimitives {
    fn and32(&self, a: u32, b: u32) -> u32 {
        Self::digitwise(a, b, |x, y| x * y)
    }

    fn or32(&self, a: u32, b: u32) -> u32 {
        Self::digitwise(a, b, |x, y| x + y - x * y)
    }

    fn xor32(&self, a: u32, b: u32) -> u32 {
        Self::digitwise(a, b, |x, y| (x + y) % 2)
    }

    fn not32(&self, a: u32) -> u32 {
        (MODULUS - 1 - u64::from(a)) as u32
    }

    fn lshift32(&self, a: u32, n: u32) -> u32 {
        match n {
            0 => a,
            1..=31 => ((u64::from(a) * POW2[n as usize]) % MODULUS) as u32,
            _ => 0,
        }
    }

    fn rshift32(&self, a: u32, n: u32) -> u32 {
        match n {
            0 => a,
            1..=31 => (u64::from(a) / POW2[n as usize]) as u32,
            _ => 0,
        }
    }

    fn arshift32(&self, a: u32, n: u32) -> u32 {
        let negative = u64::from(a) / POW2[31] == 1;
        if !negative {
            return self.rshift32(a, n);
        }
        match n {
            0 => a,
            // logical shift, then add the run of ones from bit 32 - n to 31
            1..=31 => {
                let fill = MODULUS - POW2[(32 - n) as usize];
                (u64::from(a) / POW2[n as usize] + fill) as u32
            }
            _ => (MODULUS - 1) as u32,
        }
    }
}
