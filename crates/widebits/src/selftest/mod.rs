//! Built-in self-test.
//!
//! Replays embedded vector tables against every width and against the
//! 32-bit primitives and composite 64-bit layer of a chosen [`Backend`], and
//! collects one [`CaseResult`] per vector.
//!
//! ```
//! use widebits::primitives::Backend;
//! use widebits::selftest;
//!
//! let report = selftest::run(Backend::Arithmetic);
//! assert!(report.all_passed());
//! ```

use core::fmt;

use crate::error::{BitError, Result};
use crate::primitives::{Backend, Primitives32};
use crate::wide::{Wide64, WideOps, MAX_SAFE_HIGH};
use crate::width::{rotate_amount, shift_amount, FixedWidth};

mod report;

pub use report::{CaseResult, SelftestReport};

/// Two-operand operations.
#[derive(Debug, Clone, Copy)]
enum Binary {
    And,
    Or,
    Xor,
    Add,
}

/// Amount-taking operations.
#[derive(Debug, Clone, Copy)]
enum Shift {
    Lshift,
    Rshift,
    Arshift,
    Rol,
    Ror,
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Binary::And => "and",
            Binary::Or => "or",
            Binary::Xor => "xor",
            Binary::Add => "add",
        })
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shift::Lshift => "lshift",
            Shift::Rshift => "rshift",
            Shift::Arshift => "arshift",
            Shift::Rol => "rol",
            Shift::Ror => "ror",
        })
    }
}

/// Vector tables for one width. Values are folded to the width with `mask`.
struct Vectors {
    binary: &'static [(Binary, u64, u64, u64)],
    not: &'static [(u64, u64)],
    /// `None` expects `InvalidArgument`.
    shift: &'static [(Shift, u64, i64, Option<u64>)],
}

const W16: Vectors = Vectors {
    binary: &[
        (Binary::And, 0xF0F0, 0xFF00, 0xF000),
        (Binary::Or, 0xF0F0, 0x0F0F, 0xFFFF),
        (Binary::Xor, 0xFFFF, 0x1234, 0xEDCB),
        (Binary::Add, 0xFFFF, 0x0001, 0x0000),
        (Binary::Add, 0x8000, 0x8001, 0x0001),
    ],
    not: &[(0x0000, 0xFFFF), (0x1234, 0xEDCB)],
    shift: &[
        (Shift::Lshift, 0x8001, 1, Some(0x0002)),
        (Shift::Lshift, 0x1234, 16, Some(0)),
        (Shift::Rshift, 0x8000, 15, Some(1)),
        (Shift::Rshift, 0xFFFF, 16, Some(0)),
        (Shift::Arshift, 0x8000, 4, Some(0xF800)),
        (Shift::Arshift, 0x8000, 16, Some(0xFFFF)),
        (Shift::Arshift, 0x7FFF, 16, Some(0)),
        (Shift::Rol, 0x1234, 4, Some(0x2341)),
        (Shift::Ror, 0x1234, 4, Some(0x4123)),
        (Shift::Rol, 0x1234, -4, Some(0x4123)),
        (Shift::Lshift, 0x0001, -1, None),
    ],
};

const W32: Vectors = Vectors {
    binary: &[
        (Binary::And, 0xFFFF_0000, 0x00FF_FF00, 0x00FF_0000),
        (Binary::Or, 0xFFFF_0000, 0x00FF_FF00, 0xFFFF_FF00),
        (Binary::Xor, 0xFFFF_0000, 0x00FF_FF00, 0xFF00_FF00),
        (Binary::Add, 0xFFFF_FFFF, 0x0000_0001, 0x0000_0000),
        (Binary::Add, 0x1234_5678, 0x1111_1111, 0x2345_6789),
    ],
    not: &[(0x0000_0000, 0xFFFF_FFFF), (0xDEAD_BEEF, 0x2152_4110)],
    shift: &[
        (Shift::Rol, 0x1234_5678, 8, Some(0x3456_7812)),
        (Shift::Ror, 0x1234_5678, 8, Some(0x7812_3456)),
        (Shift::Rol, 0x1234_5678, 32, Some(0x1234_5678)),
        (Shift::Rol, 0x1234_5678, 40, Some(0x3456_7812)),
        (Shift::Ror, 0x1234_5678, -8, Some(0x3456_7812)),
        (Shift::Arshift, 0x8000_0000, 1, Some(0xC000_0000)),
        (Shift::Arshift, 0x8000_0000, 31, Some(0xFFFF_FFFF)),
        (Shift::Arshift, 0x8000_0000, 32, Some(0xFFFF_FFFF)),
        (Shift::Arshift, 0x4000_0000, 1, Some(0x2000_0000)),
        (Shift::Lshift, 0x1234_5678, 4, Some(0x2345_6780)),
        (Shift::Lshift, 0x1234_5678, 32, Some(0)),
        (Shift::Rshift, 0x1234_5678, 4, Some(0x0123_4567)),
        (Shift::Rshift, 0x1234_5678, 33, Some(0)),
        (Shift::Rshift, 0x0000_0001, -3, None),
        (Shift::Arshift, 0x0000_0001, -1, None),
    ],
};

const W64: Vectors = Vectors {
    binary: &[
        (
            Binary::And,
            0xFFFF_0000_FFFF_0000,
            0x00FF_FF00_00FF_FF00,
            0x00FF_0000_00FF_0000,
        ),
        (
            Binary::Or,
            0xF0F0_F0F0_F0F0_F0F0,
            0x0F0F_0F0F_0F0F_0F0F,
            0xFFFF_FFFF_FFFF_FFFF,
        ),
        (
            Binary::Xor,
            0x1234_5678_9ABC_DEF0,
            0x1234_5678_9ABC_DEF0,
            0x0000_0000_0000_0000,
        ),
        (
            Binary::Add,
            0x0000_0000_FFFF_FFFF,
            0x0000_0000_0000_0001,
            0x0000_0001_0000_0000,
        ),
        (
            Binary::Add,
            0xFFFF_FFFF_FFFF_FFFF,
            0x0000_0000_0000_0001,
            0x0000_0000_0000_0000,
        ),
        (
            Binary::Add,
            0x7FFF_FFFF_FFFF_FFFF,
            0x7FFF_FFFF_FFFF_FFFF,
            0xFFFF_FFFF_FFFF_FFFE,
        ),
    ],
    not: &[
        (0x0000_0000_0000_0000, 0xFFFF_FFFF_FFFF_FFFF),
        (0x1234_5678_9ABC_DEF0, 0xEDCB_A987_6543_210F),
    ],
    shift: &[
        (
            Shift::Rol,
            0x1234_5678_9ABC_DEF0,
            16,
            Some(0x5678_9ABC_DEF0_1234),
        ),
        (
            Shift::Ror,
            0x1234_5678_9ABC_DEF0,
            16,
            Some(0xDEF0_1234_5678_9ABC),
        ),
        (
            Shift::Rol,
            0x1234_5678_9ABC_DEF0,
            32,
            Some(0x9ABC_DEF0_1234_5678),
        ),
        (
            Shift::Rol,
            0x1234_5678_9ABC_DEF0,
            48,
            Some(0xDEF0_1234_5678_9ABC),
        ),
        (
            Shift::Rol,
            0x1234_5678_9ABC_DEF0,
            64,
            Some(0x1234_5678_9ABC_DEF0),
        ),
        (
            Shift::Arshift,
            0x8000_0000_0000_0000,
            63,
            Some(0xFFFF_FFFF_FFFF_FFFF),
        ),
        (
            Shift::Arshift,
            0x8000_0000_0000_0000,
            32,
            Some(0xFFFF_FFFF_8000_0000),
        ),
        (
            Shift::Arshift,
            0x8000_0000_0000_0000,
            1,
            Some(0xC000_0000_0000_0000),
        ),
        (
            Shift::Lshift,
            0x0000_0000_0000_0001,
            63,
            Some(0x8000_0000_0000_0000),
        ),
        (
            Shift::Lshift,
            0x0000_0000_FFFF_FFFF,
            16,
            Some(0x0000_FFFF_FFFF_0000),
        ),
        (Shift::Lshift, 0x1234_5678_9ABC_DEF0, 64, Some(0)),
        (Shift::Rshift, 0x8000_0000_0000_0000, 63, Some(1)),
        (
            Shift::Rshift,
            0xFFFF_FFFF_0000_0000,
            16,
            Some(0x0000_FFFF_FFFF_0000),
        ),
        (Shift::Rshift, 0xFFFF_FFFF_FFFF_FFFF, 64, Some(0)),
        (Shift::Lshift, 0x0000_0000_0000_0001, -1, None),
    ],
};

/// Codec vectors: a value and its big-endian bytes.
const CODEC16: (u64, &[u8]) = (0x1234, &[0x12, 0x34]);
const CODEC32: (u64, &[u8]) = (0x1234_5678, &[0x12, 0x34, 0x56, 0x78]);
const CODEC64: (u64, &[u8]) = (
    0x0102_0304_0506_0708,
    &[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08],
);

/// The operation set under test at one width.
trait OpSet<T> {
    fn binary(&self, op: Binary, a: T, b: T) -> T;
    fn not(&self, a: T) -> T;
    fn shift(&self, op: Shift, a: T, n: i64) -> Result<T>;
}

/// Native implementation of any width.
struct Native;

impl<T: FixedWidth> OpSet<T> for Native {
    fn binary(&self, op: Binary, a: T, b: T) -> T {
        match op {
            Binary::And => a.band(b),
            Binary::Or => a.bor(b),
            Binary::Xor => a.bxor(b),
            Binary::Add => a.add_mod(b),
        }
    }

    fn not(&self, a: T) -> T {
        a.bnot()
    }

    fn shift(&self, op: Shift, a: T, n: i64) -> Result<T> {
        match op {
            Shift::Lshift => a.lshift(n),
            Shift::Rshift => a.rshift(n),
            Shift::Arshift => a.arshift(n),
            Shift::Rol => Ok(a.rol(n)),
            Shift::Ror => Ok(a.ror(n)),
        }
    }
}

/// The backend's 32-bit primitives, used directly.
impl OpSet<u32> for Backend {
    fn binary(&self, op: Binary, a: u32, b: u32) -> u32 {
        match op {
            Binary::And => self.and32(a, b),
            Binary::Or => self.or32(a, b),
            Binary::Xor => self.xor32(a, b),
            Binary::Add => ((u64::from(a) + u64::from(b)) % (1 << 32)) as u32,
        }
    }

    fn not(&self, a: u32) -> u32 {
        self.not32(a)
    }

    fn shift(&self, op: Shift, a: u32, n: i64) -> Result<u32> {
        let rotated = |n: u32, forward: bool| match n {
            0 => a,
            n if forward => self.or32(self.lshift32(a, n), self.rshift32(a, 32 - n)),
            n => self.or32(self.rshift32(a, n), self.lshift32(a, 32 - n)),
        };
        Ok(match op {
            Shift::Lshift => self.lshift32(a, shift_amount(n, 32)?.unwrap_or(32)),
            Shift::Rshift => self.rshift32(a, shift_amount(n, 32)?.unwrap_or(32)),
            Shift::Arshift => self.arshift32(a, shift_amount(n, 32)?.unwrap_or(32)),
            Shift::Rol => rotated(rotate_amount(n, 32), true),
            Shift::Ror => rotated(rotate_amount(n, 32), false),
        })
    }
}

/// The composite 64-bit layer on the backend's primitives.
impl OpSet<Wide64> for Backend {
    fn binary(&self, op: Binary, a: Wide64, b: Wide64) -> Wide64 {
        match op {
            Binary::And => self.wide_and(a, b),
            Binary::Or => self.wide_or(a, b),
            Binary::Xor => self.wide_xor(a, b),
            Binary::Add => self.wide_add(a, b),
        }
    }

    fn not(&self, a: Wide64) -> Wide64 {
        self.wide_not(a)
    }

    fn shift(&self, op: Shift, a: Wide64, n: i64) -> Result<Wide64> {
        match op {
            Shift::Lshift => self.wide_lshift(a, n),
            Shift::Rshift => self.wide_rshift(a, n),
            Shift::Arshift => self.wide_arshift(a, n),
            Shift::Rol => Ok(self.wide_rol(a, n)),
            Shift::Ror => Ok(self.wide_ror(a, n)),
        }
    }
}

/// Fold a table value into width `T`.
fn value<T: FixedWidth>(v: u64) -> T {
    T::mask(i128::from(v))
}

/// Record whether `got` equals `expected`.
fn check<T: PartialEq + fmt::Debug>(
    report: &mut SelftestReport,
    group: &str,
    name: String,
    got: T,
    expected: T,
) {
    if got == expected {
        report.push(CaseResult::pass(group, name));
    } else {
        let detail = format!("expected {expected:?}, got {got:?}");
        report.push(CaseResult::fail(group, name, detail));
    }
}

fn run_vectors<T, S>(report: &mut SelftestReport, group: &str, ops: &S, vectors: &Vectors)
where
    T: FixedWidth,
    S: OpSet<T>,
{
    for &(op, a, b, expected) in vectors.binary {
        let got = ops.binary(op, value::<T>(a), value(b));
        let name = format!("{op}({a:#x}, {b:#x})");
        check(report, group, name, got, value(expected));
    }

    for &(a, expected) in vectors.not {
        let got = ops.not(value::<T>(a));
        check(report, group, format!("not({a:#x})"), got, value(expected));
    }

    for &(op, a, n, expected) in vectors.shift {
        let got = ops.shift(op, value::<T>(a), n);
        let expected = match expected {
            Some(v) => Ok(value(v)),
            None => Err(BitError::InvalidArgument { amount: n }),
        };
        check(report, group, format!("{op}({a:#x}, {n})"), got, expected);
    }
}

fn run_codec<T: FixedWidth>(report: &mut SelftestReport, group: &str, (v, be): (u64, &[u8])) {
    let x = value::<T>(v);
    let le: Vec<u8> = be.iter().rev().copied().collect();

    check(
        report,
        group,
        format!("to_be_bytes({v:#x})"),
        x.encode_be().as_ref().to_vec(),
        be.to_vec(),
    );
    check(
        report,
        group,
        format!("to_le_bytes({v:#x})"),
        x.encode_le().as_ref().to_vec(),
        le.clone(),
    );
    check(
        report,
        group,
        format!("from_be_bytes({be:02x?})"),
        T::decode_be(be, 0),
        Ok(x),
    );
    check(
        report,
        group,
        format!("from_le_bytes({le:02x?})"),
        T::decode_le(&le, 0),
        Ok(x),
    );

    let short = &be[..be.len() - 1];
    check(
        report,
        group,
        format!("from_be_bytes({short:02x?})"),
        T::decode_be(short, 0),
        Err(BitError::InsufficientData {
            needed: T::BYTES,
            offset: 0,
            len: short.len(),
        }),
    );
    check(
        report,
        group,
        format!("from_le_bytes({be:02x?}, offset {})", be.len() + 1),
        T::decode_le(be, be.len() + 1),
        Err(BitError::InsufficientData {
            needed: T::BYTES,
            offset: be.len() + 1,
            len: be.len(),
        }),
    );
}

fn run_numeric(report: &mut SelftestReport) {
    let group = "wide64";
    let max_safe = Wide64::new(MAX_SAFE_HIGH, u32::MAX);
    let unsafe_value = Wide64::new(MAX_SAFE_HIGH + 1, 0);

    check(
        report,
        group,
        format!("to_number_strict({max_safe:?})"),
        max_safe.to_number_strict(),
        Ok(9_007_199_254_740_991.0),
    );
    check(
        report,
        group,
        format!("to_number_strict({unsafe_value:?})"),
        unsafe_value.to_number_strict(),
        Err(BitError::PrecisionExceeded {
            high: MAX_SAFE_HIGH + 1,
        }),
    );
    check(
        report,
        group,
        "from_number(9007199254740991)".to_owned(),
        Wide64::from_number(9_007_199_254_740_991.0),
        max_safe,
    );
    check(
        report,
        group,
        "from_number(-1)".to_owned(),
        Wide64::from_number(-1.0),
        Wide64::ONES,
    );
}

/// Run every embedded vector against `backend`.
///
/// The native widths do not depend on the backend and are replayed on every
/// run; the `prim32` and `wide64` groups exercise the backend's primitives.
pub fn run(backend: Backend) -> SelftestReport {
    let mut report = SelftestReport::new(backend);

    run_vectors::<u16, _>(&mut report, "w16", &Native, &W16);
    run_vectors::<u32, _>(&mut report, "w32", &Native, &W32);
    run_vectors::<u64, _>(&mut report, "w64", &Native, &W64);
    run_vectors::<u32, _>(&mut report, "prim32", &backend, &W32);
    run_vectors::<Wide64, _>(&mut report, "wide64", &backend, &W64);

    run_codec::<u16>(&mut report, "w16", CODEC16);
    run_codec::<u32>(&mut report, "w32", CODEC32);
    run_codec::<u64>(&mut report, "w64", CODEC64);
    run_codec::<Wide64>(&mut report, "wide64", CODEC64);

    run_numeric(&mut report);

    tracing::info!(
        backend = %backend,
        passed = report.passed_count(),
        failed = report.failure_count(),
        "self-test finished"
    );
    report
}
