//! `widebits-eval`: evaluates a single operation.
//!
//! Operands accept decimal, `0x` hexadecimal and `0b` binary. Byte strings
//! for the parse operations are hex digits, optionally `:`-separated.
//!
//! **Usage:**
//! ```text
//! widebits-eval --width 32 rol 0x12345678 8
//! widebits-eval --width wide --backend arithmetic add 0xffffffff 1
//! widebits-eval --width 16 from-be-bytes 12:34:56 1
//! widebits-eval --width wide --strict to-number 0x20000000000000
//! ```
//!
//! Invalid input (negative shift amounts, short byte strings, values that
//! do not fit the width) exits non-zero with the error.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fmt;

use anyhow::{anyhow, bail, ensure, Context, Result};
use clap::{Parser, ValueEnum};
use widebits::{Backend, FixedWidth, Wide64};

/// Operand width.
#[derive(Clone, Copy, ValueEnum)]
enum Width {
    #[value(name = "16")]
    W16,
    #[value(name = "32")]
    W32,
    #[value(name = "64")]
    W64,
    /// 64-bit composite of two 32-bit halves.
    Wide,
}

/// Operation to evaluate.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Op {
    Mask,
    And,
    Or,
    Xor,
    Not,
    Lshift,
    Rshift,
    Arshift,
    Rol,
    Ror,
    Add,
    ToBeBytes,
    ToLeBytes,
    FromBeBytes,
    FromLeBytes,
    /// Wide width only.
    ToNumber,
    /// Wide width only.
    FromNumber,
}

impl Op {
    /// Smallest and largest accepted operand count.
    fn arity(self) -> (usize, usize) {
        match self {
            Op::Mask | Op::Not | Op::ToBeBytes | Op::ToLeBytes => (1, 1),
            Op::ToNumber | Op::FromNumber => (1, 1),
            Op::FromBeBytes | Op::FromLeBytes => (1, 2),
            _ => (2, 2),
        }
    }
}

/// Evaluate one widebits operation.
#[derive(Parser)]
#[command(
    name = "widebits-eval",
    version = widebits::VERSION,
    about = "Evaluate a single fixed-width bit operation"
)]
struct Args {
    /// Operand width.
    #[arg(long, value_enum, default_value = "32")]
    width: Width,

    /// Primitive backend for the wide width.
    #[arg(long)]
    backend: Option<Backend>,

    /// Refuse to-number results above 2^53 - 1.
    #[arg(long)]
    strict: bool,

    /// Operation.
    #[arg(value_enum)]
    op: Op,

    /// Operands: a value, then a second value or shift amount.
    #[arg(required = true, num_args = 1..=2, allow_hyphen_values = true)]
    operands: Vec<String>,
}

/// Parse a decimal, `0x` or `0b` integer, optionally negative.
fn parse_int(s: &str) -> Result<i128> {
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let unsigned = unsigned.replace('_', "");
    let (radix, digits) = match unsigned.get(..2) {
        Some("0x" | "0X") => (16, &unsigned[2..]),
        Some("0b" | "0B") => (2, &unsigned[2..]),
        _ => (10, unsigned.as_str()),
    };
    // from_str_radix accepts a sign of its own
    ensure!(
        digits.starts_with(|c: char| c.is_ascii_alphanumeric()),
        "Invalid integer operand `{s}`"
    );
    let value = i128::from_str_radix(digits, radix)
        .with_context(|| format!("Invalid integer operand `{s}`"))?;
    Ok(if negative { -value } else { value })
}

/// Parse a hex byte string such as `12345678` or `12:34:56:78`.
fn parse_bytes(s: &str) -> Result<Vec<u8>> {
    let hex: String = s
        .strip_prefix("0x")
        .unwrap_or(s)
        .chars()
        .filter(|c| *c != ':' && *c != '_')
        .collect();
    ensure!(
        hex.chars().all(|c| c.is_ascii_hexdigit()),
        "Invalid byte string `{s}`"
    );
    ensure!(
        hex.len() % 2 == 0,
        "Byte string `{s}` has an odd number of digits"
    );
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("Invalid byte string `{s}`"))
        })
        .collect()
}

/// A value operand: must already be canonical for the width.
fn value<T: FixedWidth>(s: &str) -> Result<T> {
    let n = parse_int(s)?;
    ensure!(
        n >= 0 && n >> T::BITS == 0,
        "Operand `{s}` does not fit in {} bits",
        T::BITS
    );
    Ok(T::mask(n))
}

fn amount(s: &str) -> Result<i64> {
    let n = parse_int(s)?;
    i64::try_from(n).with_context(|| format!("Shift amount `{s}` out of range"))
}

fn operand(operands: &[String], i: usize) -> Result<&str> {
    operands
        .get(i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("Missing operand {}", i + 1))
}

fn hex<T: fmt::LowerHex>(x: T, bytes: usize) -> String {
    format!("{:#0w$x}", x, w = bytes * 2 + 2)
}

/// Reject flags and operands that the chosen operation would ignore.
fn validate(args: &Args) -> Result<()> {
    ensure!(
        args.backend.is_none() || matches!(args.width, Width::Wide),
        "--backend only applies to --width wide"
    );
    ensure!(
        !args.strict || args.op == Op::ToNumber,
        "--strict only applies to to-number"
    );
    let (min, max) = args.op.arity();
    let count = args.operands.len();
    ensure!(
        (min..=max).contains(&count),
        "Expected {min} to {max} operand(s), got {count}"
    );
    Ok(())
}

fn eval<T: FixedWidth + fmt::LowerHex>(op: Op, operands: &[String]) -> Result<String> {
    let a = operand(operands, 0)?;
    let out = |x: T| hex(x, T::BYTES);

    Ok(match op {
        Op::Mask => out(T::mask(parse_int(a)?)),
        Op::Not => out(value::<T>(a)?.bnot()),
        Op::And | Op::Or | Op::Xor | Op::Add => {
            let (x, y) = (value::<T>(a)?, value::<T>(operand(operands, 1)?)?);
            out(match op {
                Op::And => x.band(y),
                Op::Or => x.bor(y),
                Op::Xor => x.bxor(y),
                _ => x.add_mod(y),
            })
        }
        Op::Lshift | Op::Rshift | Op::Arshift | Op::Rol | Op::Ror => {
            let (x, n) = (value::<T>(a)?, amount(operand(operands, 1)?)?);
            out(match op {
                Op::Lshift => x.lshift(n)?,
                Op::Rshift => x.rshift(n)?,
                Op::Arshift => x.arshift(n)?,
                Op::Rol => x.rol(n),
                _ => x.ror(n),
            })
        }
        Op::ToBeBytes => format!("{:02x?}", value::<T>(a)?.encode_be().as_ref()),
        Op::ToLeBytes => format!("{:02x?}", value::<T>(a)?.encode_le().as_ref()),
        Op::FromBeBytes | Op::FromLeBytes => {
            let bytes = parse_bytes(a)?;
            let offset = match operands.get(1) {
                Some(s) => usize::try_from(parse_int(s)?)
                    .with_context(|| format!("Offset `{s}` out of range"))?,
                None => 0,
            };
            let x = if op == Op::FromBeBytes {
                T::decode_be(&bytes, offset)?
            } else {
                T::decode_le(&bytes, offset)?
            };
            out(x)
        }
        Op::ToNumber | Op::FromNumber => bail!("Numeric conversion requires --width wide"),
    })
}

fn eval_wide(op: Op, operands: &[String], strict: bool) -> Result<String> {
    let a = operand(operands, 0)?;
    match op {
        Op::ToNumber => {
            let n = value::<Wide64>(a)?.to_number(strict)?;
            Ok(n.to_string())
        }
        Op::FromNumber => {
            let v = a.parse::<f64>();
            let v = v.with_context(|| format!("Invalid number operand `{a}`"))?;
            let w = Wide64::from_number(v);
            let (high, low) = (w.high(), w.low());
            Ok(format!("{w} (high {high:#010x}, low {low:#010x})"))
        }
        _ => eval::<Wide64>(op, operands),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    validate(&args)?;

    if let Some(backend) = args.backend {
        backend
            .install()
            .map_err(|active| anyhow!("Backend `{active}` is already active"))?;
    }

    let result = match args.width {
        Width::W16 => eval::<u16>(args.op, &args.operands),
        Width::W32 => eval::<u32>(args.op, &args.operands),
        Width::W64 => eval::<u64>(args.op, &args.operands),
        Width::Wide => eval_wide(args.op, &args.operands, args.strict),
    }?;

    println!("{result}");
    Ok(())
}
