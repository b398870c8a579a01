//! Process-wide primitive strategy selection.
//!
//! The strategy is chosen once, either explicitly with [`Backend::install`]
//! or implicitly by the first call to [`Backend::active`], and never changes
//! afterwards. Reading it is a lock-free load.

use core::fmt;
use core::str::FromStr;
use std::sync::OnceLock;

use super::{ArithmeticPrimitives, NativePrimitives, Primitives32};

static ACTIVE: OnceLock<Backend> = OnceLock::new();

/// A concrete strategy backing [`Primitives32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Backend {
    /// [`NativePrimitives`].
    Native,
    /// [`ArithmeticPrimitives`].
    Arithmetic,
}

impl Backend {
    /// Every strategy, in preference order.
    pub const ALL: [Backend; 2] = [Backend::Native, Backend::Arithmetic];

    /// The best strategy for this target.
    ///
    /// Native fixed-width operators exist on every Rust target, so this is
    /// always [`Backend::Native`].
    #[inline]
    pub const fn detect() -> Self {
        Backend::Native
    }

    /// Select the process-wide strategy.
    ///
    /// Succeeds if nothing was selected yet or `self` is already the active
    /// strategy.
    ///
    /// # Errors
    ///
    /// Returns the already-active strategy when it differs from `self`.
    pub fn install(self) -> Result<(), Backend> {
        let active = *ACTIVE.get_or_init(|| {
            tracing::debug!(backend = %self, "installing primitive backend");
            self
        });
        if active == self {
            Ok(())
        } else {
            tracing::debug!(
                requested = %self,
                active = %active,
                "primitive backend already installed"
            );
            Err(active)
        }
    }

    /// The process-wide strategy, installing [`Backend::detect`] on first
    /// use.
    #[inline]
    pub fn active() -> Self {
        *ACTIVE.get_or_init(|| {
            let detected = Self::detect();
            tracing::debug!(
                backend = %detected,
                "no primitive backend installed, using detected"
            );
            detected
        })
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Native => "native",
            Backend::Arithmetic => "arithmetic",
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::detect()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized backend name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown backend `{0}` (expected `native` or `arithmetic`)")]
pub struct ParseBackendError(String);

impl FromStr for Backend {
    type Err = ParseBackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Backend::ALL
            .into_iter()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBackendError(s.to_owned()))
    }
}

impl Primitives32 for Backend {
    #[inline]
    fn and32(&self, a: u32, b: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.and32(a, b),
            Backend::Arithmetic => ArithmeticPrimitives.and32(a, b),
        }
    }

    #[inline]
    fn or32(&self, a: u32, b: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.or32(a, b),
            Backend::Arithmetic => ArithmeticPrimitives.or32(a, b),
        }
    }

    #[inline]
    fn xor32(&self, a: u32, b: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.xor32(a, b),
            Backend::Arithmetic => ArithmeticPrimitives.xor32(a, b),
        }
    }

    #[inline]
    fn not32(&self, a: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.not32(a),
            Backend::Arithmetic => ArithmeticPrimitives.not32(a),
        }
    }

    #[inline]
    fn lshift32(&self, a: u32, n: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.lshift32(a, n),
            Backend::Arithmetic => ArithmeticPrimitives.lshift32(a, n),
        }
    }

    #[inline]
    fn rshift32(&self, a: u32, n: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.rshift32(a, n),
            Backend::Arithmetic => ArithmeticPrimitives.rshift32(a, n),
        }
    }

    #[inline]
    fn arshift32(&self, a: u32, n: u32) -> u32 {
        match self {
            Backend::Native => NativePrimitives.arshift32(a, n),
            Backend::Arithmetic => ArithmeticPrimitives.arshift32(a, n),
        }
    }
}
