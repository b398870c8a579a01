//! Self-test report types: per-case results and report aggregation.

use crate::primitives::Backend;

/// A single self-test vector result.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CaseResult {
    /// Operation family that produced this result (`w16`, `w32`, `prim32`, ...).
    pub group: String,
    /// The evaluated expression, e.g. `rol(0x12345678, 8)`.
    pub name: String,
    /// Whether the observed value matched the expected one.
    pub passed: bool,
    /// Expected versus observed, for failures.
    pub detail: Option<String>,
}

impl CaseResult {
    /// Creates a passing result.
    pub fn pass(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            passed: true,
            detail: None,
        }
    }

    /// Creates a failure result with an explanation.
    pub fn fail(
        group: impl Into<String>,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            passed: false,
            detail: Some(detail.into()),
        }
    }

    /// Returns true if this result represents a failure.
    pub fn is_failure(&self) -> bool {
        !self.passed
    }
}

/// Aggregated results of one self-test run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SelftestReport {
    /// Primitive strategy the run exercised.
    pub backend: Backend,
    /// All individual results, in execution order.
    pub results: Vec<CaseResult>,
}

impl SelftestReport {
    /// Creates an empty report for `backend`.
    pub fn new(backend: Backend) -> Self {
        Self {
            backend,
            results: Vec::new(),
        }
    }

    /// Appends a result, logging it when it failed.
    pub fn push(&mut self, result: CaseResult) {
        if let Some(detail) = result.detail.as_deref().filter(|_| result.is_failure()) {
            tracing::warn!(
                backend = %self.backend,
                group = %result.group,
                case = %result.name,
                detail,
                "self-test case failed"
            );
        }
        self.results.push(result);
    }

    /// Returns the count of passed cases.
    pub fn passed_count(&self) -> usize {
        self.results.len() - self.failure_count()
    }

    /// Returns the count of failed cases.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// Returns true if every case passed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }

    /// Iterates over the failed cases.
    pub fn failures(&self) -> impl Iterator<Item = &CaseResult> {
        self.results.iter().filter(|r| r.is_failure())
    }
}
