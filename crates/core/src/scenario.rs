//! Single-operation scenarios.
//!
//! A [`Scenario`] names two native operands, one operation and optionally the
//! native result it must reproduce. Evaluating it runs the emulated operation
//! and compares representations bit for bit, so `-0` does not match `+0` and
//! a NaN only matches the identical NaN pattern.

use std::fmt;

use serde::Deserialize;

use crate::layout::Format;
use crate::value::{SoftF32, SoftFloat};

/// Arithmetic operation of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    /// Addition.
    #[serde(alias = "+")]
    Add,
    /// Subtraction.
    #[serde(alias = "-")]
    Sub,
    /// Multiplication.
    #[serde(alias = "*")]
    Mul,
}

impl Op {
    /// Applies the emulated operation.
    pub fn apply<F: Format>(self, lhs: SoftFloat<F>, rhs: SoftFloat<F>) -> SoftFloat<F> {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
        }
    }

    /// Applies the host's native `f32` operation, for comparison.
    pub fn native(self, lhs: f32, rhs: f32) -> f32 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
        }
    }

    /// Operator symbol.
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One binary operation on native operands, with an optional expected result.
///
/// # Examples
///
/// ```
/// use mantissa_core::{Op, Scenario};
///
/// let scenario = Scenario::new(4.20, Op::Mul, 10.0).expecting(42.0);
/// let outcome = scenario.evaluate();
/// assert_eq!(outcome.passed(), Some(true));
/// assert_eq!(outcome.result.ascii_scientific(), "1.3125x2^5");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scenario {
    /// Optional label shown by the driver.
    #[serde(default)]
    pub name: Option<String>,
    /// Left operand.
    pub lhs: f32,
    /// Operation.
    pub op: Op,
    /// Right operand.
    pub rhs: f32,
    /// Native result the emulation must reproduce exactly.
    #[serde(default)]
    pub expected: Option<f32>,
}

impl Scenario {
    /// Creates an unnamed scenario without an expected result.
    pub const fn new(lhs: f32, op: Op, rhs: f32) -> Self {
        Self {
            name: None,
            lhs,
            op,
            rhs,
            expected: None,
        }
    }

    /// Sets the expected result.
    #[must_use]
    pub fn expecting(mut self, expected: f32) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Runs the emulated operation.
    pub fn evaluate(&self) -> Outcome {
        let lhs = SoftF32::from(self.lhs);
        let rhs = SoftF32::from(self.rhs);
        Outcome {
            lhs,
            rhs,
            result: self.op.apply(lhs, rhs),
            expected: self.expected.map(SoftF32::from),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{name}: ")?;
        }
        write!(f, "{:?} {} {:?}", self.lhs, self.op, self.rhs)
    }
}

/// Result of evaluating a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Emulated left operand.
    pub lhs: SoftF32,
    /// Emulated right operand.
    pub rhs: SoftF32,
    /// Emulated result.
    pub result: SoftF32,
    /// Expected result, if the scenario named one.
    pub expected: Option<SoftF32>,
}

impl Outcome {
    /// Whether the result matches the expected representation exactly, or
    /// `None` if nothing was expected.
    pub fn passed(&self) -> Option<bool> {
        self.expected
            .map(|expected| expected.to_bits() == self.result.to_bits())
    }
}
