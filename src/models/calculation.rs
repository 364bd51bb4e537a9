//! Calculation input and result models.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Operator;

/// A validated calculation triple.
///
/// Both operands are always present; missing or non-numeric operands are
/// rejected by [`CalculationInput::parse`] before a request is made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// The first operand.
    pub a: f64,
    /// The second operand.
    pub b: f64,
    /// The operator to apply.
    pub operator: Operator,
}

impl CalculationInput {
    /// Creates an input from already-numeric operands.
    pub fn new(a: f64, b: f64, operator: impl Into<Operator>) -> Self {
        Self {
            a,
            b,
            operator: operator.into(),
        }
    }

    /// Parses raw form fields into an input.
    ///
    /// Blank or absent operands yield [`EngineError::MissingOperand`]; text
    /// that is not a finite number yields [`EngineError::InvalidOperand`].
    ///
    /// ```
    /// use calc_engine::models::{CalculationInput, Operator};
    ///
    /// let input = CalculationInput::parse(Some("5"), Some(" 2.5 "), "*").unwrap();
    /// assert_eq!(input.b, 2.5);
    /// assert_eq!(input.operator, Operator::Multiply);
    ///
    /// assert!(CalculationInput::parse(Some("5"), None, "+").is_err());
    /// ```
    pub fn parse(a: Option<&str>, b: Option<&str>, operator: &str) -> EngineResult<Self> {
        Ok(Self {
            a: parse_operand("a", a)?,
            b: parse_operand("b", b)?,
            operator: Operator::from(operator),
        })
    }
}

fn parse_operand(field: &str, raw: Option<&str>) -> EngineResult<f64> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| {
        EngineError::MissingOperand {
            field: field.to_string(),
        }
    })?;

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| EngineError::InvalidOperand {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

/// Where a calculation result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// Computed by the remote calculation service.
    Remote,
    /// Computed by the in-process engine.
    Local,
}

impl fmt::Display for ResultSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultSource::Remote => f.write_str("remote"),
            ResultSource::Local => f.write_str("local"),
        }
    }
}

/// The outcome presented to the caller of the client.
///
/// `value` is `NaN` when no defined result exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calculation {
    /// The numeric result, or `NaN`.
    pub value: f64,
    /// Which side produced the value.
    pub source: ResultSource,
}

impl Calculation {
    /// Returns true if the value is the not-a-number sentinel.
    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }
}
