//! The arithmetic operator model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An operator symbol selecting the arithmetic operation.
///
/// The supported set is closed (`+ - * / ^`). Any other symbol is kept
/// verbatim in [`Operator::Unknown`] rather than rejected, so that every
/// request maps to a defined result.
///
/// On the wire an operator is a plain string.
///
/// ```
/// use calc_engine::models::Operator;
///
/// assert_eq!(Operator::from("^"), Operator::Power);
/// assert_eq!(Operator::from("%"), Operator::Unknown("%".to_string()));
/// assert_eq!(Operator::Divide.symbol(), "/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`, rounded to two decimal places.
    Divide,
    /// `^`
    Power,
    /// Any symbol outside the supported set.
    Unknown(String),
}

impl Operator {
    /// The supported operators, in display order.
    pub const SUPPORTED: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    /// Returns the symbol this operator was parsed from.
    pub fn symbol(&self) -> &str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Power => "^",
            Operator::Unknown(symbol) => symbol,
        }
    }

    /// Returns true if the operator is in the supported set.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Operator::Unknown(_))
    }
}

impl From<&str> for Operator {
    fn from(symbol: &str) -> Self {
        match symbol {
            "+" => Operator::Add,
            "-" => Operator::Subtract,
            "*" => Operator::Multiply,
            "/" => Operator::Divide,
            "^" => Operator::Power,
            other => Operator::Unknown(other.to_string()),
        }
    }
}

impl From<String> for Operator {
    fn from(symbol: String) -> Self {
        match Operator::from(symbol.as_str()) {
            Operator::Unknown(_) => Operator::Unknown(symbol),
            known => known,
        }
    }
}

impl From<Operator> for String {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Unknown(symbol) => symbol,
            known => known.symbol().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
