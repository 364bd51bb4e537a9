//! Request types for the calculation service API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationInput, Operator};

/// Request body for the `/calculate` endpoint.
///
/// Operands are optional at the serde level so that an absent or `null`
/// operand is reported as a missing operand instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The first operand.
    #[serde(default)]
    pub a: Option<f64>,
    /// The second operand.
    #[serde(default)]
    pub b: Option<f64>,
    /// The operator symbol, e.g. `"+"`. Unsupported symbols are accepted.
    pub operator: String,
}

impl CalculationRequest {
    /// Converts the request into a validated domain input.
    pub fn into_input(self) -> EngineResult<CalculationInput> {
        let a = self.a.ok_or_else(|| EngineError::MissingOperand {
            field: "a".to_string(),
        })?;
        let b = self.b.ok_or_else(|| EngineError::MissingOperand {
            field: "b".to_string(),
        })?;
        Ok(CalculationInput {
            a,
            b,
            operator: Operator::from(self.operator),
        })
    }
}

impl From<&CalculationInput> for CalculationRequest {
    fn from(input: &CalculationInput) -> Self {
        CalculationRequest {
            a: Some(input.a),
            b: Some(input.b),
            operator: input.operator.symbol().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{"a": 21, "b": 7, "operator": "-"}"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.a, Some(21.0));
        assert_eq!(request.b, Some(7.0));
        assert_eq!(request.operator, "-");
    }

    #[test]
    fn test_missing_operand_deserializes_as_none() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{"a": 1, "operator": "+"}"#).unwrap();
        assert_eq!(request.b, None);

        let request: CalculationRequest =
            serde_json::from_str(r#"{"a": null, "b": 1, "operator": "+"}"#).unwrap();
        assert_eq!(request.a, None);
    }

    #[test]
    fn test_missing_operator_fails_to_deserialize() {
        let err = serde_json::from_str::<CalculationRequest>(r#"{"a": 1, "b": 2}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `operator`"));
    }

    #[test]
    fn test_into_input() {
        let request = CalculationRequest {
            a: Some(2.0),
            b: Some(3.0),
            operator: "^".to_string(),
        };
        let input = request.into_input().unwrap();
        assert_eq!(input, CalculationInput::new(2.0, 3.0, Operator::Power));
    }

    #[test]
    fn test_into_input_reports_missing_operand() {
        let request = CalculationRequest {
            a: Some(2.0),
            b: None,
            operator: "+".to_string(),
        };
        assert_eq!(
            request.into_input().unwrap_err(),
            EngineError::MissingOperand {
                field: "b".to_string()
            }
        );
    }

    #[test]
    fn test_request_from_input_keeps_unknown_symbol() {
        let input = CalculationInput::new(10.0, 2.0, "%");
        let request = CalculationRequest::from(&input);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"a": 10.0, "b": 2.0, "operator": "%"})
        );
    }
}
