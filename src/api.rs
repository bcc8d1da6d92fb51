//! Request/response models and operation dispatch for the outer adapters
//!
//! Operation names arrive as strings and are parsed into closed enums, so
//! every supported operation is matched exhaustively when evaluated.

use crate::arithmetic;
use crate::currency::RateTable;
use crate::error::{CalcError, Result};
use crate::trigonometry::{self, AngleUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary operations exposed by `/api/basic`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BasicOp {
    pub fn all() -> [BasicOp; 4] {
        [
            BasicOp::Add,
            BasicOp::Subtract,
            BasicOp::Multiply,
            BasicOp::Divide,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BasicOp::Add => "add",
            BasicOp::Subtract => "subtract",
            BasicOp::Multiply => "multiply",
            BasicOp::Divide => "divide",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BasicOp::Add => "+",
            BasicOp::Subtract => "-",
            BasicOp::Multiply => "×",
            BasicOp::Divide => "÷",
        }
    }

    pub fn apply(&self, a: f64, b: f64) -> Result<f64> {
        match self {
            BasicOp::Add => Ok(arithmetic::add(a, b)),
            BasicOp::Subtract => Ok(arithmetic::subtract(a, b)),
            BasicOp::Multiply => Ok(arithmetic::multiply(a, b)),
            BasicOp::Divide => arithmetic::divide(a, b),
        }
    }
}

impl FromStr for BasicOp {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        BasicOp::all()
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalcError::InvalidOperation(format!("Unknown operation: {}", s)))
    }
}

impl fmt::Display for BasicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trigonometric functions exposed by `/api/trig`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunc {
    Sin,
    Cos,
    Tan,
}

impl TrigFunc {
    pub fn all() -> [TrigFunc; 3] {
        [TrigFunc::Sin, TrigFunc::Cos, TrigFunc::Tan]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrigFunc::Sin => "sin",
            TrigFunc::Cos => "cos",
            TrigFunc::Tan => "tan",
        }
    }

    pub fn apply(&self, angle: f64, unit: AngleUnit) -> f64 {
        match self {
            TrigFunc::Sin => trigonometry::sin(angle, unit),
            TrigFunc::Cos => trigonometry::cos(angle, unit),
            TrigFunc::Tan => trigonometry::tan(angle, unit),
        }
    }
}

impl FromStr for TrigFunc {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        TrigFunc::all()
            .into_iter()
            .find(|func| func.as_str() == s)
            .ok_or_else(|| {
                CalcError::InvalidOperation(format!("Unknown trig function: {}", s))
            })
    }
}

impl fmt::Display for TrigFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of `POST /api/basic`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicOpRequest {
    pub a: f64,
    pub b: f64,
    pub op: String,
}

impl BasicOpRequest {
    pub fn evaluate(&self) -> Result<f64> {
        finite_result(self.op.parse::<BasicOp>()?.apply(self.a, self.b)?)
    }
}

/// Body of `POST /api/trig`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrigRequest {
    pub angle: f64,
    pub func: String,
    #[serde(default)]
    pub degrees: Option<bool>,
}

impl TrigRequest {
    pub fn evaluate(&self) -> Result<f64> {
        let func = self.func.parse::<TrigFunc>()?;
        let unit = AngleUnit::from_degrees_flag(self.degrees.unwrap_or(false));
        finite_result(func.apply(self.angle, unit))
    }
}

/// Body of `POST /api/fx`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FxRequest {
    pub amount: f64,
    pub from_currency: String,
    pub to_currency: String,
}

impl FxRequest {
    pub fn evaluate(&self, rates: &RateTable) -> Result<f64> {
        finite_result(rates.convert(self.amount, &self.from_currency, &self.to_currency)?)
    }
}

/// A JSON `result` must be a number; inf and NaN have no JSON form
fn finite_result(result: f64) -> Result<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow(format!(
            "Result {} is not a finite number",
            result
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultResponse {
    pub result: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrenciesResponse {
    pub currencies: Vec<String>,
}

impl CurrenciesResponse {
    pub fn from_table(rates: &RateTable) -> Self {
        Self {
            currencies: rates.codes(),
        }
    }
}

/// Error body returned with HTTP 400
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl From<&CalcError> for ErrorResponse {
    fn from(err: &CalcError) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_op_parse() {
        assert_eq!("add".parse::<BasicOp>().unwrap(), BasicOp::Add);
        assert_eq!("divide".parse::<BasicOp>().unwrap(), BasicOp::Divide);
        assert!(matches!(
            "modulo".parse::<BasicOp>(),
            Err(CalcError::InvalidOperation(_))
        ));
        assert!("ADD".parse::<BasicOp>().is_err());
    }

    #[test]
    fn test_basic_op_names_round_trip() {
        for op in BasicOp::all() {
            assert_eq!(op.to_string().parse::<BasicOp>().unwrap(), op);
        }
        for func in TrigFunc::all() {
            assert_eq!(func.to_string().parse::<TrigFunc>().unwrap(), func);
        }
    }

    #[test]
    fn test_basic_op_apply() {
        assert_eq!(BasicOp::Add.apply(2.0, 3.0).unwrap(), 5.0);
        assert_eq!(BasicOp::Subtract.apply(2.0, 3.0).unwrap(), -1.0);
        assert_eq!(BasicOp::Multiply.apply(2.0, 3.0).unwrap(), 6.0);
        assert_eq!(BasicOp::Divide.apply(3.0, 2.0).unwrap(), 1.5);
        assert!(matches!(
            BasicOp::Divide.apply(1.0, 0.0),
            Err(CalcError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_trig_request_defaults_to_radians() {
        let req: TrigRequest = serde_json::from_str(r#"{"angle": 0.0, "func": "cos"}"#).unwrap();
        assert_eq!(req.degrees, None);
        assert_eq!(req.evaluate().unwrap(), 1.0);

        let req: TrigRequest =
            serde_json::from_str(r#"{"angle": 30, "func": "sin", "degrees": true}"#).unwrap();
        assert_relative_eq!(req.evaluate().unwrap(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_trig_func() {
        let req = TrigRequest {
            angle: 1.0,
            func: "sec".to_string(),
            degrees: None,
        };
        assert!(matches!(req.evaluate(), Err(CalcError::InvalidOperation(_))));
    }

    #[test]
    fn test_fx_request() {
        let req = FxRequest {
            amount: 100.0,
            from_currency: "usd".to_string(),
            to_currency: "EUR".to_string(),
        };
        assert_eq!(req.evaluate(RateTable::default_table()).unwrap(), 85.0);
    }

    #[test]
    fn test_non_finite_results_rejected() {
        let req = BasicOpRequest {
            a: 1e308,
            b: 10.0,
            op: "multiply".to_string(),
        };
        assert!(matches!(req.evaluate(), Err(CalcError::Overflow(_))));

        let req = FxRequest {
            amount: 1e308,
            from_currency: "USD".to_string(),
            to_currency: "JPY".to_string(),
        };
        assert!(matches!(
            req.evaluate(RateTable::default_table()),
            Err(CalcError::Overflow(_))
        ));

        let req = BasicOpRequest {
            a: 1e308,
            b: 1e308,
            op: "subtract".to_string(),
        };
        assert_eq!(req.evaluate().unwrap(), 0.0);
    }

    #[test]
    fn test_error_response() {
        let err = CalcError::UnsupportedCurrency("XYZ".to_string());
        let body = serde_json::to_value(ErrorResponse::from(&err)).unwrap();
        assert_eq!(body["detail"], "Unsupported currency: XYZ");
    }
}
