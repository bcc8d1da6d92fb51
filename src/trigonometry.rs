//! Trigonometric and hyperbolic functions

use crate::error::{CalcError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Unit an input angle is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Map a `degrees` flag (as sent by clients) to a unit
    pub fn from_degrees_flag(degrees: bool) -> Self {
        if degrees {
            AngleUnit::Degrees
        } else {
            AngleUnit::Radians
        }
    }

    /// Express `angle` in radians
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => degrees_to_radians(angle),
        }
    }
}

pub fn sin(angle: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(angle).sin()
}

pub fn cos(angle: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(angle).cos()
}

pub fn tan(angle: f64, unit: AngleUnit) -> f64 {
    unit.to_radians(angle).tan()
}

fn check_unit_interval(value: f64, name: &str) -> Result<()> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(CalcError::InvalidDomain(format!(
            "{} is only defined for values between -1 and 1",
            name
        )));
    }
    Ok(())
}

/// Arcsine in radians, principal value in [-π/2, π/2]
pub fn asin(value: f64) -> Result<f64> {
    check_unit_interval(value, "Arcsine")?;
    Ok(value.asin())
}

/// Arccosine in radians, principal value in [0, π]
pub fn acos(value: f64) -> Result<f64> {
    check_unit_interval(value, "Arccosine")?;
    Ok(value.acos())
}

/// Arctangent in radians
pub fn atan(value: f64) -> f64 {
    value.atan()
}

/// Quadrant-aware arctangent of y/x, in (-π, π]
pub fn atan2(y: f64, x: f64) -> f64 {
    y.atan2(x)
}

pub fn sinh(x: f64) -> f64 {
    x.sinh()
}

pub fn cosh(x: f64) -> f64 {
    x.cosh()
}

pub fn tanh(x: f64) -> f64 {
    x.tanh()
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6};

    #[test]
    fn test_basic_functions_radians() {
        assert_eq!(sin(0.0, AngleUnit::Radians), 0.0);
        assert_eq!(cos(0.0, AngleUnit::Radians), 1.0);
        assert_relative_eq!(sin(FRAC_PI_2, AngleUnit::Radians), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tan(FRAC_PI_4, AngleUnit::Radians), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_basic_functions_degrees() {
        assert_relative_eq!(sin(30.0, AngleUnit::Degrees), 0.5, epsilon = 1e-12);
        assert_relative_eq!(cos(60.0, AngleUnit::Degrees), 0.5, epsilon = 1e-12);
        assert_relative_eq!(tan(45.0, AngleUnit::Degrees), 1.0, epsilon = 1e-12);
        assert_relative_eq!(cos(180.0, AngleUnit::Degrees), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_angle_unit() {
        assert_eq!(AngleUnit::default(), AngleUnit::Radians);
        assert_eq!(AngleUnit::from_degrees_flag(true), AngleUnit::Degrees);
        assert_eq!(AngleUnit::from_degrees_flag(false), AngleUnit::Radians);
        assert_relative_eq!(AngleUnit::Degrees.to_radians(90.0), FRAC_PI_2);
    }

    #[test]
    fn test_inverse_functions() {
        assert_relative_eq!(asin(0.5).unwrap(), FRAC_PI_6, epsilon = 1e-12);
        assert_relative_eq!(acos(0.5).unwrap(), PI / 3.0, epsilon = 1e-12);
        assert_relative_eq!(acos(-1.0).unwrap(), PI, epsilon = 1e-12);
        assert_relative_eq!(atan(1.0), FRAC_PI_4, epsilon = 1e-12);
    }

    #[test]
    fn test_inverse_domain() {
        assert!(matches!(asin(2.0), Err(CalcError::InvalidDomain(_))));
        assert!(matches!(acos(-1.5), Err(CalcError::InvalidDomain(_))));
        assert!(asin(f64::NAN).is_err());
        assert!(asin(1.0).is_ok());
        assert!(acos(-1.0).is_ok());
    }

    #[test]
    fn test_atan2_quadrants() {
        assert_relative_eq!(atan2(1.0, 1.0), FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(atan2(1.0, -1.0), 3.0 * FRAC_PI_4, epsilon = 1e-12);
        assert_relative_eq!(atan2(-1.0, -1.0), -3.0 * FRAC_PI_4, epsilon = 1e-12);
        assert_eq!(atan2(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_hyperbolic() {
        assert_eq!(sinh(0.0), 0.0);
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(tanh(0.0), 0.0);
        let x = 1.5;
        assert_relative_eq!(cosh(x).powi(2) - sinh(x).powi(2), 1.0, epsilon = 1e-12);
        assert_relative_eq!(tanh(x), sinh(x) / cosh(x), epsilon = 1e-12);
    }

    #[test]
    fn test_conversions() {
        assert_relative_eq!(degrees_to_radians(180.0), PI);
        assert_relative_eq!(radians_to_degrees(PI), 180.0);
        assert_relative_eq!(radians_to_degrees(degrees_to_radians(37.5)), 37.5, epsilon = 1e-12);
    }
}
