use std::fmt;

use serde::Deserialize;

use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::rectanglequadrature::{
    RectangleMethod,
    rectangle_quadrature
};
use crate::math::quadrature::simpsonquadrature::simpson_quadrature;
use crate::math::quadrature::trapezoidalquadrature::trapezoidal_quadrature;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
#[serde(tag = "rule")]
pub enum QuadratureRule {
    Rectangle { method: RectangleMethod },
    Simpson,
    Trapezoidal
}

impl QuadratureRule {
    pub fn rectangle(method: RectangleMethod) -> QuadratureRule {
        QuadratureRule::Rectangle { method }
    }

    pub fn integrate<F>(&self,
                        f: F,
                        lower_bound: f64,
                        upper_bound: f64,
                        num_intervals: usize) -> Result<f64, QuadratureError>
        where F: Fn(f64) -> f64 {
        match self {
            QuadratureRule::Rectangle { method } => {
                rectangle_quadrature(f, lower_bound, upper_bound, num_intervals, *method)
            },
            QuadratureRule::Simpson => simpson_quadrature(f, lower_bound, upper_bound, num_intervals),
            QuadratureRule::Trapezoidal => trapezoidal_quadrature(f, lower_bound, upper_bound, num_intervals)
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Rectangle { method } => method.name(),
            QuadratureRule::Simpson => "Simpson's Rule",
            QuadratureRule::Trapezoidal => "Trapezoidal Rule"
        }
    }

    /// Nominal power of `h` in the error term for smooth integrands.
    pub fn order(&self) -> u32 {
        match self {
            QuadratureRule::Rectangle { method: RectangleMethod::Middle } => 2,
            QuadratureRule::Rectangle { .. } => 1,
            QuadratureRule::Simpson => 4,
            QuadratureRule::Trapezoidal => 2
        }
    }

    /// Parses `left`, `right`, `middle`, `simpson` or `trapezoidal`.
    pub fn parse(rule_str: &str) -> Result<QuadratureRule, QuadratureError> {
        match rule_str.trim().to_ascii_lowercase().as_str() {
            "simpson" => Ok(QuadratureRule::Simpson),
            "trapezoidal" | "trapezoid" => Ok(QuadratureRule::Trapezoidal),
            other => other.parse::<RectangleMethod>()
                .map(QuadratureRule::rectangle)
                .map_err(|_| QuadratureError::invalid_argument(
                    format!("unknown quadrature rule '{}'", rule_str)
                ))
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
