use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::math::quadrature::quadratureerror::{
    QuadratureError,
    validate_interval
};

/// Where each subinterval is sampled.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum RectangleMethod {
    Left,
    Right,
    Middle
}

impl RectangleMethod {
    pub fn all() -> [RectangleMethod; 3] {
        [RectangleMethod::Middle, RectangleMethod::Left, RectangleMethod::Right]
    }

    pub fn name(&self) -> &'static str {
        match self {
            RectangleMethod::Left => "Left Method",
            RectangleMethod::Right => "Right Method",
            RectangleMethod::Middle => "Midpoint Method"
        }
    }
}

impl fmt::Display for RectangleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RectangleMethod::Left => "left",
            RectangleMethod::Right => "right",
            RectangleMethod::Middle => "middle"
        };
        write!(f, "{}", text)
    }
}

impl FromStr for RectangleMethod {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<RectangleMethod, QuadratureError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(RectangleMethod::Left),
            "right" => Ok(RectangleMethod::Right),
            "middle" | "midpoint" => Ok(RectangleMethod::Middle),
            _ => Err(QuadratureError::invalid_argument(
                format!("there is no rectangle method named '{}'", s)
            ))
        }
    }
}

/// Composite rectangle rule.
///
/// Left and right are first order in `h`, middle is second order.
/// Sums sequentially in index order; any other summation order may differ in the last bits.
pub fn rectangle_quadrature<F>(f: F,
                               lower_bound: f64,
                               upper_bound: f64,
                               num_intervals: usize,
                               method: RectangleMethod) -> Result<f64, QuadratureError>
    where F: Fn(f64) -> f64 {
    validate_interval(lower_bound, upper_bound, num_intervals)?;

    let h = (upper_bound - lower_bound) / num_intervals as f64;
    let mut sum = 0.0;
    match method {
        RectangleMethod::Left => {
            for i in 0..num_intervals {
                sum += f(lower_bound + i as f64 * h);
            }
        },
        RectangleMethod::Right => {
            for i in 1..=num_intervals {
                sum += f(lower_bound + i as f64 * h);
            }
        },
        RectangleMethod::Middle => {
            for i in 0..num_intervals {
                sum += f(lower_bound + h * (i as f64 + 0.5));
            }
        }
    }
    Ok(sum * h)
}
