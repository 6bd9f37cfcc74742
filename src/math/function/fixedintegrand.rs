use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::math::function::integrand::Integrand;
use crate::math::quadrature::quadrature::QuadratureRule;
use crate::math::quadrature::quadratureerror::QuadratureError;
use crate::math::quadrature::rectanglequadrature::RectangleMethod;

const F3_SHIFT: f64 = 2.3;

/// The three integrands the application ships with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Deserialize)]
pub enum FixedIntegrand {
    /// `1 / sqrt(2x^2 + 1)`
    F1,
    /// `log10(x + 2) / x`, singular at zero
    F2,
    /// `1 / sqrt(x^2 + 2.3)`
    F3
}

impl FixedIntegrand {
    /// Rules the form of each integrand offers by default.
    pub fn default_rules(&self) -> Vec<QuadratureRule> {
        match self {
            FixedIntegrand::F1 => RectangleMethod::all()
                .into_iter()
                .map(QuadratureRule::rectangle)
                .collect(),
            FixedIntegrand::F2 => vec![QuadratureRule::Simpson],
            FixedIntegrand::F3 => vec![QuadratureRule::Trapezoidal]
        }
    }

    /// Digits shown when no precision is configured.
    pub fn report_precision(&self) -> usize {
        match self {
            FixedIntegrand::F1 => 4,
            FixedIntegrand::F2 | FixedIntegrand::F3 => 5
        }
    }

    /// Heading of the result panel; only the first one is plural.
    pub fn report_title(&self) -> &'static str {
        match self {
            FixedIntegrand::F1 => "1st Integral Results",
            FixedIntegrand::F2 => "2nd Integral Result",
            FixedIntegrand::F3 => "3rd Integral Result"
        }
    }
}

impl Integrand for FixedIntegrand {
    fn value(&self, x: f64) -> f64 {
        match self {
            FixedIntegrand::F1 => 1.0 / (2.0 * x * x + 1.0).sqrt(),
            FixedIntegrand::F2 => (x + 2.0).log10() / x,
            FixedIntegrand::F3 => 1.0 / (x * x + F3_SHIFT).sqrt()
        }
    }

    fn formula(&self) -> String {
        let text = match self {
            FixedIntegrand::F1 => "f1(x) = 1 / sqrt(2 * x^2 + 1)",
            FixedIntegrand::F2 => "f2(x) = log10(x + 2) / x",
            FixedIntegrand::F3 => "f3(x) = 1 / sqrt(x^2 + 2.3)"
        };
        text.to_owned()
    }

    fn antiderivative(&self, x: f64) -> Option<f64> {
        match self {
            FixedIntegrand::F1 => Some((SQRT_2 * x).asinh() / SQRT_2),
            FixedIntegrand::F2 => None,
            FixedIntegrand::F3 => Some((x / F3_SHIFT.sqrt()).asinh())
        }
    }
}

impl fmt::Display for FixedIntegrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formula())
    }
}

impl FromStr for FixedIntegrand {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<FixedIntegrand, QuadratureError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f1" | "1" => Ok(FixedIntegrand::F1),
            "f2" | "2" => Ok(FixedIntegrand::F2),
            "f3" | "3" => Ok(FixedIntegrand::F3),
            _ => Err(QuadratureError::invalid_argument(format!("unknown integrand '{}'", s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::convergence::ConvergenceStudy;
    use crate::math::quadrature::simpsonquadrature::simpson_quadrature;
    use crate::math::quadrature::trapezoidalquadrature::trapezoidal_quadrature;
    use approx::assert_relative_eq;

    #[test]
    fn values_at_known_points() {
        assert_relative_eq!(FixedIntegrand::F1.value(0.0), 1.0);
        assert_relative_eq!(FixedIntegrand::F1.value(2.0), 1.0 / 3.0, epsilon = 1e-15);
        assert_relative_eq!(FixedIntegrand::F2.value(8.0), 0.125, epsilon = 1e-15);
        assert_relative_eq!(FixedIntegrand::F3.value(0.0), 1.0 / 2.3_f64.sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn f2_is_singular_at_zero() {
        assert!(!FixedIntegrand::F2.value(0.0).is_finite());
    }

    #[test]
    fn antiderivatives_differentiate_back() {
        let h = 1e-6;
        for integrand in [FixedIntegrand::F1, FixedIntegrand::F3] {
            for x in [-1.5, 0.0, 0.7, 3.0] {
                let lhs = integrand.antiderivative(x - h).unwrap();
                let rhs = integrand.antiderivative(x + h).unwrap();
                assert_relative_eq!((rhs - lhs) / (2.0 * h), integrand.value(x), epsilon = 1e-8);
            }
        }
        assert!(FixedIntegrand::F2.antiderivative(1.0).is_none());
    }

    #[test]
    fn quadrature_matches_exact_integral() {
        let f1 = |x| FixedIntegrand::F1.value(x);
        let exact = FixedIntegrand::F1.exact_integral(0.0, 2.0).unwrap();
        assert_relative_eq!(simpson_quadrature(f1, 0.0, 2.0, 200).unwrap(), exact, epsilon = 1e-7);

        let f3 = |x| FixedIntegrand::F3.value(x);
        let exact = FixedIntegrand::F3.exact_integral(-1.0, 4.0).unwrap();
        assert_relative_eq!(trapezoidal_quadrature(f3, -1.0, 4.0, 2000).unwrap(), exact, epsilon = 1e-6);
    }

    #[test]
    fn f2_simpson_converges_away_from_singularity() {
        let f2 = |x| FixedIntegrand::F2.value(x);
        let reference = simpson_quadrature(f2, 1.0, 3.0, 4096).unwrap();
        let study = ConvergenceStudy::run(QuadratureRule::Simpson, f2, 1.0, 3.0, reference, 4, 4).unwrap();
        assert!(study.is_monotone());
    }

    #[test]
    fn default_rules_follow_the_form() {
        assert_eq!(FixedIntegrand::F1.default_rules().len(), 3);
        assert_eq!(FixedIntegrand::F2.default_rules(), vec![QuadratureRule::Simpson]);
        assert_eq!(FixedIntegrand::F3.default_rules(), vec![QuadratureRule::Trapezoidal]);
    }

    #[test]
    fn report_titles() {
        assert_eq!(FixedIntegrand::F1.report_title(), "1st Integral Results");
        assert_eq!(FixedIntegrand::F2.report_title(), "2nd Integral Result");
        assert_eq!(FixedIntegrand::F3.report_title(), "3rd Integral Result");
    }

    #[test]
    fn parse_names() {
        assert_eq!("F2".parse::<FixedIntegrand>().unwrap(), FixedIntegrand::F2);
        assert_eq!("3".parse::<FixedIntegrand>().unwrap(), FixedIntegrand::F3);
        assert!("f4".parse::<FixedIntegrand>().is_err());
    }
}
