use nalgebra::{
    DMatrix,
    DVector
};

use crate::math::quadrature::quadrature::QuadratureRule;
use crate::math::quadrature::quadratureerror::QuadratureError;

// ─────────────────────────────────────────────
// ConvergenceLevel
// ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct ConvergenceLevel {
    num_intervals: usize,
    step: f64,
    estimate: f64,
    error: f64
}

impl ConvergenceLevel {
    pub fn num_intervals(&self) -> usize {
        self.num_intervals
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn error(&self) -> f64 {
        self.error
    }
}

// ─────────────────────────────────────────────
// ConvergenceStudy
// ─────────────────────────────────────────────
//
// 對同一規則以 n, 2n, 4n, ... 個區間求值，並以最小平方法擬合
//   ln|e| = c + p·ln h
// 斜率 p 即為實測收斂階數。

pub struct ConvergenceStudy {
    rule: QuadratureRule,
    reference: f64,
    levels: Vec<ConvergenceLevel>
}

impl ConvergenceStudy {
    pub fn run<F>(rule: QuadratureRule,
                  f: F,
                  lower_bound: f64,
                  upper_bound: f64,
                  reference: f64,
                  start_intervals: usize,
                  levels: usize) -> Result<ConvergenceStudy, QuadratureError>
        where F: Fn(f64) -> f64 {
        if levels < 2 {
            return Err(QuadratureError::invalid_argument(
                format!("a convergence study needs at least 2 levels, got {}", levels)
            ));
        }

        let mut level_list = Vec::with_capacity(levels);
        let mut num_intervals = start_intervals;
        for _ in 0..levels {
            let estimate = rule.integrate(&f, lower_bound, upper_bound, num_intervals)?;
            let error = (estimate - reference).abs();
            if error == 0.0 || !error.is_finite() {
                return Err(QuadratureError::invalid_argument(
                    format!("error at {} intervals is {}, convergence order undefined", num_intervals, error)
                ));
            }
            level_list.push(ConvergenceLevel {
                num_intervals,
                step: ((upper_bound - lower_bound) / num_intervals as f64).abs(),
                estimate,
                error
            });
            num_intervals *= 2;
        }

        Ok(ConvergenceStudy { rule, reference, levels: level_list })
    }

    pub fn rule(&self) -> QuadratureRule {
        self.rule
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn levels(&self) -> &[ConvergenceLevel] {
        &self.levels
    }

    /// `e(n) / e(2n)` for each successive pair of levels.
    pub fn error_ratios(&self) -> Vec<f64> {
        self.levels
            .windows(2)
            .map(|pair| pair[0].error / pair[1].error)
            .collect()
    }

    pub fn is_monotone(&self) -> bool {
        self.levels
            .windows(2)
            .all(|pair| pair[1].error < pair[0].error)
    }

    /// Least-squares slope of `ln|error|` against `ln h`.
    pub fn estimated_order(&self) -> Result<f64, QuadratureError> {
        let m = self.levels.len();
        let design = DMatrix::from_fn(m, 2, |i, j| {
            if j == 0 { 1.0 } else { self.levels[i].step.ln() }
        });
        let observed = DVector::from_iterator(m, self.levels.iter().map(|level| level.error.ln()));
        let coefs = design
            .svd(true, true)
            .solve(&observed, 1e-12)
            .map_err(QuadratureError::invalid_argument)?;
        Ok(coefs[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::quadrature::rectanglequadrature::RectangleMethod;
    use approx::assert_abs_diff_eq;

    const EXACT: f64 = std::f64::consts::E - 1.0;

    fn study(rule: QuadratureRule) -> ConvergenceStudy {
        ConvergenceStudy::run(rule, f64::exp, 0.0, 1.0, EXACT, 8, 5).unwrap()
    }

    #[test]
    fn estimated_orders_match_nominal() {
        let rules = [
            QuadratureRule::rectangle(RectangleMethod::Left),
            QuadratureRule::rectangle(RectangleMethod::Right),
            QuadratureRule::rectangle(RectangleMethod::Middle),
            QuadratureRule::Trapezoidal,
            QuadratureRule::Simpson
        ];
        for rule in rules {
            let order = study(rule).estimated_order().unwrap();
            assert_abs_diff_eq!(order, rule.order() as f64, epsilon = 0.1);
        }
    }

    #[test]
    fn errors_decrease_monotonically() {
        assert!(study(QuadratureRule::Trapezoidal).is_monotone());
        assert!(study(QuadratureRule::Simpson).is_monotone());
        assert!(study(QuadratureRule::rectangle(RectangleMethod::Right)).is_monotone());
    }

    #[test]
    fn trapezoidal_ratios_near_four() {
        for ratio in study(QuadratureRule::Trapezoidal).error_ratios() {
            assert_abs_diff_eq!(ratio, 4.0, epsilon = 0.1);
        }
    }

    #[test]
    fn levels_double_intervals() {
        let counts: Vec<usize> = study(QuadratureRule::Simpson)
            .levels()
            .iter()
            .map(|level| level.num_intervals())
            .collect();
        assert_eq!(counts, vec![8, 16, 32, 64, 128]);
    }

    #[test]
    fn study_keeps_rule_and_reference() {
        let rule = QuadratureRule::rectangle(RectangleMethod::Middle);
        let study = study(rule);
        assert_eq!(study.rule(), rule);
        assert_eq!(study.reference(), EXACT);
        let first = study.levels()[0];
        assert_eq!(first.error(), (first.estimate() - study.reference()).abs());
    }

    #[test]
    fn single_level_rejected() {
        let result = ConvergenceStudy::run(QuadratureRule::Simpson, f64::exp, 0.0, 1.0, EXACT, 8, 1);
        assert!(matches!(result, Err(QuadratureError::InvalidArgument(_))));
    }

    #[test]
    fn exact_rule_has_undefined_order() {
        let result = ConvergenceStudy::run(QuadratureRule::Trapezoidal, |x| x, 0.0, 1.0, 0.5, 2, 3);
        assert!(matches!(result, Err(QuadratureError::InvalidArgument(_))));
    }

    #[test]
    fn odd_start_propagates_simpson_error() {
        let result = ConvergenceStudy::run(QuadratureRule::Simpson, f64::exp, 0.0, 1.0, EXACT, 3, 4);
        assert!(matches!(result, Err(QuadratureError::InvalidArgument(_))));
    }
}
