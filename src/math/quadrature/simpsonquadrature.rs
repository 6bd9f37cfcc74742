use crate::math::quadrature::quadratureerror::{
    QuadratureError,
    validate_interval
};

/// Composite Simpson 1/3 rule. Weights 1, 4, 2, 4, ..., 2, 4, 1 scaled by `dx / 3`.
///
/// An odd `num_intervals` is rejected before `f` is evaluated.
/// Sums sequentially in index order; any other summation order may differ in the last bits.
pub fn simpson_quadrature<F>(f: F,
                             lower_bound: f64,
                             upper_bound: f64,
                             num_intervals: usize) -> Result<f64, QuadratureError>
    where F: Fn(f64) -> f64 {
    validate_interval(lower_bound, upper_bound, num_intervals)?;
    if num_intervals % 2 != 0 {
        return Err(QuadratureError::invalid_argument(
            format!("num_intervals must be even for Simpson's rule, got {}", num_intervals)
        ));
    }

    let dx = (upper_bound - lower_bound) / num_intervals as f64;
    let mut result = f(lower_bound) + f(upper_bound);
    for i in (1..num_intervals).step_by(2) {
        result += 4.0 * f(lower_bound + i as f64 * dx);
    }
    for i in (2..num_intervals - 1).step_by(2) {
        result += 2.0 * f(lower_bound + i as f64 * dx);
    }
    Ok(result * dx / 3.0)
}
