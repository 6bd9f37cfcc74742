use crate::math::quadrature::quadratureerror::{
    QuadratureError,
    validate_interval
};

/// Composite trapezoidal rule, endpoints weighted by one half.
///
/// Sums sequentially in index order; any other summation order may differ in the last bits.
pub fn trapezoidal_quadrature<F>(f: F,
                                 lower_bound: f64,
                                 upper_bound: f64,
                                 num_intervals: usize) -> Result<f64, QuadratureError>
    where F: Fn(f64) -> f64 {
    validate_interval(lower_bound, upper_bound, num_intervals)?;

    let dx = (upper_bound - lower_bound) / num_intervals as f64;
    let mut result = 0.5 * (f(lower_bound) + f(upper_bound));
    for i in 1..num_intervals {
        result += f(lower_bound + i as f64 * dx);
    }
    Ok(result * dx)
}
