use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String)
}

impl QuadratureError {
    pub fn invalid_argument(reason: impl Into<String>) -> QuadratureError {
        QuadratureError::InvalidArgument(reason.into())
    }
}

/// Checks shared by every rule. Runs before the integrand is evaluated.
pub fn validate_interval(lower_bound: f64, 
                         upper_bound: f64, 
                         num_intervals: usize) -> Result<(), QuadratureError> {
    if num_intervals == 0 {
        return Err(QuadratureError::invalid_argument("num_intervals must be a positive integer"));
    }
    if !lower_bound.is_finite() || !upper_bound.is_finite() {
        return Err(QuadratureError::invalid_argument(
            format!("bounds must be finite, got [{}, {}]", lower_bound, upper_bound)
        ));
    }
    Ok(())
}
