use crate::input::inputerror::InputError;

/// Bounds and subdivision count as entered on the form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegralInput {
    lower_bound: f64,
    upper_bound: f64,
    num_intervals: usize
}

fn parse_bound(text: &str, field: &'static str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(InputError::Parse { field })
}

impl IntegralInput {
    pub fn new(lower_bound: f64, upper_bound: f64, num_intervals: usize) -> IntegralInput {
        IntegralInput { lower_bound, upper_bound, num_intervals }
    }

    pub fn parse(lower_text: &str, 
                 upper_text: &str, 
                 intervals_text: &str) -> Result<IntegralInput, InputError> {
        let lower_bound = parse_bound(lower_text, "lower_bound")?;
        let upper_bound = parse_bound(upper_text, "upper_bound")?;
        let count = intervals_text
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::Parse { field: "num_intervals" })?;
        if count <= 0 {
            return Err(InputError::InvalidArgument(
                format!("num_intervals must be a positive integer, got {}", count)
            ));
        }
        let num_intervals = usize::try_from(count)
            .map_err(|_| InputError::Parse { field: "num_intervals" })?;
        Ok(IntegralInput::new(lower_bound, upper_bound, num_intervals))
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn num_intervals(&self) -> usize {
        self.num_intervals
    }

    pub fn is_reversed(&self) -> bool {
        self.lower_bound > self.upper_bound
    }
}
