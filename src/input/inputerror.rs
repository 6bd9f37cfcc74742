use thiserror::Error;

pub const INVALID_NUMERIC_INPUT: &str =
    "Input error: Please enter valid numbers for lower_bound, upper_bound, and num_intervals.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// `field` names the first entry that failed to parse.
    #[error("{}", INVALID_NUMERIC_INPUT)]
    Parse { field: &'static str },
    #[error("Input error: {0}")]
    InvalidArgument(String)
}
