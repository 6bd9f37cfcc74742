use serde::Deserialize;
use thiserror::Error;

use crate::math::quadrature::quadratureerror::QuadratureError;

#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),
    #[error("key '{0}' not found")]
    NameNotFoundError(String),
    #[error("key '{0}' defined twice")]
    DuplicateNameError(String),
    #[error(transparent)]
    QuadratureError(#[from] QuadratureError)
}

impl ManagerError {
    pub fn from_json_or_json_parse_error <T> (json_value: serde_json::Value) -> Result<T, Self> 
        where T : for<'a> Deserialize<'a> {
        serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
    }

    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = ManagerError::map_elem_not_found("first");
        assert_eq!(err.to_string(), "key 'first' not found");
    }

    #[test]
    fn quadrature_error_passes_through() {
        let err: ManagerError = QuadratureError::invalid_argument("odd").into();
        assert_eq!(err.to_string(), "invalid argument: odd");
    }
}
