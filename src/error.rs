use thiserror::Error;

/// Top-level error type for the citygeom core.
#[derive(Debug, Error)]
pub enum CitygeomError {
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to caller input of an operation.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl OperationError {
    /// Error for a point loop that is too short to span a plane.
    #[must_use]
    pub fn too_few_points(what: &str, found: usize) -> Self {
        Self::InvalidInput(format!("{what} has {found} points, needs at least 3"))
    }
}

/// Convenience type alias for results using [`CitygeomError`].
pub type Result<T> = std::result::Result<T, CitygeomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err: CitygeomError = OperationError::too_few_points("exterior loop", 2).into();
        assert_eq!(
            err.to_string(),
            "invalid input: exterior loop has 2 points, needs at least 3"
        );
    }

    #[test]
    fn custom_invalid_input_display() {
        let err: CitygeomError = OperationError::InvalidInput("unknown label".into()).into();
        assert!(err.to_string().contains("unknown label"));
    }
}
