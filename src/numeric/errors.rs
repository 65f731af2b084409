// ============================================================================
// Vector Errors
// Error types for vector construction and arithmetic
// ============================================================================

use thiserror::Error;

/// Broad category of a [`VectorError`].
///
/// Callers that only care about the class of failure (bad input, shape
/// mismatch, undefined geometry) can match on this instead of the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Construction input was empty or not numeric
    InvalidArgument,
    /// Operands have the wrong dimension for the operation
    DimensionMismatch,
    /// The operation is undefined for the given input (zero vector)
    Domain,
    /// An exact result exceeded the decimal range
    Overflow,
    /// The process-wide configuration was rejected
    Config,
}

/// Errors that can occur while building or operating on vectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("coordinates must be nonempty")]
    EmptyCoordinates,

    #[error("coordinates must be an iterable of numbers (element {index} is not a finite decimal)")]
    NonNumericCoordinate { index: usize },

    #[error("{operation} requires {expected}-dimensional vectors, found {found}")]
    DimensionMismatch {
        operation: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("cannot {operation} a zero vector")]
    ZeroVector { operation: &'static str },

    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl VectorError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            VectorError::EmptyCoordinates | VectorError::NonNumericCoordinate { .. } => {
                ErrorKind::InvalidArgument
            },
            VectorError::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
            VectorError::ZeroVector { .. } => ErrorKind::Domain,
            VectorError::Overflow { .. } => ErrorKind::Overflow,
            VectorError::Config(_) => ErrorKind::Config,
        }
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            VectorError::EmptyCoordinates.to_string(),
            "coordinates must be nonempty"
        );
        assert_eq!(
            VectorError::ZeroVector {
                operation: "normalise"
            }
            .to_string(),
            "cannot normalise a zero vector"
        );
        assert_eq!(
            VectorError::DimensionMismatch {
                operation: "cross product",
                expected: 3,
                found: 2,
            }
            .to_string(),
            "cross product requires 3-dimensional vectors, found 2"
        );
        assert!(VectorError::NonNumericCoordinate { index: 1 }
            .to_string()
            .starts_with("coordinates must be an iterable of numbers"));
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            VectorError::EmptyCoordinates.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            VectorError::NonNumericCoordinate { index: 0 }.kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            VectorError::ZeroVector { operation: "x" }.kind(),
            ErrorKind::Domain
        );
        assert_eq!(
            VectorError::Config("bad".to_string()).kind(),
            ErrorKind::Config
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(VectorError::EmptyCoordinates, VectorError::EmptyCoordinates);
        assert_ne!(
            VectorError::Overflow { operation: "sum" },
            VectorError::Overflow {
                operation: "product"
            }
        );
    }
}
