// ============================================================================
// Decimal Vector Library
// Immutable N-dimensional vectors with exact decimal arithmetic
// ============================================================================

//! # Decimal Vector
//!
//! An immutable, fixed-dimension vector of exact decimal coordinates.
//!
//! ## Features
//!
//! - **Exact arithmetic** on `rust_decimal::Decimal` coordinates
//! - **Norms and angles** with a single, documented `f64` square-root step
//! - **Parallel/orthogonal tests** and projection decomposition
//! - **3D geometry**: cross product, parallelogram and triangle area
//! - **Checked everything**: dimension mismatches and overflow are errors, not panics
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//! use rust_decimal::Decimal;
//!
//! // Optional: fix numeric settings once, before any vector math
//! VectorConfig::new().with_precision(20).install().unwrap();
//!
//! let x = Vector::new([1, 0, 0]).unwrap();
//! let y = Vector::new([0, 1, 0]).unwrap();
//!
//! assert_eq!(x.cross_product(&y).unwrap(), Vector::new([0, 0, 1]).unwrap());
//! assert!(x.is_orthogonal(&y).unwrap());
//! assert_eq!(x.area_of_triangle(&y).unwrap(), Decimal::new(5, 1));
//!
//! let degrees = x.angle(&y, AngleUnit::Degrees).unwrap();
//! println!("angle: {degrees}");
//! ```

pub mod domain;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AngleUnit, Vector, VectorConfig};
    pub use crate::numeric::{ErrorKind, IntoCoordinate, VectorError, VectorResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_end_to_end_decomposition() {
        let force = Vector::new(["3.009", "-6.172", "3.692", "-2.51"]).unwrap();
        let incline = Vector::new(["6.404", "-9.144", "2.759", "8.718"]).unwrap();

        let (parallel, perpendicular) = force.decompose(&incline).unwrap();

        // The two components span the original vector
        assert!(parallel.is_parallel(&incline).unwrap());
        assert!(perpendicular.is_orthogonal(&incline).unwrap());
        assert_eq!(parallel.dimension(), 4);

        let tolerance = Decimal::new(1, 10);
        let recombined = parallel.plus(&perpendicular).unwrap();
        for (actual, expected) in recombined.iter().zip(force.iter()) {
            assert!((*actual - *expected).abs() <= tolerance);
        }
    }

    #[test]
    fn test_errors_surface_through_prelude() {
        let flat = Vector::new([1, 2]).unwrap();
        let err = flat.cross_product(&flat).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);

        let err = Vector::zero(2).unwrap().normalisation().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }
}
