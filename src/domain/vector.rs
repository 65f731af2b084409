// ============================================================================
// Vector Domain Model
// Immutable N-dimensional vector over exact decimals
// ============================================================================

use super::config::VectorConfig;
use crate::numeric::{self, IntoCoordinate, VectorError, VectorResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Index, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coordinates up to this dimension are stored inline.
const INLINE_DIMENSION: usize = 4;

type Coordinates = SmallVec<[Decimal; INLINE_DIMENSION]>;

/// Unit in which [`Vector::angle`] reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable vector of exact decimal coordinates.
///
/// The dimension is fixed at construction and is always at least one.
/// Every operation returns a new value; nothing mutates the receiver.
///
/// Equality is exact, coordinate by coordinate. Vectors of different
/// dimension compare unequal.
///
/// # Example
/// ```
/// use decimal_vector::prelude::*;
/// use rust_decimal::Decimal;
///
/// let a = Vector::new([1, 2, 3])?;
/// let b = Vector::new([4, 5, 6])?;
/// assert_eq!(a.dot_product(&b)?, Decimal::from(32));
/// # Ok::<(), VectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")
)]
pub struct Vector {
    coordinates: Coordinates,
}

// ============================================================================
// Construction
// ============================================================================

impl Vector {
    /// Create a vector from any sequence of numeric values.
    ///
    /// Accepts integers, finite floats, `Decimal`s and decimal strings.
    ///
    /// # Errors
    /// - `EmptyCoordinates` if the sequence is empty
    /// - `NonNumericCoordinate` if an element cannot be converted to an exact
    ///   decimal
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .into_coordinate()
                    .ok_or(VectorError::NonNumericCoordinate { index })
            })
            .collect::<VectorResult<Coordinates>>()?;

        Self::from_coordinates(coordinates)
    }

    /// Create a vector from already-exact decimal coordinates.
    pub fn from_decimals(coordinates: Vec<Decimal>) -> VectorResult<Self> {
        Self::from_coordinates(Coordinates::from_vec(coordinates))
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_elem(Decimal::ZERO, dimension))
    }

    fn from_coordinates(coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::EmptyCoordinates);
        }
        Ok(Self { coordinates })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Decimal> {
        self.coordinates.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    fn ensure_same_dimension(&self, other: &Self, operation: &'static str) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                operation,
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, operation: &'static str, f: F) -> VectorResult<Self>
    where
        F: Fn(Decimal, Decimal) -> VectorResult<Decimal>,
    {
        self.ensure_same_dimension(other, operation)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(&x, &y)| f(x, y))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Self { coordinates })
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Element-wise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ, `Overflow` if a
    /// coordinate leaves the decimal range.
    pub fn plus(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, "addition", |x, y| numeric::checked_add(x, y, "addition"))
    }

    /// Element-wise difference.
    pub fn minus(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, "subtraction", |x, y| {
            numeric::checked_sub(x, y, "subtraction")
        })
    }

    /// Multiply every coordinate by `scalar`.
    pub fn multiply(&self, scalar: impl Into<Decimal>) -> VectorResult<Self> {
        let scalar = scalar.into();
        let coordinates = self
            .iter()
            .map(|&x| numeric::checked_mul(x, scalar, "scalar multiplication"))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Self { coordinates })
    }

    /// Sum of element-wise products.
    pub fn dot_product(&self, other: &Self) -> VectorResult<Decimal> {
        self.ensure_same_dimension(other, "dot product")?;
        self.iter()
            .zip(other.iter())
            .try_fold(Decimal::ZERO, |acc, (&x, &y)| {
                let product = numeric::checked_mul(x, y, "dot product")?;
                numeric::checked_add(acc, product, "dot product")
            })
    }

    /// Σx², exact.
    fn squared_magnitude(&self) -> VectorResult<Decimal> {
        self.iter().try_fold(Decimal::ZERO, |acc, &x| {
            let square = numeric::checked_mul(x, x, "magnitude")?;
            numeric::checked_add(acc, square, "magnitude")
        })
    }

    /// Split into `(m, self / m)` with m = max|xᵢ|, or `None` for the zero
    /// vector. The rescaled coordinates lie in [-1, 1] with at least one at
    /// ±1, so their sum of squares is in [1, dimension].
    fn rescaled(&self, operation: &'static str) -> VectorResult<Option<(Decimal, Self)>> {
        let scale = self.iter().map(|x| x.abs()).max().unwrap_or(Decimal::ZERO);
        if scale.is_zero() {
            return Ok(None);
        }

        let coordinates = self
            .iter()
            .map(|&x| numeric::checked_div(x, scale, operation))
            .collect::<VectorResult<Coordinates>>()?;
        Ok(Some((scale, Self { coordinates })))
    }

    // ========================================================================
    // Norms
    // ========================================================================

    /// Euclidean length.
    ///
    /// Computed as m·√Σ(xᵢ/m)² with m = max|xᵢ|, so the sum of squares can
    /// neither underflow nor overflow the decimal range. The square root is
    /// taken in `f64`, so the result is exact only when the root is
    /// representable there (perfect squares, for instance). Everything else
    /// is accurate to roughly 16 significant digits.
    pub fn magnitude(&self) -> VectorResult<Decimal> {
        self.magnitude_in(VectorConfig::global())
    }

    fn magnitude_in(&self, config: &VectorConfig) -> VectorResult<Decimal> {
        let Some((scale, scaled)) = self.rescaled("magnitude")? else {
            return Ok(Decimal::ZERO);
        };

        let root = numeric::sqrt(scaled.squared_magnitude()?, config.precision)?;
        let magnitude = numeric::checked_mul(scale, root, "magnitude")?;
        Ok(magnitude.round_sf(config.precision).unwrap_or(magnitude))
    }

    /// True iff every coordinate is zero, which is exactly when the
    /// magnitude is zero.
    pub fn is_zero(&self) -> bool {
        self.iter().all(Decimal::is_zero)
    }

    /// The unit vector pointing the same way.
    ///
    /// # Errors
    /// `ZeroVector` if the magnitude is zero.
    pub fn normalisation(&self) -> VectorResult<Self> {
        self.normalisation_in(VectorConfig::global())
    }

    fn normalisation_in(&self, config: &VectorConfig) -> VectorResult<Self> {
        let Some((_, scaled)) = self.rescaled("normalisation")? else {
            tracing::debug!(vector = %self, "refusing to normalise a zero vector");
            return Err(VectorError::ZeroVector {
                operation: "normalise",
            });
        };

        // |scaled| is in [1, √dimension], so its reciprocal stays well inside range
        let length = scaled.magnitude_in(config)?;
        let factor = numeric::checked_div(Decimal::ONE, length, "normalisation")?;
        let factor = factor.round_sf(config.precision).unwrap_or(factor);
        scaled.multiply(factor)
    }

    // ========================================================================
    // Angles
    // ========================================================================

    /// Angle between two vectors.
    ///
    /// cosθ is rounded to `angle_rounding_dp` places (four by default) before
    /// the arccosine so that values a hair outside [-1, 1] stay in range.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the dimensions differ
    /// - `ZeroVector` if either vector is zero
    pub fn angle(&self, other: &Self, unit: AngleUnit) -> VectorResult<f64> {
        self.angle_in(other, unit, VectorConfig::global())
    }

    fn angle_in(&self, other: &Self, unit: AngleUnit, config: &VectorConfig) -> VectorResult<f64> {
        self.ensure_same_dimension(other, "angle")?;
        let (Some((_, lhs)), Some((_, rhs))) = (self.rescaled("angle")?, other.rescaled("angle")?)
        else {
            tracing::debug!("angle requested against a zero vector");
            return Err(VectorError::ZeroVector {
                operation: "measure the angle of",
            });
        };

        // cosθ does not depend on scale, so work on the rescaled vectors
        let dot = lhs.dot_product(&rhs)?;
        let denominator =
            numeric::checked_mul(lhs.magnitude_in(config)?, rhs.magnitude_in(config)?, "angle")?;
        let cos_theta = numeric::checked_div(dot, denominator, "angle")?
            .round_dp(config.angle_rounding_dp)
            .to_f64()
            .ok_or(VectorError::Overflow { operation: "angle" })?;

        let clamped = cos_theta.clamp(-1.0, 1.0);
        if clamped != cos_theta {
            tracing::trace!(cos_theta, "clamping cosine into [-1, 1]");
        }

        let radians = clamped.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    /// Whether two vectors lie on the same line.
    ///
    /// A zero vector is parallel to everything. Otherwise the vectors are
    /// parallel (or antiparallel) when sin²θ = 1 − (a·b)²/(|a|²|b|²) is
    /// within `parallel_tolerance`. Only decimal arithmetic is used,
    /// no square roots.
    pub fn is_parallel(&self, other: &Self) -> VectorResult<bool> {
        self.is_parallel_in(other, VectorConfig::global())
    }

    fn is_parallel_in(&self, other: &Self, config: &VectorConfig) -> VectorResult<bool> {
        let operation = "parallelism test";
        self.ensure_same_dimension(other, operation)?;
        let (Some((_, a)), Some((_, b))) = (self.rescaled(operation)?, other.rescaled(operation)?)
        else {
            return Ok(true);
        };

        // cos²θ = (a·b / |a|²)(a·b / |b|²) on the rescaled vectors, whose
        // squared lengths are at least one
        let dot = a.dot_product(&b)?;
        let lhs = numeric::checked_div(dot, a.squared_magnitude()?, operation)?;
        let rhs = numeric::checked_div(dot, b.squared_magnitude()?, operation)?;
        let cos_squared = numeric::checked_mul(lhs, rhs, operation)?;
        let sin_squared = numeric::checked_sub(Decimal::ONE, cos_squared, operation)?;
        Ok(sin_squared.abs() <= config.parallel_tolerance)
    }

    /// Whether two vectors meet at a right angle.
    ///
    /// A zero vector is orthogonal to everything. Otherwise the dot product,
    /// rounded to `orthogonality_dp` places (three by default), must be zero.
    pub fn is_orthogonal(&self, other: &Self) -> VectorResult<bool> {
        self.is_orthogonal_in(other, VectorConfig::global())
    }

    fn is_orthogonal_in(&self, other: &Self, config: &VectorConfig) -> VectorResult<bool> {
        self.ensure_same_dimension(other, "orthogonality test")?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        Ok(self
            .dot_product(other)?
            .round_dp(config.orthogonality_dp)
            .is_zero())
    }

    // ========================================================================
    // Projection
    // ========================================================================

    /// Component of `self` parallel to `basis`.
    ///
    /// # Errors
    /// `ZeroVector` if `basis` is zero.
    pub fn project_onto(&self, basis: &Self) -> VectorResult<Self> {
        self.ensure_same_dimension(basis, "projection")?;
        let unit = basis.normalisation()?;
        let weight = self.dot_product(&unit)?;
        unit.multiply(weight)
    }

    /// Component of `self` perpendicular to `basis`.
    pub fn perpendicular_component(&self, basis: &Self) -> VectorResult<Self> {
        let parallel = self.project_onto(basis)?;
        self.minus(&parallel)
    }

    /// Both projection components, `(parallel, perpendicular)`.
    pub fn decompose(&self, basis: &Self) -> VectorResult<(Self, Self)> {
        let parallel = self.project_onto(basis)?;
        let perpendicular = self.minus(&parallel)?;
        Ok((parallel, perpendicular))
    }

    // ========================================================================
    // 3D Geometry
    // ========================================================================

    /// Cross product of two 3-dimensional vectors.
    ///
    /// # Errors
    /// `DimensionMismatch` unless both vectors have exactly three coordinates.
    pub fn cross_product(&self, other: &Self) -> VectorResult<Self> {
        let operation = "cross product";
        for v in [self, other] {
            if v.dimension() != 3 {
                return Err(VectorError::DimensionMismatch {
                    operation,
                    expected: 3,
                    found: v.dimension(),
                });
            }
        }

        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);
        let minor = |a: Decimal, b: Decimal, c: Decimal, d: Decimal| -> VectorResult<Decimal> {
            numeric::checked_sub(
                numeric::checked_mul(a, b, operation)?,
                numeric::checked_mul(c, d, operation)?,
                operation,
            )
        };

        Ok(Self {
            coordinates: SmallVec::from_slice(&[
                minor(y1, z2, y2, z1)?,
                minor(z1, x2, x1, z2)?,
                minor(x1, y2, x2, y1)?,
            ]),
        })
    }

    /// Area of the parallelogram spanned by two 3-dimensional vectors.
    pub fn area_of_parallelogram(&self, other: &Self) -> VectorResult<Decimal> {
        self.cross_product(other)?.magnitude()
    }

    /// Area of the triangle spanned by two 3-dimensional vectors.
    pub fn area_of_triangle(&self, other: &Self) -> VectorResult<Decimal> {
        numeric::checked_div(self.area_of_parallelogram(other)?, Decimal::TWO, "triangle area")
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Index<usize> for Vector {
    type Output = Decimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Decimal>) -> Result<Self, Self::Error> {
        Self::from_decimals(coordinates)
    }
}

impl From<Vector> for Vec<Decimal> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.into_vec()
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector {
            coordinates: self.iter().map(|x| -*x).collect(),
        }
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

// Infallible Add/Sub for ergonomics (panics on mismatch - use plus/minus in production)
impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs).expect("Vector addition failed")
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs).expect("Vector subtraction failed")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

// ============================================================================
// Tests
// ============================================================================
