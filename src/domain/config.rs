// ============================================================================
// Vector Configuration
// Process-wide numeric settings, installed once at startup
// ============================================================================

use crate::numeric::{VectorError, VectorResult};
use rust_decimal::Decimal;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of significant digits a `rust_decimal::Decimal` can carry.
pub const MAX_PRECISION: u32 = 28;

/// Largest number of decimal places a `rust_decimal::Decimal` can carry.
const MAX_SCALE: u32 = 28;

static GLOBAL: OnceLock<VectorConfig> = OnceLock::new();

/// Numeric settings shared by every vector operation in the process.
///
/// Install a configuration once, before the first vector operation, with
/// [`VectorConfig::install`]. If nothing is installed, the first read of
/// [`VectorConfig::global`] fixes the defaults for the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "UncheckedVectorConfig")
)]
pub struct VectorConfig {
    /// Significant digits kept on inexact results (square roots, quotients)
    pub precision: u32,

    /// Decimal places cosθ is rounded to before taking the arccosine
    pub angle_rounding_dp: u32,

    /// Decimal places the dot product is rounded to when testing orthogonality
    pub orthogonality_dp: u32,

    /// Upper bound on sin²θ for two vectors to count as parallel
    pub parallel_tolerance: Decimal,
}

/// Wire form of [`VectorConfig`], validated on the way in.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedVectorConfig {
    precision: u32,
    angle_rounding_dp: u32,
    orthogonality_dp: u32,
    parallel_tolerance: Decimal,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedVectorConfig> for VectorConfig {
    type Error = String;

    fn try_from(raw: UncheckedVectorConfig) -> Result<Self, Self::Error> {
        let config = VectorConfig {
            precision: raw.precision,
            angle_rounding_dp: raw.angle_rounding_dp,
            orthogonality_dp: raw.orthogonality_dp,
            parallel_tolerance: raw.parallel_tolerance,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            precision: MAX_PRECISION,
            angle_rounding_dp: 4,
            orthogonality_dp: 3,
            parallel_tolerance: Decimal::new(1, 10),
        }
    }
}

impl VectorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set significant digits for inexact results
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set rounding applied to cosθ
    pub fn with_angle_rounding_dp(mut self, dp: u32) -> Self {
        self.angle_rounding_dp = dp;
        self
    }

    /// Builder method: Set rounding applied to the dot product in orthogonality tests
    pub fn with_orthogonality_dp(mut self, dp: u32) -> Self {
        self.orthogonality_dp = dp;
        self
    }

    /// Builder method: Set the parallelism tolerance
    pub fn with_parallel_tolerance(mut self, tolerance: Decimal) -> Self {
        self.parallel_tolerance = tolerance;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(format!(
                "Precision must be between 1 and {} significant digits",
                MAX_PRECISION
            ));
        }

        if self.angle_rounding_dp > MAX_SCALE {
            return Err(format!(
                "Angle rounding cannot exceed {} decimal places",
                MAX_SCALE
            ));
        }

        if self.orthogonality_dp > MAX_SCALE {
            return Err(format!(
                "Orthogonality rounding cannot exceed {} decimal places",
                MAX_SCALE
            ));
        }

        if self.parallel_tolerance < Decimal::ZERO || self.parallel_tolerance >= Decimal::ONE {
            return Err("Parallel tolerance must be in [0, 1)".to_string());
        }

        Ok(())
    }

    /// Install this configuration for the whole process.
    ///
    /// # Errors
    /// Returns a `Config` error if the configuration is invalid, or if a
    /// configuration was already installed or already read by a vector
    /// operation.
    pub fn install(self) -> VectorResult<()> {
        self.validate().map_err(VectorError::Config)?;

        let precision = self.precision;
        GLOBAL.set(self).map_err(|_| {
            VectorError::Config("a configuration is already in effect".to_string())
        })?;

        tracing::debug!(precision, "vector configuration installed");
        Ok(())
    }

    /// The configuration in effect for this process.
    pub fn global() -> &'static VectorConfig {
        GLOBAL.get_or_init(|| {
            tracing::debug!("no vector configuration installed, using defaults");
            VectorConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VectorConfig::default();

        assert_eq!(config.precision, 28);
        assert_eq!(config.angle_rounding_dp, 4);
        assert_eq!(config.orthogonality_dp, 3);
        assert_eq!(config.parallel_tolerance, Decimal::new(1, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = VectorConfig::new()
            .with_precision(12)
            .with_angle_rounding_dp(6)
            .with_orthogonality_dp(2)
            .with_parallel_tolerance(Decimal::new(1, 6));

        assert_eq!(config.precision, 12);
        assert_eq!(config.angle_rounding_dp, 6);
        assert_eq!(config.orthogonality_dp, 2);
        assert_eq!(config.parallel_tolerance, Decimal::new(1, 6));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(VectorConfig::new().with_precision(0).validate().is_err());
        assert!(VectorConfig::new().with_precision(29).validate().is_err());
        assert!(VectorConfig::new()
            .with_angle_rounding_dp(40)
            .validate()
            .is_err());
        assert!(VectorConfig::new()
            .with_orthogonality_dp(29)
            .validate()
            .is_err());
        assert!(VectorConfig::new()
            .with_parallel_tolerance(Decimal::NEGATIVE_ONE)
            .validate()
            .is_err());
        assert!(VectorConfig::new()
            .with_parallel_tolerance(Decimal::ONE)
            .validate()
            .is_err());
    }

    #[test]
    fn test_invalid_config_is_not_installed() {
        let result = VectorConfig::new().with_precision(0).install();
        assert!(matches!(result, Err(VectorError::Config(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let config = VectorConfig::new().with_precision(12);
        let json = serde_json::to_string(&config).unwrap();
        let back: VectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);

        let invalid = json.replace("\"precision\":12", "\"precision\":0");
        assert_ne!(invalid, json);
        let err = serde_json::from_str::<VectorConfig>(&invalid).unwrap_err();
        assert!(err.to_string().contains("Precision must be between"));
    }

    #[test]
    fn test_global_is_stable() {
        let first = VectorConfig::global() as *const VectorConfig;
        let second = VectorConfig::global() as *const VectorConfig;
        assert_eq!(first, second);
    }
}
