// ============================================================================
// Domain Models Module
// The vector value type and the settings it is computed under
// ============================================================================

pub mod config;
pub mod vector;

pub use config::{VectorConfig, MAX_PRECISION};
pub use vector::{AngleUnit, Vector};
