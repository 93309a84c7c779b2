//! # Configuration Constants
//!
//! Centralized constants for house plan generation.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Clearances**: Gaps left where panels join neighbouring sections

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// CLEARANCE CONSTANTS
// =============================================================================

/// Clearance left on a side that joins a full-depth neighbour (inches).
///
/// # Example
///
/// ```rust
/// use config::constants::JOIN_GAP_FULL_DEPTH;
/// assert_eq!(JOIN_GAP_FULL_DEPTH, 1.5);
/// ```
pub const JOIN_GAP_FULL_DEPTH: f64 = 1.5;

/// Clearance left on a side that joins any other neighbour (inches).
///
/// # Example
///
/// ```rust
/// use config::constants::JOIN_GAP_PARTIAL;
/// assert_eq!(JOIN_GAP_PARTIAL, 0.75);
/// ```
pub const JOIN_GAP_PARTIAL: f64 = 0.75;

/// Clearance on a side with no join.
pub const JOIN_GAP_NONE: f64 = 0.0;

/// Suffix marking a join token as full depth, e.g. `left-full`.
pub const FULL_DEPTH_SUFFIX: &str = "-full";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when a part is registered without a name.
    EmptyPartName,
    /// Raised when a dimension is negative, zero or not finite.
    InvalidDimension {
        /// Part the dimension belongs to.
        part: String,
        /// Field name, e.g. `WIDTH`.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyPartName => write!(f, "part name must not be empty"),
            ConfigError::InvalidDimension { part, field, value } => {
                write!(f, "{part}.{field} must be a positive finite number: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
