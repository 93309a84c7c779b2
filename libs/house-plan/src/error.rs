//! # Plan Errors
//!
//! Error types for registration, helper evaluation and generation.

use thiserror::Error;

/// Errors that can occur while building or generating a house plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Malformed generator declaration or bad helper/argument input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// `get_options` was asked for a section that was never named.
    #[error(
        "House plan doesn't seem to have defined a section called {name}. Only {}",
        .known.join(", ")
    )]
    NotFound {
        /// The requested name.
        name: String,
        /// Every name registered at the time of the lookup.
        known: Vec<String>,
    },

    /// Failure raised by caller code inside a generator or handler.
    #[error("Generator failed: {0}")]
    Generator(String),
}

impl PlanError {
    /// Shorthand for [`PlanError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        PlanError::InvalidArgument(message.into())
    }
}

// =============================================================================
// TESTS
// =============================================================================
