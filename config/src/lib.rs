//! # Config Crate
//!
//! Centralized configuration constants for house plan generation.
//! Clearances, tolerances and the catalog of physical part dimensions
//! live here so the generator crates never carry literal numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{JOIN_GAP_FULL_DEPTH, JOIN_GAP_PARTIAL};
//! use config::parts;
//!
//! // A full-depth join leaves twice the clearance of a partial one
//! assert_eq!(JOIN_GAP_FULL_DEPTH, 2.0 * JOIN_GAP_PARTIAL);
//!
//! // Studs carry a width and a depth
//! let stud = parts::lookup("stud").unwrap();
//! assert_eq!(stud.width, Some(1.25));
//! assert_eq!(stud.depth, Some(2.5));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Read-Only**: The builtin catalog is immutable process-wide data
//! - **Imperial Units**: Dimensions are expressed in inches

pub mod constants;
pub mod parts;
