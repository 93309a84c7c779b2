//! # Part Dimension Catalog
//!
//! Physical dimensions of the stock parts a house plan is built from.
//! Every entry carries zero or more of `WIDTH`, `DEPTH`, `HEIGHT` and
//! `THICKNESS`, in inches.
//!
//! ## Example
//!
//! ```rust
//! use config::parts::{self, Dimension};
//!
//! let door = parts::lookup("door").unwrap();
//! assert_eq!(door.get(Dimension::Height), Some(80.0));
//! assert_eq!(door.get(Dimension::Depth), None);
//! ```

use crate::constants::ConfigError;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// DIMENSIONS
// =============================================================================

/// One of the four dimension constants a part can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    Width,
    Depth,
    Height,
    Thickness,
}

impl Dimension {
    /// All dimensions, in the order they are applied during decoration.
    pub const ALL: [Dimension; 4] = [
        Dimension::Depth,
        Dimension::Width,
        Dimension::Height,
        Dimension::Thickness,
    ];

    /// Upper-case constant name (`WIDTH`, `DEPTH`, ...).
    pub fn constant_name(self) -> &'static str {
        match self {
            Dimension::Width => "WIDTH",
            Dimension::Depth => "DEPTH",
            Dimension::Height => "HEIGHT",
            Dimension::Thickness => "THICKNESS",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant_name())
    }
}

/// Dimension constants attached to a part or a handler.
///
/// Missing fields are `None`; a field once set is never overwritten by
/// [`Dimensions::fill_missing`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub thickness: Option<f64>,
}

impl Dimensions {
    /// Dimensions with every field unset.
    pub const NONE: Dimensions = Dimensions {
        width: None,
        depth: None,
        height: None,
        thickness: None,
    };

    pub const fn with_width(mut self, value: f64) -> Self {
        self.width = Some(value);
        self
    }

    pub const fn with_depth(mut self, value: f64) -> Self {
        self.depth = Some(value);
        self
    }

    pub const fn with_height(mut self, value: f64) -> Self {
        self.height = Some(value);
        self
    }

    pub const fn with_thickness(mut self, value: f64) -> Self {
        self.thickness = Some(value);
        self
    }

    /// Read a single dimension.
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Depth => self.depth,
            Dimension::Height => self.height,
            Dimension::Thickness => self.thickness,
        }
    }

    fn slot_mut(&mut self, dimension: Dimension) -> &mut Option<f64> {
        match dimension {
            Dimension::Width => &mut self.width,
            Dimension::Depth => &mut self.depth,
            Dimension::Height => &mut self.height,
            Dimension::Thickness => &mut self.thickness,
        }
    }

    /// Returns true when no dimension is set.
    pub fn is_empty(&self) -> bool {
        Dimension::ALL.iter().all(|d| self.get(*d).is_none())
    }

    /// Copy every field of `source` that is unset on `self`.
    ///
    /// Idempotent: filling twice from the same source changes nothing the
    /// second time.
    ///
    /// ```rust
    /// use config::parts::Dimensions;
    ///
    /// let mut own = Dimensions::NONE.with_width(2.0);
    /// own.fill_missing(&Dimensions::NONE.with_width(1.25).with_depth(2.5));
    /// assert_eq!(own.width, Some(2.0));
    /// assert_eq!(own.depth, Some(2.5));
    /// ```
    pub fn fill_missing(&mut self, source: &Dimensions) {
        for dimension in Dimension::ALL {
            let slot = self.slot_mut(dimension);
            if slot.is_none() {
                *slot = source.get(dimension);
            }
        }
    }

    fn validate(&self, part: &str) -> Result<(), ConfigError> {
        for dimension in Dimension::ALL {
            if let Some(value) = self.get(dimension) {
                if !value.is_finite() || value <= 0.0 {
                    return Err(ConfigError::InvalidDimension {
                        part: part.to_string(),
                        field: dimension.constant_name(),
                        value,
                    });
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// BUILTIN CATALOG
// =============================================================================

/// Builtin parts, keyed by the collaborator name that uses them.
pub const BUILTIN_PARTS: &[(&str, Dimensions)] = &[
    ("stud", Dimensions::NONE.with_width(1.25).with_depth(2.5)),
    ("plywood", Dimensions::NONE.with_thickness(3.0 / 8.0)),
    ("trim", Dimensions::NONE.with_thickness(0.75)),
    (
        "door",
        Dimensions::NONE
            .with_width(32.0)
            .with_thickness(1.5)
            .with_height(80.0),
    ),
    ("batten", Dimensions::NONE.with_width(1.5)),
    // 8mm polycarbonate
    ("twinWall", Dimensions::NONE.with_thickness(0.314961)),
];

/// Look up a builtin part by exact name.
///
/// ```rust
/// use config::parts::lookup;
///
/// assert_eq!(lookup("plywood").unwrap().thickness, Some(0.375));
/// assert!(lookup("section").is_none());
/// ```
pub fn lookup(name: &str) -> Option<Dimensions> {
    BUILTIN_PARTS
        .iter()
        .find(|(part, _)| *part == name)
        .map(|(_, dims)| *dims)
}

/// A dimension catalog that can be extended beyond the builtin parts.
///
/// ```rust
/// use config::parts::{Dimensions, PartCatalog};
///
/// let mut catalog = PartCatalog::builtin();
/// catalog.insert("joist", Dimensions::NONE.with_depth(9.25)).unwrap();
/// assert_eq!(catalog.get("joist").unwrap().depth, Some(9.25));
/// assert_eq!(catalog.get("stud").unwrap().width, Some(1.25));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartCatalog {
    entries: BTreeMap<String, Dimensions>,
}

impl PartCatalog {
    /// Catalog with no parts.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Catalog pre-populated with [`BUILTIN_PARTS`].
    pub fn builtin() -> Self {
        let entries = BUILTIN_PARTS
            .iter()
            .map(|(name, dims)| (name.to_string(), *dims))
            .collect();
        Self { entries }
    }

    /// Add or replace a part.
    ///
    /// ## Errors
    ///
    /// - `ConfigError::EmptyPartName` for an empty name
    /// - `ConfigError::InvalidDimension` for non-positive or non-finite values
    pub fn insert(&mut self, name: &str, dimensions: Dimensions) -> Result<(), ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::EmptyPartName);
        }
        dimensions.validate(name)?;
        self.entries.insert(name.to_string(), dimensions);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Dimensions> {
        self.entries.get(name)
    }

    /// Part names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
