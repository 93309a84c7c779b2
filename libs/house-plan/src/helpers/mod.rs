//! # Helper Library
//!
//! Pure geometry helpers available to every generator as collaborators.
//!
//! Each helper exists twice: as a typed Rust function and as a handler
//! adapter over [`Value`] arguments, registered under its camelCase
//! collaborator name (`verticalSlice`, `getJoinGaps`, ...).
//!
//! ## Slopes
//!
//! A slope is rise over run. Cutting a sloped panel of normal thickness
//! `t` with a vertical plane exposes a face of length `t / cos(atan(slope))`.
//!
//! ```rust
//! use house_plan::helpers::{slice_to_normal, vertical_slice};
//!
//! let slice = vertical_slice(0.75, 6.0 / 12.0);
//! assert!((slice_to_normal(slice, 6.0 / 12.0) - 0.75).abs() < 1e-12);
//! ```

use crate::error::PlanError;
use crate::handler::Handler;
use crate::value::Value;
use config::constants::{FULL_DEPTH_SUFFIX, JOIN_GAP_FULL_DEPTH, JOIN_GAP_NONE, JOIN_GAP_PARTIAL};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::f64::consts::PI;

// =============================================================================
// SLOPE CONVERSIONS
// =============================================================================

/// Length of a vertical cut through a panel of the given normal thickness.
pub fn vertical_slice(thickness: f64, slope: f64) -> f64 {
    thickness / slope_to_radians(slope).cos()
}

/// Normal thickness of a panel whose vertical cut has the given length.
pub fn slice_to_normal(slice: f64, slope: f64) -> f64 {
    slice * slope_to_radians(slope).cos()
}

/// Angle of a slope in radians.
pub fn slope_to_radians(slope: f64) -> f64 {
    slope.atan()
}

/// Angle of a slope in degrees.
pub fn slope_to_degrees(slope: f64) -> f64 {
    180.0 * slope_to_radians(slope) / PI
}

// =============================================================================
// SIDES
// =============================================================================

/// One side of a rectangular section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Top,
        Direction::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }
}

/// A value per side of a section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sides {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Sides {
    pub fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
        }
    }

    fn from_fn(mut f: impl FnMut(Direction) -> f64) -> Self {
        Self {
            left: f(Direction::Left),
            right: f(Direction::Right),
            top: f(Direction::Top),
            bottom: f(Direction::Bottom),
        }
    }
}

impl From<Sides> for Value {
    fn from(sides: Sides) -> Self {
        Value::record(
            Direction::ALL.map(|direction| (direction.as_str(), Value::from(sides.get(direction)))),
        )
    }
}

// =============================================================================
// JOINS AND OVERHANGS
// =============================================================================

/// The set of join tokens declared on a section, such as `left` or
/// `top-full`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Joins {
    tokens: BTreeSet<String>,
}

impl Joins {
    /// Parse tokens separated by whitespace or commas.
    ///
    /// ```rust
    /// use house_plan::helpers::Joins;
    ///
    /// let joins = Joins::parse("left-full, top");
    /// assert!(joins.contains("left-full"));
    /// assert!(joins.contains("top"));
    /// assert!(!joins.contains("left"));
    /// ```
    pub fn parse(text: &str) -> Self {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect()
    }

    /// Read joins from a string or a vector of strings.
    pub fn from_value(value: &Value) -> Result<Self, PlanError> {
        match value {
            Value::String(text) => Ok(Self::parse(text)),
            Value::Vector(items) => items
                .iter()
                .map(|item| {
                    item.as_str().ok_or_else(|| {
                        PlanError::invalid(format!(
                            "joins must contain strings, found a {}",
                            item.type_name()
                        ))
                    })
                })
                .collect(),
            other => Err(PlanError::invalid(format!(
                "joins must be a string or a vector of strings, found a {}",
                other.type_name()
            ))),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Joins {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Clearance to leave on each side given the section's joins.
///
/// A `<side>-full` join leaves the full-depth gap, a plain `<side>` join
/// the partial gap, no join none at all.
pub fn get_join_gaps(joins: &Joins) -> Sides {
    Sides::from_fn(|direction| {
        let side = direction.as_str();
        if joins.contains(&format!("{side}{FULL_DEPTH_SUFFIX}")) {
            JOIN_GAP_FULL_DEPTH
        } else if joins.contains(side) {
            JOIN_GAP_PARTIAL
        } else {
            JOIN_GAP_NONE
        }
    })
}

/// Per-side overhangs read from the `leftOverhang`, `rightOverhang`,
/// `topOverhang` and `bottomOverhang` fields of an options record.
/// Missing or non-numeric fields count as zero.
pub fn get_overhangs(options: &Value) -> Sides {
    Sides::from_fn(|direction| {
        options
            .number_field(&format!("{}Overhang", direction.as_str()))
            .unwrap_or(0.0)
    })
}

// =============================================================================
// HANDLER ADAPTERS
// =============================================================================

/// Signature of a helper adapter.
pub type HelperFn = fn(&[Value]) -> Result<Value, PlanError>;

/// Helper adapters by collaborator name.
pub const HELPERS: &[(&str, HelperFn)] = &[
    ("verticalSlice", vertical_slice_handler),
    ("sliceToNormal", slice_to_normal_handler),
    ("slopeToDegrees", slope_to_degrees_handler),
    ("slopeToRadians", slope_to_radians_handler),
    ("getJoinGaps", get_join_gaps_handler),
    ("getOverhangs", get_overhangs_handler),
];

/// Helper handler registered under exactly `name`.
pub fn lookup(name: &str) -> Option<Handler> {
    HELPERS
        .iter()
        .find(|(helper, _)| *helper == name)
        .map(|(helper, func)| Handler::helper(helper, *func))
}

pub fn is_helper(name: &str) -> bool {
    HELPERS.iter().any(|(helper, _)| *helper == name)
}

/// Helper names in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    HELPERS.iter().map(|(helper, _)| *helper)
}

fn number_arg(helper: &str, args: &[Value], index: usize, what: &str) -> Result<f64, PlanError> {
    match args.get(index) {
        None | Some(Value::Undef) => Err(PlanError::invalid(format!(
            "{helper} needs a {what} but none was provided"
        ))),
        Some(value) => value.as_number().ok_or_else(|| {
            PlanError::invalid(format!(
                "{helper} expects {what} to be a number, got a {}",
                value.type_name()
            ))
        }),
    }
}

fn thickness_and_slope(helper: &str, args: &[Value], first: &str) -> Result<(f64, f64), PlanError> {
    let value = number_arg(helper, args, 0, first)?;
    if args.get(1).map_or(true, Value::is_undef) {
        return Err(PlanError::invalid(format!(
            "{helper} takes a {first} and a slope. You only provided one"
        )));
    }
    let slope = number_arg(helper, args, 1, "slope")?;
    Ok((value, slope))
}

fn options_arg<'a>(helper: &str, args: &'a [Value]) -> Result<&'a Value, PlanError> {
    match args.first() {
        Some(options @ Value::Record(_)) => Ok(options),
        Some(other) => Err(PlanError::invalid(format!(
            "{helper} expects an options record, got a {}",
            other.type_name()
        ))),
        None => Err(PlanError::invalid(format!("{helper} needs an options record"))),
    }
}

fn vertical_slice_handler(args: &[Value]) -> Result<Value, PlanError> {
    let (thickness, slope) = thickness_and_slope("verticalSlice", args, "thickness")?;
    Ok(Value::from(vertical_slice(thickness, slope)))
}

fn slice_to_normal_handler(args: &[Value]) -> Result<Value, PlanError> {
    let (slice, slope) = thickness_and_slope("sliceToNormal", args, "slice")?;
    Ok(Value::from(slice_to_normal(slice, slope)))
}

fn slope_to_degrees_handler(args: &[Value]) -> Result<Value, PlanError> {
    let slope = number_arg("slopeToDegrees", args, 0, "slope")?;
    Ok(Value::from(slope_to_degrees(slope)))
}

fn slope_to_radians_handler(args: &[Value]) -> Result<Value, PlanError> {
    let slope = number_arg("slopeToRadians", args, 0, "slope")?;
    Ok(Value::from(slope_to_radians(slope)))
}

fn get_join_gaps_handler(args: &[Value]) -> Result<Value, PlanError> {
    let options = options_arg("getJoinGaps", args)?;
    let joins = options
        .get("joins")
        .ok_or_else(|| PlanError::invalid("getJoinGaps needs options with a joins field"))?;
    Ok(get_join_gaps(&Joins::from_value(joins)?).into())
}

fn get_overhangs_handler(args: &[Value]) -> Result<Value, PlanError> {
    let options = options_arg("getOverhangs", args)?;
    Ok(get_overhangs(options).into())
}
