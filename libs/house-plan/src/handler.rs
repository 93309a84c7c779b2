//! # Collaborator Handlers
//!
//! A [`Handler`] is a callable collaborator passed into a generator,
//! paired with the part dimensions that apply to it.
//!
//! ## Example
//!
//! ```rust
//! use house_plan::{Dimensions, Handler, Value};
//!
//! let stud = Handler::new("stud", |args: &[Value]| Ok(args.first().cloned().unwrap_or_default()))
//!     .decorated(Some(&Dimensions::NONE.with_width(1.25)));
//!
//! assert_eq!(stud.width(), Some(1.25));
//! assert_eq!(stud.call(&[Value::from(8.0)]).unwrap(), Value::Number(8.0));
//! ```

use crate::error::PlanError;
use crate::value::Value;
use config::parts::{Dimension, Dimensions};
use std::fmt;
use std::rc::Rc;

/// Signature shared by every handler body.
pub type HandlerFn = dyn Fn(&[Value]) -> Result<Value, PlanError>;

/// Where a handler body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerKind {
    /// Supplied by the caller.
    Custom,
    /// Drawn from the helper library.
    Helper,
    /// Stand-in that accepts anything and does nothing.
    Noop,
}

/// A callable collaborator with optional dimension metadata.
///
/// Cloning is cheap: the body is shared, the dimensions are copied.
#[derive(Clone)]
pub struct Handler {
    label: Rc<str>,
    kind: HandlerKind,
    func: Rc<HandlerFn>,
    dimensions: Dimensions,
}

impl Handler {
    /// Wrap a caller-supplied closure.
    pub fn new<F>(label: &str, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, PlanError> + 'static,
    {
        Self::with_kind(label, HandlerKind::Custom, Rc::new(func))
    }

    pub(crate) fn helper(label: &str, func: fn(&[Value]) -> Result<Value, PlanError>) -> Self {
        Self::with_kind(label, HandlerKind::Helper, Rc::new(func))
    }

    /// A handler that ignores its arguments and returns `Undef`.
    pub fn noop(label: &str) -> Self {
        Self::with_kind(label, HandlerKind::Noop, Rc::new(|_: &[Value]| Ok::<_, PlanError>(Value::Undef)))
    }

    fn with_kind(label: &str, kind: HandlerKind, func: Rc<HandlerFn>) -> Self {
        Self {
            label: Rc::from(label),
            kind,
            func,
            dimensions: Dimensions::NONE,
        }
    }

    /// Invoke the handler body.
    pub fn call(&self, args: &[Value]) -> Result<Value, PlanError> {
        (self.func)(args)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn kind(&self) -> HandlerKind {
        self.kind
    }

    pub fn is_noop(&self) -> bool {
        self.kind == HandlerKind::Noop
    }

    /// True when both handlers share the same body.
    pub fn same_body(&self, other: &Handler) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn dimension(&self, dimension: Dimension) -> Option<f64> {
        self.dimensions.get(dimension)
    }

    pub fn width(&self) -> Option<f64> {
        self.dimensions.width
    }

    pub fn depth(&self) -> Option<f64> {
        self.dimensions.depth
    }

    pub fn height(&self) -> Option<f64> {
        self.dimensions.height
    }

    pub fn thickness(&self) -> Option<f64> {
        self.dimensions.thickness
    }

    /// Replace the handler's own dimensions.
    ///
    /// Values set here take precedence over the catalog during decoration.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Fill every dimension the handler does not carry yet from a catalog
    /// entry. Existing values are kept, so decorating twice with the same
    /// entry yields the same handler.
    pub fn decorated(mut self, entry: Option<&Dimensions>) -> Self {
        if let Some(entry) = entry {
            self.dimensions.fill_missing(entry);
        }
        self
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("dimensions", &self.dimensions)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
