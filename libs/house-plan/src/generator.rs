//! # Generators
//!
//! A generator is one step of house-plan construction. It is declared
//! together with the ordered names of its parameters, so the engine can
//! resolve collaborators by name without ever calling it.
//!
//! ## Example
//!
//! ```rust
//! use house_plan::Generator;
//!
//! let walls = Generator::new(["stud", "plywood", "options"], |args| {
//!     let stud = args.handler(0)?;
//!     assert_eq!(stud.width(), Some(1.25));
//!     Ok(())
//! })
//! .unwrap();
//!
//! assert_eq!(walls.params(), ["stud", "plywood", "options"]);
//! ```

use crate::error::PlanError;
use crate::handler::Handler;
use crate::value::Value;
use std::fmt;

/// Signature shared by every generator body.
pub type GeneratorFn = dyn Fn(&Arguments) -> Result<(), PlanError>;

/// A generator body paired with its declared parameter names.
pub struct Generator {
    params: Vec<String>,
    body: Box<GeneratorFn>,
}

impl Generator {
    /// Declare a generator.
    ///
    /// ## Parameters
    ///
    /// - `params`: parameter names in declaration order
    /// - `body`: called with resolved handlers followed by the explicit
    ///   parameters bundled at registration
    ///
    /// ## Errors
    ///
    /// `PlanError::InvalidArgument` if a name is not an identifier.
    pub fn new<I, S, F>(params: I, body: F) -> Result<Self, PlanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Arguments) -> Result<(), PlanError> + 'static,
    {
        let params: Vec<String> = params.into_iter().map(Into::into).collect();
        for name in &params {
            if !is_identifier(name) {
                return Err(PlanError::invalid(format!(
                    "generator parameter {:?} is not an identifier",
                    name
                )));
            }
        }
        Ok(Self {
            params,
            body: Box::new(body),
        })
    }

    /// Declared parameter names, in declaration order.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub(crate) fn invoke(&self, args: &Arguments) -> Result<(), PlanError> {
        (self.body)(args)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// One positional argument passed to a generator.
#[derive(Debug, Clone)]
pub enum Argument {
    Handler(Handler),
    Value(Value),
}

/// Positional arguments for one generator call: resolved handlers first,
/// then the explicit parameter bundle.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    items: Vec<Argument>,
}

impl Arguments {
    pub(crate) fn new(handlers: Vec<Handler>, params: &[Value]) -> Self {
        let mut items = Vec::with_capacity(handlers.len() + params.len());
        items.extend(handlers.into_iter().map(Argument::Handler));
        items.extend(params.iter().cloned().map(Argument::Value));
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Argument> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Argument> {
        self.items.iter()
    }

    /// Handler at `index`.
    ///
    /// ## Errors
    ///
    /// `PlanError::InvalidArgument` if the slot is missing or holds a value.
    pub fn handler(&self, index: usize) -> Result<&Handler, PlanError> {
        match self.items.get(index) {
            Some(Argument::Handler(handler)) => Ok(handler),
            Some(Argument::Value(value)) => Err(PlanError::invalid(format!(
                "argument {} is a {}, expected a handler",
                index,
                value.type_name()
            ))),
            None => Err(self.missing(index)),
        }
    }

    /// Value at `index`.
    ///
    /// ## Errors
    ///
    /// `PlanError::InvalidArgument` if the slot is missing or holds a handler.
    pub fn value(&self, index: usize) -> Result<&Value, PlanError> {
        match self.items.get(index) {
            Some(Argument::Value(value)) => Ok(value),
            Some(Argument::Handler(handler)) => Err(PlanError::invalid(format!(
                "argument {} is the {} handler, expected a value",
                index,
                handler.label()
            ))),
            None => Err(self.missing(index)),
        }
    }

    /// Number at `index`.
    pub fn number(&self, index: usize) -> Result<f64, PlanError> {
        let value = self.value(index)?;
        value.as_number().ok_or_else(|| {
            PlanError::invalid(format!(
                "argument {} is a {}, expected a number",
                index,
                value.type_name()
            ))
        })
    }

    /// Number of leading handler arguments.
    pub fn handler_count(&self) -> usize {
        self.items
            .iter()
            .take_while(|arg| matches!(arg, Argument::Handler(_)))
            .count()
    }

    fn missing(&self, index: usize) -> PlanError {
        PlanError::invalid(format!(
            "argument {} requested but only {} supplied",
            index,
            self.items.len()
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================
