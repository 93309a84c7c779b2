//! # Resolution & Invocation
//!
//! Runs every registered generator once, in registration order.
//!
//! ## Resolution Order
//!
//! For each declared parameter name the first source that has a handler
//! wins:
//!
//! 1. the caller's resolver
//! 2. the [helper library](crate::helpers)
//! 3. a no-op stand-in, if the name is [reserved](crate::keywords); this
//!    also records an [`UnresolvedCollaborator`] warning
//!
//! Names nobody resolves and that are not reserved are skipped: they take
//! no argument slot. Every resolved handler is then decorated with the
//! catalog dimensions registered under its parameter name.
//!
//! ## Example
//!
//! ```rust
//! use house_plan::{Generator, HousePlan, Value};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(Cell::new(0.0));
//! let sink = seen.clone();
//!
//! let mut plan = HousePlan::new();
//! plan.add(
//!     Generator::new(["stud", "length"], move |args| {
//!         // `length` is skipped, so the explicit parameter follows the stud
//!         sink.set(args.handler(0)?.depth().unwrap_or(0.0) + args.number(1)?);
//!         Ok(())
//!     })
//!     .unwrap(),
//!     vec![Value::from(90.0)],
//! );
//!
//! let report = plan.generate(|_| None).unwrap();
//! assert_eq!(report.invoked, 1);
//! assert_eq!(report.warnings.len(), 1);
//! assert_eq!(seen.get(), 92.5);
//! ```

use crate::error::PlanError;
use crate::generator::Arguments;
use crate::handler::Handler;
use crate::helpers;
use crate::keywords;
use crate::registry::HousePlan;
use std::fmt;

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Settings for a generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Emit a `tracing` warning for each unresolved reserved collaborator.
    /// Warnings are recorded in the report either way.
    pub log_unresolved: bool,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            log_unresolved: true,
        }
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// Which source supplied a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Caller,
    Helper,
    Noop,
}

/// A handler resolved for one declared parameter.
#[derive(Debug, Clone)]
pub struct ResolvedHandler {
    pub name: String,
    pub tier: Tier,
    pub handler: Handler,
}

/// A reserved collaborator that had to be replaced by a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedCollaborator {
    /// Index of the generator that declared it.
    pub generator: usize,
    pub name: String,
}

impl fmt::Display for UnresolvedCollaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "House plan needs a `{}` handler but none was supplied",
            self.name
        )
    }
}

/// Collaborators resolved for a single generator.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    /// Resolved handlers in declaration order.
    pub handlers: Vec<ResolvedHandler>,
    /// Declared names that received no argument slot.
    pub skipped: Vec<String>,
    pub warnings: Vec<UnresolvedCollaborator>,
}

/// Outcome of a completed generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Number of generators invoked.
    pub invoked: usize,
    pub warnings: Vec<UnresolvedCollaborator>,
}

// =============================================================================
// ENGINE
// =============================================================================

impl HousePlan {
    /// Invoke every generator in registration order.
    ///
    /// Each generator receives its resolved handlers followed by its
    /// explicit parameters.
    ///
    /// ## Parameters
    ///
    /// - `resolve`: caller-supplied handlers by parameter name
    ///
    /// ## Errors
    ///
    /// The first error returned by a generator, unchanged. Generators after
    /// it do not run.
    pub fn generate<F>(&self, mut resolve: F) -> Result<GenerationReport, PlanError>
    where
        F: FnMut(&str) -> Option<Handler>,
    {
        let mut report = GenerationReport::default();

        for (index, generator) in self.generators.iter().enumerate() {
            let resolution = self.resolve_collaborators(index, &mut resolve)?;
            report.warnings.extend(resolution.warnings);

            let handlers = resolution
                .handlers
                .into_iter()
                .map(|resolved| resolved.handler)
                .collect();
            let args = Arguments::new(handlers, &self.parameter_sets[index]);

            tracing::debug!(generator = index, arguments = args.len(), "invoking generator");
            generator.invoke(&args)?;
            report.invoked += 1;
        }

        Ok(report)
    }

    /// Resolve and decorate the collaborators of one generator without
    /// invoking it.
    ///
    /// ## Errors
    ///
    /// `PlanError::InvalidArgument` if `index` is out of range.
    pub fn resolve_collaborators<F>(
        &self,
        index: usize,
        resolve: &mut F,
    ) -> Result<Resolution, PlanError>
    where
        F: FnMut(&str) -> Option<Handler>,
    {
        let generator = self.generators.get(index).ok_or_else(|| {
            PlanError::invalid(format!(
                "no generator at index {} (plan has {})",
                index,
                self.generators.len()
            ))
        })?;

        let mut resolution = Resolution::default();

        for name in generator.params() {
            let (tier, handler) = if let Some(handler) = resolve(name.as_str()) {
                (Tier::Caller, handler)
            } else if let Some(handler) = helpers::lookup(name) {
                (Tier::Helper, handler)
            } else if keywords::is_reserved(name) {
                let warning = UnresolvedCollaborator {
                    generator: index,
                    name: name.clone(),
                };
                if self.config.log_unresolved {
                    tracing::warn!(generator = index, collaborator = %name, "{}", warning);
                }
                resolution.warnings.push(warning);
                (Tier::Noop, Handler::noop(name))
            } else {
                tracing::trace!(generator = index, parameter = %name, "no collaborator, skipped");
                resolution.skipped.push(name.clone());
                continue;
            };

            let handler = handler.decorated(self.catalog.get(name));
            tracing::trace!(generator = index, collaborator = %name, ?tier, "resolved collaborator");
            resolution.handlers.push(ResolvedHandler {
                name: name.clone(),
                tier,
                handler,
            });
        }

        Ok(resolution)
    }
}

#[cfg(test)]
mod tests;
