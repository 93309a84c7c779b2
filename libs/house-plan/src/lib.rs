//! # House Plan
//!
//! Declarative registry for house-plan construction steps.
//!
//! ## Architecture
//!
//! ```text
//! add(generator, params) → HousePlan → generate(resolve)
//!                                        ├─ caller resolver
//!                                        ├─ helper library
//!                                        └─ reserved no-op + warning
//!                                      → decorate (config::parts) → invoke
//! ```
//!
//! Generators declare their parameter names up front. During a generation
//! pass each name is resolved to a collaborator [`Handler`]; the generator
//! then receives those handlers followed by the explicit parameters it was
//! registered with.
//!
//! ## Example
//!
//! ```rust
//! use house_plan::{Generator, Handler, HousePlan, Value};
//!
//! let mut plan = HousePlan::new();
//! plan.add(
//!     Generator::new(["section", "stud", "options"], |args| {
//!         let section = args.handler(0)?;
//!         let stud = args.handler(1)?;
//!         let options = args.value(2)?;
//!         section.call(&[Value::from(stud.depth().unwrap_or(0.0)), options.clone()])?;
//!         Ok(())
//!     })
//!     .unwrap(),
//!     vec![Value::record([("name", Value::from("walls")), ("height", Value::from(96.0))])],
//! );
//!
//! let section = Handler::new("section", |_: &[Value]| Ok(Value::Undef));
//! let report = plan
//!     .generate(|name| (name == "section").then(|| section.clone()))
//!     .unwrap();
//!
//! assert_eq!(report.invoked, 1);
//! assert_eq!(report.warnings.len(), 1); // nobody supplied `stud`
//! assert_eq!(plan.get_options("walls").unwrap().number_field("height"), Some(96.0));
//! ```

pub mod error;
pub mod generate;
pub mod generator;
pub mod handler;
pub mod helpers;
pub mod keywords;
pub mod registry;
pub mod resolve;
pub mod value;

// Re-export public API
pub use config::parts::{Dimension, Dimensions, PartCatalog};
pub use error::PlanError;
pub use generate::{
    GenerateConfig, GenerationReport, Resolution, ResolvedHandler, Tier, UnresolvedCollaborator,
};
pub use generator::{Argument, Arguments, Generator};
pub use handler::{Handler, HandlerKind};
pub use helpers::vertical_slice;
pub use registry::HousePlan;
pub use resolve::HandlerMap;
pub use value::Value;
