//! # Generator Registry
//!
//! Ordered storage of registered generators, their explicit parameter
//! bundles and the section-name lookup.
//!
//! ## Invariants
//!
//! - `generators` and `parameter_sets` are index-aligned and append-only
//! - every index in `indexes_by_name` points at a registered generator
//! - registering a name twice moves the name to the newer generator; the
//!   older generator stays registered and still runs
//!
//! ## Example
//!
//! ```rust
//! use house_plan::{Generator, HousePlan, Value};
//!
//! let mut plan = HousePlan::new();
//! let options = Value::record([("name", Value::from("walls")), ("height", Value::from(96.0))]);
//! plan.add(Generator::new(["stud", "options"], |_| Ok(())).unwrap(), vec![options.clone()]);
//!
//! assert_eq!(plan.get_options("walls").unwrap(), &options);
//! ```

use crate::error::PlanError;
use crate::generate::GenerateConfig;
use crate::generator::Generator;
use crate::value::Value;
use config::parts::PartCatalog;
use std::collections::BTreeMap;

static UNDEF: Value = Value::Undef;

/// A house plan: the registry of generators and everything needed to run
/// them.
#[derive(Debug)]
pub struct HousePlan {
    pub(crate) generators: Vec<Generator>,
    pub(crate) parameter_sets: Vec<Vec<Value>>,
    indexes_by_name: BTreeMap<String, usize>,
    pub(crate) catalog: PartCatalog,
    pub(crate) config: GenerateConfig,
}

impl HousePlan {
    /// Create an empty plan using the builtin part catalog.
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
            parameter_sets: Vec::new(),
            indexes_by_name: BTreeMap::new(),
            catalog: PartCatalog::builtin(),
            config: GenerateConfig::default(),
        }
    }

    /// Use a custom catalog for handler decoration.
    pub fn with_catalog(mut self, catalog: PartCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_config(mut self, config: GenerateConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    /// Register a generator with its explicit parameters.
    ///
    /// The section name is taken from the most recent parameter that is a
    /// record with a string `name` field. By convention the options record
    /// is passed first.
    ///
    /// ## Returns
    ///
    /// Index of the new generator.
    pub fn add(&mut self, generator: Generator, params: Vec<Value>) -> usize {
        let key = params.iter().rev().find_map(Value::name).map(str::to_string);
        self.push(key, generator, params)
    }

    /// Register a generator under an explicit section name, whatever its
    /// parameters contain.
    pub fn add_named(&mut self, name: &str, generator: Generator, params: Vec<Value>) -> usize {
        self.push(Some(name.to_string()), generator, params)
    }

    fn push(&mut self, key: Option<String>, generator: Generator, params: Vec<Value>) -> usize {
        let index = self.generators.len();
        self.generators.push(generator);
        self.parameter_sets.push(params);
        if let Some(key) = key {
            if let Some(previous) = self.indexes_by_name.insert(key.clone(), index) {
                tracing::debug!(section = %key, previous, index, "section name re-registered");
            }
        }
        index
    }

    /// First explicit parameter of the generator registered as `name`.
    ///
    /// Returns `Value::Undef` when that generator was registered without
    /// parameters.
    ///
    /// ## Errors
    ///
    /// `PlanError::NotFound` listing every known name.
    pub fn get_options(&self, name: &str) -> Result<&Value, PlanError> {
        let index = self.index_of(name).ok_or_else(|| PlanError::NotFound {
            name: name.to_string(),
            known: self.names().map(str::to_string).collect(),
        })?;
        Ok(self.parameter_sets[index].first().unwrap_or(&UNDEF))
    }

    /// Index currently registered under `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indexes_by_name.get(name).copied()
    }

    /// Known section names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indexes_by_name.keys().map(String::as_str)
    }

    /// Explicit parameters of the generator at `index`.
    pub fn parameters(&self, index: usize) -> Option<&[Value]> {
        self.parameter_sets.get(index).map(Vec::as_slice)
    }

    /// Declared parameter names of the generator at `index`.
    pub fn declared_params(&self, index: usize) -> Option<&[String]> {
        self.generators.get(index).map(Generator::params)
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl Default for HousePlan {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
