//! # Collaborator Resolvers
//!
//! The caller's side of collaborator resolution. A resolver is any
//! `FnMut(&str) -> Option<Handler>`: it maps a parameter name to a handler,
//! or `None` when it has nothing for it. It is called once per declared
//! parameter name, in registration then declaration order.
//!
//! [`HandlerMap`] covers the common case of a fixed table.

use crate::handler::Handler;
use std::collections::HashMap;

/// A fixed name → handler table.
///
/// ```rust
/// use house_plan::{Handler, HandlerMap, Value};
///
/// let mut handlers = HandlerMap::new();
/// handlers.insert("section", Handler::new("section", |_: &[Value]| Ok(Value::Undef)));
///
/// let mut resolve = handlers.resolver();
/// assert!(resolve("section").is_some());
/// assert!(resolve("stud").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerMap {
    handlers: HashMap<String, Handler>,
}

impl HandlerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the handler for `name`.
    pub fn insert(&mut self, name: &str, handler: Handler) -> Option<Handler> {
        self.handlers.insert(name.to_string(), handler)
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// A resolver that borrows the table instead of consuming it.
    pub fn resolver(&self) -> impl FnMut(&str) -> Option<Handler> + '_ {
        move |name| self.handlers.get(name).cloned()
    }
}

impl<S: Into<String>> FromIterator<(S, Handler)> for HandlerMap {
    fn from_iter<I: IntoIterator<Item = (S, Handler)>>(iter: I) -> Self {
        Self {
            handlers: iter.into_iter().map(|(name, h)| (name.into(), h)).collect(),
        }
    }
}
