use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An explicit parameter value bundled with a generator at registration.
///
/// Options records are `Record`s; the string `name` field of a record is
/// what the registry uses as a section name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Undef,
    Boolean(bool),
    Number(f64),
    String(String),
    Vector(Vec<Value>),
    Record(BTreeMap<String, Value>),
}

impl Value {
    /// Build a record from field/value pairs.
    ///
    /// ```rust
    /// use house_plan::Value;
    ///
    /// let options = Value::record([("height", Value::from(96.0))]);
    /// assert_eq!(options.get("height"), Some(&Value::Number(96.0)));
    /// ```
    pub fn record<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_undef(&self) -> bool {
        matches!(self, Value::Undef)
    }

    /// The number held by a `Number`; no coercion from other variants.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Field of a record. `None` for missing fields and non-records.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_record().and_then(|fields| fields.get(field))
    }

    /// Numeric field of a record.
    pub fn number_field(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_number)
    }

    /// The non-empty string `name` field of a record, if it has one.
    pub fn name(&self) -> Option<&str> {
        self.get("name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Short type label used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Undef => "undef",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Vector(_) => "vector",
            Value::Record(_) => "record",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::Vector(v)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Value::Record(fields)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undef => write!(f, "undef"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Vector(v) => {
                write!(f, "[")?;
                for (i, item) in v.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Record(fields) => {
                write!(f, "{{")?;
                for (i, (key, item)) in fields.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}: {}", key, item)?;
                }
                write!(f, "}}")
            }
        }
    }
}
