//! Arguments passed to a prompt function invocation

use crate::error::{FunctionError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Name/value arguments for one invocation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionArguments {
    values: HashMap<String, Value>,
}

impl FunctionArguments {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an argument, consuming and returning self
    pub fn with<S: Into<String>, V: Into<Value>>(mut self, name: S, value: V) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Set an argument in place
    pub fn set<S: Into<String>, V: Into<Value>>(&mut self, name: S, value: V) {
        self.values.insert(name.into(), value.into());
    }

    /// Get a raw argument value
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Get an argument deserialized into a concrete type
    pub fn get_typed<T>(&self, name: &str) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let value = self
            .values
            .get(name)
            .ok_or_else(|| FunctionError::MissingArgument {
                name: name.to_string(),
            })?;

        serde_json::from_value(value.clone()).map_err(|e| {
            FunctionError::InvalidArgument {
                name: name.to_string(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Check whether an argument is present
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the argument set is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over name/value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

impl From<HashMap<String, Value>> for FunctionArguments {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}
