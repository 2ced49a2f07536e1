//! Per-field generator parameters.

use serde::{Deserialize, Serialize};
use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;

/// Error reported by a generator invocation.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A required parameter was not supplied
    #[error("Missing parameter: {0}")]
    MissingParam(String),

    /// A parameter was supplied with an unusable value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// The generator could not produce a value
    #[error("Generation failed: {0}")]
    Failed(String),
}

impl GeneratorError {
    /// Create an invalid parameter error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParam {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Opaque parameter map handed to a generator.
///
/// Loaded from the `params` key of a field in YAML:
///
/// ```yaml
/// fields:
///   - name: age
///     generator: number
///     params:
///       min: 18
///       max: 80
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, YamlValue>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style parameter insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<YamlValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<YamlValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a raw parameter value.
    pub fn get(&self, name: &str) -> Option<&YamlValue> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get a required string parameter.
    pub fn required_str(&self, name: &str) -> Result<&str, GeneratorError> {
        match self.get(name) {
            Some(value) => value
                .as_str()
                .ok_or_else(|| GeneratorError::invalid(name, "expected a string")),
            None => Err(GeneratorError::MissingParam(name.to_string())),
        }
    }

    /// Get an optional string parameter.
    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> Result<&'a str, GeneratorError> {
        match self.get(name) {
            Some(_) => self.required_str(name),
            None => Ok(default),
        }
    }

    /// Get an optional integer parameter.
    pub fn i64_or(&self, name: &str, default: i64) -> Result<i64, GeneratorError> {
        match self.get(name) {
            Some(value) => value
                .as_i64()
                .ok_or_else(|| GeneratorError::invalid(name, "expected an integer")),
            None => Ok(default),
        }
    }

    /// Get an optional float parameter. Integers are accepted.
    pub fn f64_or(&self, name: &str, default: f64) -> Result<f64, GeneratorError> {
        match self.get(name) {
            Some(value) => value
                .as_f64()
                .ok_or_else(|| GeneratorError::invalid(name, "expected a number")),
            None => Ok(default),
        }
    }

    /// Get an optional boolean parameter.
    pub fn bool_or(&self, name: &str, default: bool) -> Result<bool, GeneratorError> {
        match self.get(name) {
            Some(value) => value
                .as_bool()
                .ok_or_else(|| GeneratorError::invalid(name, "expected a boolean")),
            None => Ok(default),
        }
    }

    /// Get a required list parameter.
    pub fn value_list(&self, name: &str) -> Result<&[YamlValue], GeneratorError> {
        match self.get(name) {
            Some(value) => value
                .as_sequence()
                .map(Vec::as_slice)
                .ok_or_else(|| GeneratorError::invalid(name, "expected a list")),
            None => Err(GeneratorError::MissingParam(name.to_string())),
        }
    }

    /// Get a required list parameter whose entries are rendered as strings.
    pub fn string_list(&self, name: &str) -> Result<Vec<String>, GeneratorError> {
        self.value_list(name)?
            .iter()
            .map(|item| match item {
                YamlValue::String(s) => Ok(s.clone()),
                YamlValue::Number(n) => Ok(n.to_string()),
                YamlValue::Bool(b) => Ok(b.to_string()),
                _ => Err(GeneratorError::invalid(name, "expected a list of scalars")),
            })
            .collect()
    }
}
