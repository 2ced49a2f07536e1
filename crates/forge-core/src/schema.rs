//! Generation options and field schema for XML fixture documents.
//!
//! Options are usually loaded from YAML:
//!
//! ```yaml
//! type: array
//! root_element: people
//! record_element: person
//! row_count: 3
//! indent: true
//! fields:
//!   - name: id
//!     generator: autoincrement
//!   - name: school
//!     generator: school
//!   - name: age
//!     generator: number
//!     params:
//!       min: 18
//!       max: 80
//! ```

use crate::params::Params;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Root element name used when none is configured.
pub const DEFAULT_ROOT_ELEMENT: &str = "xml";

/// Record element name used when none is configured.
pub const DEFAULT_RECORD_ELEMENT: &str = "record";

/// Reserved generator name producing the 1-based record index in array mode.
pub const AUTOINCREMENT: &str = "autoincrement";

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading options file
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// The shape string was neither `single` nor `array`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid type '{0}', must be single or array")]
pub struct UnknownShape(pub String);

// ============================================================================
// Shape
// ============================================================================

/// Whether a request produces one record or a bounded collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Single,
    Array,
}

impl Shape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Array => "array",
        }
    }
}

impl FromStr for Shape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single" => Ok(Self::Single),
            "array" => Ok(Self::Array),
            other => Err(UnknownShape(other.to_string())),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Field Schema
// ============================================================================

/// Schema entry naming a target key, its generator, and generator parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field (element) name
    pub name: String,

    /// Registered generator name, or `autoincrement`
    #[serde(alias = "function")]
    pub generator: String,

    /// Generator parameters
    #[serde(default, skip_serializing_if = "Params::is_empty")]
    pub params: Params,
}

impl FieldDescriptor {
    /// Create a field without parameters.
    pub fn new(name: impl Into<String>, generator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generator: generator.into(),
            params: Params::new(),
        }
    }

    /// Attach parameters to the field.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Check if this field uses the reserved auto-increment generator.
    pub fn is_autoincrement(&self) -> bool {
        self.generator == AUTOINCREMENT
    }
}

// ============================================================================
// Generation Options
// ============================================================================

/// Options for one XML generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XmlOptions {
    /// `single` or `array`; validated at assembly time
    #[serde(rename = "type")]
    pub shape: String,

    /// Outermost element name; empty means [`DEFAULT_ROOT_ELEMENT`]
    #[serde(default)]
    pub root_element: String,

    /// Per-record element name in array mode; empty means [`DEFAULT_RECORD_ELEMENT`]
    #[serde(default)]
    pub record_element: String,

    /// Number of records in array mode
    #[serde(default)]
    pub row_count: i64,

    /// Ordered field descriptors
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Pretty-print with 4-space indentation
    #[serde(default)]
    pub indent: bool,
}

impl XmlOptions {
    /// Options for a single record.
    pub fn single(fields: Vec<FieldDescriptor>) -> Self {
        Self {
            shape: Shape::Single.to_string(),
            root_element: String::new(),
            record_element: String::new(),
            row_count: 0,
            fields,
            indent: false,
        }
    }

    /// Options for `row_count` records.
    pub fn array(row_count: i64, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            shape: Shape::Array.to_string(),
            row_count,
            ..Self::single(fields)
        }
    }

    pub fn with_root_element(mut self, name: impl Into<String>) -> Self {
        self.root_element = name.into();
        self
    }

    pub fn with_record_element(mut self, name: impl Into<String>) -> Self {
        self.record_element = name.into();
        self
    }

    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize options to YAML.
    pub fn to_yaml(&self) -> Result<String, SchemaError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Parse the configured shape.
    pub fn parsed_shape(&self) -> Result<Shape, UnknownShape> {
        self.shape.parse()
    }

    /// Root element name with the default applied.
    ///
    /// Defaulting is independent of the record element.
    pub fn root_element_name(&self) -> &str {
        if self.root_element.is_empty() {
            DEFAULT_ROOT_ELEMENT
        } else {
            &self.root_element
        }
    }

    /// Record element name with the default applied.
    pub fn record_element_name(&self) -> &str {
        if self.record_element.is_empty() {
            DEFAULT_RECORD_ELEMENT
        } else {
            &self.record_element
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const OPTIONS_YAML: &str = r#"
type: array
root_element: people
record_element: person
row_count: 3
indent: true
fields:
  - name: id
    generator: autoincrement
  - name: age
    function: number
    params:
      min: 18
      max: 80
"#;

    #[test]
    fn test_parse_options() {
        let options = XmlOptions::from_yaml(OPTIONS_YAML).unwrap();

        assert_eq!(options.parsed_shape().unwrap(), Shape::Array);
        assert_eq!(options.root_element_name(), "people");
        assert_eq!(options.record_element_name(), "person");
        assert_eq!(options.row_count, 3);
        assert!(options.indent);
        assert_eq!(options.fields.len(), 2);
        assert!(options.fields[0].is_autoincrement());
        assert_eq!(options.fields[1].generator, "number");
        assert_eq!(options.fields[1].params.i64_or("max", 0).unwrap(), 80);
    }

    #[test]
    fn test_optional_keys_default() {
        let options = XmlOptions::from_yaml("type: single").unwrap();

        assert_eq!(options.row_count, 0);
        assert!(options.fields.is_empty());
        assert!(!options.indent);
        assert_eq!(options.root_element_name(), DEFAULT_ROOT_ELEMENT);
        assert_eq!(options.record_element_name(), DEFAULT_RECORD_ELEMENT);
    }

    #[test]
    fn test_element_name_defaults_are_independent() {
        let root_only = XmlOptions::single(vec![]).with_root_element("catalog");
        assert_eq!(root_only.root_element_name(), "catalog");
        assert_eq!(root_only.record_element_name(), "record");

        let record_only = XmlOptions::array(1, vec![]).with_record_element("item");
        assert_eq!(record_only.root_element_name(), "xml");
        assert_eq!(record_only.record_element_name(), "item");
    }

    #[test]
    fn test_shape_parsing() {
        assert_eq!("single".parse::<Shape>().unwrap(), Shape::Single);
        assert_eq!("array".parse::<Shape>().unwrap(), Shape::Array);
        assert_eq!(
            "triangle".parse::<Shape>(),
            Err(UnknownShape("triangle".to_string()))
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(OPTIONS_YAML.as_bytes()).unwrap();

        let options = XmlOptions::from_file(file.path()).unwrap();
        assert_eq!(options.fields.len(), 2);
    }

    #[test]
    fn test_from_file_missing() {
        let result = XmlOptions::from_file("/nonexistent/options.yaml");
        assert!(matches!(result, Err(SchemaError::IoError(_))));
    }

    #[test]
    fn test_yaml_roundtrip_of_builder() {
        let options = XmlOptions::array(2, vec![FieldDescriptor::new("id", AUTOINCREMENT)])
            .with_root_element("rows")
            .with_indent(true);

        let parsed = XmlOptions::from_yaml(&options.to_yaml().unwrap()).unwrap();
        assert_eq!(parsed, options);
    }
}
