//! Core types for the fixture-forge XML fixture generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the encoder:
//!
//! - [`Value`] / [`Scalar`] - Closed value space every generator result is normalized into
//! - [`Record`] - Ordered mapping of field names to values
//! - [`Generated`] - One record or a bounded collection of records
//! - [`XmlOptions`] / [`FieldDescriptor`] - Generation options loaded from YAML
//! - [`Params`] / [`GeneratorError`] - Generator inputs and failures
//!
//! # Architecture
//!
//! ```text
//! forge-core (this crate)
//!    │
//!    ├─── forge-generator  (registry, built-in generators, record assembly)
//!    │
//!    └─── forge-xml        (hierarchical XML encoding)
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{Record, Value};
//!
//! let record = Record::new()
//!     .with("name", "Harborview State Academy")
//!     .with("tags", vec!["a", "b"]);
//!
//! assert_eq!(record.field_names(), vec!["name", "tags"]);
//! assert!(matches!(record.get("tags"), Some(Value::Sequence(_))));
//! ```

pub mod params;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use params::{GeneratorError, Params};
pub use schema::{
    FieldDescriptor, SchemaError, Shape, UnknownShape, XmlOptions, AUTOINCREMENT,
    DEFAULT_RECORD_ELEMENT, DEFAULT_ROOT_ELEMENT,
};
pub use values::{Generated, Record, Scalar, Value};
