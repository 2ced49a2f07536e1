//! fixture-forge library
//!
//! Generates structurally valid XML fixture documents from a declarative
//! field schema.
//!
//! # Features
//!
//! - Single record or bounded collections of records
//! - Name-indexed generator registry with built-in generators
//! - Reserved `autoincrement` field for 1-based record indices
//! - Recursive encoding of scalars, sequences and nested mappings
//! - Reproducible documents from a fixed seed
//!
//! # Crates
//!
//! - `forge_core` - values, records and generation options
//! - `forge_generator` - generator registry and record assembly
//! - `forge_xml` - XML encoding
//!
//! # Example
//!
//! ```rust
//! use fixture_forge::{generate_seeded, XmlOptions};
//!
//! let options = XmlOptions::from_yaml(r#"
//! type: array
//! root_element: schools
//! row_count: 2
//! fields:
//!   - name: id
//!     generator: autoincrement
//!   - name: name
//!     generator: school
//! "#).unwrap();
//!
//! let xml = String::from_utf8(generate_seeded(&options, 42).unwrap()).unwrap();
//! assert!(xml.starts_with("<schools><record><id>1</id>"));
//! ```

pub mod error;
pub mod populate;

pub use error::{Error, PopulatorError};
pub use populate::{PopulateMetrics, XmlPopulator};

// Re-export the component crates' public surface for convenience
pub use forge_core::{
    FieldDescriptor, Generated, GeneratorError, Params, Record, Scalar, SchemaError, Shape,
    Value, XmlOptions,
};
pub use forge_generator::{
    default_registry, AssembleError, Generator, GeneratorInfo, GeneratorRegistry,
    RecordAssembler, RegistryError,
};
pub use forge_xml::{EncodeError, XmlEncoder};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Assemble the records described by `options` and encode them as XML.
///
/// Either the complete document is returned or an error; never both.
pub fn generate(
    options: &XmlOptions,
    registry: &GeneratorRegistry,
    rng: &mut dyn RngCore,
) -> Result<Vec<u8>, Error> {
    let generated = RecordAssembler::new(registry).assemble(options, rng)?;
    let document = XmlEncoder::from_options(options).encode(&generated)?;
    Ok(document)
}

/// [`generate`] with the built-in registry and a `StdRng` seeded from `seed`.
pub fn generate_seeded(options: &XmlOptions, seed: u64) -> Result<Vec<u8>, Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(options, default_registry(), &mut rng)
}
