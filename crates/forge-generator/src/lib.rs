//! Generator registry and record assembly for fixture-forge.
//!
//! This crate resolves each field's generator by name, invokes it with the
//! field's parameters and a caller-supplied random source, and assembles the
//! results into one record or a bounded collection of records.
//!
//! # Architecture
//!
//! ```text
//! XmlOptions (YAML)
//!        │
//!        ▼
//! ┌──────────────────────┐      ┌─────────────────────┐
//! │   RecordAssembler    │─────▶│  GeneratorRegistry  │
//! │                      │      │  name → Generator   │
//! │  - shape / fields    │      └─────────────────────┘
//! │  - autoincrement     │
//! └──────────┬───────────┘
//!            │
//!            ▼
//!   Generated::Single(Record) | Generated::Array(Vec<Record>)
//! ```
//!
//! # Example
//!
//! ```rust
//! use forge_core::{FieldDescriptor, Generated, XmlOptions};
//! use forge_generator::{default_registry, RecordAssembler};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let options = XmlOptions::array(
//!     3,
//!     vec![
//!         FieldDescriptor::new("id", "autoincrement"),
//!         FieldDescriptor::new("school", "school"),
//!     ],
//! );
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let generated = RecordAssembler::new(default_registry())
//!     .assemble(&options, &mut rng)
//!     .unwrap();
//! assert_eq!(generated.records().len(), 3);
//! ```

pub mod assembler;
pub mod generators;
pub mod registry;

// Re-exports for convenience
pub use assembler::{AssembleError, RecordAssembler};
pub use registry::{default_registry, Generator, GeneratorInfo, GeneratorRegistry, RegistryError};
