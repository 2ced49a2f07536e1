//! Record assembly: turns generation options into one or many records.

use crate::registry::{Generator, GeneratorRegistry};
use forge_core::{
    FieldDescriptor, Generated, GeneratorError, Record, Shape, UnknownShape, Value, XmlOptions,
};
use rand::RngCore;
use tracing::debug;

/// Error type for record assembly.
#[derive(Debug, thiserror::Error)]
pub enum AssembleError {
    /// The requested shape is neither `single` nor `array`
    #[error(transparent)]
    InvalidShape(#[from] UnknownShape),

    /// No field descriptors were supplied
    #[error("Must pass fields in order to build record(s)")]
    MissingFields,

    /// Array shape requested without a positive row count
    #[error("Must have a row count greater than zero, got {0}")]
    MissingRowCount(i64),

    /// A field references a generator absent from the registry
    #[error("Invalid generator, {0} does not exist")]
    UnknownGenerator(String),

    /// The resolved generator reported failure
    #[error("Generator failed for field '{field}': {source}")]
    GeneratorInvocation {
        field: String,
        #[source]
        source: GeneratorError,
    },
}

/// How one field gets its value.
enum FieldPlan<'r> {
    /// 1-based record index (array mode `autoincrement`)
    Index,
    Generate(&'r dyn Generator),
}

/// Builds records by invoking registered generators for each field.
///
/// The random source is borrowed per call; reproducible output needs a
/// deterministically seeded source.
pub struct RecordAssembler<'r> {
    registry: &'r GeneratorRegistry,
}

impl<'r> RecordAssembler<'r> {
    /// Create an assembler resolving generators from `registry`.
    pub fn new(registry: &'r GeneratorRegistry) -> Self {
        Self { registry }
    }

    /// Validate `options` and assemble the requested record(s).
    ///
    /// Every generator name is resolved before any generator runs. No
    /// partial result is returned on failure.
    pub fn assemble(
        &self,
        options: &XmlOptions,
        rng: &mut dyn RngCore,
    ) -> Result<Generated, AssembleError> {
        let shape = options.parsed_shape()?;
        if options.fields.is_empty() {
            return Err(AssembleError::MissingFields);
        }

        match shape {
            Shape::Single => {
                let plan = self.plan(&options.fields, false)?;
                let record = self.build_record(&options.fields, &plan, 0, rng)?;
                Ok(Generated::Single(record))
            }
            Shape::Array => {
                if options.row_count <= 0 {
                    return Err(AssembleError::MissingRowCount(options.row_count));
                }
                let plan = self.plan(&options.fields, true)?;

                debug!(
                    "Assembling {} records with {} fields",
                    options.row_count,
                    options.fields.len()
                );

                let mut records = Vec::new();
                for index in 1..=options.row_count {
                    records.push(self.build_record(&options.fields, &plan, index, rng)?);
                }

                debug!("Assembled {} records", records.len());
                Ok(Generated::Array(records))
            }
        }
    }

    /// Resolve each field's generator. `autoincrement` is only honored in
    /// array mode; elsewhere it is looked up like any other name.
    fn plan(
        &self,
        fields: &[FieldDescriptor],
        indexed: bool,
    ) -> Result<Vec<FieldPlan<'r>>, AssembleError> {
        fields
            .iter()
            .map(|field| {
                if indexed && field.is_autoincrement() {
                    return Ok(FieldPlan::Index);
                }
                self.registry
                    .lookup(&field.generator)
                    .map(FieldPlan::Generate)
                    .ok_or_else(|| AssembleError::UnknownGenerator(field.generator.clone()))
            })
            .collect()
    }

    fn build_record(
        &self,
        fields: &[FieldDescriptor],
        plan: &[FieldPlan<'r>],
        index: i64,
        rng: &mut dyn RngCore,
    ) -> Result<Record, AssembleError> {
        let mut record = Record::new();

        for (field, step) in fields.iter().zip(plan) {
            let value = match step {
                FieldPlan::Index => Value::from(index),
                FieldPlan::Generate(generator) => generator
                    .generate(&field.params, rng)
                    .map_err(|source| AssembleError::GeneratorInvocation {
                        field: field.name.clone(),
                        source,
                    })?,
            };
            record.insert(field.name.clone(), value);
        }

        Ok(record)
    }
}
