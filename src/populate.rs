//! XML fixture file populator.

use crate::error::{Error, PopulatorError};
use forge_core::XmlOptions;
use forge_generator::{default_registry, GeneratorRegistry, RecordAssembler};
use forge_xml::XmlEncoder;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for XML writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub records_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent assembling and encoding records.
    pub generation_duration: Duration,
    /// Time spent writing the file.
    pub write_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate records per second.
    pub fn records_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.records_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Writes generated XML documents to files.
///
/// One seeded random source is shared by every document the populator
/// writes, so consecutive documents differ while the sequence as a whole is
/// reproducible.
pub struct XmlPopulator<'r> {
    registry: &'r GeneratorRegistry,
    rng: StdRng,
}

impl XmlPopulator<'static> {
    /// Create a populator backed by the built-in generators.
    pub fn with_default_registry(seed: u64) -> Self {
        Self::new(default_registry(), seed)
    }
}

impl<'r> XmlPopulator<'r> {
    /// Create a new XML populator.
    ///
    /// # Arguments
    ///
    /// * `registry` - Generators available to field descriptors
    /// * `seed` - Random seed for deterministic generation
    pub fn new(registry: &'r GeneratorRegistry, seed: u64) -> Self {
        Self {
            registry,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one document and write it to `output_path`.
    ///
    /// The document is fully built in memory first; the file is only created
    /// once generation has succeeded.
    pub fn populate<P: AsRef<Path>>(
        &mut self,
        options: &XmlOptions,
        output_path: P,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();
        let output_path = output_path.as_ref();

        info!(
            "Generating XML file '{}' ({} shape, {} fields)",
            output_path.display(),
            options.shape,
            options.fields.len()
        );

        let gen_start = Instant::now();
        let generated = RecordAssembler::new(self.registry)
            .assemble(options, &mut self.rng)
            .map_err(Error::from)?;
        let document = XmlEncoder::from_options(options)
            .encode(&generated)
            .map_err(Error::from)?;
        metrics.generation_duration = gen_start.elapsed();
        metrics.records_written = generated.records().len() as u64;
        debug!(
            "Generated {} records into {} bytes",
            metrics.records_written,
            document.len()
        );

        let write_start = Instant::now();
        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
        writer.write_all(&document)?;
        writer.flush()?;
        drop(writer);
        metrics.write_duration = write_start.elapsed();

        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        info!(
            "XML generation complete: {} records, {} bytes in {:?} ({:.2} records/sec)",
            metrics.records_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.records_per_second()
        );

        Ok(metrics)
    }

    /// Load options from a YAML file, then [`populate`](Self::populate).
    pub fn populate_from_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &mut self,
        options_path: P,
        output_path: Q,
    ) -> Result<PopulateMetrics, PopulatorError> {
        let options = XmlOptions::from_file(options_path).map_err(Error::from)?;
        self.populate(&options, output_path)
    }
}
