//! Error types for XML fixture generation.

use forge_core::SchemaError;
use forge_generator::AssembleError;
use forge_xml::EncodeError;
use thiserror::Error;

/// Errors that can occur while generating a document.
#[derive(Error, Debug)]
pub enum Error {
    /// Options were invalid or a generator failed.
    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// The records could not be serialized.
    #[error("Encoding error: {0}")]
    Encode(#[from] EncodeError),

    /// Options could not be loaded.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Errors that can occur while writing a document to a file.
#[derive(Error, Debug)]
pub enum PopulatorError {
    /// Document generation failed; no file was created.
    #[error("Generation error: {0}")]
    Generate(#[from] Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
