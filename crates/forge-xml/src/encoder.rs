//! Recursive XML encoder for generated records.
//!
//! Encoding rules, applied to every field of a record:
//!
//! - scalar: leaf element named after the field holding the value's text
//! - sequence: element named after the field with one `value` child per entry
//! - mapping: element named after the field, entries encoded recursively
//! - null: nothing
//!
//! A mapping without entries contributes no markup at all, not even an empty
//! tag pair. Inside a sequence, null entries and empty mappings are written
//! as an empty `value` element so entry positions are preserved.

use forge_core::{Generated, Record, Scalar, Value, XmlOptions};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Element name used for each entry of a sequence.
pub const SEQUENCE_ITEM_ELEMENT: &str = "value";

/// Spaces per nesting level when indenting.
pub const INDENT_SIZE: usize = 4;

/// Error type for XML encoding.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// A root, record or field name is not a valid XML element name
    #[error("Invalid element name: '{0}'")]
    InvalidElementName(String),

    /// IO error from the underlying writer
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writer error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Check whether `name` can be used as an element name.
///
/// The first character must be a letter or `_`; the rest may also contain
/// digits, `-`, `.` and `:`.
pub fn is_valid_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

fn check_name(name: &str) -> Result<(), EncodeError> {
    if is_valid_element_name(name) {
        Ok(())
    } else {
        Err(EncodeError::InvalidElementName(name.to_string()))
    }
}

/// Serializes [`Generated`] records into an XML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlEncoder {
    root_element: String,
    record_element: String,
    indent: bool,
}

impl XmlEncoder {
    /// Create a compact encoder with explicit element names.
    pub fn new(root_element: impl Into<String>, record_element: impl Into<String>) -> Self {
        Self {
            root_element: root_element.into(),
            record_element: record_element.into(),
            indent: false,
        }
    }

    /// Create an encoder from generation options, applying the default
    /// element names.
    pub fn from_options(options: &XmlOptions) -> Self {
        Self::new(options.root_element_name(), options.record_element_name())
            .with_indent(options.indent)
    }

    /// Pretty-print with [`INDENT_SIZE`] spaces per level.
    pub fn with_indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn root_element(&self) -> &str {
        &self.root_element
    }

    pub fn record_element(&self) -> &str {
        &self.record_element
    }

    /// Encode into a fresh buffer.
    pub fn encode(&self, generated: &Generated) -> Result<Vec<u8>, EncodeError> {
        check_name(&self.root_element)?;

        let mut writer = if self.indent {
            Writer::new_with_indent(Vec::new(), b' ', INDENT_SIZE)
        } else {
            Writer::new(Vec::new())
        };

        match generated {
            Generated::Single(record) => write_mapping(&mut writer, &self.root_element, record)?,
            Generated::Array(records) => {
                check_name(&self.record_element)?;
                writer.write_event(Event::Start(BytesStart::new(self.root_element.as_str())))?;
                for record in records {
                    write_mapping(&mut writer, &self.record_element, record)?;
                }
                writer.write_event(Event::End(BytesEnd::new(self.root_element.as_str())))?;
            }
        }

        Ok(writer.into_inner())
    }

    /// Encode into `out`. Nothing is written unless encoding succeeds.
    pub fn encode_to<W: Write>(
        &self,
        generated: &Generated,
        mut out: W,
    ) -> Result<(), EncodeError> {
        let bytes = self.encode(generated)?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }
}

fn write_mapping<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    record: &Record,
) -> Result<(), EncodeError> {
    if record.is_empty() {
        return Ok(());
    }
    check_name(name)?;

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    for (key, value) in record.iter() {
        write_value(writer, key, value)?;
    }
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_value<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &Value,
) -> Result<(), EncodeError> {
    match value {
        Value::Null => Ok(()),
        Value::Scalar(scalar) => write_leaf(writer, name, scalar),
        Value::Sequence(items) => {
            check_name(name)?;
            writer.write_event(Event::Start(BytesStart::new(name)))?;
            for item in items {
                write_sequence_item(writer, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(name)))?;
            Ok(())
        }
        Value::Mapping(record) => write_mapping(writer, name, record),
    }
}

/// Sequence entries always keep their position: absent values and empty
/// mappings become an empty `value` element.
fn write_sequence_item<W: Write>(writer: &mut Writer<W>, item: &Value) -> Result<(), EncodeError> {
    match item {
        Value::Null => write_text_element(writer, SEQUENCE_ITEM_ELEMENT, ""),
        Value::Mapping(record) if record.is_empty() => {
            write_text_element(writer, SEQUENCE_ITEM_ELEMENT, "")
        }
        _ => write_value(writer, SEQUENCE_ITEM_ELEMENT, item),
    }
}

fn write_leaf<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    scalar: &Scalar,
) -> Result<(), EncodeError> {
    write_text_element(writer, name, &scalar.to_string())
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), EncodeError> {
    check_name(name)?;

    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
