//! XML encoding for fixture-forge records.
//!
//! # Example
//!
//! ```rust
//! use forge_core::{Generated, Record};
//! use forge_xml::XmlEncoder;
//!
//! let record = Record::new()
//!     .with("name", "Harborview State Academy")
//!     .with("tags", vec!["a", "b"]);
//!
//! let xml = XmlEncoder::new("school", "record")
//!     .encode(&Generated::Single(record))
//!     .unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(xml).unwrap(),
//!     "<school><name>Harborview State Academy</name>\
//!      <tags><value>a</value><value>b</value></tags></school>"
//! );
//! ```

pub mod encoder;

pub use encoder::{
    is_valid_element_name, EncodeError, XmlEncoder, INDENT_SIZE, SEQUENCE_ITEM_ELEMENT,
};
