//! Serialization of extracted documents.

mod json;

pub use json::{to_json, write_json, JsonFormat};
