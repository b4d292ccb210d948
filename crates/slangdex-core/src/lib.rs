//! slangdex core - cleaning and validation for a flat slang dictionary
//!
//! The dataset is a JSON array of entries, each mapping a `term` to a
//! `meaning` with optional `example` and `source` fields.
//!
//! # Architecture
//!
//! ```text
//! JSON file → dataset::load_dataset → [Value]
//!                                       ├─ cleaner::clean_entries   → sorted, de-duplicated [Entry]
//!                                       └─ validator::validate_entries → ValidationReport
//! ```
//!
//! The two pipelines are independent. They share only the entry shape
//! ([`RawEntry`]), the dataset loader and the helpers in [`normalizer`].

pub mod cleaner;
pub mod collation;
pub mod config;
pub mod dataset;
pub mod error;
pub mod normalizer;
pub mod validator;

pub use error::{Error, Result};

use std::borrow::Cow;

use serde_json::{Map, Value};

/// Version of this library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keys an entry object may carry. Anything else is unexpected.
pub const ALLOWED_FIELDS: [&str; 4] = ["term", "meaning", "example", "source"];

/// Maximum length of a `term`, in characters
pub const TERM_MAX_CHARS: usize = 80;

/// Minimum trimmed length of a `meaning`, in characters
pub const MEANING_MIN_CHARS: usize = 3;

/// Maximum trimmed length of a `meaning`, in characters
pub const MEANING_MAX_CHARS: usize = 300;

/// A cleaned dictionary entry, as written by the cleaner.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub term: String,
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub source: String,
}

/// Borrowed view of one raw dataset object against the fixed field set.
///
/// Known fields are kept as untyped JSON so each consumer decides how strict
/// to be: the validator type-checks them, the cleaner coerces them.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry<'a> {
    pub term: Option<&'a Value>,
    pub meaning: Option<&'a Value>,
    pub example: Option<&'a Value>,
    pub source: Option<&'a Value>,
    /// Keys outside [`ALLOWED_FIELDS`], in input order
    pub unexpected: Vec<Cow<'a, str>>,
}

impl<'a> RawEntry<'a> {
    /// Split an object into known fields and unexpected keys
    pub fn from_object(object: &'a Map<String, Value>) -> Self {
        let unexpected = object
            .keys()
            .map(String::as_str)
            .filter(|key| !ALLOWED_FIELDS.contains(key))
            .map(Cow::Borrowed)
            .collect();

        Self {
            term: object.get("term"),
            meaning: object.get("meaning"),
            example: object.get("example"),
            source: object.get("source"),
            unexpected,
        }
    }

    /// View an arbitrary dataset element; `None` unless it is an object or
    /// an array.
    ///
    /// An array is read like an object keyed by its indices: none of the
    /// known fields are present and every index is an unexpected key.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(object) => Some(Self::from_object(object)),
            Value::Array(items) => Some(Self {
                term: None,
                meaning: None,
                example: None,
                source: None,
                unexpected: (0..items.len()).map(|i| Cow::Owned(i.to_string())).collect(),
            }),
            _ => None,
        }
    }
}

/// Human-readable name of a JSON value's type, for diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
