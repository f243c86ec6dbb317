//! Tagged wire representation (attribute values as exchanged with the store).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Top-level record shape: field name to wire value, no outer tag.
///
/// `BTreeMap` keeps key order stable so repeated encodes of the same record
/// serialize byte-identically.
pub type Item = BTreeMap<String, WireValue>;

/// The eight wire tags. Each codec reads and writes exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    S,
    N,
    Bool,
    Ss,
    Ns,
    Null,
    M,
    L,
}

impl Tag {
    /// The tag key as it appears in the wire object (`{"S": ...}` etc.).
    pub fn key(self) -> &'static str {
        match self {
            Tag::S => "S",
            Tag::N => "N",
            Tag::Bool => "BOOL",
            Tag::Ss => "SS",
            Tag::Ns => "NS",
            Tag::Null => "NULL",
            Tag::M => "M",
            Tag::L => "L",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single wire value. Exactly one variant is active per instance, which is
/// what makes encode/decode unambiguous: a codec is defined by which tag it
/// reads and writes.
///
/// Serializes to the externally tagged JSON form:
///
/// ```text
/// {"S": "hello"}  {"N": "42"}  {"BOOL": true}  {"SS": ["a", "b"]}
/// {"NS": ["1", "2"]}  {"NULL": true}  {"M": {...}}  {"L": [...]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WireValue {
    /// Text.
    S(String),
    /// Number as decimal text (the wire stores arbitrary-precision decimals).
    N(String),
    /// Boolean.
    #[serde(rename = "BOOL")]
    Bool(bool),
    /// String set. Uniqueness lives in the decoded representation; the wire
    /// array carries the elements in the deterministic encode order.
    #[serde(rename = "SS")]
    Ss(Vec<String>),
    /// Number set, same decimal-text rule as `N`.
    #[serde(rename = "NS")]
    Ns(Vec<String>),
    /// Null marker; the flag is `true` whenever the tag is present.
    #[serde(rename = "NULL")]
    Null(bool),
    /// Nested object.
    M(BTreeMap<String, WireValue>),
    /// Nested array.
    L(Vec<WireValue>),
}

impl WireValue {
    /// The active tag of this value.
    pub fn tag(&self) -> Tag {
        match self {
            WireValue::S(_) => Tag::S,
            WireValue::N(_) => Tag::N,
            WireValue::Bool(_) => Tag::Bool,
            WireValue::Ss(_) => Tag::Ss,
            WireValue::Ns(_) => Tag::Ns,
            WireValue::Null(_) => Tag::Null,
            WireValue::M(_) => Tag::M,
            WireValue::L(_) => Tag::L,
        }
    }
}

/// Renders the JSON wire form; used when quoting offending input in errors.
impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "{self:?}"),
        }
    }
}
