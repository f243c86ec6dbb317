//! Decoded application values and the bridge between typed and dynamic forms.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Decoded record: field name to decoded value.
pub type RecordValue = BTreeMap<String, Value>;

/// A finite number with a total order.
///
/// The wire format carries numbers as decimal text, so every number must render
/// to (and parse from) a decimal string; NaN and the infinities have no such
/// form and are rejected at the boundaries. The total order (`f64::total_cmp`)
/// is the documented comparator that makes number-set encoding deterministic.
#[derive(Debug, Clone, Copy)]
pub struct Number(f64);

impl Number {
    /// Wraps a float. Non-finite inputs are representable here but fail the
    /// owning codec's `is` check and cannot be parsed back from the wire.
    pub fn new(value: f64) -> Self {
        Number(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }

    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Parses decimal text. Rejects unparsable text and text that overflows to
    /// an infinity (e.g. `"1e999"`), since neither round-trips.
    pub fn parse(text: &str) -> Option<Self> {
        let parsed: f64 = text.parse().ok()?;
        parsed.is_finite().then_some(Number(parsed))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number(v)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number(v as f64)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number(v as f64)
    }
}

/// Shortest decimal text that parses back to the same float ("42" for 42.0).
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A decoded value in dynamic form, used by the `record` combinator (whose
/// fields are heterogeneous) and by callers holding schema-described data
/// without a bespoke struct.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(Number),
    Bool(bool),
    StringSet(BTreeSet<String>),
    NumberSet(BTreeSet<Number>),
    Null,
    Map(BTreeMap<String, Value>),
    List(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::get)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_string_set(&self) -> Option<&BTreeSet<String>> {
        match self {
            Value::StringSet(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number_set(&self) -> Option<&BTreeSet<Number>> {
        match self {
            Value::NumberSet(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(Number::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(Number::from(v))
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(Number::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Value::Number(v)
    }
}

/// Conversion from a typed decoded value into the dynamic form.
///
/// Implemented for every decoded type the codecs produce, so any codec can
/// serve as a record field.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

/// Fallible conversion from the dynamic form back to a typed decoded value.
/// Returns `None` when the dynamic value has a different shape.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl IntoValue for Number {
    fn into_value(self) -> Value {
        Value::Number(self)
    }
}

impl FromValue for Number {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_number()
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl IntoValue for BTreeSet<String> {
    fn into_value(self) -> Value {
        Value::StringSet(self)
    }
}

impl FromValue for BTreeSet<String> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_string_set().cloned()
    }
}

impl IntoValue for BTreeSet<Number> {
    fn into_value(self) -> Value {
        Value::NumberSet(self)
    }
}

impl FromValue for BTreeSet<Number> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_number_set().cloned()
    }
}

// The null codec decodes to unit.
impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Null
    }
}

impl FromValue for () {
    fn from_value(value: &Value) -> Option<Self> {
        value.is_null().then_some(())
    }
}

impl<T: IntoValue> IntoValue for BTreeMap<String, T> {
    fn into_value(self) -> Value {
        Value::Map(self.into_iter().map(|(k, v)| (k, v.into_value())).collect())
    }
}

impl<T: FromValue> FromValue for BTreeMap<String, T> {
    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_map()?
            .iter()
            .map(|(k, v)| T::from_value(v).map(|t| (k.clone(), t)))
            .collect()
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::from_value).collect()
    }
}
