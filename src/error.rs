//! Failure values for decode, record encode, and schema construction.
//!
//! Failures are returned, never panicked, so callers can inspect or log them
//! without unwinding. A `DecodeError` carries a context trail from the
//! outermost combinator down to the offending sub-value, which is what makes
//! failures in deeply nested schemas actionable.

use crate::wire::{Tag, WireValue};
use std::fmt;

/// One step of the context trail: where decoding was, what it expected, and
/// what it actually saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextFrame {
    /// Field name, map key, `[index]`, or the codec's own name at the root.
    pub key: String,
    /// Name of the codec that was applied.
    pub expected: String,
    /// Rendered form of the value that was present.
    pub actual: String,
}

/// A rejected decode. Ordered context frames run outermost to innermost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// Rendered form of the input the failing codec rejected.
    pub input: String,
    pub message: String,
    pub context: Vec<ContextFrame>,
}

impl DecodeError {
    /// Input carried a different tag than the codec reads.
    pub fn tag_mismatch(codec_name: &str, tag: Tag, input: &WireValue) -> Self {
        DecodeError {
            input: input.to_string(),
            message: format!("expected object with key {tag}"),
            context: vec![ContextFrame {
                key: codec_name.to_string(),
                expected: codec_name.to_string(),
                actual: input.to_string(),
            }],
        }
    }

    /// Tag was right but the payload failed the scalar's validity rule.
    pub fn invalid_scalar(codec_name: &str, input: &WireValue, message: impl Into<String>) -> Self {
        DecodeError {
            input: input.to_string(),
            message: message.into(),
            context: vec![ContextFrame {
                key: codec_name.to_string(),
                expected: codec_name.to_string(),
                actual: input.to_string(),
            }],
        }
    }

    /// A declared record field is absent from the item.
    pub fn missing_field(field: &str, codec_name: &str) -> Self {
        DecodeError {
            input: "<absent>".to_string(),
            message: format!("missing field {field}"),
            context: vec![ContextFrame {
                key: field.to_string(),
                expected: codec_name.to_string(),
                actual: "<absent>".to_string(),
            }],
        }
    }

    /// Prepends an outer frame as the error propagates up through a combinator.
    pub fn in_context(
        mut self,
        key: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        self.context.insert(
            0,
            ContextFrame {
                key: key.into(),
                expected: expected.into(),
                actual: actual.into(),
            },
        );
        self
    }

    /// Dotted trail of keys, outermost first.
    pub fn path(&self) -> String {
        self.context
            .iter()
            .map(|f| f.key.as_str())
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if !self.context.is_empty() {
            write!(f, " (at {}, got {})", self.path(), self.input)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeError {}

/// Record-encode precondition violations.
///
/// `Codec::encode` is total for statically valid input; the record layer works
/// over the dynamic `Value` form, where a value of the wrong shape or a missing
/// field can only be caught at runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("missing field {0}")]
    MissingField(String),
    #[error("field {field}: expected {expected}, got incompatible value")]
    WrongShape { field: String, expected: String },
}

/// Record schema construction failures, reported before first use.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate field {0} in record schema")]
    DuplicateField(String),
}
