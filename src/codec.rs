//! The codec contract, the primitive codecs, and the `map`/`list` combinators.
//!
//! A codec pairs one decoded type with one wire tag. Primitives cover the
//! scalar and set tags; `map` and `list` wrap an inner codec to describe
//! homogeneous nesting. Heterogeneous records live in [`crate::record`].

use crate::error::DecodeError;
use crate::value::Number;
use crate::wire::{Tag, WireValue};
use std::collections::{BTreeMap, BTreeSet};

/// The uniform operations every codec provides.
///
/// A codec is a value: immutable once constructed, pure data plus two
/// functions. Encode flows decoded to wire depth-first; decode flows wire to
/// decoded depth-first and short-circuits on the first structural mismatch.
pub trait Codec {
    /// The decoded application type.
    type Decoded;

    /// The single wire tag this codec reads and writes.
    fn tag(&self) -> Tag;

    /// Name used in diagnostics; combinators derive theirs from the inner
    /// codec's name (`list<number>`).
    fn name(&self) -> String;

    /// True iff `value` is a valid instance of the decoded type, i.e. `encode`
    /// is total for it. Side-effect free, never panics.
    fn is(&self, value: &Self::Decoded) -> bool;

    /// Encodes a valid decoded value into its tagged wire form. Total for
    /// inputs satisfying [`Codec::is`].
    fn encode(&self, value: &Self::Decoded) -> WireValue;

    /// Extracts and validates the payload of a wire value carrying this
    /// codec's tag. A wrong tag yields a shape-mismatch error; a bad payload
    /// yields a scalar or element failure with context.
    fn decode(&self, wire: &WireValue) -> Result<Self::Decoded, DecodeError>;
}

/// Text codec (tag `S`).
#[derive(Debug, Clone, Copy, Default)]
pub struct StringCodec;

pub fn string() -> StringCodec {
    StringCodec
}

impl Codec for StringCodec {
    type Decoded = String;

    fn tag(&self) -> Tag {
        Tag::S
    }

    fn name(&self) -> String {
        "string".to_string()
    }

    fn is(&self, _value: &String) -> bool {
        true
    }

    fn encode(&self, value: &String) -> WireValue {
        WireValue::S(value.clone())
    }

    fn decode(&self, wire: &WireValue) -> Result<String, DecodeError> {
        match wire {
            WireValue::S(s) => Ok(s.clone()),
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// Number codec (tag `N`): finite numbers as decimal text on the wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberCodec;

pub fn number() -> NumberCodec {
    NumberCodec
}

impl Codec for NumberCodec {
    type Decoded = Number;

    fn tag(&self) -> Tag {
        Tag::N
    }

    fn name(&self) -> String {
        "number".to_string()
    }

    fn is(&self, value: &Number) -> bool {
        value.is_finite()
    }

    fn encode(&self, value: &Number) -> WireValue {
        WireValue::N(value.to_string())
    }

    fn decode(&self, wire: &WireValue) -> Result<Number, DecodeError> {
        match wire {
            WireValue::N(text) => Number::parse(text).ok_or_else(|| {
                DecodeError::invalid_scalar(
                    &self.name(),
                    wire,
                    format!("not a decimal number: {text:?}"),
                )
            }),
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// Boolean codec (tag `BOOL`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolCodec;

pub fn boolean() -> BoolCodec {
    BoolCodec
}

impl Codec for BoolCodec {
    type Decoded = bool;

    fn tag(&self) -> Tag {
        Tag::Bool
    }

    fn name(&self) -> String {
        "bool".to_string()
    }

    fn is(&self, _value: &bool) -> bool {
        true
    }

    fn encode(&self, value: &bool) -> WireValue {
        WireValue::Bool(*value)
    }

    fn decode(&self, wire: &WireValue) -> Result<bool, DecodeError> {
        match wire {
            WireValue::Bool(b) => Ok(*b),
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// String-set codec (tag `SS`). Encodes in ascending lexicographic order so
/// repeated encodes of the same set are byte-identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSetCodec;

pub fn string_set() -> StringSetCodec {
    StringSetCodec
}

impl Codec for StringSetCodec {
    type Decoded = BTreeSet<String>;

    fn tag(&self) -> Tag {
        Tag::Ss
    }

    fn name(&self) -> String {
        "string_set".to_string()
    }

    fn is(&self, _value: &BTreeSet<String>) -> bool {
        true
    }

    fn encode(&self, value: &BTreeSet<String>) -> WireValue {
        WireValue::Ss(value.iter().cloned().collect())
    }

    fn decode(&self, wire: &WireValue) -> Result<BTreeSet<String>, DecodeError> {
        match wire {
            WireValue::Ss(elems) => Ok(elems.iter().cloned().collect()),
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// Number-set codec (tag `NS`). Encodes in ascending numeric order.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberSetCodec;

pub fn number_set() -> NumberSetCodec {
    NumberSetCodec
}

impl Codec for NumberSetCodec {
    type Decoded = BTreeSet<Number>;

    fn tag(&self) -> Tag {
        Tag::Ns
    }

    fn name(&self) -> String {
        "number_set".to_string()
    }

    fn is(&self, value: &BTreeSet<Number>) -> bool {
        value.iter().all(|n| n.is_finite())
    }

    fn encode(&self, value: &BTreeSet<Number>) -> WireValue {
        WireValue::Ns(value.iter().map(Number::to_string).collect())
    }

    fn decode(&self, wire: &WireValue) -> Result<BTreeSet<Number>, DecodeError> {
        match wire {
            WireValue::Ns(elems) => {
                let mut out = BTreeSet::new();
                for (i, text) in elems.iter().enumerate() {
                    let n = Number::parse(text).ok_or_else(|| {
                        DecodeError::invalid_scalar(
                            &self.name(),
                            wire,
                            format!("not a decimal number: {text:?}"),
                        )
                        .in_context(format!("[{i}]"), "number", text.clone())
                    })?;
                    out.insert(n);
                }
                Ok(out)
            }
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// Null codec (tag `NULL`): the tag alone signals null, so the wire flag must
/// be `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCodec;

pub fn null() -> NullCodec {
    NullCodec
}

impl Codec for NullCodec {
    type Decoded = ();

    fn tag(&self) -> Tag {
        Tag::Null
    }

    fn name(&self) -> String {
        "null".to_string()
    }

    fn is(&self, _value: &()) -> bool {
        true
    }

    fn encode(&self, _value: &()) -> WireValue {
        WireValue::Null(true)
    }

    fn decode(&self, wire: &WireValue) -> Result<(), DecodeError> {
        match wire {
            WireValue::Null(true) => Ok(()),
            WireValue::Null(false) => Err(DecodeError::invalid_scalar(
                &self.name(),
                wire,
                "null flag must be true",
            )),
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// Homogeneous nested dictionary (tag `M`): string keys, one inner codec for
/// every value.
#[derive(Debug, Clone, Copy)]
pub struct MapCodec<C> {
    inner: C,
}

pub fn map<C: Codec>(inner: C) -> MapCodec<C> {
    MapCodec { inner }
}

impl<C: Codec> Codec for MapCodec<C> {
    type Decoded = BTreeMap<String, C::Decoded>;

    fn tag(&self) -> Tag {
        Tag::M
    }

    fn name(&self) -> String {
        format!("map<{}>", self.inner.name())
    }

    fn is(&self, value: &Self::Decoded) -> bool {
        value.values().all(|v| self.inner.is(v))
    }

    fn encode(&self, value: &Self::Decoded) -> WireValue {
        WireValue::M(
            value
                .iter()
                .map(|(k, v)| (k.clone(), self.inner.encode(v)))
                .collect(),
        )
    }

    fn decode(&self, wire: &WireValue) -> Result<Self::Decoded, DecodeError> {
        match wire {
            WireValue::M(entries) => {
                let mut out = BTreeMap::new();
                for (key, inner_wire) in entries {
                    let decoded = self.inner.decode(inner_wire).map_err(|e| {
                        e.in_context(key.clone(), self.inner.name(), inner_wire.to_string())
                    })?;
                    out.insert(key.clone(), decoded);
                }
                Ok(out)
            }
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}

/// Homogeneous ordered sequence (tag `L`). Element order is preserved in both
/// directions.
#[derive(Debug, Clone, Copy)]
pub struct ListCodec<C> {
    inner: C,
}

pub fn list<C: Codec>(inner: C) -> ListCodec<C> {
    ListCodec { inner }
}

impl<C: Codec> Codec for ListCodec<C> {
    type Decoded = Vec<C::Decoded>;

    fn tag(&self) -> Tag {
        Tag::L
    }

    fn name(&self) -> String {
        format!("list<{}>", self.inner.name())
    }

    fn is(&self, value: &Self::Decoded) -> bool {
        value.iter().all(|v| self.inner.is(v))
    }

    fn encode(&self, value: &Self::Decoded) -> WireValue {
        WireValue::L(value.iter().map(|v| self.inner.encode(v)).collect())
    }

    fn decode(&self, wire: &WireValue) -> Result<Self::Decoded, DecodeError> {
        match wire {
            WireValue::L(elems) => {
                let mut out = Vec::with_capacity(elems.len());
                for (i, inner_wire) in elems.iter().enumerate() {
                    let decoded = self.inner.decode(inner_wire).map_err(|e| {
                        e.in_context(format!("[{i}]"), self.inner.name(), inner_wire.to_string())
                    })?;
                    out.push(decoded);
                }
                Ok(out)
            }
            other => Err(DecodeError::tag_mismatch(&self.name(), self.tag(), other)),
        }
    }
}
