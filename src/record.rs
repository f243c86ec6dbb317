//! The `record` combinator: heterogeneous fixed-shape objects.
//!
//! A record's wire form is a flat mapping from field name to wire value with
//! no outer tag (the top-level item shape of the store). Field codecs are
//! declared with a builder and erased behind a small object-safe trait so
//! fields of different decoded types can live in one schema.

use crate::codec::Codec;
use crate::error::{DecodeError, EncodeError, SchemaError};
use crate::value::{FromValue, IntoValue, RecordValue, Value};
use crate::wire::{Item, WireValue};

/// Object-safe bridge from a typed codec to the dynamic decoded form.
trait FieldCodec {
    fn codec_name(&self) -> String;
    fn is_value(&self, value: &Value) -> bool;
    /// `None` when the dynamic value has a shape this codec cannot encode.
    fn encode_value(&self, value: &Value) -> Option<WireValue>;
    fn decode_value(&self, wire: &WireValue) -> Result<Value, DecodeError>;
}

impl<C> FieldCodec for C
where
    C: Codec,
    C::Decoded: FromValue + IntoValue,
{
    fn codec_name(&self) -> String {
        self.name()
    }

    fn is_value(&self, value: &Value) -> bool {
        C::Decoded::from_value(value).is_some_and(|typed| self.is(&typed))
    }

    fn encode_value(&self, value: &Value) -> Option<WireValue> {
        let typed = C::Decoded::from_value(value)?;
        Some(self.encode(&typed))
    }

    fn decode_value(&self, wire: &WireValue) -> Result<Value, DecodeError> {
        self.decode(wire).map(IntoValue::into_value)
    }
}

/// Declares record fields in order. Duplicate names are rejected at `build`,
/// before the codec can be used.
#[derive(Default)]
pub struct RecordBuilder {
    fields: Vec<(String, Box<dyn FieldCodec>)>,
}

pub fn record() -> RecordBuilder {
    RecordBuilder::default()
}

impl RecordBuilder {
    pub fn field<C>(mut self, name: &str, codec: C) -> Self
    where
        C: Codec + 'static,
        C::Decoded: FromValue + IntoValue,
    {
        self.fields.push((name.to_string(), Box::new(codec)));
        self
    }

    pub fn build(self) -> Result<RecordCodec, SchemaError> {
        for (i, (name, _)) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|(n, _)| n == name) {
                return Err(SchemaError::DuplicateField(name.clone()));
            }
        }
        Ok(RecordCodec {
            fields: self.fields,
        })
    }
}

/// Codec for a fixed set of named, individually-typed fields. Encode emits
/// exactly the declared fields; decode requires all of them and ignores
/// extras; both walk fields in declared order and fail fast.
pub struct RecordCodec {
    fields: Vec<(String, Box<dyn FieldCodec>)>,
}

impl RecordCodec {
    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Per-field validity check without going through the wire form.
    pub fn is(&self, values: &RecordValue) -> bool {
        self.fields
            .iter()
            .all(|(name, codec)| values.get(name).is_some_and(|v| codec.is_value(v)))
    }

    /// Encodes the declared fields into a flat item. Undeclared input fields
    /// are never emitted. A missing field or a value of the wrong shape is a
    /// precondition violation (check [`RecordCodec::is`] first to avoid it).
    pub fn encode(&self, values: &RecordValue) -> Result<Item, EncodeError> {
        let mut item = Item::new();
        for (name, codec) in &self.fields {
            let value = values
                .get(name)
                .ok_or_else(|| EncodeError::MissingField(name.clone()))?;
            let wire = codec
                .encode_value(value)
                .ok_or_else(|| EncodeError::WrongShape {
                    field: name.clone(),
                    expected: codec.codec_name(),
                })?;
            item.insert(name.clone(), wire);
        }
        Ok(item)
    }

    /// Decodes a flat item. Fails fast on the first missing field or field
    /// codec failure, in declared order; succeeds with every declared field.
    pub fn decode(&self, item: &Item) -> Result<RecordValue, DecodeError> {
        let mut out = RecordValue::new();
        for (name, codec) in &self.fields {
            let wire = item
                .get(name)
                .ok_or_else(|| DecodeError::missing_field(name, &codec.codec_name()))?;
            let value = codec
                .decode_value(wire)
                .map_err(|e| e.in_context(name.clone(), codec.codec_name(), wire.to_string()))?;
            out.insert(name.clone(), value);
        }
        Ok(out)
    }
}
