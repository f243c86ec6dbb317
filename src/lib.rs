//! # attrcodec — typed codecs for a tagged attribute wire format
//!
//! A bidirectional codec layer between typed application values and the
//! self-describing, JSON-compatible attribute format used by key-value stores:
//! every wire value is an object with exactly one tag key (`S`, `N`, `BOOL`,
//! `SS`, `NS`, `NULL`, `M`, `L`).
//!
//! Schemas are built by composing codecs: primitives for the scalar and set
//! tags, `map`/`list` for homogeneous nesting, and `record` for heterogeneous
//! fixed-shape items. Encode is deterministic (sets and maps have a documented
//! order); decode validates and returns structured errors with a context trail
//! instead of panicking.
//!
//! ## Example
//!
//! ```
//! use attrcodec::{number, record, string, Value};
//!
//! let person = record()
//!     .field("id", string())
//!     .field("name", string())
//!     .field("age", number())
//!     .build()
//!     .unwrap();
//!
//! let mut values = attrcodec::RecordValue::new();
//! values.insert("id".to_string(), Value::from("123"));
//! values.insert("name".to_string(), Value::from("John"));
//! values.insert("age".to_string(), Value::from(30));
//!
//! let item = person.encode(&values).unwrap();
//! assert_eq!(serde_json::to_string(&item).unwrap(),
//!     r#"{"age":{"N":"30"},"id":{"S":"123"},"name":{"S":"John"}}"#);
//! assert_eq!(person.decode(&item).unwrap(), values);
//! ```

pub mod codec;
pub mod error;
pub mod record;
pub mod value;
pub mod wire;

pub use codec::{
    boolean, list, map, null, number, number_set, string, string_set, BoolCodec, Codec, ListCodec,
    MapCodec, NullCodec, NumberCodec, NumberSetCodec, StringCodec, StringSetCodec,
};
pub use error::{ContextFrame, DecodeError, EncodeError, SchemaError};
pub use record::{record, RecordBuilder, RecordCodec};
pub use value::{FromValue, IntoValue, Number, RecordValue, Value};
pub use wire::{Item, Tag, WireValue};
