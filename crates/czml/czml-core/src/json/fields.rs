//! Field-by-field readers and writers for CZML record objects.
//!
//! A [`FieldReader`] decodes each known field independently: a field that
//! fails to decode is reported through the [`DecodeContext`] and left absent,
//! and keys nobody asked for are reported as ignored by
//! [`FieldReader::finish`]. A [`FieldWriter`] emits only fields that are set.

use serde_json::{Map, Value as JsonValue};

use crate::error::{DecodeError, EncodeError};
use crate::json::expect_object;
use crate::property_value::{PropertyData, PropertyValue};
use crate::report::DecodeContext;
use crate::value::Primitive;

pub struct FieldReader<'a> {
    obj: &'a Map<String, JsonValue>,
    ctx: &'a mut DecodeContext,
    known: Vec<&'static str>,
}

impl<'a> FieldReader<'a> {
    /// Fails only if `value` is not a JSON object.
    pub fn new(value: &'a JsonValue, ctx: &'a mut DecodeContext) -> Result<Self, DecodeError> {
        Ok(Self {
            obj: expect_object(value)?,
            ctx,
            known: Vec::new(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.obj.contains_key(key)
    }

    /// Treat `key` as handled without decoding it here.
    pub fn mark_known(&mut self, key: &'static str) {
        self.known.push(key);
    }

    /// Decode an optional [`PropertyValue`] field.
    pub fn value<T: PropertyData>(&mut self, key: &'static str) -> Option<PropertyValue<T>> {
        self.nested(key, PropertyValue::<T>::decode)
    }

    /// Decode an optional plain primitive field.
    pub fn primitive<P: Primitive>(&mut self, key: &'static str) -> Option<P> {
        self.nested(key, |value, _| P::from_json(value))
    }

    /// Decode an optional field with a custom decoder. Decode failures are
    /// recorded and yield `None`.
    pub fn nested<R>(
        &mut self,
        key: &'static str,
        decode: impl FnOnce(&JsonValue, &mut DecodeContext) -> Result<R, DecodeError>,
    ) -> Option<R> {
        self.known.push(key);
        let raw = self.obj.get(key)?;
        match self.ctx.scoped(key, |ctx| decode(raw, ctx)) {
            Ok(value) => Some(value),
            Err(error) => {
                self.ctx.skip(Some(key), error);
                None
            }
        }
    }

    /// Report every key that no accessor asked for.
    pub fn finish(self) {
        for key in self.obj.keys() {
            if !self.known.iter().any(|known| *known == key.as_str()) {
                self.ctx.ignore(key);
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct FieldWriter {
    map: Map<String, JsonValue>,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value<T: PropertyData>(
        &mut self,
        key: &str,
        value: &Option<PropertyValue<T>>,
    ) -> Result<(), EncodeError> {
        if let Some(value) = value {
            let json = value.to_json().map_err(|e| e.in_field(key))?;
            self.map.insert(key.to_string(), json);
        }
        Ok(())
    }

    pub fn primitive<P: Primitive>(&mut self, key: &str, value: &Option<P>) {
        if let Some(value) = value {
            self.map.insert(key.to_string(), value.to_json());
        }
    }

    pub fn insert(&mut self, key: &str, value: JsonValue) {
        self.map.insert(key.to_string(), value);
    }

    pub fn finish(self) -> JsonValue {
        JsonValue::Object(self.map)
    }
}
