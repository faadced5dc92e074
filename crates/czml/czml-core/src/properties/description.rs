use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;

/// Free-form (usually HTML) description shown for the object.
#[derive(Clone, Debug, PartialEq)]
pub struct Description {
    pub value: PropertyValue<String>,
}

impl Description {
    pub fn new(value: impl Into<PropertyValue<String>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl CzmlProperty for Description {
    const KIND: PropertyKind = PropertyKind::Description;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        PropertyValue::decode(value, ctx).map(|value| Self { value })
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        self.value.to_json()
    }

    property_accessors!(Description);
}
