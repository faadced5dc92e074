use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;
use crate::value::UnitQuaternion;

/// Rotation of the object's body axes, as a unit quaternion.
#[derive(Clone, Debug, PartialEq)]
pub struct Orientation {
    pub value: PropertyValue<UnitQuaternion>,
}

impl Orientation {
    pub fn new(value: impl Into<PropertyValue<UnitQuaternion>>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

impl CzmlProperty for Orientation {
    const KIND: PropertyKind = PropertyKind::Orientation;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        PropertyValue::decode(value, ctx).map(|value| Self { value })
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        self.value.to_json()
    }

    property_accessors!(Orientation);
}
