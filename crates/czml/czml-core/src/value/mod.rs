//! Primitive value types and their canonical JSON encodings.
//!
//! Every primitive encodes to a compact JSON shape (mostly flat numeric
//! arrays) and decodes back from exactly that shape. Numeric primitives also
//! expose their components so they can be flattened into time-tagged sample
//! arrays by [`crate::property_value`].

use serde_json::Value as JsonValue;

use crate::error::DecodeError;

pub mod color;
pub mod enums;
pub mod geometry;
pub mod time;
pub mod uri;

pub use color::{Color, Rgba, Rgbaf};
pub use enums::{
    ClockRange, ClockStep, ExtrapolationType, HorizontalOrigin, InterpolationAlgorithm,
    LabelStyle, ReferenceFrame, VerticalOrigin,
};
pub use geometry::{
    BoundingRectangle, Cartesian2, Cartesian3, Cartographic, NearFarScalar, UnitQuaternion,
};
pub use time::{SampleTime, TimeInterval, TimeIntervalCollection};
pub use uri::Uri;

/// A value with a canonical standalone JSON encoding.
pub trait Primitive: Sized {
    fn to_json(&self) -> JsonValue;
    fn from_json(value: &JsonValue) -> Result<Self, DecodeError>;
}

/// A fixed-arity numeric primitive whose components can be laid out inline
/// in a sample array.
pub trait Components: Primitive {
    const ARITY: usize;
    /// Name used in error messages.
    const NAME: &'static str;

    /// Build from exactly `ARITY` JSON numbers.
    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError>;
    fn push_components(&self, out: &mut Vec<JsonValue>);
}

/// Implements [`Primitive`] as a flat array of the type's components.
macro_rules! array_primitive {
    ($ty:ty) => {
        impl $crate::value::Primitive for $ty {
            fn to_json(&self) -> serde_json::Value {
                let mut out = Vec::with_capacity(<$ty as $crate::value::Components>::ARITY);
                $crate::value::Components::push_components(self, &mut out);
                serde_json::Value::Array(out)
            }

            fn from_json(value: &serde_json::Value) -> Result<Self, $crate::error::DecodeError> {
                let items = $crate::json::expect_array(value)?;
                let arity = <$ty as $crate::value::Components>::ARITY;
                if items.len() != arity {
                    return Err($crate::error::DecodeError::arity(
                        <$ty as $crate::value::Components>::NAME,
                        arity,
                        items.len(),
                    ));
                }
                <$ty as $crate::value::Components>::from_components(items)
            }
        }
    };
}
pub(crate) use array_primitive;

impl Primitive for f64 {
    fn to_json(&self) -> JsonValue {
        crate::json::number(*self)
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        crate::json::expect_f64(value)
    }
}

impl Components for f64 {
    const ARITY: usize = 1;
    const NAME: &'static str = "number";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        match components {
            [value] => crate::json::expect_f64(value),
            other => Err(DecodeError::arity(Self::NAME, 1, other.len())),
        }
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.push(crate::json::number(*self));
    }
}

impl Primitive for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        value
            .as_bool()
            .ok_or_else(|| DecodeError::expected("boolean", value))
    }
}

impl Primitive for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        crate::json::expect_str(value).map(str::to_string)
    }
}
