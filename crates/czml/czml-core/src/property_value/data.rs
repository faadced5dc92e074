//! [`PropertyData`] for the primitive value types.

use serde_json::Value as JsonValue;

use super::PropertyData;
use crate::error::DecodeError;
use crate::value::{
    BoundingRectangle, Cartesian2, Cartesian3, Color, Components, HorizontalOrigin, LabelStyle,
    NearFarScalar, Primitive, Rgba, Rgbaf, UnitQuaternion, Uri, VerticalOrigin,
};

/// A numeric primitive stored under a single key that can be time-tagged.
macro_rules! sampled_data {
    ($ty:ty, $key:literal) => {
        impl PropertyData for $ty {
            const KEYS: &'static [&'static str] = &[$key];

            fn representation(&self) -> &'static str {
                $key
            }

            fn decode_keyed(_key: &'static str, value: &JsonValue) -> Result<Self, DecodeError> {
                <$ty as Primitive>::from_json(value)
            }

            fn encode_keyed(&self) -> JsonValue {
                Primitive::to_json(self)
            }

            fn sample_arity(key: &str) -> Option<usize> {
                (key == $key).then_some(<$ty as Components>::ARITY)
            }

            fn decode_components(
                _key: &'static str,
                components: &[JsonValue],
            ) -> Result<Self, DecodeError> {
                <$ty as Components>::from_components(components)
            }

            fn push_components(&self, out: &mut Vec<JsonValue>) {
                Components::push_components(self, out)
            }
        }
    };
}

/// A scalar primitive that may appear unwrapped or under a single key.
macro_rules! bare_data {
    ($ty:ty, $key:literal) => {
        impl PropertyData for $ty {
            const KEYS: &'static [&'static str] = &[$key];

            fn representation(&self) -> &'static str {
                $key
            }

            fn decode_keyed(_key: &'static str, value: &JsonValue) -> Result<Self, DecodeError> {
                <$ty as Primitive>::from_json(value)
            }

            fn encode_keyed(&self) -> JsonValue {
                Primitive::to_json(self)
            }

            fn decode_bare(value: &JsonValue) -> Option<Result<Self, DecodeError>> {
                Some(<$ty as Primitive>::from_json(value))
            }

            fn encode_bare(&self) -> Option<JsonValue> {
                Some(Primitive::to_json(self))
            }
        }
    };
}

sampled_data!(Cartesian2, "cartesian2");
sampled_data!(Cartesian3, "cartesian");
sampled_data!(UnitQuaternion, "unitQuaternion");
sampled_data!(NearFarScalar, "nearFarScalar");
sampled_data!(BoundingRectangle, "boundingRectangle");

bare_data!(bool, "boolean");
bare_data!(String, "string");
bare_data!(Uri, "uri");
bare_data!(HorizontalOrigin, "horizontalOrigin");
bare_data!(VerticalOrigin, "verticalOrigin");
bare_data!(LabelStyle, "labelStyle");

/// Numbers are both bare (`"scale": 0.7`) and sampleable (`"number": [t, v, ...]`).
impl PropertyData for f64 {
    const KEYS: &'static [&'static str] = &["number"];

    fn representation(&self) -> &'static str {
        "number"
    }

    fn decode_keyed(_key: &'static str, value: &JsonValue) -> Result<Self, DecodeError> {
        f64::from_json(value)
    }

    fn encode_keyed(&self) -> JsonValue {
        self.to_json()
    }

    fn decode_bare(value: &JsonValue) -> Option<Result<Self, DecodeError>> {
        Some(f64::from_json(value))
    }

    fn encode_bare(&self) -> Option<JsonValue> {
        Some(self.to_json())
    }

    fn sample_arity(key: &str) -> Option<usize> {
        (key == "number").then_some(1)
    }

    fn decode_components(_key: &'static str, components: &[JsonValue]) -> Result<Self, DecodeError> {
        <f64 as Components>::from_components(components)
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        Components::push_components(self, out)
    }
}

impl PropertyData for Color {
    const KEYS: &'static [&'static str] = &["rgba", "rgbaf"];

    fn representation(&self) -> &'static str {
        match self {
            Color::Rgba(_) => "rgba",
            Color::Rgbaf(_) => "rgbaf",
        }
    }

    fn decode_keyed(key: &'static str, value: &JsonValue) -> Result<Self, DecodeError> {
        if key == "rgbaf" {
            Rgbaf::from_json(value).map(Color::Rgbaf)
        } else {
            Rgba::from_json(value).map(Color::Rgba)
        }
    }

    fn encode_keyed(&self) -> JsonValue {
        match self {
            Color::Rgba(c) => c.to_json(),
            Color::Rgbaf(c) => c.to_json(),
        }
    }

    fn sample_arity(key: &str) -> Option<usize> {
        Self::KEYS.iter().any(|k| *k == key).then_some(4)
    }

    fn decode_components(key: &'static str, components: &[JsonValue]) -> Result<Self, DecodeError> {
        if key == "rgbaf" {
            Rgbaf::from_components(components).map(Color::Rgbaf)
        } else {
            Rgba::from_components(components).map(Color::Rgba)
        }
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        match self {
            Color::Rgba(c) => c.push_components(out),
            Color::Rgbaf(c) => c.push_components(out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn color_keys_select_channel_encoding() {
        let c = Color::decode_keyed("rgbaf", &json!([1, 0.5, 0, 1])).unwrap();
        assert_eq!(c, Color::rgbaf(1.0, 0.5, 0.0, 1.0));
        assert_eq!(c.representation(), "rgbaf");
        assert_eq!(Color::sample_arity("rgba"), Some(4));
        assert_eq!(Color::sample_arity("uri"), None);
    }

    #[test]
    fn bare_types_are_not_sampleable() {
        assert_eq!(<Uri as PropertyData>::sample_arity("uri"), None);
        assert!(matches!(
            <bool as PropertyData>::decode_components("boolean", &[json!(true)]),
            Err(DecodeError::NotSampleable("boolean"))
        ));
    }

    #[test]
    fn bare_decode_reports_type_mismatch() {
        let err = <bool as PropertyData>::decode_bare(&json!("yes")).unwrap().unwrap_err();
        assert!(matches!(err, DecodeError::ExpectedType { expected: "boolean", .. }));
    }
}
