use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::json::{FieldReader, FieldWriter};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;
use crate::value::{Cartesian2, Cartesian3, Color, HorizontalOrigin, NearFarScalar, Uri, VerticalOrigin};

/// A screen-aligned image drawn at the object's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Billboard {
    pub show: Option<PropertyValue<bool>>,
    pub image: Option<PropertyValue<Uri>>,
    pub scale: Option<PropertyValue<f64>>,
    pub pixel_offset: Option<PropertyValue<Cartesian2>>,
    pub eye_offset: Option<PropertyValue<Cartesian3>>,
    pub horizontal_origin: Option<PropertyValue<HorizontalOrigin>>,
    pub vertical_origin: Option<PropertyValue<VerticalOrigin>>,
    pub color: Option<PropertyValue<Color>>,
    /// Radians, counter-clockwise.
    pub rotation: Option<PropertyValue<f64>>,
    pub width: Option<PropertyValue<f64>>,
    pub height: Option<PropertyValue<f64>>,
    pub scale_by_distance: Option<PropertyValue<NearFarScalar>>,
}

impl Billboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show(mut self, show: impl Into<PropertyValue<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<PropertyValue<Uri>>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_scale(mut self, scale: impl Into<PropertyValue<f64>>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn with_pixel_offset(mut self, offset: impl Into<PropertyValue<Cartesian2>>) -> Self {
        self.pixel_offset = Some(offset.into());
        self
    }

    pub fn with_eye_offset(mut self, offset: impl Into<PropertyValue<Cartesian3>>) -> Self {
        self.eye_offset = Some(offset.into());
        self
    }

    pub fn with_horizontal_origin(
        mut self,
        origin: impl Into<PropertyValue<HorizontalOrigin>>,
    ) -> Self {
        self.horizontal_origin = Some(origin.into());
        self
    }

    pub fn with_vertical_origin(mut self, origin: impl Into<PropertyValue<VerticalOrigin>>) -> Self {
        self.vertical_origin = Some(origin.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<PropertyValue<Color>>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_rotation(mut self, rotation: impl Into<PropertyValue<f64>>) -> Self {
        self.rotation = Some(rotation.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<PropertyValue<f64>>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<PropertyValue<f64>>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_scale_by_distance(mut self, scalar: impl Into<PropertyValue<NearFarScalar>>) -> Self {
        self.scale_by_distance = Some(scalar.into());
        self
    }
}

impl CzmlProperty for Billboard {
    const KIND: PropertyKind = PropertyKind::Billboard;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let billboard = Self {
            show: fields.value("show"),
            image: fields.value("image"),
            scale: fields.value("scale"),
            pixel_offset: fields.value("pixelOffset"),
            eye_offset: fields.value("eyeOffset"),
            horizontal_origin: fields.value("horizontalOrigin"),
            vertical_origin: fields.value("verticalOrigin"),
            color: fields.value("color"),
            rotation: fields.value("rotation"),
            width: fields.value("width"),
            height: fields.value("height"),
            scale_by_distance: fields.value("scaleByDistance"),
        };
        fields.finish();
        Ok(billboard)
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = FieldWriter::new();
        out.value("show", &self.show)?;
        out.value("image", &self.image)?;
        out.value("scale", &self.scale)?;
        out.value("pixelOffset", &self.pixel_offset)?;
        out.value("eyeOffset", &self.eye_offset)?;
        out.value("horizontalOrigin", &self.horizontal_origin)?;
        out.value("verticalOrigin", &self.vertical_origin)?;
        out.value("color", &self.color)?;
        out.value("rotation", &self.rotation)?;
        out.value("width", &self.width)?;
        out.value("height", &self.height)?;
        out.value("scaleByDistance", &self.scale_by_distance)?;
        Ok(out.finish())
    }

    property_accessors!(Billboard);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Rgba;
    use serde_json::json;

    #[test]
    fn decodes_scale_and_image() {
        let j = json!({ "image": "http://localhost/img.png", "scale": 0.7 });
        let mut ctx = DecodeContext::default();
        let billboard = Billboard::decode(&j, &mut ctx).unwrap();
        assert_eq!(billboard.scale, Some(PropertyValue::Constant(0.7)));
        assert_eq!(
            billboard.image,
            Some(PropertyValue::Constant(Uri::new("http://localhost/img.png")))
        );
        assert!(billboard.show.is_none());
        assert!(ctx.report().is_complete());
        assert_eq!(billboard.to_json().unwrap(), j);
    }

    #[test]
    fn builder_output() {
        let billboard = Billboard::new()
            .with_image("data:image/png;base64,AAAA")
            .with_horizontal_origin(HorizontalOrigin::Left)
            .with_color(Color::Rgba(Rgba::opaque(255, 0, 0)))
            .with_pixel_offset(Cartesian2::new(4.0, -2.5));
        assert_eq!(
            billboard.to_json().unwrap(),
            json!({
                "image": "data:image/png;base64,AAAA",
                "horizontalOrigin": "LEFT",
                "color": { "rgba": [255, 0, 0, 255] },
                "pixelOffset": { "cartesian2": [4, -2.5] }
            })
        );
    }

    #[test]
    fn invalid_field_does_not_sink_the_billboard() {
        let j = json!({ "scale": 2, "verticalOrigin": "SIDEWAYS", "glow": true });
        let mut ctx = DecodeContext::default();
        let billboard = Billboard::decode(&j, &mut ctx).unwrap();
        assert_eq!(billboard.scale, Some(PropertyValue::Constant(2.0)));
        assert!(billboard.vertical_origin.is_none());
        assert_eq!(ctx.report().issues().len(), 1);
        assert_eq!(ctx.report().ignored().len(), 1);
    }

    #[test]
    fn non_object_is_an_error() {
        let mut ctx = DecodeContext::default();
        assert!(Billboard::decode(&json!([1, 2]), &mut ctx).is_err());
    }
}
