use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::json::{FieldReader, FieldWriter};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;
use crate::value::{Color, NearFarScalar};

/// A dot of fixed screen size drawn at the object's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub show: Option<PropertyValue<bool>>,
    pub pixel_size: Option<PropertyValue<f64>>,
    pub color: Option<PropertyValue<Color>>,
    pub outline_color: Option<PropertyValue<Color>>,
    pub outline_width: Option<PropertyValue<f64>>,
    pub scale_by_distance: Option<PropertyValue<NearFarScalar>>,
}

impl Point {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show(mut self, show: impl Into<PropertyValue<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_pixel_size(mut self, size: impl Into<PropertyValue<f64>>) -> Self {
        self.pixel_size = Some(size.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<PropertyValue<Color>>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_outline_color(mut self, color: impl Into<PropertyValue<Color>>) -> Self {
        self.outline_color = Some(color.into());
        self
    }

    pub fn with_outline_width(mut self, width: impl Into<PropertyValue<f64>>) -> Self {
        self.outline_width = Some(width.into());
        self
    }

    pub fn with_scale_by_distance(mut self, scalar: impl Into<PropertyValue<NearFarScalar>>) -> Self {
        self.scale_by_distance = Some(scalar.into());
        self
    }
}

impl CzmlProperty for Point {
    const KIND: PropertyKind = PropertyKind::Point;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let point = Self {
            show: fields.value("show"),
            pixel_size: fields.value("pixelSize"),
            color: fields.value("color"),
            outline_color: fields.value("outlineColor"),
            outline_width: fields.value("outlineWidth"),
            scale_by_distance: fields.value("scaleByDistance"),
        };
        fields.finish();
        Ok(point)
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = FieldWriter::new();
        out.value("show", &self.show)?;
        out.value("pixelSize", &self.pixel_size)?;
        out.value("color", &self.color)?;
        out.value("outlineColor", &self.outline_color)?;
        out.value("outlineWidth", &self.outline_width)?;
        out.value("scaleByDistance", &self.scale_by_distance)?;
        Ok(out.finish())
    }

    property_accessors!(Point);
}
