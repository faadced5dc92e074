use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::json::{FieldReader, FieldWriter};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;
use crate::value::{Cartesian2, Cartesian3, Color, HorizontalOrigin, LabelStyle, VerticalOrigin};

/// Text drawn at the object's position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Label {
    pub show: Option<PropertyValue<bool>>,
    pub text: Option<PropertyValue<String>>,
    /// CSS font string, e.g. `"11pt Lucida Console"`.
    pub font: Option<PropertyValue<String>>,
    pub style: Option<PropertyValue<LabelStyle>>,
    pub scale: Option<PropertyValue<f64>>,
    pub fill_color: Option<PropertyValue<Color>>,
    pub outline_color: Option<PropertyValue<Color>>,
    pub outline_width: Option<PropertyValue<f64>>,
    pub horizontal_origin: Option<PropertyValue<HorizontalOrigin>>,
    pub vertical_origin: Option<PropertyValue<VerticalOrigin>>,
    pub pixel_offset: Option<PropertyValue<Cartesian2>>,
    pub eye_offset: Option<PropertyValue<Cartesian3>>,
}

impl Label {
    pub fn new(text: impl Into<PropertyValue<String>>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_show(mut self, show: impl Into<PropertyValue<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_font(mut self, font: impl Into<PropertyValue<String>>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<PropertyValue<LabelStyle>>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_scale(mut self, scale: impl Into<PropertyValue<f64>>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn with_fill_color(mut self, color: impl Into<PropertyValue<Color>>) -> Self {
        self.fill_color = Some(color.into());
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

    pub fn with_pixel_offset(mut self, offset: impl Into<PropertyValue<Cartesian2>>) -> Self {
        self.pixel_offset = Some(offset.into());
        self
    }

    pub fn with_eye_offset(mut self, offset: impl Into<PropertyValue<Cartesian3>>) -> Self {
        self.eye_offset = Some(offset.into());
        self
    }
}

impl CzmlProperty for Label {
    const KIND: PropertyKind = PropertyKind::Label;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let label = Self {
            show: fields.value("show"),
            text: fields.value("text"),
            font: fields.value("font"),
            style: fields.value("style"),
            scale: fields.value("scale"),
            fill_color: fields.value("fillColor"),
            outline_color: fields.value("outlineColor"),
            outline_width: fields.value("outlineWidth"),
            horizontal_origin: fields.value("horizontalOrigin"),
            vertical_origin: fields.value("verticalOrigin"),
            pixel_offset: fields.value("pixelOffset"),
            eye_offset: fields.value("eyeOffset"),
        };
        fields.finish();
        Ok(label)
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = FieldWriter::new();
        out.value("show", &self.show)?;
        out.value("text", &self.text)?;
        out.value("font", &self.font)?;
        out.value("style", &self.style)?;
        out.value("scale", &self.scale)?;
        out.value("fillColor", &self.fill_color)?;
        out.value("outlineColor", &self.outline_color)?;
        out.value("outlineWidth", &self.outline_width)?;
        out.value("horizontalOrigin", &self.horizontal_origin)?;
        out.value("verticalOrigin", &self.vertical_origin)?;
        out.value("pixelOffset", &self.pixel_offset)?;
        out.value("eyeOffset", &self.eye_offset)?;
        Ok(out.finish())
    }

    property_accessors!(Label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property_value::Interval;
    use crate::value::TimeInterval;
    use serde_json::json;

    #[test]
    fn round_trips_typical_label() {
        let j = json!({
            "text": "ISS",
            "font": "11pt Lucida Console",
            "style": "FILL_AND_OUTLINE",
            "fillColor": { "rgba": [255, 255, 0, 255] },
            "outlineWidth": 2,
            "horizontalOrigin": "LEFT",
            "pixelOffset": { "cartesian2": [12, 0] }
        });
        let mut ctx = DecodeContext::default();
        let label = Label::decode(&j, &mut ctx).unwrap();
        assert_eq!(label.style, Some(PropertyValue::Constant(LabelStyle::FillAndOutline)));
        assert_eq!(label.fill_color, Some(PropertyValue::Constant(Color::rgba(255, 255, 0, 255))));
        assert!(ctx.report().is_complete());
        assert_eq!(label.to_json().unwrap(), j);
    }

    #[test]
    fn text_can_change_over_intervals() {
        let j = json!([
            { "interval": "2012-01-01T00:00:00Z/2012-01-01T00:10:00Z", "string": "approaching" },
            { "interval": "2012-01-01T00:10:00Z/2012-01-01T00:20:00Z", "string": "overhead" }
        ]);
        let mut ctx = DecodeContext::default();
        let label = Label::decode(&json!({ "text": j }), &mut ctx).unwrap();
        let text = label.text.as_ref().unwrap();
        assert_eq!(text.intervals().map(<[Interval<String>]>::len), Some(2));
        assert_eq!(label.to_json().unwrap(), json!({ "text": j }));
    }

    #[test]
    fn builder_sets_text() {
        let label = Label::new("hello").with_show(
            PropertyValue::Intervals(vec![Interval::constant(TimeInterval::new("a", "b"), false)]),
        );
        assert_eq!(
            label.to_json().unwrap(),
            json!({
                "show": { "interval": "a/b", "boolean": false },
                "text": "hello"
            })
        );
    }
}
