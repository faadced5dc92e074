use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::json::{FieldReader, FieldWriter};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;
use crate::value::Uri;

/// A glTF model placed at the object's position and orientation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub show: Option<PropertyValue<bool>>,
    pub gltf: Option<PropertyValue<Uri>>,
    pub scale: Option<PropertyValue<f64>>,
    pub minimum_pixel_size: Option<PropertyValue<f64>>,
    pub maximum_scale: Option<PropertyValue<f64>>,
    pub run_animations: Option<PropertyValue<bool>>,
}

impl Model {
    pub fn new(gltf: impl Into<PropertyValue<Uri>>) -> Self {
        Self {
            gltf: Some(gltf.into()),
            ..Self::default()
        }
    }

    pub fn with_show(mut self, show: impl Into<PropertyValue<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_scale(mut self, scale: impl Into<PropertyValue<f64>>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    pub fn with_minimum_pixel_size(mut self, size: impl Into<PropertyValue<f64>>) -> Self {
        self.minimum_pixel_size = Some(size.into());
        self
    }

    pub fn with_maximum_scale(mut self, scale: impl Into<PropertyValue<f64>>) -> Self {
        self.maximum_scale = Some(scale.into());
        self
    }

    pub fn with_run_animations(mut self, run: impl Into<PropertyValue<bool>>) -> Self {
        self.run_animations = Some(run.into());
        self
    }
}

impl CzmlProperty for Model {
    const KIND: PropertyKind = PropertyKind::Model;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let model = Self {
            show: fields.value("show"),
            gltf: fields.value("gltf"),
            scale: fields.value("scale"),
            minimum_pixel_size: fields.value("minimumPixelSize"),
            maximum_scale: fields.value("maximumScale"),
            run_animations: fields.value("runAnimations"),
        };
        fields.finish();
        Ok(model)
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = FieldWriter::new();
        out.value("show", &self.show)?;
        out.value("gltf", &self.gltf)?;
        out.value("scale", &self.scale)?;
        out.value("minimumPixelSize", &self.minimum_pixel_size)?;
        out.value("maximumScale", &self.maximum_scale)?;
        out.value("runAnimations", &self.run_animations)?;
        Ok(out.finish())
    }

    property_accessors!(Model);
}
