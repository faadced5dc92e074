use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, Material, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::json::{FieldReader, FieldWriter};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;

/// The trail an object's position traces over time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub show: Option<PropertyValue<bool>>,
    /// Seconds ahead of the current time to draw.
    pub lead_time: Option<PropertyValue<f64>>,
    /// Seconds behind the current time to draw.
    pub trail_time: Option<PropertyValue<f64>>,
    pub width: Option<PropertyValue<f64>>,
    /// Maximum step, in seconds, between sampled points.
    pub resolution: Option<PropertyValue<f64>>,
    pub material: Option<Material>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_show(mut self, show: impl Into<PropertyValue<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_lead_time(mut self, seconds: impl Into<PropertyValue<f64>>) -> Self {
        self.lead_time = Some(seconds.into());
        self
    }

    pub fn with_trail_time(mut self, seconds: impl Into<PropertyValue<f64>>) -> Self {
        self.trail_time = Some(seconds.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<PropertyValue<f64>>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_resolution(mut self, seconds: impl Into<PropertyValue<f64>>) -> Self {
        self.resolution = Some(seconds.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<Material>) -> Self {
        self.material = Some(material.into());
        self
    }
}

impl CzmlProperty for Path {
    const KIND: PropertyKind = PropertyKind::Path;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let path = Self {
            show: fields.value("show"),
            lead_time: fields.value("leadTime"),
            trail_time: fields.value("trailTime"),
            width: fields.value("width"),
            resolution: fields.value("resolution"),
            material: fields.nested("material", Material::decode),
        };
        fields.finish();
        Ok(path)
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = FieldWriter::new();
        out.value("show", &self.show)?;
        out.value("leadTime", &self.lead_time)?;
        out.value("trailTime", &self.trail_time)?;
        out.value("width", &self.width)?;
        out.value("resolution", &self.resolution)?;
        if let Some(material) = &self.material {
            out.insert("material", material.to_json().map_err(|e| e.in_field("material"))?);
        }
        Ok(out.finish())
    }

    property_accessors!(Path);
}
