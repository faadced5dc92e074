use serde_json::Value as JsonValue;

use super::{property_accessors, CzmlProperty, Material, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::json::{expect_array, FieldReader, FieldWriter};
use crate::property_value::{PropertyData, PropertyValue};
use crate::report::DecodeContext;
use crate::value::{Cartesian3, Cartographic, Components};

const CARTESIAN: &str = "cartesian";
const CARTOGRAPHIC_DEGREES: &str = "cartographicDegrees";
const CARTOGRAPHIC_RADIANS: &str = "cartographicRadians";

/// An ordered list of positions sharing one representation.
/// JSON: a flat array, e.g. `{"cartesian": [x0, y0, z0, x1, y1, z1]}`.
#[derive(Clone, Debug, PartialEq)]
pub enum PositionList {
    Cartesian(Vec<Cartesian3>),
    CartographicDegrees(Vec<Cartographic>),
    CartographicRadians(Vec<Cartographic>),
}

impl PositionList {
    /// Longitude/latitude/height triples in degrees.
    pub fn degrees(points: impl IntoIterator<Item = (f64, f64, f64)>) -> Self {
        PositionList::CartographicDegrees(
            points
                .into_iter()
                .map(|(lon, lat, height)| Cartographic::new(lon, lat, height))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        match self {
            PositionList::Cartesian(points) => points.len(),
            PositionList::CartographicDegrees(points) | PositionList::CartographicRadians(points) => {
                points.len()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn flat_list<C: Components>(value: &JsonValue) -> Result<Vec<C>, DecodeError> {
    let items = expect_array(value)?;
    if items.len() % C::ARITY != 0 {
        return Err(DecodeError::arity(
            C::NAME,
            format!("a multiple of {}", C::ARITY),
            items.len(),
        ));
    }
    items.chunks(C::ARITY).map(C::from_components).collect()
}

fn flatten<C: Components>(points: &[C]) -> JsonValue {
    let mut out = Vec::with_capacity(points.len() * C::ARITY);
    for point in points {
        point.push_components(&mut out);
    }
    JsonValue::Array(out)
}

impl PropertyData for PositionList {
    const KEYS: &'static [&'static str] = &[CARTESIAN, CARTOGRAPHIC_DEGREES, CARTOGRAPHIC_RADIANS];

    fn representation(&self) -> &'static str {
        match self {
            PositionList::Cartesian(_) => CARTESIAN,
            PositionList::CartographicDegrees(_) => CARTOGRAPHIC_DEGREES,
            PositionList::CartographicRadians(_) => CARTOGRAPHIC_RADIANS,
        }
    }

    fn decode_keyed(key: &'static str, value: &JsonValue) -> Result<Self, DecodeError> {
        match key {
            CARTOGRAPHIC_DEGREES => flat_list(value).map(PositionList::CartographicDegrees),
            CARTOGRAPHIC_RADIANS => flat_list(value).map(PositionList::CartographicRadians),
            _ => flat_list(value).map(PositionList::Cartesian),
        }
    }

    fn encode_keyed(&self) -> JsonValue {
        match self {
            PositionList::Cartesian(points) => flatten(points),
            PositionList::CartographicDegrees(points) | PositionList::CartographicRadians(points) => {
                flatten(points)
            }
        }
    }
}

/// A line through a list of positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    pub show: Option<PropertyValue<bool>>,
    pub positions: Option<PropertyValue<PositionList>>,
    pub width: Option<PropertyValue<f64>>,
    pub material: Option<Material>,
    pub clamp_to_ground: Option<PropertyValue<bool>>,
}

impl Polyline {
    pub fn new(positions: impl Into<PropertyValue<PositionList>>) -> Self {
        Self {
            positions: Some(positions.into()),
            ..Self::default()
        }
    }

    pub fn with_show(mut self, show: impl Into<PropertyValue<bool>>) -> Self {
        self.show = Some(show.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<PropertyValue<f64>>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_material(mut self, material: impl Into<Material>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_clamp_to_ground(mut self, clamp: impl Into<PropertyValue<bool>>) -> Self {
        self.clamp_to_ground = Some(clamp.into());
        self
    }
}

impl CzmlProperty for Polyline {
    const KIND: PropertyKind = PropertyKind::Polyline;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let polyline = Self {
            show: fields.value("show"),
            positions: fields.value("positions"),
            width: fields.value("width"),
            material: fields.nested("material", Material::decode),
            clamp_to_ground: fields.value("clampToGround"),
        };
        fields.finish();
        Ok(polyline)
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut out = FieldWriter::new();
        out.value("show", &self.show)?;
        out.value("positions", &self.positions)?;
        out.value("width", &self.width)?;
        if let Some(material) = &self.material {
            out.insert("material", material.to_json().map_err(|e| e.in_field("material"))?);
        }
        out.value("clampToGround", &self.clamp_to_ground)?;
        Ok(out.finish())
    }

    property_accessors!(Polyline);
}
