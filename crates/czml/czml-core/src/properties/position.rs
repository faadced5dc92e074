use serde_json::{Map, Value as JsonValue};

use super::{property_accessors, CzmlProperty, PropertyKind};
use crate::error::{DecodeError, EncodeError};
use crate::property_value::{PropertyData, PropertyValue};
use crate::report::DecodeContext;
use crate::value::{Cartesian3, Cartographic, Components, Primitive, ReferenceFrame};

const CARTESIAN: &str = "cartesian";
const CARTOGRAPHIC_DEGREES: &str = "cartographicDegrees";
const CARTOGRAPHIC_RADIANS: &str = "cartographicRadians";
const REFERENCE_FRAME: &str = "referenceFrame";

/// A single position in one of the three CZML coordinate representations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionValue {
    /// Earth-fixed cartesian metres.
    Cartesian(Cartesian3),
    CartographicDegrees(Cartographic),
    CartographicRadians(Cartographic),
}

impl PositionValue {
    pub fn cartesian(x: f64, y: f64, z: f64) -> Self {
        PositionValue::Cartesian(Cartesian3::new(x, y, z))
    }

    pub fn cartographic_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        PositionValue::CartographicDegrees(Cartographic::new(longitude, latitude, height))
    }

    pub fn cartographic_radians(longitude: f64, latitude: f64, height: f64) -> Self {
        PositionValue::CartographicRadians(Cartographic::new(longitude, latitude, height))
    }
}

impl PropertyData for PositionValue {
    const KEYS: &'static [&'static str] = &[CARTESIAN, CARTOGRAPHIC_DEGREES, CARTOGRAPHIC_RADIANS];

    fn representation(&self) -> &'static str {
        match self {
            PositionValue::Cartesian(_) => CARTESIAN,
            PositionValue::CartographicDegrees(_) => CARTOGRAPHIC_DEGREES,
            PositionValue::CartographicRadians(_) => CARTOGRAPHIC_RADIANS,
        }
    }

    fn decode_keyed(key: &'static str, value: &JsonValue) -> Result<Self, DecodeError> {
        match key {
            CARTOGRAPHIC_DEGREES => Cartographic::from_json(value).map(PositionValue::CartographicDegrees),
            CARTOGRAPHIC_RADIANS => Cartographic::from_json(value).map(PositionValue::CartographicRadians),
            _ => Cartesian3::from_json(value).map(PositionValue::Cartesian),
        }
    }

    fn encode_keyed(&self) -> JsonValue {
        match self {
            PositionValue::Cartesian(c) => c.to_json(),
            PositionValue::CartographicDegrees(c) | PositionValue::CartographicRadians(c) => c.to_json(),
        }
    }

    fn sample_arity(key: &str) -> Option<usize> {
        Self::KEYS.iter().any(|k| *k == key).then_some(3)
    }

    fn decode_components(key: &'static str, components: &[JsonValue]) -> Result<Self, DecodeError> {
        match key {
            CARTOGRAPHIC_DEGREES => {
                Cartographic::from_components(components).map(PositionValue::CartographicDegrees)
            }
            CARTOGRAPHIC_RADIANS => {
                Cartographic::from_components(components).map(PositionValue::CartographicRadians)
            }
            _ => Cartesian3::from_components(components).map(PositionValue::Cartesian),
        }
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        match self {
            PositionValue::Cartesian(c) => Components::push_components(c, out),
            PositionValue::CartographicDegrees(c) | PositionValue::CartographicRadians(c) => {
                c.push_components(out)
            }
        }
    }
}

/// Where a packet's object is, possibly changing over time.
///
/// `reference_frame` belongs to the object form and acts as the default for
/// every interval. In the array form each interval object may carry its own
/// frame; those are kept in `interval_frames`, parallel to the intervals.
#[derive(Clone, Debug, PartialEq)]
pub struct Position {
    pub value: PropertyValue<PositionValue>,
    pub reference_frame: Option<ReferenceFrame>,
    pub interval_frames: Vec<Option<ReferenceFrame>>,
}

impl Position {
    pub fn new(value: impl Into<PropertyValue<PositionValue>>) -> Self {
        Self {
            value: value.into(),
            reference_frame: None,
            interval_frames: Vec::new(),
        }
    }

    pub fn with_reference_frame(mut self, frame: ReferenceFrame) -> Self {
        self.reference_frame = Some(frame);
        self
    }

    pub fn with_interval_frames(
        mut self,
        frames: impl IntoIterator<Item = Option<ReferenceFrame>>,
    ) -> Self {
        self.interval_frames = frames.into_iter().collect();
        self
    }

    /// Frame in effect for the interval at `index`.
    pub fn frame_of(&self, index: usize) -> Option<ReferenceFrame> {
        self.interval_frames
            .get(index)
            .copied()
            .flatten()
            .or(self.reference_frame)
    }
}

fn decode_frame(value: Option<&JsonValue>, ctx: &mut DecodeContext) -> Option<ReferenceFrame> {
    match value.map(ReferenceFrame::from_json).transpose() {
        Ok(frame) => frame,
        Err(error) => {
            ctx.skip(Some(REFERENCE_FRAME), error);
            None
        }
    }
}

fn without_frame(obj: &Map<String, JsonValue>) -> JsonValue {
    let mut rest = obj.clone();
    rest.remove(REFERENCE_FRAME);
    JsonValue::Object(rest)
}

impl CzmlProperty for Position {
    const KIND: PropertyKind = PropertyKind::Position;

    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Object(obj) => Ok(Self {
                value: PropertyValue::decode(&without_frame(obj), ctx)?,
                reference_frame: decode_frame(obj.get(REFERENCE_FRAME), ctx),
                interval_frames: Vec::new(),
            }),
            JsonValue::Array(items) => {
                let mut rest = Vec::with_capacity(items.len());
                let mut interval_frames = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        JsonValue::Object(obj) => {
                            interval_frames.push(decode_frame(obj.get(REFERENCE_FRAME), ctx));
                            rest.push(without_frame(obj));
                        }
                        other => {
                            interval_frames.push(None);
                            rest.push(other.clone());
                        }
                    }
                }
                if interval_frames.iter().all(Option::is_none) {
                    interval_frames.clear();
                }
                Ok(Self {
                    value: PropertyValue::decode(&JsonValue::Array(rest), ctx)?,
                    reference_frame: None,
                    interval_frames,
                })
            }
            other => Ok(Self::new(PropertyValue::decode(other, ctx)?)),
        }
    }

    fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut json = self.value.to_json()?;
        match &mut json {
            JsonValue::Object(obj) => {
                if let Some(frame) = self.frame_of(0) {
                    obj.insert(REFERENCE_FRAME.into(), frame.to_json());
                }
            }
            JsonValue::Array(items) => {
                for (index, item) in items.iter_mut().enumerate() {
                    if let (JsonValue::Object(obj), Some(frame)) = (item, self.frame_of(index)) {
                        obj.insert(REFERENCE_FRAME.into(), frame.to_json());
                    }
                }
            }
            _ => {}
        }
        Ok(json)
    }

    property_accessors!(Position);
}
