//! `PropertyValue<T>`: a CZML property value that is either constant or
//! given as time intervals of time-tagged samples.
//!
//! JSON shapes understood for a `T` whose representation key is `cartesian`:
//!
//! ```text
//! {"cartesian": [1, 2, 3]}                                   constant
//! {"epoch": "...", "cartesian": [0, 1, 2, 3, 60, 4, 5, 6]}   one interval, two samples
//! {"interval": "a/b", "cartesian": [1, 2, 3]}                one interval, one untagged sample
//! [{"interval": "a/b", ...}, {"interval": "b/c", ...}]       several intervals
//! {"reference": "other#position"}                            reference
//! {"interval": "a/b", "reference": "other#position"}         reference within one interval
//! ```
//!
//! Types with a bare form (numbers, booleans, strings, string enums) may
//! also appear unwrapped, e.g. `"scale": 0.7`.
//!
//! Which form a value takes is decided structurally; the decoded form is the
//! form that is encoded back.

use std::fmt;

use serde_json::{Map, Value as JsonValue};

use crate::error::{DecodeError, EncodeError};
use crate::json::{expect_f64, expect_object, expect_str};
use crate::report::DecodeContext;
use crate::value::{ExtrapolationType, InterpolationAlgorithm, Primitive, SampleTime, TimeInterval};

mod data;
mod reference;

pub use reference::Reference;

const INTERVAL: &str = "interval";
const EPOCH: &str = "epoch";
const REFERENCE: &str = "reference";
const INTERPOLATION_ALGORITHM: &str = "interpolationAlgorithm";
const INTERPOLATION_DEGREE: &str = "interpolationDegree";
const FORWARD_EXTRAPOLATION: &str = "forwardExtrapolationType";
const BACKWARD_EXTRAPOLATION: &str = "backwardExtrapolationType";

/// Keys that mark an object as an interval rather than a constant.
const INTERVAL_MARKERS: [&str; 6] = [
    INTERVAL,
    EPOCH,
    INTERPOLATION_ALGORITHM,
    INTERPOLATION_DEGREE,
    FORWARD_EXTRAPOLATION,
    BACKWARD_EXTRAPOLATION,
];

/// How a value type is laid out inside a CZML property object.
pub trait PropertyData: Clone + PartialEq + fmt::Debug + Sized {
    /// Representation keys this type is recognised under, e.g. `["rgba", "rgbaf"]`.
    const KEYS: &'static [&'static str];

    /// The key this particular value is written under.
    fn representation(&self) -> &'static str;

    /// Decode a single untimed value found under `key`.
    fn decode_keyed(key: &'static str, value: &JsonValue) -> Result<Self, DecodeError>;

    /// JSON written under [`PropertyData::representation`].
    fn encode_keyed(&self) -> JsonValue;

    /// Decode an unwrapped scalar. `None` if the type has no bare form.
    fn decode_bare(_value: &JsonValue) -> Option<Result<Self, DecodeError>> {
        None
    }

    fn encode_bare(&self) -> Option<JsonValue> {
        None
    }

    /// Components per sample under `key`, if that representation can be
    /// time-tagged.
    fn sample_arity(_key: &str) -> Option<usize> {
        None
    }

    fn decode_components(key: &'static str, _components: &[JsonValue]) -> Result<Self, DecodeError> {
        Err(DecodeError::NotSampleable(key))
    }

    fn push_components(&self, _out: &mut Vec<JsonValue>) {}
}

/// Interpolation settings attached to an interval. Carried, not interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InterpolationOptions {
    pub algorithm: Option<InterpolationAlgorithm>,
    pub degree: Option<u32>,
    pub forward_extrapolation: Option<ExtrapolationType>,
    pub backward_extrapolation: Option<ExtrapolationType>,
}

impl InterpolationOptions {
    pub fn lagrange(degree: u32) -> Self {
        Self {
            algorithm: Some(InterpolationAlgorithm::Lagrange),
            degree: Some(degree),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn decode(obj: &Map<String, JsonValue>) -> Result<Self, DecodeError> {
        fn field<P: Primitive>(
            obj: &Map<String, JsonValue>,
            key: &str,
        ) -> Result<Option<P>, DecodeError> {
            obj.get(key)
                .map(P::from_json)
                .transpose()
                .map_err(|e| e.in_field(key))
        }

        let degree = match obj.get(INTERPOLATION_DEGREE) {
            Some(value) => Some(decode_degree(value).map_err(|e| e.in_field(INTERPOLATION_DEGREE))?),
            None => None,
        };
        Ok(Self {
            algorithm: field(obj, INTERPOLATION_ALGORITHM)?,
            degree,
            forward_extrapolation: field(obj, FORWARD_EXTRAPOLATION)?,
            backward_extrapolation: field(obj, BACKWARD_EXTRAPOLATION)?,
        })
    }

    fn write(&self, map: &mut Map<String, JsonValue>) {
        if let Some(algorithm) = &self.algorithm {
            map.insert(INTERPOLATION_ALGORITHM.into(), algorithm.to_json());
        }
        if let Some(degree) = self.degree {
            map.insert(INTERPOLATION_DEGREE.into(), JsonValue::from(degree));
        }
        if let Some(forward) = &self.forward_extrapolation {
            map.insert(FORWARD_EXTRAPOLATION.into(), forward.to_json());
        }
        if let Some(backward) = &self.backward_extrapolation {
            map.insert(BACKWARD_EXTRAPOLATION.into(), backward.to_json());
        }
    }
}

fn decode_degree(value: &JsonValue) -> Result<u32, DecodeError> {
    let degree = expect_f64(value)?;
    if degree.fract() != 0.0 || degree < 0.0 || degree > f64::from(u32::MAX) {
        return Err(DecodeError::OutOfRange {
            what: "interpolation degree",
            value: degree.to_string(),
        });
    }
    Ok(degree as u32)
}

/// One value of a sampled property, optionally time-tagged.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample<T> {
    pub time: Option<SampleTime>,
    pub value: T,
}

impl<T> Sample<T> {
    pub fn new(time: impl Into<SampleTime>, value: T) -> Self {
        Self {
            time: Some(time.into()),
            value,
        }
    }

    pub fn untagged(value: T) -> Self {
        Self { time: None, value }
    }
}

/// A time range (optional) and the samples that apply within it.
#[derive(Clone, Debug, PartialEq)]
pub struct Interval<T> {
    pub span: Option<TimeInterval>,
    /// Reference time numeric sample tags are offsets from.
    pub epoch: Option<String>,
    pub interpolation: InterpolationOptions,
    /// Key the samples are written under. Kept so an interval without
    /// samples encodes the same key it was read with.
    pub representation: Option<&'static str>,
    pub samples: Vec<Sample<T>>,
    /// Within this interval the value is taken from another packet. Such an
    /// interval has no samples.
    pub reference: Option<Reference>,
}

impl<T: PropertyData> Interval<T> {
    /// Interval over `span` with no samples yet.
    pub fn new(span: TimeInterval) -> Self {
        Self {
            span: Some(span),
            epoch: None,
            interpolation: InterpolationOptions::default(),
            representation: None,
            samples: Vec::new(),
            reference: None,
        }
    }

    /// Interval over `span` holding one untimed value.
    pub fn constant(span: TimeInterval, value: T) -> Self {
        Self::new(span).with_sample(Sample::untagged(value))
    }

    /// Interval over `span` whose value is another packet's property.
    pub fn referenced(span: TimeInterval, reference: Reference) -> Self {
        Self {
            reference: Some(reference),
            ..Self::new(span)
        }
    }

    /// Samples tagged with offsets from `epoch`, without an explicit span.
    pub fn sampled<S: Into<SampleTime>>(
        epoch: impl Into<String>,
        samples: impl IntoIterator<Item = (S, T)>,
    ) -> Self {
        let mut interval = Self {
            span: None,
            epoch: Some(epoch.into()),
            interpolation: InterpolationOptions::default(),
            representation: None,
            samples: Vec::new(),
            reference: None,
        };
        for (time, value) in samples {
            interval.push(Sample::new(time, value));
        }
        interval
    }

    pub fn with_span(mut self, span: TimeInterval) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_epoch(mut self, epoch: impl Into<String>) -> Self {
        self.epoch = Some(epoch.into());
        self
    }

    pub fn with_interpolation(mut self, interpolation: InterpolationOptions) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_sample(mut self, sample: Sample<T>) -> Self {
        self.push(sample);
        self
    }

    pub fn push(&mut self, sample: Sample<T>) {
        if self.representation.is_none() {
            self.representation = Some(sample.value.representation());
        }
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn decode(obj: &Map<String, JsonValue>, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let span = obj
            .get(INTERVAL)
            .map(TimeInterval::from_json)
            .transpose()
            .map_err(|e| e.in_field(INTERVAL))?;
        let epoch = obj
            .get(EPOCH)
            .map(|v| expect_str(v).map(str::to_string))
            .transpose()
            .map_err(|e| e.in_field(EPOCH))?;
        let interpolation = InterpolationOptions::decode(obj)?;

        let mut representation = None;
        let mut samples = Vec::new();
        let mut reference = None;
        for (key, value) in obj {
            if INTERVAL_MARKERS.iter().any(|marker| *marker == key.as_str()) {
                continue;
            }
            if key == REFERENCE {
                if let Some(first) = representation {
                    return Err(DecodeError::ConflictingRepresentations(first, REFERENCE));
                }
                let text = expect_str(value).map_err(|e| e.in_field(REFERENCE))?;
                reference = Some(text.parse::<Reference>()?);
                continue;
            }
            let Some(known) = known_key::<T>(key) else {
                ctx.ignore(key);
                continue;
            };
            if let Some(first) = representation.or(reference.as_ref().map(|_| REFERENCE)) {
                return Err(DecodeError::ConflictingRepresentations(first, known));
            }
            representation = Some(known);
            samples = decode_samples::<T>(known, value).map_err(|e| e.in_field(known))?;
        }

        Ok(Self {
            span,
            epoch,
            interpolation,
            representation,
            samples,
            reference,
        })
    }

    pub fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut map = Map::new();
        if let Some(span) = &self.span {
            map.insert(INTERVAL.into(), span.to_json());
        }
        if let Some(epoch) = &self.epoch {
            map.insert(EPOCH.into(), JsonValue::String(epoch.clone()));
        }
        self.interpolation.write(&mut map);

        if let Some(reference) = &self.reference {
            if let Some(sample) = self.samples.first() {
                return Err(EncodeError::MixedRepresentation {
                    expected: REFERENCE,
                    found: sample.value.representation(),
                });
            }
            map.insert(REFERENCE.into(), JsonValue::String(reference.to_string()));
            return Ok(JsonValue::Object(map));
        }

        match self.samples.as_slice() {
            [] => {
                if let Some(key) = self.representation {
                    map.insert(key.into(), JsonValue::Array(Vec::new()));
                }
            }
            [Sample { time: None, value }] => {
                let key = value.representation();
                self.check_representation(key)?;
                map.insert(key.into(), value.encode_keyed());
            }
            samples => {
                let key = self
                    .representation
                    .unwrap_or_else(|| samples[0].value.representation());
                let arity = T::sample_arity(key).ok_or(EncodeError::NotSampleable(key))?;
                let mut out = Vec::with_capacity(samples.len() * (arity + 1));
                for (index, sample) in samples.iter().enumerate() {
                    let found = sample.value.representation();
                    if found != key {
                        return Err(EncodeError::MixedRepresentation {
                            expected: key,
                            found,
                        });
                    }
                    let time = sample.time.as_ref().ok_or(EncodeError::UntaggedSample {
                        index,
                        count: samples.len(),
                    })?;
                    out.push(time.to_json());
                    sample.value.push_components(&mut out);
                }
                map.insert(key.into(), JsonValue::Array(out));
            }
        }
        Ok(JsonValue::Object(map))
    }

    fn check_representation(&self, found: &'static str) -> Result<(), EncodeError> {
        match self.representation {
            Some(expected) if expected != found => {
                Err(EncodeError::MixedRepresentation { expected, found })
            }
            _ => Ok(()),
        }
    }
}

fn known_key<T: PropertyData>(key: &str) -> Option<&'static str> {
    T::KEYS.iter().copied().find(|known| *known == key)
}

/// An array under a sampleable key is time-tagged unless it holds exactly
/// one value's worth of components.
fn is_tagged<T: PropertyData>(key: &str, value: &JsonValue) -> bool {
    match (T::sample_arity(key), value.as_array()) {
        (Some(arity), Some(items)) => items.len() != arity,
        _ => false,
    }
}

fn decode_samples<T: PropertyData>(
    key: &'static str,
    value: &JsonValue,
) -> Result<Vec<Sample<T>>, DecodeError> {
    let (Some(arity), Some(items)) = (T::sample_arity(key), value.as_array()) else {
        return Ok(vec![Sample::untagged(T::decode_keyed(key, value)?)]);
    };
    if items.len() == arity {
        return Ok(vec![Sample::untagged(T::decode_components(key, items)?)]);
    }
    let stride = arity + 1;
    if items.len() % stride != 0 {
        return Err(DecodeError::arity(
            key,
            format!("a multiple of {stride}"),
            items.len(),
        ));
    }
    items
        .chunks(stride)
        .map(|chunk| {
            Ok(Sample {
                time: Some(SampleTime::from_json(&chunk[0])?),
                value: T::decode_components(key, &chunk[1..])?,
            })
        })
        .collect()
}

/// A property value: constant, interval-sampled, or a reference to another
/// packet's property.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue<T> {
    Constant(T),
    Intervals(Vec<Interval<T>>),
    Reference(Reference),
}

impl<T: PropertyData> PropertyValue<T> {
    pub fn constant(value: impl Into<T>) -> Self {
        PropertyValue::Constant(value.into())
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, PropertyValue::Constant(_))
    }

    pub fn as_constant(&self) -> Option<&T> {
        match self {
            PropertyValue::Constant(value) => Some(value),
            _ => None,
        }
    }

    pub fn intervals(&self) -> Option<&[Interval<T>]> {
        match self {
            PropertyValue::Intervals(intervals) => Some(intervals),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<&Reference> {
        match self {
            PropertyValue::Reference(reference) => Some(reference),
            _ => None,
        }
    }

    /// Decode from a JSON value. Unknown keys inside value objects are
    /// recorded in `ctx` as ignored.
    pub fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        match value {
            JsonValue::Array(items) => {
                let mut intervals = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let interval = expect_object(item)
                        .and_then(|obj| Interval::<T>::decode(obj, ctx))
                        .map_err(|e| e.in_field(format!("[{index}]")))?;
                    intervals.push(interval);
                }
                Ok(PropertyValue::Intervals(intervals))
            }
            JsonValue::Object(obj) => Self::decode_object(obj, ctx),
            bare => match T::decode_bare(bare) {
                Some(result) => result.map(PropertyValue::Constant),
                None => Err(DecodeError::NoValueShape),
            },
        }
    }

    fn decode_object(obj: &Map<String, JsonValue>, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        if obj.len() == 1 {
            if let Some(reference) = obj.get(REFERENCE) {
                let text = expect_str(reference).map_err(|e| e.in_field(REFERENCE))?;
                return text.parse().map(PropertyValue::Reference);
            }
        }

        let timed = INTERVAL_MARKERS.iter().any(|marker| obj.contains_key(*marker))
            || T::KEYS
                .iter()
                .any(|key| obj.get(*key).is_some_and(|v| is_tagged::<T>(key, v)));
        if timed {
            return Interval::<T>::decode(obj, ctx).map(|interval| PropertyValue::Intervals(vec![interval]));
        }

        let mut constant: Option<(&'static str, T)> = None;
        for (key, value) in obj {
            let Some(known) = known_key::<T>(key) else {
                ctx.ignore(key);
                continue;
            };
            if let Some((first, _)) = constant {
                return Err(DecodeError::ConflictingRepresentations(first, known));
            }
            let decoded = T::decode_keyed(known, value).map_err(|e| e.in_field(known))?;
            constant = Some((known, decoded));
        }
        constant
            .map(|(_, value)| PropertyValue::Constant(value))
            .ok_or(DecodeError::NoValueShape)
    }

    pub fn to_json(&self) -> Result<JsonValue, EncodeError> {
        match self {
            PropertyValue::Constant(value) => Ok(value.encode_bare().unwrap_or_else(|| {
                let mut map = Map::new();
                map.insert(value.representation().into(), value.encode_keyed());
                JsonValue::Object(map)
            })),
            PropertyValue::Intervals(intervals) => match intervals.as_slice() {
                [single] => single.to_json(),
                many => many
                    .iter()
                    .map(Interval::to_json)
                    .collect::<Result<Vec<_>, _>>()
                    .map(JsonValue::Array),
            },
            PropertyValue::Reference(reference) => {
                let mut map = Map::new();
                map.insert(REFERENCE.into(), JsonValue::String(reference.to_string()));
                Ok(JsonValue::Object(map))
            }
        }
    }
}
