//! czml-core: typed object model for CZML documents.
//!
//! CZML is the JSON format Cesium uses to describe time-dynamic scenes. A
//! [`Document`] is an ordered list of [`Packet`]s; each packet carries at
//! most one [`Property`] of every [`PropertyKind`]; property fields are
//! [`PropertyValue`]s, which are either constant or sampled over time
//! intervals.
//!
//! ```
//! use czml_core::{parse_document, to_string, Billboard, Config, PropertyValue};
//!
//! let text = r#"[{"billboard":{"image":"http://localhost/img.png","scale":0.7},"id":"p1"}]"#;
//! let decoded = parse_document(text).unwrap();
//! let packet = decoded.value.find("p1").unwrap();
//! let billboard = packet.property::<Billboard>().unwrap();
//! assert_eq!(billboard.scale, Some(PropertyValue::Constant(0.7)));
//!
//! // Object keys are written in sorted order.
//! assert_eq!(to_string(&decoded.value, &Config::default()).unwrap(), text);
//! ```

pub mod coercion;
pub mod config;
pub mod document;
pub mod error;
pub mod io;
pub mod json;
pub mod packet;
pub mod properties;
pub mod property_value;
pub mod report;
pub mod value;

pub use config::{Config, IssuePolicy};
pub use document::{Document, DocumentHeader};
pub use error::{CzmlError, DecodeError, EncodeError};
pub use json::{decode_document, parse_document, parse_document_with, to_string, to_value};
pub use packet::Packet;
pub use properties::{
    Billboard, Clock, CzmlProperty, Description, Label, Material, Model, Orientation, Path, Point,
    PositionList, Polyline, Position, PositionValue, Property, PropertyKind,
};
pub use property_value::{
    InterpolationOptions, Interval, PropertyData, PropertyValue, Reference, Sample,
};
pub use report::{DecodeContext, DecodeIssue, DecodeOutcome, DecodeReport, Decoded, IssueLocation};
pub use value::{
    BoundingRectangle, Cartesian2, Cartesian3, Cartographic, ClockRange, ClockStep, Color,
    Components, ExtrapolationType, HorizontalOrigin, InterpolationAlgorithm, LabelStyle,
    NearFarScalar, Primitive, ReferenceFrame, Rgba, Rgbaf, SampleTime, TimeInterval,
    TimeIntervalCollection, UnitQuaternion, Uri, VerticalOrigin,
};
