//! `From` conversions so typed models can be built from plain Rust values:
//!
//! ```
//! use czml_core::{Billboard, Packet, Position};
//!
//! let packet = Packet::new("sat")
//!     .with(Position::new((1.0, 2.0, 3.0)))
//!     .with(Billboard::new().with_image("sat.png").with_scale(0.5));
//! assert_eq!(packet.len(), 2);
//! ```

use crate::properties::{PositionList, PositionValue};
use crate::property_value::{Interval, PropertyData, PropertyValue, Reference};
use crate::value::{
    Cartesian2, Cartesian3, Color, NearFarScalar, Rgba, Rgbaf, TimeInterval,
    TimeIntervalCollection, UnitQuaternion, Uri,
};

impl<T: PropertyData> From<T> for PropertyValue<T> {
    fn from(value: T) -> Self {
        PropertyValue::Constant(value)
    }
}

impl<T: PropertyData> From<Interval<T>> for PropertyValue<T> {
    fn from(interval: Interval<T>) -> Self {
        PropertyValue::Intervals(vec![interval])
    }
}

impl<T: PropertyData> From<Vec<Interval<T>>> for PropertyValue<T> {
    fn from(intervals: Vec<Interval<T>>) -> Self {
        PropertyValue::Intervals(intervals)
    }
}

impl<T: PropertyData> From<Reference> for PropertyValue<T> {
    fn from(reference: Reference) -> Self {
        PropertyValue::Reference(reference)
    }
}

impl From<(f64, f64)> for Cartesian2 {
    fn from((x, y): (f64, f64)) -> Self {
        Cartesian2::new(x, y)
    }
}

impl From<[f64; 2]> for Cartesian2 {
    fn from([x, y]: [f64; 2]) -> Self {
        Cartesian2::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Cartesian3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Cartesian3::new(x, y, z)
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Cartesian3::new(x, y, z)
    }
}

impl From<(f64, f64, f64, f64)> for UnitQuaternion {
    fn from((x, y, z, w): (f64, f64, f64, f64)) -> Self {
        UnitQuaternion::new(x, y, z, w)
    }
}

impl From<[f64; 4]> for UnitQuaternion {
    fn from([x, y, z, w]: [f64; 4]) -> Self {
        UnitQuaternion::new(x, y, z, w)
    }
}

impl From<[f64; 4]> for NearFarScalar {
    fn from([near, near_value, far, far_value]: [f64; 4]) -> Self {
        NearFarScalar::new(near, near_value, far, far_value)
    }
}

impl From<(u8, u8, u8, u8)> for Rgba {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Rgba::new(r, g, b, a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::Rgba(color)
    }
}

impl From<Rgbaf> for Color {
    fn from(color: Rgbaf) -> Self {
        Color::Rgbaf(color)
    }
}

impl From<Rgba> for PropertyValue<Color> {
    fn from(color: Rgba) -> Self {
        PropertyValue::Constant(Color::Rgba(color))
    }
}

impl From<Rgbaf> for PropertyValue<Color> {
    fn from(color: Rgbaf) -> Self {
        PropertyValue::Constant(Color::Rgbaf(color))
    }
}

impl From<Cartesian3> for PositionValue {
    fn from(position: Cartesian3) -> Self {
        PositionValue::Cartesian(position)
    }
}

impl From<(f64, f64, f64)> for PositionValue {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        PositionValue::cartesian(x, y, z)
    }
}

impl From<Cartesian3> for PropertyValue<PositionValue> {
    fn from(position: Cartesian3) -> Self {
        PropertyValue::Constant(PositionValue::Cartesian(position))
    }
}

impl From<(f64, f64, f64)> for PropertyValue<PositionValue> {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        PropertyValue::Constant(PositionValue::cartesian(x, y, z))
    }
}

impl From<Vec<Cartesian3>> for PositionList {
    fn from(positions: Vec<Cartesian3>) -> Self {
        PositionList::Cartesian(positions)
    }
}

impl From<Vec<Cartesian3>> for PropertyValue<PositionList> {
    fn from(positions: Vec<Cartesian3>) -> Self {
        PropertyValue::Constant(PositionList::Cartesian(positions))
    }
}

impl From<&str> for Uri {
    fn from(uri: &str) -> Self {
        Uri::new(uri)
    }
}

impl From<String> for Uri {
    fn from(uri: String) -> Self {
        Uri(uri)
    }
}

impl From<&str> for PropertyValue<Uri> {
    fn from(uri: &str) -> Self {
        PropertyValue::Constant(Uri::new(uri))
    }
}

impl From<String> for PropertyValue<Uri> {
    fn from(uri: String) -> Self {
        PropertyValue::Constant(Uri(uri))
    }
}

impl From<&str> for PropertyValue<String> {
    fn from(text: &str) -> Self {
        PropertyValue::Constant(text.to_string())
    }
}

impl From<Vec<TimeInterval>> for TimeIntervalCollection {
    fn from(intervals: Vec<TimeInterval>) -> Self {
        TimeIntervalCollection::Many(intervals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Billboard, Description, Polyline, Position};
    use serde_json::json;

    #[test]
    fn plain_values_become_constants() {
        let value: PropertyValue<f64> = 0.7.into();
        assert_eq!(value.as_constant(), Some(&0.7));
        let text: PropertyValue<String> = "hello".into();
        assert!(text.is_constant());
        let image: PropertyValue<Uri> = "img.png".into();
        assert_eq!(image.as_constant().map(Uri::as_str), Some("img.png"));
    }

    #[test]
    fn intervals_and_references_convert() {
        let interval = Interval::constant(TimeInterval::new("a", "b"), 1.5);
        let value: PropertyValue<f64> = interval.clone().into();
        assert_eq!(value.intervals(), Some(&[interval][..]));

        let reference: PropertyValue<Cartesian3> = Reference::new("other", ["position"]).into();
        assert_eq!(reference.to_json().unwrap(), json!({ "reference": "other#position" }));
    }

    #[test]
    fn tuples_feed_builders() {
        let position = Position::new((1.0, 2.0, 3.0));
        assert_eq!(
            position.value.as_constant(),
            Some(&PositionValue::cartesian(1.0, 2.0, 3.0))
        );

        let billboard = Billboard::new()
            .with_pixel_offset(Cartesian2::from((1.0, 2.0)))
            .with_color(Rgba::from([255, 0, 0, 255]))
            .with_scale_by_distance(NearFarScalar::from([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(billboard.color, Some(PropertyValue::Constant(Color::rgba(255, 0, 0, 255))));

        let description = Description::new("<b>hi</b>");
        assert!(description.value.is_constant());
    }

    #[test]
    fn polyline_from_points() {
        let polyline = Polyline::new(vec![Cartesian3::from([0.0, 0.0, 0.0]), Cartesian3::from((1.0, 1.0, 1.0))]);
        assert_eq!(
            polyline.positions.as_ref().and_then(PropertyValue::as_constant).map(PositionList::len),
            Some(2)
        );
        let degrees = PositionList::degrees([(-75.0, 40.0, 0.0), (-80.0, 35.0, 0.0)]);
        assert_eq!(degrees.len(), 2);
    }
}
