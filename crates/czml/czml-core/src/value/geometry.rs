//! Cartesian, cartographic and rotation primitives.

use serde_json::Value as JsonValue;

use super::{array_primitive, Components};
use crate::error::DecodeError;
use crate::json::{expect_f64, number};

fn numbers<const N: usize>(
    name: &'static str,
    components: &[JsonValue],
) -> Result<[f64; N], DecodeError> {
    if components.len() != N {
        return Err(DecodeError::arity(name, N, components.len()));
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(components) {
        *slot = expect_f64(item)?;
    }
    Ok(out)
}

/// 2D cartesian point, e.g. a billboard pixel offset. JSON: `[x, y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartesian2 {
    pub x: f64,
    pub y: f64,
}

impl Cartesian2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Components for Cartesian2 {
    const ARITY: usize = 2;
    const NAME: &'static str = "cartesian2";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        let [x, y] = numbers(Self::NAME, components)?;
        Ok(Self { x, y })
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([number(self.x), number(self.y)]);
    }
}

array_primitive!(Cartesian2);

/// 3D cartesian point in meters. JSON: `[x, y, z]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartesian3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Components for Cartesian3 {
    const ARITY: usize = 3;
    const NAME: &'static str = "cartesian";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        let [x, y, z] = numbers(Self::NAME, components)?;
        Ok(Self { x, y, z })
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([number(self.x), number(self.y), number(self.z)]);
    }
}

array_primitive!(Cartesian3);

/// Longitude, latitude and height. Whether the angles are degrees or radians
/// is carried by the key the value appears under, not by the value itself.
/// JSON: `[longitude, latitude, height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}

impl Cartographic {
    pub fn new(longitude: f64, latitude: f64, height: f64) -> Self {
        Self {
            longitude,
            latitude,
            height,
        }
    }
}

impl Components for Cartographic {
    const ARITY: usize = 3;
    const NAME: &'static str = "cartographic";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        let [longitude, latitude, height] = numbers(Self::NAME, components)?;
        Ok(Self {
            longitude,
            latitude,
            height,
        })
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([
            number(self.longitude),
            number(self.latitude),
            number(self.height),
        ]);
    }
}

array_primitive!(Cartographic);

/// Rotation quaternion (x, y, z, w). JSON: `[x, y, z, w]`.
///
/// Unit length is expected but not enforced; values are carried as written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitQuaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl UnitQuaternion {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Default for UnitQuaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Components for UnitQuaternion {
    const ARITY: usize = 4;
    const NAME: &'static str = "unitQuaternion";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        let [x, y, z, w] = numbers(Self::NAME, components)?;
        Ok(Self { x, y, z, w })
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([number(self.x), number(self.y), number(self.z), number(self.w)]);
    }
}

array_primitive!(UnitQuaternion);

/// Distance-dependent scalar: `near_value` at `near`, `far_value` at `far`.
/// JSON: `[near, nearValue, far, farValue]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NearFarScalar {
    pub near: f64,
    pub near_value: f64,
    pub far: f64,
    pub far_value: f64,
}

impl NearFarScalar {
    pub fn new(near: f64, near_value: f64, far: f64, far_value: f64) -> Self {
        Self {
            near,
            near_value,
            far,
            far_value,
        }
    }
}

impl Components for NearFarScalar {
    const ARITY: usize = 4;
    const NAME: &'static str = "nearFarScalar";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        let [near, near_value, far, far_value] = numbers(Self::NAME, components)?;
        Ok(Self {
            near,
            near_value,
            far,
            far_value,
        })
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([
            number(self.near),
            number(self.near_value),
            number(self.far),
            number(self.far_value),
        ]);
    }
}

array_primitive!(NearFarScalar);

/// Screen-space rectangle. JSON: `[x, y, width, height]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingRectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Components for BoundingRectangle {
    const ARITY: usize = 4;
    const NAME: &'static str = "boundingRectangle";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        let [x, y, width, height] = numbers(Self::NAME, components)?;
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([
            number(self.x),
            number(self.y),
            number(self.width),
            number(self.height),
        ]);
    }
}

array_primitive!(BoundingRectangle);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Primitive;
    use serde_json::json;

    #[test]
    fn cartesian3_round_trips_exact_array() {
        let j = json!([9.3, 8.2, 7.1]);
        let c = Cartesian3::from_json(&j).unwrap();
        assert_eq!(c, Cartesian3::new(9.3, 8.2, 7.1));
        assert_eq!(c.to_json(), j);
    }

    #[test]
    fn integer_components_stay_integers() {
        let j = json!([-75, 40, 0]);
        assert_eq!(Cartographic::from_json(&j).unwrap().to_json(), j);
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let err = Cartesian3::from_json(&json!([1, 2])).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Arity {
                what: "cartesian",
                expected: "3".into(),
                found: 2
            }
        );
        assert!(UnitQuaternion::from_json(&json!([0, 0, 0])).is_err());
    }

    #[test]
    fn non_numeric_component_is_rejected() {
        assert!(matches!(
            Cartesian2::from_json(&json!([1, "2"])),
            Err(DecodeError::ExpectedType { expected: "number", .. })
        ));
        assert!(NearFarScalar::from_json(&json!({"near": 1})).is_err());
    }

    #[test]
    fn four_component_primitives_round_trip() {
        let q = UnitQuaternion::new(0.0, 0.0, 0.7071, 0.7071);
        assert_eq!(UnitQuaternion::from_json(&q.to_json()).unwrap(), q);
        let nfs = NearFarScalar::new(1.5e2, 2.0, 8.0e6, 0.0);
        assert_eq!(nfs.to_json(), json!([150, 2, 8000000, 0]));
        assert_eq!(NearFarScalar::from_json(&nfs.to_json()).unwrap(), nfs);
        let rect = BoundingRectangle::new(0.0, 0.0, 32.5, 16.0);
        assert_eq!(BoundingRectangle::from_json(&rect.to_json()).unwrap(), rect);
    }
}
