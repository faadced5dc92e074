//! A CZML packet: one object's identity plus the set of properties it
//! carries.
//!
//! Packet JSON is a flat object. The scalar keys `id`, `name`, `parent`,
//! `delete` and `availability` are read directly; every other key that
//! names a [`PropertyKind`] is decoded as that property. A packet holds at
//! most one property per kind.

use hashbrown::HashMap;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::error::{CzmlError, DecodeError, EncodeError};
use crate::json::expect_object;
use crate::properties::{CzmlProperty, Property, PropertyKind};
use crate::report::DecodeContext;
use crate::value::{Primitive, TimeIntervalCollection};

const ID: &str = "id";
const NAME: &str = "name";
const PARENT: &str = "parent";
const DELETE: &str = "delete";
const AVAILABILITY: &str = "availability";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Packet {
    /// Missing ids are legal; consumers assign one.
    pub id: Option<String>,
    pub name: Option<String>,
    /// `id` of the parent packet.
    pub parent: Option<String>,
    /// When set, the packet removes the object (or its listed properties)
    /// instead of updating it.
    pub delete: Option<bool>,
    pub availability: Option<TimeIntervalCollection>,
    properties: HashMap<PropertyKind, Property>,
}

impl Packet {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_availability(mut self, availability: impl Into<TimeIntervalCollection>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    /// Builder form of [`Packet::add`].
    pub fn with(mut self, property: impl Into<Property>) -> Self {
        self.add(property);
        self
    }

    /// Add a property, returning the one of the same kind it replaces.
    pub fn add(&mut self, property: impl Into<Property>) -> Option<Property> {
        let property = property.into();
        self.properties.insert(property.kind(), property)
    }

    pub fn remove(&mut self, kind: PropertyKind) -> Option<Property> {
        self.properties.remove(&kind)
    }

    pub fn get(&self, kind: PropertyKind) -> Option<&Property> {
        self.properties.get(&kind)
    }

    pub fn get_mut(&mut self, kind: PropertyKind) -> Option<&mut Property> {
        self.properties.get_mut(&kind)
    }

    pub fn contains(&self, kind: PropertyKind) -> bool {
        self.properties.contains_key(&kind)
    }

    /// Typed lookup, e.g. `packet.property::<Billboard>()`.
    pub fn property<T: CzmlProperty>(&self) -> Option<&T> {
        self.get(T::KIND).and_then(T::from_property)
    }

    pub fn property_mut<T: CzmlProperty>(&mut self) -> Option<&mut T> {
        self.get_mut(T::KIND).and_then(T::from_property_mut)
    }

    /// All properties, in [`PropertyKind`] order.
    pub fn properties(&self) -> Vec<&Property> {
        let mut properties: Vec<&Property> = self.properties.values().collect();
        properties.sort_by_key(|property| property.kind());
        properties
    }

    /// Number of properties (scalar fields not counted).
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Decode one packet object. Malformed scalar fields and properties are
    /// skipped and recorded in `ctx`; the packet itself fails only if it is
    /// not an object or its `id` is not a string.
    pub fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let obj = expect_object(value)?;
        let id = obj
            .get(ID)
            .map(String::from_json)
            .transpose()
            .map_err(|e| e.in_field(ID))?;
        ctx.set_packet_id(id.clone());

        let mut packet = Packet {
            id,
            ..Packet::default()
        };
        for (key, value) in obj {
            match key.as_str() {
                ID => {}
                NAME => packet.name = scalar(ctx, NAME, value),
                PARENT => packet.parent = scalar(ctx, PARENT, value),
                DELETE => packet.delete = scalar(ctx, DELETE, value),
                AVAILABILITY => packet.availability = scalar(ctx, AVAILABILITY, value),
                other => match PropertyKind::from_key(other) {
                    Some(kind) => {
                        match ctx.scoped(other, |ctx| Property::decode(kind, value, ctx)) {
                            Ok(property) => {
                                packet.properties.insert(kind, property);
                            }
                            Err(error) => ctx.skip(Some(other), error),
                        }
                    }
                    None => ctx.ignore(other),
                },
            }
        }
        Ok(packet)
    }

    /// Encode as a packet object. Keys are written in sorted order.
    pub fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let mut map = Map::new();
        if let Some(id) = &self.id {
            map.insert(ID.into(), JsonValue::String(id.clone()));
        }
        if let Some(name) = &self.name {
            map.insert(NAME.into(), JsonValue::String(name.clone()));
        }
        if let Some(parent) = &self.parent {
            map.insert(PARENT.into(), JsonValue::String(parent.clone()));
        }
        if let Some(delete) = self.delete {
            map.insert(DELETE.into(), JsonValue::Bool(delete));
        }
        if let Some(availability) = &self.availability {
            map.insert(AVAILABILITY.into(), availability.to_json());
        }
        for property in self.properties() {
            let key = property.kind().key();
            let json = property.to_json().map_err(|e| e.in_field(key))?;
            map.insert(key.into(), json);
        }
        Ok(JsonValue::Object(map))
    }
}

fn scalar<P: Primitive>(ctx: &mut DecodeContext, key: &str, value: &JsonValue) -> Option<P> {
    match P::from_json(value) {
        Ok(value) => Some(value),
        Err(error) => {
            ctx.skip(Some(key), error);
            None
        }
    }
}

impl Serialize for Packet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::Error;

        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

// Deserializing is strict: a packet with any skipped part is an error.
impl<'de> Deserialize<'de> for Packet {
    fn deserialize<D>(deserializer: D) -> Result<Packet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;
        let mut ctx = DecodeContext::default();
        let packet = Packet::decode(&value, &mut ctx).map_err(de::Error::custom)?;
        let report = ctx.into_report();
        if !report.is_complete() {
            return Err(de::Error::custom(CzmlError::Rejected(report)));
        }
        Ok(packet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::{Billboard, Label, Position, PositionValue};
    use crate::property_value::PropertyValue;
    use crate::value::TimeInterval;
    use serde_json::json;

    fn decode(value: JsonValue) -> (Packet, DecodeContext) {
        let mut ctx = DecodeContext::default();
        let packet = Packet::decode(&value, &mut ctx).expect("decode packet");
        (packet, ctx)
    }

    #[test]
    fn billboard_packet() {
        let j = json!({
            "id": "p1",
            "billboard": { "image": "http://localhost/img.png", "scale": 0.7 }
        });
        let (packet, ctx) = decode(j.clone());
        assert_eq!(packet.id.as_deref(), Some("p1"));
        assert_eq!(packet.len(), 1);
        let billboard = packet.property::<Billboard>().expect("billboard");
        assert_eq!(billboard.scale, Some(PropertyValue::Constant(0.7)));
        assert!(packet.property::<Label>().is_none());
        assert!(ctx.report().is_complete());
        assert_eq!(packet.to_json().unwrap(), j);
    }

    #[test]
    fn one_property_per_kind() {
        let mut packet = Packet::new("p1");
        assert!(packet.add(Billboard::new().with_scale(1.0)).is_none());
        let replaced = packet.add(Billboard::new().with_scale(2.0));
        assert!(matches!(replaced, Some(Property::Billboard(_))));
        assert_eq!(packet.len(), 1);
        assert_eq!(
            packet.property::<Billboard>().and_then(|b| b.scale.clone()),
            Some(PropertyValue::Constant(2.0))
        );
    }

    #[test]
    fn properties_come_out_in_kind_order() {
        let packet = Packet::new("p")
            .with(Label::new("x"))
            .with(Billboard::new())
            .with(Position::new(PositionValue::cartesian(1.0, 2.0, 3.0)));
        let kinds: Vec<PropertyKind> = packet.properties().iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![PropertyKind::Position, PropertyKind::Billboard, PropertyKind::Label]
        );
    }

    #[test]
    fn remove_and_typed_mutation() {
        let mut packet = Packet::new("p").with(Billboard::new());
        if let Some(billboard) = packet.property_mut::<Billboard>() {
            billboard.scale = Some(PropertyValue::Constant(3.0));
        }
        assert_eq!(
            packet.property::<Billboard>().unwrap().scale,
            Some(PropertyValue::Constant(3.0))
        );
        assert!(packet.remove(PropertyKind::Billboard).is_some());
        assert!(packet.is_empty());
        assert!(!packet.contains(PropertyKind::Billboard));
    }

    #[test]
    fn unknown_keys_are_ignored_not_issues() {
        let (packet, ctx) = decode(json!({
            "id": "p",
            "ellipsoid": { "radii": { "cartesian": [1, 2, 3] } },
            "x-custom": 1,
            "point": { "pixelSize": 4 }
        }));
        assert_eq!(packet.len(), 1);
        assert!(ctx.report().is_complete());
        let ignored: Vec<String> = ctx
            .report()
            .ignored()
            .iter()
            .map(|location| location.path.join("."))
            .collect();
        assert_eq!(ignored, vec!["ellipsoid", "x-custom"]);
    }

    #[test]
    fn malformed_property_is_skipped() {
        let (packet, ctx) = decode(json!({
            "id": "p",
            "position": { "cartesian": [1, 2] },
            "billboard": { "scale": 2 }
        }));
        assert!(packet.property::<Position>().is_none());
        assert!(packet.property::<Billboard>().is_some());
        let issue = &ctx.report().issues()[0];
        assert_eq!(issue.location.packet_id.as_deref(), Some("p"));
        assert_eq!(issue.location.property(), Some("position"));
    }

    #[test]
    fn scalar_fields_round_trip() {
        let j = json!({
            "id": "child",
            "name": "Child",
            "parent": "root",
            "delete": false,
            "availability": ["a/b", "c/d"]
        });
        let (packet, _) = decode(j.clone());
        assert_eq!(
            packet.availability.as_ref().map(TimeIntervalCollection::intervals),
            Some(&[TimeInterval::new("a", "b"), TimeInterval::new("c", "d")][..])
        );
        assert_eq!(packet.to_json().unwrap(), j);
    }

    #[test]
    fn non_string_id_fails_the_packet() {
        let mut ctx = DecodeContext::default();
        let err = Packet::decode(&json!({ "id": 7 }), &mut ctx).unwrap_err();
        assert!(matches!(err, DecodeError::Field { ref field, .. } if field == "id"));
    }

    #[test]
    fn serde_round_trip_is_strict() {
        let packet: Packet =
            serde_json::from_value(json!({ "id": "p", "point": { "pixelSize": 4 } })).unwrap();
        assert_eq!(serde_json::to_value(&packet).unwrap()["point"], json!({ "pixelSize": 4 }));

        let bad = serde_json::from_value::<Packet>(json!({ "id": "p", "point": { "pixelSize": "x" } }));
        assert!(bad.is_err());
    }
}
