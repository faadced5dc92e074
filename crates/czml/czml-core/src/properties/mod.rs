//! Property catalogue: the concrete CZML properties a packet can carry.
//!
//! Every property is a plain record of optional fields, each a primitive or
//! a [`PropertyValue`](crate::property_value::PropertyValue). [`Property`]
//! is the sum over all of them and [`PropertyKind`] the tag (and JSON key)
//! a packet indexes them by.

use std::fmt;

use serde_json::Value as JsonValue;

use crate::error::{DecodeError, EncodeError};
use crate::report::DecodeContext;

pub mod billboard;
pub mod clock;
pub mod description;
pub mod label;
pub mod material;
pub mod model;
pub mod orientation;
pub mod path;
pub mod point;
pub mod polyline;
pub mod position;

pub use billboard::Billboard;
pub use clock::Clock;
pub use description::Description;
pub use label::Label;
pub use material::Material;
pub use model::Model;
pub use orientation::Orientation;
pub use path::Path;
pub use point::Point;
pub use polyline::{PositionList, Polyline};
pub use position::{Position, PositionValue};

/// Capability shared by every concrete property.
pub trait CzmlProperty: Sized + Into<Property> {
    const KIND: PropertyKind;

    /// Decode from the JSON found under `KIND.key()`. Individual fields that
    /// fail are skipped and recorded in `ctx`; an error means the property as
    /// a whole has no usable shape.
    fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError>;

    fn to_json(&self) -> Result<JsonValue, EncodeError>;

    fn from_property(property: &Property) -> Option<&Self>;

    fn from_property_mut(property: &mut Property) -> Option<&mut Self>;
}

/// Expands to the `from_property`/`from_property_mut` items of a
/// [`CzmlProperty`] impl.
macro_rules! property_accessors {
    ($variant:ident) => {
        fn from_property(property: &$crate::properties::Property) -> Option<&Self> {
            match property {
                $crate::properties::Property::$variant(inner) => Some(inner),
                _ => None,
            }
        }

        fn from_property_mut(property: &mut $crate::properties::Property) -> Option<&mut Self> {
            match property {
                $crate::properties::Property::$variant(inner) => Some(inner),
                _ => None,
            }
        }
    };
}
pub(crate) use property_accessors;

macro_rules! property_set {
    ($($variant:ident => $key:literal),+ $(,)?) => {
        /// Tag identifying a kind of property; also its key in a packet.
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PropertyKind {
            $($variant),+
        }

        impl PropertyKind {
            pub const ALL: &'static [PropertyKind] = &[$(PropertyKind::$variant),+];

            pub fn key(self) -> &'static str {
                match self {
                    $(PropertyKind::$variant => $key),+
                }
            }

            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some(PropertyKind::$variant),)+
                    _ => None,
                }
            }
        }

        /// Any concrete property.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Property {
            $($variant($variant)),+
        }

        impl Property {
            pub fn kind(&self) -> PropertyKind {
                match self {
                    $(Property::$variant(_) => PropertyKind::$variant),+
                }
            }

            /// Decode the property of `kind` from its JSON.
            pub fn decode(
                kind: PropertyKind,
                value: &JsonValue,
                ctx: &mut DecodeContext,
            ) -> Result<Self, DecodeError> {
                match kind {
                    $(PropertyKind::$variant => {
                        <$variant as CzmlProperty>::decode(value, ctx).map(Property::$variant)
                    })+
                }
            }

            pub fn to_json(&self) -> Result<JsonValue, EncodeError> {
                match self {
                    $(Property::$variant(inner) => inner.to_json()),+
                }
            }
        }

        $(
            impl From<$variant> for Property {
                fn from(inner: $variant) -> Self {
                    Property::$variant(inner)
                }
            }
        )+
    };
}

property_set! {
    Description => "description",
    Position => "position",
    Orientation => "orientation",
    Billboard => "billboard",
    Label => "label",
    Point => "point",
    Polyline => "polyline",
    Path => "path",
    Model => "model",
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
