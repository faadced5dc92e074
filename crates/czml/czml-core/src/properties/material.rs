//! Line materials used by [`Polyline`](super::Polyline) and [`Path`](super::Path).
//!
//! A material is an object with exactly one key naming the material type,
//! whose value is that material's record:
//!
//! ```text
//! {"polylineOutline": {"color": {"rgba": [...]}, "outlineWidth": 2}}
//! ```

use serde_json::{Map, Value as JsonValue};

use crate::error::{DecodeError, EncodeError};
use crate::json::{expect_object, FieldReader, FieldWriter};
use crate::property_value::PropertyValue;
use crate::report::DecodeContext;
use crate::value::Color;

macro_rules! material_record {
    (
        $(#[$meta:meta])*
        $name:ident { $($field:ident: $ty:ty => $key:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name {
            $(pub $field: Option<PropertyValue<$ty>>),+
        }

        impl $name {
            fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
                let mut fields = FieldReader::new(value, ctx)?;
                let record = Self {
                    $($field: fields.value($key)),+
                };
                fields.finish();
                Ok(record)
            }

            fn to_json(&self) -> Result<JsonValue, EncodeError> {
                let mut out = FieldWriter::new();
                $(out.value($key, &self.$field)?;)+
                Ok(out.finish())
            }
        }
    };
}

material_record! {
    /// Fills the line with one color.
    SolidColorMaterial {
        color: Color => "color",
    }
}

material_record! {
    PolylineOutlineMaterial {
        color: Color => "color",
        outline_color: Color => "outlineColor",
        outline_width: f64 => "outlineWidth",
    }
}

material_record! {
    PolylineGlowMaterial {
        color: Color => "color",
        glow_power: f64 => "glowPower",
        taper_power: f64 => "taperPower",
    }
}

material_record! {
    PolylineArrowMaterial {
        color: Color => "color",
    }
}

material_record! {
    /// Dashed line. `dash_pattern` is a 16-bit on/off mask.
    PolylineDashMaterial {
        color: Color => "color",
        gap_color: Color => "gapColor",
        dash_length: f64 => "dashLength",
        dash_pattern: f64 => "dashPattern",
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    SolidColor(SolidColorMaterial),
    PolylineOutline(PolylineOutlineMaterial),
    PolylineGlow(PolylineGlowMaterial),
    PolylineArrow(PolylineArrowMaterial),
    PolylineDash(PolylineDashMaterial),
}

const MATERIAL_KEYS: [&str; 5] = [
    "solidColor",
    "polylineOutline",
    "polylineGlow",
    "polylineArrow",
    "polylineDash",
];

impl Material {
    pub fn solid(color: impl Into<PropertyValue<Color>>) -> Self {
        Material::SolidColor(SolidColorMaterial {
            color: Some(color.into()),
        })
    }

    pub fn key(&self) -> &'static str {
        match self {
            Material::SolidColor(_) => "solidColor",
            Material::PolylineOutline(_) => "polylineOutline",
            Material::PolylineGlow(_) => "polylineGlow",
            Material::PolylineArrow(_) => "polylineArrow",
            Material::PolylineDash(_) => "polylineDash",
        }
    }

    /// Decode a material object. Keys that name no material are ignored;
    /// exactly one material key must remain.
    pub fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let obj = expect_object(value)?;
        let mut found: Option<(&'static str, &JsonValue)> = None;
        for (key, inner) in obj {
            let Some(known) = MATERIAL_KEYS.iter().copied().find(|k| *k == key.as_str()) else {
                ctx.ignore(key);
                continue;
            };
            if let Some((first, _)) = found {
                return Err(DecodeError::ConflictingRepresentations(first, known));
            }
            found = Some((known, inner));
        }

        let Some((key, inner)) = found else {
            return Err(match obj.keys().next() {
                Some(key) => DecodeError::UnknownVariant {
                    what: "material",
                    value: key.clone(),
                },
                None => DecodeError::NoValueShape,
            });
        };
        ctx.scoped(key, |ctx| match key {
            "solidColor" => SolidColorMaterial::decode(inner, ctx).map(Material::SolidColor),
            "polylineOutline" => {
                PolylineOutlineMaterial::decode(inner, ctx).map(Material::PolylineOutline)
            }
            "polylineGlow" => PolylineGlowMaterial::decode(inner, ctx).map(Material::PolylineGlow),
            "polylineArrow" => {
                PolylineArrowMaterial::decode(inner, ctx).map(Material::PolylineArrow)
            }
            _ => PolylineDashMaterial::decode(inner, ctx).map(Material::PolylineDash),
        })
        .map_err(|e| e.in_field(key))
    }

    pub fn to_json(&self) -> Result<JsonValue, EncodeError> {
        let inner = match self {
            Material::SolidColor(m) => m.to_json(),
            Material::PolylineOutline(m) => m.to_json(),
            Material::PolylineGlow(m) => m.to_json(),
            Material::PolylineArrow(m) => m.to_json(),
            Material::PolylineDash(m) => m.to_json(),
        }
        .map_err(|e| e.in_field(self.key()))?;
        let mut map = Map::new();
        map.insert(self.key().into(), inner);
        Ok(JsonValue::Object(map))
    }
}

impl From<SolidColorMaterial> for Material {
    fn from(material: SolidColorMaterial) -> Self {
        Material::SolidColor(material)
    }
}

impl From<PolylineOutlineMaterial> for Material {
    fn from(material: PolylineOutlineMaterial) -> Self {
        Material::PolylineOutline(material)
    }
}

impl From<PolylineGlowMaterial> for Material {
    fn from(material: PolylineGlowMaterial) -> Self {
        Material::PolylineGlow(material)
    }
}

impl From<PolylineArrowMaterial> for Material {
    fn from(material: PolylineArrowMaterial) -> Self {
        Material::PolylineArrow(material)
    }
}

impl From<PolylineDashMaterial> for Material {
    fn from(material: PolylineDashMaterial) -> Self {
        Material::PolylineDash(material)
    }
}
