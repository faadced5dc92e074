//! Closed string enumerations used by CZML properties.
//!
//! All of these are written as `SCREAMING_SNAKE_CASE` strings and go
//! through serde for both directions.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::DecodeError;

macro_rules! string_enum {
    ($ty:ident, $what:literal) => {
        impl $crate::value::Primitive for $ty {
            fn to_json(&self) -> JsonValue {
                serde_json::to_value(self).unwrap_or(JsonValue::Null)
            }

            fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
                from_string(value, $what)
            }
        }
    };
}

fn from_string<T: DeserializeOwned>(value: &JsonValue, what: &'static str) -> Result<T, DecodeError> {
    let text = crate::json::expect_str(value)?;
    serde_json::from_value(value.clone()).map_err(|_| DecodeError::UnknownVariant {
        what,
        value: text.to_string(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizontalOrigin {
    Left,
    Center,
    Right,
}
string_enum!(HorizontalOrigin, "horizontal origin");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerticalOrigin {
    Top,
    Center,
    Bottom,
    Baseline,
}
string_enum!(VerticalOrigin, "vertical origin");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LabelStyle {
    Fill,
    Outline,
    FillAndOutline,
}
string_enum!(LabelStyle, "label style");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReferenceFrame {
    Fixed,
    Inertial,
}
string_enum!(ReferenceFrame, "reference frame");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockRange {
    Unbounded,
    Clamped,
    LoopStop,
}
string_enum!(ClockRange, "clock range");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClockStep {
    TickDependent,
    SystemClockMultiplier,
    SystemClock,
}
string_enum!(ClockStep, "clock step");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterpolationAlgorithm {
    Linear,
    Lagrange,
    Hermite,
}
string_enum!(InterpolationAlgorithm, "interpolation algorithm");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtrapolationType {
    None,
    Hold,
    Extrapolate,
}
string_enum!(ExtrapolationType, "extrapolation type");
