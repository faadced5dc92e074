//! RGBA colors in byte (`rgba`) and float (`rgbaf`) channel variants.

use serde_json::Value as JsonValue;

use super::{array_primitive, Components};
use crate::error::DecodeError;
use crate::json::{expect_f64, number};

/// Color with 0..=255 integer channels. JSON: `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

fn channel(value: &JsonValue) -> Result<u8, DecodeError> {
    let v = expect_f64(value)?;
    if v.fract() != 0.0 || !(0.0..=255.0).contains(&v) {
        return Err(DecodeError::OutOfRange {
            what: "rgba channel",
            value: v.to_string(),
        });
    }
    Ok(v as u8)
}

impl Components for Rgba {
    const ARITY: usize = 4;
    const NAME: &'static str = "rgba";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        match components {
            [r, g, b, a] => Ok(Self::new(channel(r)?, channel(g)?, channel(b)?, channel(a)?)),
            other => Err(DecodeError::arity(Self::NAME, 4, other.len())),
        }
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([self.r, self.g, self.b, self.a].map(JsonValue::from));
    }
}

array_primitive!(Rgba);

/// Color with floating point channels, nominally 0.0..=1.0.
/// JSON: `[r, g, b, a]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgbaf {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgbaf {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

impl Components for Rgbaf {
    const ARITY: usize = 4;
    const NAME: &'static str = "rgbaf";

    fn from_components(components: &[JsonValue]) -> Result<Self, DecodeError> {
        match components {
            [r, g, b, a] => Ok(Self::new(
                expect_f64(r)?,
                expect_f64(g)?,
                expect_f64(b)?,
                expect_f64(a)?,
            )),
            other => Err(DecodeError::arity(Self::NAME, 4, other.len())),
        }
    }

    fn push_components(&self, out: &mut Vec<JsonValue>) {
        out.extend([self.r, self.g, self.b, self.a].map(number));
    }
}

array_primitive!(Rgbaf);

/// A color in either channel encoding. The variant decides the JSON key
/// (`rgba` or `rgbaf`) it is written under.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba(Rgba),
    Rgbaf(Rgbaf),
}

impl Color {
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color::Rgba(Rgba::new(r, g, b, a))
    }

    pub fn rgbaf(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color::Rgbaf(Rgbaf::new(r, g, b, a))
    }

    /// Channels as floats in 0.0..=1.0 regardless of encoding.
    pub fn to_rgbaf(&self) -> Rgbaf {
        match self {
            Color::Rgba(c) => Rgbaf::new(
                f64::from(c.r) / 255.0,
                f64::from(c.g) / 255.0,
                f64::from(c.b) / 255.0,
                f64::from(c.a) / 255.0,
            ),
            Color::Rgbaf(c) => *c,
        }
    }
}
