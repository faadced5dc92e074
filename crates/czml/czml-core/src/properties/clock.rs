use serde_json::Value as JsonValue;

use crate::error::DecodeError;
use crate::json::{FieldReader, FieldWriter};
use crate::report::DecodeContext;
use crate::value::{ClockRange, ClockStep, TimeInterval};

/// Playback settings for the whole document. Only meaningful on the
/// document header packet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Clock {
    pub interval: Option<TimeInterval>,
    /// ISO-8601 time the clock starts at.
    pub current_time: Option<String>,
    /// Simulated seconds per real second (or per tick).
    pub multiplier: Option<f64>,
    pub range: Option<ClockRange>,
    pub step: Option<ClockStep>,
}

impl Clock {
    pub fn new(interval: TimeInterval) -> Self {
        Self {
            current_time: Some(interval.start.clone()),
            interval: Some(interval),
            ..Self::default()
        }
    }

    pub fn with_current_time(mut self, time: impl Into<String>) -> Self {
        self.current_time = Some(time.into());
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    pub fn with_range(mut self, range: ClockRange) -> Self {
        self.range = Some(range);
        self
    }

    pub fn with_step(mut self, step: ClockStep) -> Self {
        self.step = Some(step);
        self
    }

    pub fn decode(value: &JsonValue, ctx: &mut DecodeContext) -> Result<Self, DecodeError> {
        let mut fields = FieldReader::new(value, ctx)?;
        let clock = Self {
            interval: fields.primitive("interval"),
            current_time: fields.primitive("currentTime"),
            multiplier: fields.primitive("multiplier"),
            range: fields.primitive("range"),
            step: fields.primitive("step"),
        };
        fields.finish();
        Ok(clock)
    }

    pub fn to_json(&self) -> JsonValue {
        let mut out = FieldWriter::new();
        out.primitive("interval", &self.interval);
        out.primitive("currentTime", &self.current_time);
        out.primitive("multiplier", &self.multiplier);
        out.primitive("range", &self.range);
        out.primitive("step", &self.step);
        out.finish()
    }
}
