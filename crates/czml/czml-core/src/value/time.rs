//! Time tags. ISO-8601 strings are carried verbatim; no calendar math is
//! performed.

use std::fmt;
use std::str::FromStr;

use serde_json::Value as JsonValue;

use super::Primitive;
use crate::error::DecodeError;
use crate::json::{expect_array, expect_str, number};

/// A `start/stop` time range. JSON: `"2012-01-01T00:00:00Z/2012-01-01T01:00:00Z"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    pub start: String,
    pub stop: String,
}

impl TimeInterval {
    pub fn new(start: impl Into<String>, stop: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            stop: stop.into(),
        }
    }
}

impl FromStr for TimeInterval {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((start, stop)) = s.split_once('/') else {
            return Err(DecodeError::InvalidInterval(s.to_string()));
        };
        let (start, stop) = (start.trim(), stop.trim());
        if start.is_empty() || stop.is_empty() || stop.contains('/') {
            return Err(DecodeError::InvalidInterval(s.to_string()));
        }
        Ok(Self::new(start, stop))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.start, self.stop)
    }
}

impl Primitive for TimeInterval {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        expect_str(value)?.parse()
    }
}

/// One or more intervals, e.g. a packet's `availability`. A single interval
/// is written as a bare string, several as an array of strings; the form
/// that was read is the form written back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TimeIntervalCollection {
    Single(TimeInterval),
    Many(Vec<TimeInterval>),
}

impl TimeIntervalCollection {
    pub fn intervals(&self) -> &[TimeInterval] {
        match self {
            TimeIntervalCollection::Single(interval) => std::slice::from_ref(interval),
            TimeIntervalCollection::Many(intervals) => intervals,
        }
    }
}

impl From<TimeInterval> for TimeIntervalCollection {
    fn from(interval: TimeInterval) -> Self {
        TimeIntervalCollection::Single(interval)
    }
}

impl Primitive for TimeIntervalCollection {
    fn to_json(&self) -> JsonValue {
        match self {
            TimeIntervalCollection::Single(interval) => interval.to_json(),
            TimeIntervalCollection::Many(intervals) => {
                JsonValue::Array(intervals.iter().map(Primitive::to_json).collect())
            }
        }
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        if value.is_string() {
            return TimeInterval::from_json(value).map(TimeIntervalCollection::Single);
        }
        let intervals = expect_array(value)?
            .iter()
            .map(TimeInterval::from_json)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(TimeIntervalCollection::Many(intervals))
    }
}

/// Time tag of a sample: seconds from the interval's epoch, or an explicit
/// ISO-8601 date.
#[derive(Clone, Debug, PartialEq)]
pub enum SampleTime {
    Offset(f64),
    Date(String),
}

impl From<f64> for SampleTime {
    fn from(seconds: f64) -> Self {
        SampleTime::Offset(seconds)
    }
}

impl From<&str> for SampleTime {
    fn from(date: &str) -> Self {
        SampleTime::Date(date.to_string())
    }
}

impl Primitive for SampleTime {
    fn to_json(&self) -> JsonValue {
        match self {
            SampleTime::Offset(seconds) => number(*seconds),
            SampleTime::Date(date) => JsonValue::String(date.clone()),
        }
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        match value {
            JsonValue::String(date) => Ok(SampleTime::Date(date.clone())),
            JsonValue::Number(n) => n
                .as_f64()
                .map(SampleTime::Offset)
                .ok_or_else(|| DecodeError::expected("time tag", value)),
            other => Err(DecodeError::expected("time tag", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn interval_parses_start_and_stop() {
        let j = json!("2012-01-01T00:00:00Z/2012-01-01T01:00:00Z");
        let interval = TimeInterval::from_json(&j).unwrap();
        assert_eq!(interval.start, "2012-01-01T00:00:00Z");
        assert_eq!(interval.stop, "2012-01-01T01:00:00Z");
        assert_eq!(interval.to_json(), j);
    }

    #[test]
    fn malformed_intervals_are_rejected() {
        for bad in ["2012-01-01T00:00:00Z", "/2012", "a/", "a/b/c"] {
            assert!(
                matches!(bad.parse::<TimeInterval>(), Err(DecodeError::InvalidInterval(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn collection_keeps_single_or_array_form() {
        let single = json!("a/b");
        let many = json!(["a/b", "c/d"]);
        let parsed = TimeIntervalCollection::from_json(&single).unwrap();
        assert!(matches!(parsed, TimeIntervalCollection::Single(_)));
        assert_eq!(parsed.to_json(), single);
        let parsed = TimeIntervalCollection::from_json(&many).unwrap();
        assert_eq!(parsed.intervals().len(), 2);
        assert_eq!(parsed.to_json(), many);
    }

    #[test]
    fn sample_time_accepts_offsets_and_dates() {
        assert_eq!(
            SampleTime::from_json(&json!(3600)).unwrap(),
            SampleTime::Offset(3600.0)
        );
        assert_eq!(
            SampleTime::from_json(&json!("2012-01-01T00:00:00Z")).unwrap(),
            SampleTime::Date("2012-01-01T00:00:00Z".into())
        );
        assert!(SampleTime::from_json(&json!(null)).is_err());
    }
}
