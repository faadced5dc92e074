//! Error types for decoding and encoding CZML.

use std::path::PathBuf;

use crate::report::DecodeReport;

/// A JSON value did not have the shape expected for a primitive, property
/// value, property, packet or document.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Wrong JSON type (e.g. a string where an array was expected).
    #[error("expected {expected}, found {found}")]
    ExpectedType {
        expected: &'static str,
        found: &'static str,
    },

    /// Array with the wrong number of elements.
    #[error("{what}: expected {expected} elements, found {found}")]
    Arity {
        what: &'static str,
        expected: String,
        found: usize,
    },

    /// Numeric value outside of the range accepted by the type.
    #[error("{what}: value {value} is out of range")]
    OutOfRange { what: &'static str, value: String },

    /// Malformed `start/stop` interval string.
    #[error("invalid time interval '{0}'")]
    InvalidInterval(String),

    /// Malformed `id#property` reference string.
    #[error("invalid reference '{0}'")]
    InvalidReference(String),

    /// A string did not name any known variant of a closed enumeration.
    #[error("unknown {what} '{value}'")]
    UnknownVariant { what: &'static str, value: String },

    /// A property value had neither a constant nor an interval shape.
    #[error("property value has neither constant nor interval shape")]
    NoValueShape,

    /// One value object carries two representations, e.g. `rgba` and `rgbaf`.
    #[error("conflicting representations '{0}' and '{1}'")]
    ConflictingRepresentations(&'static str, &'static str),

    /// Time-tagged samples are not supported for this representation.
    #[error("representation '{0}' cannot be sampled")]
    NotSampleable(&'static str),

    /// Failure nested inside a named field.
    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<DecodeError>,
    },
}

impl DecodeError {
    /// Wrap this error with the name of the field it occurred in.
    pub fn in_field(self, field: impl Into<String>) -> Self {
        DecodeError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    pub(crate) fn expected(expected: &'static str, found: &serde_json::Value) -> Self {
        DecodeError::ExpectedType {
            expected,
            found: json_type_name(found),
        }
    }

    pub(crate) fn arity(what: &'static str, expected: impl ToString, found: usize) -> Self {
        DecodeError::Arity {
            what,
            expected: expected.to_string(),
            found,
        }
    }
}

/// States a typed model cannot be written out from. Constructors keep these
/// unreachable for decoded data; they guard hand-built intervals.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("interval mixes '{expected}' and '{found}' samples")]
    MixedRepresentation {
        expected: &'static str,
        found: &'static str,
    },

    #[error("interval has {count} samples but sample {index} has no time tag")]
    UntaggedSample { index: usize, count: usize },

    #[error("representation '{0}' cannot carry time-tagged samples")]
    NotSampleable(&'static str),

    #[error("{field}: {source}")]
    Field {
        field: String,
        #[source]
        source: Box<EncodeError>,
    },
}

impl EncodeError {
    pub fn in_field(self, field: impl Into<String>) -> Self {
        EncodeError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}

/// Errors surfaced by the text/file entry points.
#[derive(thiserror::Error, Debug)]
pub enum CzmlError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CZML document: {0}")]
    Decode(#[from] DecodeError),

    #[error("document rejected with {} issue(s); first: {}", .0.issues().len(), first_issue(.0))]
    Rejected(DecodeReport),

    #[error("cannot encode document: {0}")]
    Encode(#[from] EncodeError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn first_issue(report: &DecodeReport) -> String {
    report
        .issues()
        .first()
        .map(|issue| issue.to_string())
        .unwrap_or_else(|| "none".to_string())
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_context_nests_in_message() {
        let err = DecodeError::expected("number", &json!("x"))
            .in_field("scale")
            .in_field("billboard");
        assert_eq!(
            err.to_string(),
            "billboard: scale: expected number, found string"
        );
    }
}
