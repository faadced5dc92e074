//! Conversion between CZML text, `serde_json::Value` trees and the typed
//! [`Document`] model.
//!
//! Text is parsed with serde_json into a generic tree first; the typed model
//! is then decoded from the tree with [`Document::decode`]. Encoding goes the
//! other way.

use serde_json::{Number, Value as JsonValue};

use crate::config::{Config, IssuePolicy};
use crate::document::Document;
use crate::error::{CzmlError, DecodeError, EncodeError};
use crate::report::{DecodeContext, Decoded};

mod fields;

pub use fields::{FieldReader, FieldWriter};

/// Parse CZML text with the default (lenient) configuration.
pub fn parse_document(text: &str) -> Result<Decoded<Document>, CzmlError> {
    parse_document_with(text, &Config::default())
}

/// Parse CZML text. Invalid JSON or a top-level value that is neither an
/// array nor an object fails outright; everything else is governed by
/// `config.policy`.
pub fn parse_document_with(text: &str, config: &Config) -> Result<Decoded<Document>, CzmlError> {
    let root: JsonValue = serde_json::from_str(text)?;
    decode_document(&root, config)
}

/// Decode an already-parsed JSON tree into a [`Document`].
pub fn decode_document(root: &JsonValue, config: &Config) -> Result<Decoded<Document>, CzmlError> {
    let mut ctx = DecodeContext::new(config);
    let document = Document::decode(root, &mut ctx)?;
    let report = ctx.into_report();
    if config.policy == IssuePolicy::Strict && !report.is_complete() {
        return Err(CzmlError::Rejected(report));
    }
    Ok(Decoded {
        value: document,
        report,
    })
}

/// Encode a document as JSON text, pretty-printed when `config.pretty` is set.
pub fn to_string(document: &Document, config: &Config) -> Result<String, CzmlError> {
    let value = document.to_json()?;
    let text = if config.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

/// Encode a document to a JSON tree.
pub fn to_value(document: &Document) -> Result<JsonValue, EncodeError> {
    document.to_json()
}

/// Encode a number. Integral values become JSON integers so integer input
/// text survives a round trip unchanged; non-finite values become `null`.
pub fn number(value: f64) -> JsonValue {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0; // 2^53
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        JsonValue::from(value as i64)
    } else {
        Number::from_f64(value)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

pub(crate) fn expect_f64(value: &JsonValue) -> Result<f64, DecodeError> {
    value
        .as_f64()
        .ok_or_else(|| DecodeError::expected("number", value))
}

pub(crate) fn expect_str(value: &JsonValue) -> Result<&str, DecodeError> {
    value
        .as_str()
        .ok_or_else(|| DecodeError::expected("string", value))
}

pub(crate) fn expect_array(value: &JsonValue) -> Result<&Vec<JsonValue>, DecodeError> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::expected("array", value))
}

pub(crate) fn expect_object(
    value: &JsonValue,
) -> Result<&serde_json::Map<String, JsonValue>, DecodeError> {
    value
        .as_object()
        .ok_or_else(|| DecodeError::expected("object", value))
}
