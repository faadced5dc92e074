use std::fmt;

use serde_json::Value as JsonValue;

use super::Primitive;
use crate::error::DecodeError;
use crate::json::expect_str;

/// A URI or data URI, kept as written. JSON: a string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Uri(pub String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Uri(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_data_uri(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Primitive for Uri {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.0.clone())
    }

    fn from_json(value: &JsonValue) -> Result<Self, DecodeError> {
        expect_str(value).map(Uri::new)
    }
}
