//! Decode/encode configuration for czml-core.

use serde::{Deserialize, Serialize};

/// What to do when part of the input cannot be decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssuePolicy {
    /// Skip the malformed field, property or packet and report it.
    #[default]
    Lenient,
    /// Reject the whole document if anything was skipped.
    Strict,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub policy: IssuePolicy,
    /// Pretty-print JSON text output.
    pub pretty: bool,
}

impl Config {
    pub fn strict() -> Self {
        Self {
            policy: IssuePolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}
