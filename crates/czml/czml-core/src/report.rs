//! Decode diagnostics.
//!
//! Decoding is tolerant: a malformed field, property or packet is skipped
//! and recorded here instead of aborting the document. Unknown keys are
//! listed separately; they never make a decode partial.

use std::fmt;

use crate::config::{Config, IssuePolicy};
use crate::error::DecodeError;

/// Where in the input a problem was found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueLocation {
    /// Index of the packet in the top-level array.
    pub packet_index: Option<usize>,
    /// `id` of the enclosing packet, when it was readable.
    pub packet_id: Option<String>,
    /// Dotted key path inside the packet, e.g. `billboard.scale`.
    pub path: Vec<String>,
}

impl IssueLocation {
    /// The property key (first path segment), if any.
    pub fn property(&self) -> Option<&str> {
        self.path.first().map(|s| s.as_str())
    }

    /// The field path below the property, if any.
    pub fn field(&self) -> Option<String> {
        if self.path.len() > 1 {
            Some(self.path[1..].join("."))
        } else {
            None
        }
    }
}

impl fmt::Display for IssueLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.packet_index, &self.packet_id) {
            (Some(index), Some(id)) => write!(f, "packet[{index}] '{id}'")?,
            (Some(index), None) => write!(f, "packet[{index}]")?,
            (None, Some(id)) => write!(f, "packet '{id}'")?,
            (None, None) => write!(f, "document")?,
        }
        if !self.path.is_empty() {
            write!(f, " {}", self.path.join("."))?;
        }
        Ok(())
    }
}

/// A skipped piece of input and the reason it was skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodeIssue {
    pub location: IssueLocation,
    pub error: DecodeError,
}

impl fmt::Display for DecodeIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.error)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Everything recognised was decoded.
    Complete,
    /// Some fields, properties or packets were skipped; see the issues.
    Partial,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecodeReport {
    issues: Vec<DecodeIssue>,
    ignored: Vec<IssueLocation>,
}

impl DecodeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[DecodeIssue] {
        &self.issues
    }

    /// Unknown keys that were not decoded.
    pub fn ignored(&self) -> &[IssueLocation] {
        &self.ignored
    }

    pub fn outcome(&self) -> DecodeOutcome {
        if self.issues.is_empty() {
            DecodeOutcome::Complete
        } else {
            DecodeOutcome::Partial
        }
    }

    pub fn is_complete(&self) -> bool {
        self.outcome() == DecodeOutcome::Complete
    }
}

/// A decoded value paired with the report of what was skipped.
#[derive(Clone, Debug, PartialEq)]
pub struct Decoded<T> {
    pub value: T,
    pub report: DecodeReport,
}

impl<T> Decoded<T> {
    pub fn outcome(&self) -> DecodeOutcome {
        self.report.outcome()
    }

    /// Return the value only if nothing was skipped.
    pub fn into_complete(self) -> Result<T, DecodeReport> {
        if self.report.is_complete() {
            Ok(self.value)
        } else {
            Err(self.report)
        }
    }
}

/// Decode state threaded through every decoder: the current location and
/// the report being accumulated.
#[derive(Debug)]
pub struct DecodeContext {
    policy: IssuePolicy,
    location: IssueLocation,
    report: DecodeReport,
}

impl Default for DecodeContext {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl DecodeContext {
    pub fn new(config: &Config) -> Self {
        Self {
            policy: config.policy,
            location: IssueLocation::default(),
            report: DecodeReport::new(),
        }
    }

    pub fn policy(&self) -> IssuePolicy {
        self.policy
    }

    pub fn location(&self) -> &IssueLocation {
        &self.location
    }

    pub fn report(&self) -> &DecodeReport {
        &self.report
    }

    pub fn into_report(self) -> DecodeReport {
        self.report
    }

    pub(crate) fn enter_packet(&mut self, index: Option<usize>, id: Option<String>) {
        self.location = IssueLocation {
            packet_index: index,
            packet_id: id,
            path: Vec::new(),
        };
    }

    pub(crate) fn set_packet_id(&mut self, id: Option<String>) {
        self.location.packet_id = id;
    }

    pub(crate) fn leave_packet(&mut self) {
        self.location = IssueLocation::default();
    }

    /// Run `f` with `key` pushed onto the location path.
    pub fn scoped<R>(&mut self, key: &str, f: impl FnOnce(&mut Self) -> R) -> R {
        self.location.path.push(key.to_string());
        let out = f(self);
        self.location.path.pop();
        out
    }

    /// Record that the input under `key` (relative to the current location)
    /// was skipped because of `error`.
    pub fn skip(&mut self, key: Option<&str>, error: DecodeError) {
        let mut location = self.location.clone();
        if let Some(key) = key {
            location.path.push(key.to_string());
        }
        log::debug!("skipping {location}: {error}");
        self.report.issues.push(DecodeIssue { location, error });
    }

    /// Record an unknown key that was not decoded.
    pub fn ignore(&mut self, key: &str) {
        let mut location = self.location.clone();
        location.path.push(key.to_string());
        log::trace!("ignoring unknown key {location}");
        self.report.ignored.push(location);
    }
}
