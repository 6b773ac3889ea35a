//! codec/types.rs
//! Separator type and codec errors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_SEPARATOR, NUMERIC_CHARS};
use crate::interval::IntervalError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodecError {
    /// Separator would be ambiguous with numeric text or line framing.
    #[error("invalid separator {sep:?}: {reason}")]
    InvalidSeparator { sep: String, reason: &'static str },

    /// Record did not split into exactly the expected number of fields.
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A field is not a syntactically valid (finite) number.
    #[error("field `{field}` is not a valid number: {text:?}")]
    InvalidNumber { field: &'static str, text: String },

    /// Fields parsed but violate the interval invariant.
    #[error(transparent)]
    InvalidArgument(#[from] IntervalError),
}

impl CodecError {
    /// True for malformed text, false for well-formed text with invalid values.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CodecError::FieldCount { .. } | CodecError::InvalidNumber { .. })
    }
}

/// Field separator for records.
///
/// Must be non-empty and must not contain a line break or any character that
/// can appear in a field's numeric text (digits, `.`, `+`, `-`, `e`, `E`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Separator(String);

impl Separator {
    pub fn new(sep: impl Into<String>) -> Result<Self, CodecError> {
        let sep = sep.into();
        if sep.is_empty() {
            return Err(CodecError::InvalidSeparator { sep, reason: "must not be empty" });
        }
        if sep.contains(['\n', '\r']) {
            return Err(CodecError::InvalidSeparator { sep, reason: "must not contain a line break" });
        }
        if sep.contains(NUMERIC_CHARS) {
            return Err(CodecError::InvalidSeparator {
                sep,
                reason: "must not contain characters used in numbers",
            });
        }
        Ok(Self(sep))
    }

    pub fn space() -> Self {
        Self(" ".into())
    }

    pub fn comma() -> Self {
        Self(",".into())
    }

    pub fn tab() -> Self {
        Self("\t".into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Separator {
    fn default() -> Self {
        Self(DEFAULT_SEPARATOR.into())
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Separator {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Separator::new(s)
    }
}

impl TryFrom<String> for Separator {
    type Error = CodecError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Separator::new(s)
    }
}

impl From<Separator> for String {
    fn from(sep: Separator) -> Self {
        sep.0
    }
}

impl AsRef<str> for Separator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
