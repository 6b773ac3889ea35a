//! codec/decode.rs
//!
//! Record decoding.
//!
//! Design notes:
//! - The line is split on the separator first; it must yield exactly three fields.
//! - Fields are NOT trimmed. Leading or trailing whitespace inside a field makes
//!   it an invalid number, unless the whitespace is the separator itself.
//!   This keeps "decoded with the wrong separator" a parse failure instead of
//!   a lucky match (e.g. `", "` vs `","`).
//! - A single trailing `\n` or `\r\n` is tolerated, so raw lines can be passed in.
//! - `inf` / `NaN` are rejected as invalid numbers.
//! - Values that parse but break the interval invariant (`start >= end`,
//!   `resolution == 0`) yield `CodecError::InvalidArgument`.

use crate::codec::types::{CodecError, Separator};
use crate::constants::{FIELD_NAMES, RECORD_FIELDS};
use crate::interval::Interval;

/// Decode one record line into an `Interval`.
///
/// # Errors
/// - `FieldCount` if the line does not split into exactly 3 fields
/// - `InvalidNumber` if a field is not a finite float / unsigned integer
/// - `InvalidArgument` if the values violate the interval invariant
pub fn decode_record(line: &str, sep: &Separator) -> Result<Interval, CodecError> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let fields: Vec<&str> = line.split(sep.as_str()).collect();
    if fields.len() != RECORD_FIELDS {
        return Err(CodecError::FieldCount { expected: RECORD_FIELDS, found: fields.len() });
    }

    let start = parse_float(FIELD_NAMES[0], fields[0])?;
    let end = parse_float(FIELD_NAMES[1], fields[1])?;
    let resolution = parse_resolution(FIELD_NAMES[2], fields[2])?;

    Ok(Interval::new(start, end, resolution)?)
}

fn parse_float(field: &'static str, text: &str) -> Result<f64, CodecError> {
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CodecError::InvalidNumber { field, text: text.to_string() })
}

fn parse_resolution(field: &'static str, text: &str) -> Result<u32, CodecError> {
    text.parse::<u32>()
        .map_err(|_| CodecError::InvalidNumber { field, text: text.to_string() })
}
