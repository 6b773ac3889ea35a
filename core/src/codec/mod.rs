//! codec/mod.rs
//! Delimited-text record codec for intervals.
//!
//! Record layout (one line, UTF-8):
//!
//! ```text
//! <start><sep><end><sep><resolution>
//! ```
//!
//! Responsibilities:
//! - Encode an interval into its canonical, round-trip-safe record text
//! - Decode a record with strict validation
//!
//! Non-responsibilities:
//! - Line framing across a stream (see `stream::records`)
//! - IO

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{CodecError, Separator};
pub use encode::{encode_line, encode_record, encode_records_parallel, format_float};
pub use decode::decode_record;
