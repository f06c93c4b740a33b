//! Segment definitions
//!
//! This module provides the segment model, the checks that apply to a whole
//! segment set, and the readers for declarative segment files.

mod segment;
pub mod validation;
pub mod reader;
#[cfg(test)]
mod tests;

pub use segment::Segment;
pub use validation::{validate_segments, duplicate_names};
pub use reader::{read_segment_file, parse_json_segments, parse_toml_segments, SegmentFileFormat};
