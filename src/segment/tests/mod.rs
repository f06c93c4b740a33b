//! Tests for segment definitions

mod test_utils;
mod segment_tests;
