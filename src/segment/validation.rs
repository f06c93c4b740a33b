//! Segment set validation
//!
//! Checks that apply to a whole collection of segments rather than to a
//! single definition. They run before any image is opened.

use std::collections::HashSet;
use log::debug;

use crate::template::errors::ValidationError;
use super::segment::Segment;

/// Validate a segment collection
///
/// # Arguments
/// * `segments` - The segments that will be applied to every input image
///
/// # Returns
/// `Ok(())` when the collection is non-empty and every name is unique
/// ignoring case
pub fn validate_segments(segments: &[Segment]) -> Result<(), ValidationError> {
    if segments.is_empty() {
        return Err(ValidationError::EmptySet);
    }

    let duplicates = duplicate_names(segments);
    if !duplicates.is_empty() {
        return Err(ValidationError::DuplicateNames(duplicates));
    }

    debug!("Validated {} segments", segments.len());
    Ok(())
}

/// Names that repeat an earlier segment's name, ignoring case
///
/// The first occurrence of a name is never reported; each later occurrence
/// is reported with its own casing, in input order.
pub fn duplicate_names(segments: &[Segment]) -> Vec<String> {
    let mut visited = HashSet::new();
    segments.iter()
        .filter(|segment| !visited.insert(segment.name().to_lowercase()))
        .map(|segment| segment.name().to_string())
        .collect()
}
