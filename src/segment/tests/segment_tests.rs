//! Tests for single segment construction

extern crate std;

use crate::geometry::{BoundingBox, Pattern, Scaling};
use crate::segment::Segment;
use crate::template::errors::ValidationError;

#[test]
fn test_segment_creation() {
    let region = BoundingBox::new(4, 8, 16, 32);
    let pattern = Pattern::new(None, Some(2), Some(3));
    let scaling = Scaling::new(2, None).unwrap();
    let segment = Segment::new("tile", region, Some(pattern), Some(scaling)).unwrap();

    std::assert_eq!(segment.name(), "tile");
    std::assert_eq!(segment.region(), region);
    std::assert_eq!(segment.pattern(), Some(&pattern));
    std::assert_eq!(segment.effective_scaling().factor(), 2);
}

#[test]
fn test_absent_scaling_is_identity() {
    let segment = Segment::new("plain", BoundingBox::new(0, 0, 1, 1), None, None).unwrap();
    std::assert!(segment.scaling().is_none());
    std::assert_eq!(segment.effective_scaling(), Scaling::identity());
}

#[test]
fn test_empty_name_rejected() {
    let result = Segment::new("", BoundingBox::new(0, 0, 1, 1), None, None);
    std::assert!(matches!(result, Err(ValidationError::InvalidSegment { .. })));
}

#[test]
fn test_file_name_unsafe_names_rejected() {
    for name in ["a/b", "a\\b", "what?", "star*", "pipe|", "colon:", "bell\u{7}"] {
        let result = Segment::new(name, BoundingBox::new(0, 0, 1, 1), None, None);
        std::assert!(result.is_err(), "name {:?} should be rejected", name);
    }
}

#[test]
fn test_dotted_and_spaced_names_allowed() {
    for name in ["icon.small", "big icon", "row-1_col-2"] {
        std::assert!(Segment::new(name, BoundingBox::new(0, 0, 1, 1), None, None).is_ok());
    }
}

#[test]
fn test_trailing_period_and_space_allowed() {
    // Output names always continue after the segment name
    for name in ["icon.", "icon ", ".."] {
        let segment = Segment::new(name, BoundingBox::new(0, 0, 1, 1), None, None);
        std::assert!(segment.is_ok(), "name {:?} should be accepted", name);
    }
}

#[test]
fn test_zero_sized_region_rejected() {
    std::assert!(Segment::new("w", BoundingBox::new(0, 0, 0, 5), None, None).is_err());
    std::assert!(Segment::new("h", BoundingBox::new(0, 0, 5, 0), None, None).is_err());
}

#[test]
fn test_zero_sized_cell_rejected() {
    let pattern = Pattern::new(Some(BoundingBox::new(0, 0, 0, 10)), None, None);
    let result = Segment::new("cell", BoundingBox::new(0, 0, 5, 5), Some(pattern), None);
    std::assert!(matches!(result, Err(ValidationError::InvalidSegment { .. })));
}
