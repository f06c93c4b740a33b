use crate::geometry::BoundingBox;
use crate::segment::Segment;

/// Creates an unpatterned, unscaled segment with a 10x10 region at the origin
pub fn plain_segment(name: &str) -> Segment {
    Segment::new(name, BoundingBox::new(0, 0, 10, 10), None, None).unwrap()
}

/// Creates segments for each of the given names
pub fn plain_segments(names: &[&str]) -> Vec<Segment> {
    names.iter().map(|name| plain_segment(name)).collect()
}
