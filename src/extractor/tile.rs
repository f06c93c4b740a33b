//! Concrete tiles produced by segment expansion

use crate::geometry::BoundingBox;

/// One concrete region to snip, with the name its output file will carry
///
/// Tiles only live for the duration of one extraction loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Segment name, plus `.{column}.{row}` for patterned segments
    pub name: String,

    /// Pixel area to copy from the source image
    pub region: BoundingBox,
}

impl Tile {
    pub fn new(name: impl Into<String>, region: BoundingBox) -> Self {
        Tile { name: name.into(), region }
    }
}
