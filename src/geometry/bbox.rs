//! Bounding box structure for defining snip areas
//!
//! This module defines the BoundingBox structure that specifies a rectangular
//! area of an image. The coordinates are in pixels and follow the typical
//! image coordinate system where (0,0) is the top-left corner of the image.

use std::fmt;
use serde::Deserialize;

use crate::template::errors::{SnipError, SnipResult};

/// Rectangle in source-image pixel coordinates
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. Segment regions, pattern cells and concrete tiles are all
/// expressed with this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub struct BoundingBox {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the box in pixels
    pub width: u32,

    /// Height of the box in pixels
    pub height: u32,
}

impl BoundingBox {
    /// Create a new bounding box
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the box in pixels
    /// * `height` - Height of the box in pixels
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        BoundingBox { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    ///
    /// # Returns
    /// The X-coordinate immediately after the rightmost pixel, or an
    /// overflow error if it cannot be represented
    pub fn end_x(&self) -> SnipResult<u32> {
        self.x.checked_add(self.width)
            .ok_or_else(|| SnipError::ArithmeticOverflow(format!("right edge of {}", self)))
    }

    /// Get the bottommost Y coordinate (exclusive)
    ///
    /// # Returns
    /// The Y-coordinate immediately below the bottommost pixel, or an
    /// overflow error if it cannot be represented
    pub fn end_y(&self) -> SnipResult<u32> {
        self.y.checked_add(self.height)
            .ok_or_else(|| SnipError::ArithmeticOverflow(format!("bottom edge of {}", self)))
    }

    /// Check whether the box lies entirely inside an image of the given size
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> SnipResult<bool> {
        Ok(self.end_x()? <= image_width && self.end_y()? <= image_height)
    }

    /// Whether the box covers no pixels
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}x{}", self.x, self.y, self.width, self.height)
    }
}
