//! Geometry value types
//!
//! Pixel rectangles, scaling descriptors and tiling patterns. All of them are
//! plain immutable values copied into the segments that use them.

mod bbox;
mod scaling;
mod pattern;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::scaling::{InterpolationMode, Scaling};
pub use self::pattern::Pattern;
