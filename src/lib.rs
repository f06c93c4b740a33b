pub mod geometry;
pub mod segment;
pub mod extractor;
pub mod io;
pub mod template;
pub mod commands;
pub mod utils;
pub mod config;
pub mod api;

pub use crate::api::SnipKit;

pub use geometry::{BoundingBox, InterpolationMode, Pattern, Scaling};
pub use segment::Segment;
pub use extractor::Tile;
pub use template::{CancellationToken, SnipError, SnipResult, ValidationError};
pub use config::SnipConfig;
