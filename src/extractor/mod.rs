//! Tile expansion and pixel extraction
//!
//! This module turns segments into concrete tiles and copies their pixels
//! out of decoded images. Decoding and encoding sit behind a codec strategy.

mod tile;
mod tile_expander;
mod resampler;
mod codec;

// Public exports
pub use tile::Tile;
pub use tile_expander::{expand, TileIter};
pub use resampler::extract;
pub use codec::{ImageCodec, FileCodec};
