//! Output scaling descriptor

use image::imageops::FilterType;
use serde::Deserialize;

use crate::template::errors::{SnipError, SnipResult};

/// Resampling algorithm used when a snipped region is enlarged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterpolationMode {
    /// Replicates source pixels, never blends
    #[default]
    #[serde(alias = "NearestNeighbour", alias = "nearestNeighbor", alias = "NearestNeighbor")]
    NearestNeighbour,
    #[serde(alias = "Bilinear")]
    Bilinear,
    #[serde(alias = "Bicubic")]
    Bicubic,
}

impl InterpolationMode {
    /// The `image` crate filter that implements this mode
    pub fn filter_type(&self) -> FilterType {
        match self {
            InterpolationMode::NearestNeighbour => FilterType::Nearest,
            InterpolationMode::Bilinear => FilterType::Triangle,
            InterpolationMode::Bicubic => FilterType::CatmullRom,
        }
    }

    /// Human readable name, used in logs
    pub fn name(&self) -> &'static str {
        match self {
            InterpolationMode::NearestNeighbour => "nearest neighbour",
            InterpolationMode::Bilinear => "bilinear",
            InterpolationMode::Bicubic => "bicubic",
        }
    }
}

/// Integer scale factor applied to both dimensions of a snipped region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scaling {
    factor: u32,
    mode: Option<InterpolationMode>,
}

impl Scaling {
    /// Create a scaling descriptor
    ///
    /// # Arguments
    /// * `factor` - Multiplier for width and height, must be at least 1
    /// * `mode` - Resampling mode, or `None` for the default
    ///
    /// # Returns
    /// The descriptor, or a description of why the factor is unusable
    pub fn new(factor: u32, mode: Option<InterpolationMode>) -> Result<Self, String> {
        if factor == 0 {
            return Err("scaling factor must be at least 1".to_string());
        }
        Ok(Scaling { factor, mode })
    }

    /// Scaling used when a segment specifies none
    pub fn identity() -> Self {
        Scaling { factor: 1, mode: None }
    }

    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// The mode as written in the definition, which may be absent
    pub fn mode(&self) -> Option<InterpolationMode> {
        self.mode
    }

    /// The mode to resample with, falling back to nearest neighbour
    pub fn effective_mode(&self) -> InterpolationMode {
        self.mode.unwrap_or_default()
    }

    /// Output dimensions for a region of the given size
    pub fn scaled_dimensions(&self, width: u32, height: u32) -> SnipResult<(u32, u32)> {
        let scaled_width = width.checked_mul(self.factor)
            .ok_or_else(|| SnipError::ArithmeticOverflow(
                format!("scaled width {} x {}", width, self.factor)))?;
        let scaled_height = height.checked_mul(self.factor)
            .ok_or_else(|| SnipError::ArithmeticOverflow(
                format!("scaled height {} x {}", height, self.factor)))?;
        Ok((scaled_width, scaled_height))
    }
}

impl Default for Scaling {
    fn default() -> Self {
        Scaling::identity()
    }
}
