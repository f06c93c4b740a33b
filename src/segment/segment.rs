//! Named segment definitions

use lazy_static::lazy_static;
use regex::Regex;

use crate::geometry::{BoundingBox, Pattern, Scaling};
use crate::template::errors::ValidationError;

lazy_static! {
    // Characters that cannot appear in a file name on common file systems
    static ref RESERVED_NAME_CHARS: Regex = Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#)
        .expect("reserved character pattern is valid");
}

/// A named rectangular region to snip from every input image
///
/// Segments are validated when constructed and never change afterwards. The
/// name ends up inside output file names, so it has to be a usable file name
/// component on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    name: String,
    region: BoundingBox,
    pattern: Option<Pattern>,
    scaling: Option<Scaling>,
}

impl Segment {
    /// Create a new segment
    ///
    /// # Arguments
    /// * `name` - Unique name of the segment, used in output file names
    /// * `region` - Area to snip, or the first cell when a pattern is given
    /// * `pattern` - Optional tiling pattern
    /// * `scaling` - Optional output scaling
    ///
    /// # Returns
    /// The segment, or a validation error describing the first problem found
    pub fn new(
        name: impl Into<String>,
        region: BoundingBox,
        pattern: Option<Pattern>,
        scaling: Option<Scaling>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let invalid = |reason: &str| ValidationError::InvalidSegment {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if RESERVED_NAME_CHARS.is_match(&name) {
            return Err(invalid("name contains characters that are not allowed in file names"));
        }
        if region.is_empty() {
            return Err(invalid("region width and height must be non-zero"));
        }
        if let Some(cell) = pattern.as_ref().and_then(|p| p.cell_size) {
            if cell.is_empty() {
                return Err(invalid("pattern cell width and height must be non-zero"));
            }
        }

        Ok(Segment { name, region, pattern, scaling })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn region(&self) -> BoundingBox {
        self.region
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        self.pattern.as_ref()
    }

    pub fn scaling(&self) -> Option<&Scaling> {
        self.scaling.as_ref()
    }

    /// Scaling to apply, the identity when none was given
    pub fn effective_scaling(&self) -> Scaling {
        self.scaling.unwrap_or_default()
    }
}
