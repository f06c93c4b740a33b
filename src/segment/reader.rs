//! Segment definition files
//!
//! Segments are declared in JSON (an array of records) or TOML (a list of
//! `[[segment]]` tables). Both formats share the same record shape:
//!
//! ```json
//! [
//!   {
//!     "name": "icon",
//!     "region": { "x": 0, "y": 0, "width": 16, "height": 16 },
//!     "pattern": { "cellSize": { "x": 0, "y": 0, "width": 18, "height": 18 }, "horizontalCount": 4 },
//!     "scaling": { "factor": 2, "mode": "bilinear" }
//!   }
//! ]
//! ```

use std::fs;
use std::path::Path;
use log::{debug, info};
use serde::Deserialize;

use crate::geometry::{BoundingBox, InterpolationMode, Pattern, Scaling};
use crate::io::FileExtension;
use crate::template::errors::{SnipError, SnipResult, ValidationError};
use super::segment::Segment;

/// Container format of a segment definition file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentFileFormat {
    Json,
    Toml,
}

impl SegmentFileFormat {
    /// Recognize a segment file by its extension
    pub fn from_extension(extension: &FileExtension) -> Option<Self> {
        match extension.normalized() {
            "json" => Some(SegmentFileFormat::Json),
            "toml" => Some(SegmentFileFormat::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SegmentRecord {
    name: String,
    region: BoundingBox,
    pattern: Option<PatternRecord>,
    scaling: Option<ScalingRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PatternRecord {
    cell_size: Option<BoundingBox>,
    horizontal_count: Option<u32>,
    vertical_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ScalingRecord {
    factor: u32,
    mode: Option<InterpolationMode>,
}

#[derive(Debug, Deserialize)]
struct TomlSegmentFile {
    #[serde(default)]
    segment: Vec<SegmentRecord>,
}

impl SegmentRecord {
    fn into_segment(self) -> Result<Segment, ValidationError> {
        let pattern = self.pattern.map(|p| Pattern::new(p.cell_size, p.horizontal_count, p.vertical_count));
        let scaling = match self.scaling {
            Some(s) => Some(Scaling::new(s.factor, s.mode)
                .map_err(|reason| ValidationError::InvalidSegment {
                    name: self.name.clone(),
                    reason,
                })?),
            None => None,
        };
        Segment::new(self.name, self.region, pattern, scaling)
    }
}

fn into_segments(records: Vec<SegmentRecord>) -> SnipResult<Vec<Segment>> {
    records.into_iter()
        .map(|record| record.into_segment().map_err(SnipError::from))
        .collect()
}

/// Parse segments from JSON text
///
/// # Arguments
/// * `content` - JSON array of segment records
/// * `path` - File the text came from, used in error messages
pub fn parse_json_segments(content: &str, path: &Path) -> SnipResult<Vec<Segment>> {
    let records: Vec<SegmentRecord> = serde_json::from_str(content)
        .map_err(|e| SnipError::SegmentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    into_segments(records)
}

/// Parse segments from TOML text
///
/// # Arguments
/// * `content` - TOML document with `[[segment]]` tables
/// * `path` - File the text came from, used in error messages
pub fn parse_toml_segments(content: &str, path: &Path) -> SnipResult<Vec<Segment>> {
    let file: TomlSegmentFile = toml::from_str(content)
        .map_err(|e| SnipError::SegmentParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    into_segments(file.segment)
}

/// Read every segment declared in a definition file
///
/// The format is chosen from the file extension.
///
/// # Arguments
/// * `path` - Path to a `.json` or `.toml` segment file
///
/// # Returns
/// The segments in declaration order, or an error if the file cannot be read
/// or parsed
pub fn read_segment_file(path: &Path) -> SnipResult<Vec<Segment>> {
    let format = path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| FileExtension::new(ext).ok())
        .and_then(|ext| SegmentFileFormat::from_extension(&ext))
        .ok_or_else(|| SnipError::SegmentParse {
            path: path.to_path_buf(),
            message: "segment files must have a .json or .toml extension".to_string(),
        })?;

    info!("Reading segment definitions from {}", path.display());
    let content = fs::read_to_string(path)?;

    let segments = match format {
        SegmentFileFormat::Json => parse_json_segments(&content, path)?,
        SegmentFileFormat::Toml => parse_toml_segments(&content, path)?,
    };

    debug!("Read {} segments from {}", segments.len(), path.display());
    Ok(segments)
}
