//! Custom error types for segment snipping

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::geometry::BoundingBox;

/// Problems with the shape of the caller's input
///
/// These are detected before any image is decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The segment collection has no entries
    EmptySet,
    /// Names that collide case-insensitively with an earlier segment
    DuplicateNames(Vec<String>),
    /// A single segment definition is unusable
    InvalidSegment { name: String, reason: String },
    /// Input files without any file extension
    MissingExtension(Vec<PathBuf>),
    /// Normalized extensions that no supported format recognizes
    UnsupportedExtension(Vec<String>),
    /// Segment definitions were given but no images to apply them to
    NoInputFiles,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptySet => write!(
                f, "The segment collection is empty. At least one segment must be specified"),
            ValidationError::DuplicateNames(names) => write!(
                f, "The segment collection contains duplicate names: {}", names.join(", ")),
            ValidationError::InvalidSegment { name, reason } => write!(
                f, "Segment '{}' is invalid: {}", name, reason),
            ValidationError::MissingExtension(paths) => {
                let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "Files with no file extension: {}", listed.join(", "))
            },
            ValidationError::UnsupportedExtension(extensions) => write!(
                f, "Unsupported file extensions: {}", extensions.join(", ")),
            ValidationError::NoInputFiles => write!(
                f, "Segment definitions were given but no image files to snip from"),
        }
    }
}

/// Snipping error types
#[derive(Debug)]
pub enum SnipError {
    /// I/O error
    IoError(io::Error),
    /// Decode or encode failure reported by the image codec
    ImageError(image::ImageError),
    /// Caller input rejected before any image work
    Validation(ValidationError),
    /// Region or buffer arithmetic exceeded the representable range
    ArithmeticOverflow(String),
    /// Region does not lie inside the image it is read from
    RegionOutOfBounds {
        region: BoundingBox,
        image_width: u32,
        image_height: u32,
    },
    /// A segment definition file could not be parsed
    SegmentParse { path: PathBuf, message: String },
    /// The configuration file could not be parsed
    ConfigError(String),
    /// The caller asked the run to stop
    Cancelled,
    /// Generic error with message
    GenericError(String),
}

impl SnipError {
    /// Whether this error is a caller-requested stop rather than a failure
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SnipError::Cancelled)
    }
}

impl fmt::Display for SnipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnipError::IoError(e) => write!(f, "I/O error: {}", e),
            SnipError::ImageError(e) => write!(f, "Image codec error: {}", e),
            SnipError::Validation(e) => write!(f, "Validation error: {}", e),
            SnipError::ArithmeticOverflow(context) => write!(f, "Arithmetic overflow while computing {}", context),
            SnipError::RegionOutOfBounds { region, image_width, image_height } => write!(
                f, "Region {} lies outside the {}x{} image", region, image_width, image_height),
            SnipError::SegmentParse { path, message } => write!(
                f, "Failed to parse segment file {}: {}", path.display(), message),
            SnipError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            SnipError::Cancelled => write!(f, "Operation cancelled"),
            SnipError::GenericError(msg) => write!(f, "Snip error: {}", msg),
        }
    }
}

impl std::error::Error for SnipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnipError::IoError(e) => Some(e),
            SnipError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SnipError {
    fn from(error: io::Error) -> Self {
        SnipError::IoError(error)
    }
}

impl From<image::ImageError> for SnipError {
    fn from(error: image::ImageError) -> Self {
        SnipError::ImageError(error)
    }
}

impl From<ValidationError> for SnipError {
    fn from(error: ValidationError) -> Self {
        SnipError::Validation(error)
    }
}

impl From<String> for SnipError {
    fn from(msg: String) -> Self {
        SnipError::GenericError(msg)
    }
}

/// Result type for snipping operations
pub type SnipResult<T> = Result<T, SnipError>;
