//! Source image paths and the formats recognized by extension

use std::collections::HashMap;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use image::ImageFormat;
use lazy_static::lazy_static;

use crate::template::errors::{SnipResult, ValidationError};

lazy_static! {
    // Image containers we can decode and re-encode, keyed by normalized extension
    static ref SUPPORTED_FORMATS: HashMap<&'static str, ImageFormat> = {
        let mut formats = HashMap::new();
        formats.insert("bmp", ImageFormat::Bmp);
        formats.insert("jpeg", ImageFormat::Jpeg);
        formats.insert("jpg", ImageFormat::Jpeg);
        formats.insert("png", ImageFormat::Png);
        formats
    };
}

/// Normalized file extension (lower-case, without the leading period)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileExtension(String);

impl FileExtension {
    /// Create a normalized extension
    ///
    /// # Arguments
    /// * `extension` - Extension text without the leading period
    pub fn new(extension: &str) -> Result<Self, String> {
        if extension.is_empty() {
            return Err("file extension must not be empty".to_string());
        }
        if extension.contains('.') {
            return Err(format!("file extension cannot contain a period: {}", extension));
        }
        Ok(FileExtension(extension.to_lowercase()))
    }

    pub fn normalized(&self) -> &str {
        &self.0
    }

    /// The image container this extension denotes, if supported
    pub fn image_format(&self) -> Option<ImageFormat> {
        SUPPORTED_FORMATS.get(self.0.as_str()).copied()
    }
}

impl fmt::Display for FileExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A file given on the command line, split into the parts output naming needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    directory: PathBuf,
    stem: OsString,
    extension: Option<FileExtension>,
}

impl SourceFile {
    /// Split a path into directory, stem and extension
    ///
    /// A trailing period does not make an extension: `foo.` has none and its
    /// stem is `foo.`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let directory = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let extension = path.extension()
            .map(OsStr::to_string_lossy)
            .and_then(|ext| FileExtension::new(&ext).ok());

        let stem = match extension {
            Some(_) => path.file_stem().map(OsStr::to_os_string),
            None => path.file_name().map(OsStr::to_os_string),
        }.unwrap_or_default();

        SourceFile { path, directory, stem, extension }
    }

    /// Create a source file for a path that must name an existing file
    pub fn from_existing(path: impl Into<PathBuf>) -> SnipResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} is not an existing file", path.display()),
            ).into());
        }
        Ok(SourceFile::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn stem(&self) -> &OsStr {
        &self.stem
    }

    pub fn extension(&self) -> Option<&FileExtension> {
        self.extension.as_ref()
    }

    /// The image container implied by the extension, if supported
    pub fn image_format(&self) -> Option<ImageFormat> {
        self.extension.as_ref().and_then(FileExtension::image_format)
    }
}

/// Check that every input image has a supported extension
///
/// Extension-less files are reported first, all of them at once; otherwise
/// every unsupported extension is reported.
pub fn validate_files(files: &[SourceFile]) -> Result<(), ValidationError> {
    let missing: Vec<PathBuf> = files.iter()
        .filter(|file| file.extension().is_none())
        .map(|file| file.path().to_path_buf())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingExtension(missing));
    }

    let unsupported: Vec<String> = files.iter()
        .filter_map(|file| file.extension())
        .filter(|ext| ext.image_format().is_none())
        .map(|ext| ext.normalized().to_string())
        .collect();
    if !unsupported.is_empty() {
        return Err(ValidationError::UnsupportedExtension(unsupported));
    }

    Ok(())
}
