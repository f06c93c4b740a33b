//! Collision-free output file naming
//!
//! Outputs are written next to their source as `{stem}.{tile}.{ext}`. When
//! that name is taken, ` (1)`, ` (2)`, ... is appended to the tile part until
//! a free name is found. Existing files are never overwritten.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::PathBuf;
use log::debug;

use crate::template::errors::{SnipError, SnipResult};
use super::source_file::SourceFile;

/// Build the output path for a given attempt
///
/// # Arguments
/// * `source` - The image the tile was snipped from
/// * `tile_name` - Generated tile name
/// * `attempt` - 0 for the plain name, n for the ` (n)` variant
pub fn output_candidate(source: &SourceFile, tile_name: &str, attempt: u32) -> SnipResult<PathBuf> {
    let extension = source.extension()
        .ok_or_else(|| SnipError::GenericError(
            format!("{} has no file extension", source.path().display())))?;

    let mut file_name = OsString::from(source.stem());
    file_name.push(".");
    file_name.push(tile_name);
    if attempt > 0 {
        file_name.push(format!(" ({})", attempt));
    }
    file_name.push(".");
    file_name.push(extension.normalized());

    Ok(source.directory().join(file_name))
}

/// Hands out output paths that collide neither with files on disk nor with
/// paths handed out earlier in the same run
///
/// The on-disk check is not atomic with the later write; concurrent runs
/// targeting the same directory can still race.
#[derive(Debug, Default)]
pub struct OutputNamer {
    reserved: HashSet<PathBuf>,
}

impl OutputNamer {
    pub fn new() -> Self {
        OutputNamer { reserved: HashSet::new() }
    }

    /// Pick and reserve the next free output path for a tile
    ///
    /// # Arguments
    /// * `source` - The image the tile was snipped from
    /// * `tile_name` - Generated tile name
    ///
    /// # Returns
    /// A path that does not exist yet and has not been returned before
    pub fn next_output_path(&mut self, source: &SourceFile, tile_name: &str) -> SnipResult<PathBuf> {
        let mut attempt = 0u32;
        loop {
            let candidate = output_candidate(source, tile_name, attempt)?;
            if !candidate.exists() && !self.reserved.contains(&candidate) {
                debug!("Reserved output path {}", candidate.display());
                self.reserved.insert(candidate.clone());
                return Ok(candidate);
            }

            attempt = attempt.checked_add(1)
                .ok_or_else(|| SnipError::ArithmeticOverflow(
                    format!("output name counter for tile {}", tile_name)))?;
        }
    }

    /// Number of paths handed out so far
    pub fn reserved_count(&self) -> usize {
        self.reserved.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::Path;

    #[test]
    fn test_candidate_names() {
        let source = SourceFile::new("/pics/photo.PNG");
        assert_eq!(output_candidate(&source, "seg", 0).unwrap(), Path::new("/pics/photo.seg.png"));
        assert_eq!(output_candidate(&source, "seg.1.0", 3).unwrap(), Path::new("/pics/photo.seg.1.0 (3).png"));
    }

    #[test]
    fn test_candidate_requires_extension() {
        let source = SourceFile::new("/pics/photo");
        assert!(output_candidate(&source, "seg", 0).is_err());
    }

    #[test]
    fn test_existing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceFile::new(dir.path().join("photo.png"));
        File::create(dir.path().join("photo.seg.png")).unwrap();

        let mut namer = OutputNamer::new();
        assert_eq!(namer.next_output_path(&source, "seg").unwrap(), dir.path().join("photo.seg (1).png"));

        File::create(dir.path().join("photo.seg (1).png")).unwrap();
        let mut namer = OutputNamer::new();
        assert_eq!(namer.next_output_path(&source, "seg").unwrap(), dir.path().join("photo.seg (2).png"));
    }

    #[test]
    fn test_reserved_paths_are_not_reused() {
        let dir = tempfile::tempdir().unwrap();
        let source = SourceFile::new(dir.path().join("photo.jpg"));

        let mut namer = OutputNamer::new();
        let first = namer.next_output_path(&source, "seg").unwrap();
        let second = namer.next_output_path(&source, "seg").unwrap();
        assert_eq!(first, dir.path().join("photo.seg.jpg"));
        assert_eq!(second, dir.path().join("photo.seg (1).jpg"));
        assert_eq!(namer.reserved_count(), 2);
    }
}
