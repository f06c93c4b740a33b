//! Image template runner
//!
//! Applies every segment to every input image: each image is decoded once,
//! each segment is expanded into tiles against it, and each tile is
//! extracted, named and encoded next to the source in the source's format.

use image::GenericImageView;
use log::{debug, info, warn};

use crate::extractor::{self, FileCodec, ImageCodec};
use crate::io::{validate_files, OutputNamer, SourceFile};
use crate::segment::{validate_segments, Segment};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;
use super::cancellation::CancellationToken;
use super::errors::{SnipError, SnipResult, ValidationError};
use super::template_traits::{PlannedOutput, RunSummary, Template};

/// A validated snipping job over a set of images
pub struct ImageTemplate<'a, C: ImageCodec = FileCodec> {
    /// Segments applied to every image, in order
    segments: Vec<Segment>,
    /// Images to snip from, in order
    files: Vec<SourceFile>,
    /// Codec used to read sources and write outputs
    codec: C,
    /// Run log recording every output written
    logger: &'a Logger,
    /// Whether to draw a progress bar while running
    show_progress: bool,
}

impl<'a> ImageTemplate<'a, FileCodec> {
    /// Create a new image template
    ///
    /// # Arguments
    /// * `segments` - Segments to snip from every image
    /// * `files` - Images to snip from
    /// * `logger` - Run log recording every output written
    ///
    /// # Returns
    /// The template, or a validation error if the segment set is empty or has
    /// duplicate names, if there are no images, or if an image has a missing
    /// or unsupported extension
    pub fn create(segments: Vec<Segment>, files: Vec<SourceFile>, logger: &'a Logger) -> SnipResult<Self> {
        validate_segments(&segments)?;
        if files.is_empty() {
            return Err(ValidationError::NoInputFiles.into());
        }
        validate_files(&files)?;

        info!("Created image template with {} segments over {} files", segments.len(), files.len());
        Ok(ImageTemplate {
            segments,
            files,
            codec: FileCodec,
            logger,
            show_progress: false,
        })
    }
}

impl<'a, C: ImageCodec> ImageTemplate<'a, C> {
    /// Replace the codec, keeping everything else
    pub fn with_codec<D: ImageCodec>(self, codec: D) -> ImageTemplate<'a, D> {
        ImageTemplate {
            segments: self.segments,
            files: self.files,
            codec,
            logger: self.logger,
            show_progress: self.show_progress,
        }
    }

    /// Enable or disable the progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Snip every segment out of one decoded image
    fn snip_file(
        &self,
        file: &SourceFile,
        namer: &mut OutputNamer,
        summary: &mut RunSummary,
        progress: &ProgressTracker,
        cancellation: &CancellationToken,
    ) -> SnipResult<()> {
        let format = file.image_format()
            .ok_or_else(|| SnipError::GenericError(
                format!("Unsupported image format: {}", file.path().display())))?;

        let image = self.codec.decode(file)?;
        let (width, height) = image.dimensions();
        info!("Decoded {} ({}x{})", file.path().display(), width, height);

        for segment in &self.segments {
            cancellation.check()?;
            let scaling = segment.effective_scaling();
            debug!("Expanding segment {} over {}x{}", segment.name(), width, height);

            for tile in extractor::expand(segment, width, height) {
                cancellation.check()?;
                let tile = tile?;

                let output = extractor::extract(&image, tile.region, &scaling)?;
                let path = namer.next_output_path(file, &tile.name)?;
                self.codec.encode(&output, &path, format)?;

                self.logger.log(&format!("{} [{}] {} -> {}",
                                         file.path().display(), tile.name, tile.region, path.display()))?;
                progress.set_message(&tile.name);
                summary.outputs.push(path);
            }
        }

        Ok(())
    }
}

impl<'a, C: ImageCodec> Template for ImageTemplate<'a, C> {
    fn name(&self) -> &'static str {
        "image"
    }

    fn execute(&self, cancellation: &CancellationToken) -> SnipResult<RunSummary> {
        cancellation.check()?;
        info!("Snipping {} segments from {} files", self.segments.len(), self.files.len());

        let progress = if self.show_progress {
            ProgressTracker::new(self.files.len() as u64, "Snipping")
        } else {
            ProgressTracker::hidden()
        };

        let mut namer = OutputNamer::new();
        let mut summary = RunSummary::default();

        for file in &self.files {
            let result = cancellation.check()
                .and_then(|_| self.snip_file(file, &mut namer, &mut summary, &progress, cancellation));

            if let Err(e) = result {
                progress.abandon();
                if e.is_cancelled() {
                    warn!("Run cancelled after {} outputs", summary.outputs.len());
                }
                return Err(e);
            }

            summary.files_processed += 1;
            progress.increment(1);
        }

        progress.finish();
        info!("Wrote {} outputs from {} files", summary.outputs.len(), summary.files_processed);
        Ok(summary)
    }

    fn plan(&self, cancellation: &CancellationToken) -> SnipResult<Vec<PlannedOutput>> {
        cancellation.check()?;

        let mut namer = OutputNamer::new();
        let mut planned = Vec::new();

        for file in &self.files {
            cancellation.check()?;
            let (width, height) = self.codec.dimensions(file)?;

            for segment in &self.segments {
                cancellation.check()?;
                let scaling = segment.effective_scaling();

                for tile in extractor::expand(segment, width, height) {
                    cancellation.check()?;
                    let tile = tile?;

                    if !tile.region.fits_within(width, height)? {
                        return Err(SnipError::RegionOutOfBounds {
                            region: tile.region,
                            image_width: width,
                            image_height: height,
                        });
                    }

                    let (output_width, output_height) = scaling.scaled_dimensions(tile.region.width, tile.region.height)?;
                    let output = namer.next_output_path(file, &tile.name)?;
                    planned.push(PlannedOutput {
                        source: file.path().to_path_buf(),
                        tile,
                        output,
                        width: output_width,
                        height: output_height,
                    });
                }
            }
        }

        info!("Planned {} outputs", planned.len());
        Ok(planned)
    }
}
