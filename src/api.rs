use std::path::{Path, PathBuf};
use log::info;
use crate::io::SourceFile;
use crate::segment::{read_segment_file, Segment};
use crate::template::{CancellationToken, ImageTemplate, PlannedOutput, RunSummary, SnipResult, Template,
                      TemplateRegistry, TemplateSettings};
use crate::utils::logger::Logger;

/// Main interface to the SnipKit library
pub struct SnipKit {
    logger: Logger,
}

impl SnipKit {
    /// Create a new SnipKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional run log path; `None` records nothing
    ///
    /// # Returns
    /// A SnipKit instance or an error if the run log cannot be created
    pub fn new(log_file: Option<&Path>) -> SnipResult<Self> {
        let logger = match log_file {
            Some(path) => Logger::new(path)?,
            None => Logger::disabled(),
        };
        Ok(SnipKit { logger })
    }

    /// Read and validate a segment definition file
    pub fn load_segments(&self, path: impl AsRef<Path>) -> SnipResult<Vec<Segment>> {
        read_segment_file(path.as_ref())
    }

    /// Snip every segment out of every image
    ///
    /// # Arguments
    /// * `segments` - Segments to apply, in order
    /// * `images` - Images to snip from, in order
    /// * `cancellation` - Token polled between tiles
    ///
    /// # Returns
    /// The outputs written, or the first error
    pub fn snip<P: AsRef<Path>>(&self,
                                segments: Vec<Segment>,
                                images: &[P],
                                cancellation: &CancellationToken) -> SnipResult<RunSummary> {
        let template = self.image_template(segments, images)?;
        template.execute(cancellation)
    }

    /// List the outputs `snip` would write, without writing anything
    pub fn plan<P: AsRef<Path>>(&self,
                                segments: Vec<Segment>,
                                images: &[P],
                                cancellation: &CancellationToken) -> SnipResult<Vec<PlannedOutput>> {
        let template = self.image_template(segments, images)?;
        template.plan(cancellation)
    }

    /// Run whichever template understands a list of input paths, as the CLI does
    ///
    /// # Returns
    /// The run summary, or `None` if no template understood the inputs
    pub fn run(&self, paths: Vec<PathBuf>, cancellation: &CancellationToken) -> SnipResult<Option<RunSummary>> {
        let settings = TemplateSettings::new(paths);
        let registry = TemplateRegistry::with_defaults(false);
        match registry.resolve(&settings, &self.logger)? {
            Some(template) => template.execute(cancellation).map(Some),
            None => Ok(None),
        }
    }

    fn image_template<P: AsRef<Path>>(&self, segments: Vec<Segment>, images: &[P]) -> SnipResult<ImageTemplate<'_>> {
        let files = images.iter()
            .map(|path| SourceFile::new(path.as_ref()))
            .collect();
        info!("Preparing {} segments", segments.len());
        ImageTemplate::create(segments, files, &self.logger)
    }
}
