//! Template factories and the registry that picks one for an invocation

use log::{debug, info};

use crate::io::SourceFile;
use crate::segment::{read_segment_file, SegmentFileFormat};
use crate::utils::logger::Logger;
use super::errors::SnipResult;
use super::image_template::ImageTemplate;
use super::settings::TemplateSettings;
use super::template_traits::{Probe, Template, TemplateFactory};

/// Factory for the image snipping engine
///
/// Understands an invocation made of segment-definition files (`.json` or
/// `.toml`) plus the images to snip from. Segments from several definition
/// files are merged in argument order.
pub struct ImageTemplateFactory {
    show_progress: bool,
}

impl ImageTemplateFactory {
    pub fn new(show_progress: bool) -> Self {
        ImageTemplateFactory { show_progress }
    }
}

impl Default for ImageTemplateFactory {
    fn default() -> Self {
        ImageTemplateFactory::new(true)
    }
}

impl<'a> TemplateFactory<'a> for ImageTemplateFactory {
    fn name(&self) -> &'static str {
        "image"
    }

    fn probe(&self, settings: &TemplateSettings, logger: &'a Logger) -> Probe<Box<dyn Template + 'a>> {
        let mut definitions = Vec::new();
        let mut images = Vec::new();

        for path in settings.paths() {
            let file = match SourceFile::from_existing(path) {
                Ok(file) => file,
                Err(_) => return Probe::NotApplicable(format!("{} is not an existing file", path.display())),
            };

            match file.extension().and_then(SegmentFileFormat::from_extension) {
                Some(_) => definitions.push(file),
                None => images.push(file),
            }
        }

        if definitions.is_empty() {
            return Probe::NotApplicable("no segment definition file given".to_string());
        }

        // Segments from every definition file, in argument order
        let mut segments = Vec::new();
        for definition in &definitions {
            match read_segment_file(definition.path()) {
                Ok(read) => segments.extend(read),
                Err(e) => return Probe::Malformed(e),
            }
        }
        debug!("Read {} segments from {} definition files", segments.len(), definitions.len());

        match ImageTemplate::create(segments, images, logger) {
            Ok(template) => Probe::Applicable(Box::new(template.with_progress(self.show_progress))),
            Err(e) => Probe::Malformed(e),
        }
    }
}

/// Ordered set of template factories
pub struct TemplateRegistry<'a> {
    factories: Vec<Box<dyn TemplateFactory<'a> + 'a>>,
}

impl<'a> TemplateRegistry<'a> {
    pub fn new() -> Self {
        TemplateRegistry { factories: Vec::new() }
    }

    /// Registry holding every built-in engine
    pub fn with_defaults(show_progress: bool) -> Self {
        TemplateRegistry::new()
            .with_factory(Box::new(ImageTemplateFactory::new(show_progress)))
    }

    /// Append a factory; factories are asked in registration order
    pub fn register(&mut self, factory: Box<dyn TemplateFactory<'a> + 'a>) {
        self.factories.push(factory);
    }

    pub fn with_factory(mut self, factory: Box<dyn TemplateFactory<'a> + 'a>) -> Self {
        self.register(factory);
        self
    }

    /// Find the template for an invocation
    ///
    /// # Returns
    /// The first applicable template, `None` if no factory understood the
    /// inputs, or the error of the first factory that found them malformed
    pub fn resolve(&self, settings: &TemplateSettings, logger: &'a Logger) -> SnipResult<Option<Box<dyn Template + 'a>>> {
        for factory in &self.factories {
            match factory.probe(settings, logger) {
                Probe::Applicable(template) => {
                    info!("Using the {} template", factory.name());
                    return Ok(Some(template));
                }
                Probe::NotApplicable(reason) => {
                    debug!("{} template not applicable: {}", factory.name(), reason);
                }
                Probe::Malformed(e) => return Err(e),
            }
        }

        Ok(None)
    }
}

impl<'a> Default for TemplateRegistry<'a> {
    fn default() -> Self {
        TemplateRegistry::new()
    }
}
