//! Snipping command
//!
//! Resolves a template for the given files and runs it, writing every tile.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::{Command, CommandOutcome};
use crate::template::{CancellationToken, SnipResult, TemplateRegistry, TemplateSettings};
use crate::utils::logger::Logger;

/// Command for snipping tiles out of images
pub struct SnipCommand<'a> {
    /// Absolute input paths
    settings: TemplateSettings,
    /// Whether to draw a progress bar
    show_progress: bool,
    /// Run log for recording outputs
    logger: &'a Logger,
}

impl<'a> SnipCommand<'a> {
    /// Create a new snip command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Run log for recording outputs
    /// * `show_progress` - Whether to draw a progress bar
    pub fn new(args: &ArgMatches, logger: &'a Logger, show_progress: bool) -> SnipResult<Self> {
        let settings = super::settings_from_args(args)?;
        Ok(SnipCommand {
            settings,
            show_progress,
            logger,
        })
    }
}

impl<'a> Command for SnipCommand<'a> {
    fn execute(&self, cancellation: &CancellationToken) -> SnipResult<CommandOutcome> {
        let registry = TemplateRegistry::with_defaults(self.show_progress);
        let template = match registry.resolve(&self.settings, self.logger)? {
            Some(template) => template,
            None => return Ok(CommandOutcome::NoTemplate),
        };

        let summary = template.execute(cancellation)?;
        info!("Snipped {} files into {} outputs", summary.files_processed, summary.outputs.len());
        println!("Wrote {} files from {} images", summary.outputs.len(), summary.files_processed);

        Ok(CommandOutcome::Completed)
    }
}
