//! Template engine interfaces
//!
//! A template maps a set of input files to a set of output files. Factories
//! decide whether they understand an invocation's inputs; the registry asks
//! them in order.

use std::path::PathBuf;

use crate::extractor::Tile;
use crate::utils::logger::Logger;
use super::cancellation::CancellationToken;
use super::errors::{SnipError, SnipResult};
use super::settings::TemplateSettings;

/// Outcome of a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of input images fully processed
    pub files_processed: usize,
    /// Every file written, in the order written
    pub outputs: Vec<PathBuf>,
}

/// One output a run would produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedOutput {
    /// Image the tile is snipped from
    pub source: PathBuf,
    /// The tile being snipped
    pub tile: Tile,
    /// Path the output would be written to
    pub output: PathBuf,
    /// Output width after scaling
    pub width: u32,
    /// Output height after scaling
    pub height: u32,
}

/// An executable snipping job
pub trait Template {
    /// Short engine name, used in logs
    fn name(&self) -> &'static str;

    /// Run the job, writing every output
    ///
    /// # Arguments
    /// * `cancellation` - Polled between files, segments and tiles
    ///
    /// # Returns
    /// A summary of the outputs written, or the first error. Outputs written
    /// before a failure or cancellation stay on disk.
    fn execute(&self, cancellation: &CancellationToken) -> SnipResult<RunSummary>;

    /// Compute every output the job would write, without writing anything
    fn plan(&self, cancellation: &CancellationToken) -> SnipResult<Vec<PlannedOutput>>;
}

/// Result of asking a factory whether it understands the inputs
#[derive(Debug)]
pub enum Probe<T> {
    /// The inputs are not meant for this engine
    NotApplicable(String),
    /// The engine understood the inputs
    Applicable(T),
    /// The inputs are meant for this engine but are broken
    Malformed(SnipError),
}

/// Factory for creating templates from invocation settings
pub trait TemplateFactory<'a> {
    /// Short engine name, used in logs
    fn name(&self) -> &'static str;

    /// Inspect the settings and build a template if they are understood
    ///
    /// # Arguments
    /// * `settings` - The invocation's input paths
    /// * `logger` - Logger the created template records its outputs to
    fn probe(&self, settings: &TemplateSettings, logger: &'a Logger) -> Probe<Box<dyn Template + 'a>>;
}
