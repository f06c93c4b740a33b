//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::template::{CancellationToken, SnipResult};
use crate::utils::logger::Logger;

/// How a command that did not fail ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A template ran to completion
    Completed,
    /// No template understood the inputs
    NoTemplate,
}

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    ///
    /// # Arguments
    /// * `cancellation` - Token the running template polls
    ///
    /// # Returns
    /// How the command ended, or the error that stopped it
    fn execute(&self, cancellation: &CancellationToken) -> SnipResult<CommandOutcome>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Run log the command's template records outputs to
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> SnipResult<Box<dyn Command + 'a>>;
}
