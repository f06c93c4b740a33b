//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod snip_command;
pub mod plan_command;

pub use command_traits::{Command, CommandFactory, CommandOutcome};
pub use snip_command::SnipCommand;
pub use plan_command::PlanCommand;

use clap::ArgMatches;
use crate::template::{SnipError, SnipResult, TemplateSettings};
use crate::utils::logger::Logger;

/// Process exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const NO_TEMPLATE: i32 = 1;
    pub const CANCELLED: i32 = 2;
    pub const NO_FILES: i32 = 3;
    pub const FAILED: i32 = 4;
}

/// Map a command result to the process exit code
pub fn exit_code(result: &SnipResult<CommandOutcome>) -> i32 {
    match result {
        Ok(CommandOutcome::Completed) => exit_codes::SUCCESS,
        Ok(CommandOutcome::NoTemplate) => exit_codes::NO_TEMPLATE,
        Err(e) if e.is_cancelled() => exit_codes::CANCELLED,
        Err(_) => exit_codes::FAILED,
    }
}

/// Input paths from the `files` argument, made absolute
fn settings_from_args(args: &ArgMatches) -> SnipResult<TemplateSettings> {
    let files: Vec<&String> = args.get_many::<String>("files")
        .map(|values| values.collect())
        .unwrap_or_default();
    if files.is_empty() {
        return Err(SnipError::GenericError("No input files given".to_string()));
    }
    TemplateSettings::from_args(&files)
}

/// Factory for creating command instances based on CLI arguments
pub struct SnipkitCommandFactory {
    show_progress: bool,
}

impl SnipkitCommandFactory {
    /// Create a new factory instance
    pub fn new(show_progress: bool) -> Self {
        SnipkitCommandFactory { show_progress }
    }
}

impl<'a> CommandFactory<'a> for SnipkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> SnipResult<Box<dyn Command + 'a>> {
        if args.get_flag("dry-run") {
            Ok(Box::new(PlanCommand::new(args, logger)?))
        } else {
            let show_progress = self.show_progress && !args.get_flag("no-progress");
            Ok(Box::new(SnipCommand::new(args, logger, show_progress)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(CommandOutcome::Completed)), 0);
        assert_eq!(exit_code(&Ok(CommandOutcome::NoTemplate)), 1);
        assert_eq!(exit_code(&Err(SnipError::Cancelled)), 2);
        assert_eq!(exit_code(&Err(SnipError::GenericError("boom".to_string()))), 4);
    }
}
