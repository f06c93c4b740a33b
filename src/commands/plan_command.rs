//! Dry-run command: lists what a snip run would write

use clap::ArgMatches;

use crate::commands::command_traits::{Command, CommandOutcome};
use crate::template::{CancellationToken, PlannedOutput, SnipResult, TemplateRegistry, TemplateSettings};
use crate::utils::logger::Logger;

/// Command for planning a snip run without writing anything
pub struct PlanCommand<'a> {
    settings: TemplateSettings,
    logger: &'a Logger,
}

impl<'a> PlanCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SnipResult<Self> {
        let settings = super::settings_from_args(args)?;
        Ok(PlanCommand { settings, logger })
    }
}

/// One line of plan output
pub fn format_planned(planned: &PlannedOutput) -> String {
    format!("{} -> {} ({}x{})",
            planned.source.display(), planned.output.display(), planned.width, planned.height)
}

impl<'a> Command for PlanCommand<'a> {
    fn execute(&self, cancellation: &CancellationToken) -> SnipResult<CommandOutcome> {
        let registry = TemplateRegistry::with_defaults(false);
        let template = match registry.resolve(&self.settings, self.logger)? {
            Some(template) => template,
            None => return Ok(CommandOutcome::NoTemplate),
        };

        for planned in template.plan(cancellation)? {
            println!("{}", format_planned(&planned));
        }

        Ok(CommandOutcome::Completed)
    }
}
