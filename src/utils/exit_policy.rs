//! What to do right before the process exits
//!
//! When launched from a desktop shell by dropping files on the executable,
//! the console window closes as soon as the process ends. Pausing on failure
//! keeps the error readable.

use std::io::{self, BufRead, IsTerminal, Write};
use crate::config::PauseMode;

pub trait ExitPolicy {
    /// Called once with the exit code, before the process exits
    fn before_exit(&self, code: i32);
}

/// Exit immediately
pub struct NeverPause;

impl ExitPolicy for NeverPause {
    fn before_exit(&self, _code: i32) {}
}

/// Wait for Enter after any failure
pub struct AlwaysPause;

impl ExitPolicy for AlwaysPause {
    fn before_exit(&self, code: i32) {
        if code != 0 {
            wait_for_enter();
        }
    }
}

/// Wait for Enter after a failure, only when both stdin and stdout are terminals
pub struct PauseIfInteractive;

impl PauseIfInteractive {
    fn should_pause(code: i32, interactive: bool) -> bool {
        code != 0 && interactive
    }
}

impl ExitPolicy for PauseIfInteractive {
    fn before_exit(&self, code: i32) {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        if Self::should_pause(code, interactive) {
            wait_for_enter();
        }
    }
}

fn wait_for_enter() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Pick the exit policy for a pause mode
pub fn exit_policy_for(mode: PauseMode) -> Box<dyn ExitPolicy> {
    match mode {
        PauseMode::Auto => Box::new(PauseIfInteractive),
        PauseMode::Always => Box::new(AlwaysPause),
        PauseMode::Never => Box::new(NeverPause),
    }
}
