//! Cooperative cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::warn;

use super::errors::{SnipError, SnipResult};

/// Shared stop flag polled by long-running operations
///
/// Clones share the same flag, so a clone can be handed to a signal handler
/// or another thread and cancelled from there. Cancelling never rolls back
/// work that already happened.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        CancellationToken::default()
    }

    /// Request that the operation stop at its next check
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Fail with `SnipError::Cancelled` once cancellation was requested
    pub fn check(&self) -> SnipResult<()> {
        if self.is_cancelled() {
            return Err(SnipError::Cancelled);
        }
        Ok(())
    }

    /// Callback that cancels this token, for use as an interrupt handler
    pub fn interrupt_handler(&self) -> impl Fn() + Send + 'static {
        let token = self.clone();
        move || {
            warn!("Interrupt received, stopping after the current tile");
            token.cancel();
        }
    }

    /// Cancel this token when the process receives Ctrl-C
    ///
    /// Only one handler can be installed per process.
    pub fn install_interrupt_handler(&self) -> SnipResult<()> {
        ctrlc::set_handler(self.interrupt_handler())
            .map_err(|e| SnipError::GenericError(format!("Failed to install Ctrl-C handler: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_the_flag() {
        let token = CancellationToken::new();
        let handle = token.clone();
        assert!(token.check().is_ok());

        handle.cancel();
        assert!(token.is_cancelled());
        assert!(matches!(token.check(), Err(SnipError::Cancelled)));
    }

    #[test]
    fn test_interrupt_handler_cancels_the_token() {
        let token = CancellationToken::new();
        let handler = token.interrupt_handler();
        assert!(!token.is_cancelled());

        std::thread::spawn(handler).join().unwrap();
        assert!(matches!(token.check(), Err(SnipError::Cancelled)));
    }

    #[test]
    fn test_cancel_from_another_thread() {
        let token = CancellationToken::new();
        let handle = token.clone();
        std::thread::spawn(move || handle.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
