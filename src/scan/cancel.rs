//! Cooperative cancellation.

use crate::error::{DiffScanError, Result};
use crate::exit_codes;
use signal_hook::consts::{SIGINT, SIGTERM};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A flag a scan polls once per input line.
///
/// Clones share the same flag, so a clone handed to another thread (or to a
/// signal handler) can stop a scan running elsewhere.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every scan polling this token to stop before its next line.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_canceled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Cancel this token when the process receives SIGINT or SIGTERM.
    ///
    /// A second signal, arriving once the token is already canceled,
    /// terminates the process with [`exit_codes::SCAN_CANCELED`].
    ///
    /// # Returns
    ///
    /// * `Ok(())` - Handlers registered
    /// * `Err(DiffScanError::UserError)` - If the OS refused a handler
    pub fn cancel_on_signals(&self) -> Result<()> {
        for signal in [SIGINT, SIGTERM] {
            let refused = |e: std::io::Error| {
                DiffScanError::UserError(format!(
                    "failed to register handler for signal {}: {}",
                    signal, e
                ))
            };

            // Handlers run in registration order, so only a repeated signal exits.
            signal_hook::flag::register_conditional_shutdown(
                signal,
                exit_codes::SCAN_CANCELED,
                Arc::clone(&self.flag),
            )
            .map_err(refused)?;
            signal_hook::flag::register(signal, Arc::clone(&self.flag)).map_err(refused)?;
        }
        Ok(())
    }
}
