//! Graceful shutdown handling for the drivers.
//!
//! Ctrl+C flips a shared flag that the interactive and headless loops poll
//! between generations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared shutdown flag.
#[derive(Clone)]
pub struct ShutdownManager {
    shutdown_requested: Arc<AtomicBool>,
}

impl Default for ShutdownManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ShutdownManager {
    pub fn new() -> Self {
        Self {
            shutdown_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests shutdown.
    pub fn request_shutdown(&self) {
        self.shutdown_requested.store(true, Ordering::SeqCst);
        tracing::info!("Shutdown requested");
    }

    pub fn is_shutdown_requested(&self) -> bool {
        self.shutdown_requested.load(Ordering::SeqCst)
    }

    /// Spawns a task that requests shutdown on Ctrl+C.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let manager = self.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl+C received, initiating graceful shutdown...");
                manager.request_shutdown();
            }
        });
    }
}
