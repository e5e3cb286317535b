// Rust guideline compliant 2026-10-15

//! Ctrl-C handling for the synchronous prompts and run loop.
//!
//! A background thread owns a single-threaded tokio runtime that waits for
//! the interrupt signal and raises a shared flag. The run loop polls the flag
//! at each progress update and stops cleanly. While the main thread is
//! blocked on terminal input the watcher reports the interrupt itself and
//! ends the process, since a pending read cannot observe the flag.

use crate::terminal::print_warning;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

/// Message shown when the user interrupts the program.
pub const INTERRUPTED_MESSAGE: &str = "Program interrupted by user.";

/// Exit status used when an interrupt ends the process from a prompt.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Handle to the installed interrupt watcher.
#[derive(Debug)]
pub struct InterruptWatcher {
    raised: Arc<AtomicBool>,
    awaiting_input: Arc<AtomicBool>,
}

impl InterruptWatcher {
    /// Registers the Ctrl-C handler and starts the watcher thread.
    ///
    /// The handler is registered before this returns, so from then on Ctrl-C
    /// no longer terminates the process directly.
    ///
    /// # Arguments
    ///
    /// * `use_color` - Whether the interrupt message printed during a prompt is colored
    ///
    /// # Errors
    ///
    /// Returns an error if the runtime, the signal listener or the watcher
    /// thread cannot be created.
    pub fn install(use_color: bool) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let mut listener = {
            let _guard = runtime.enter();
            listen()?
        };

        let raised = Arc::new(AtomicBool::new(false));
        let awaiting_input = Arc::new(AtomicBool::new(false));
        let watcher_raised = Arc::clone(&raised);
        let watcher_awaiting = Arc::clone(&awaiting_input);

        thread::Builder::new()
            .name("interrupt-watcher".to_string())
            .spawn(move || {
                if runtime.block_on(listener.recv()).is_none() {
                    warn!("interrupt signal listener closed");
                    return;
                }

                info!("interrupt signal received");
                watcher_raised.store(true, Ordering::SeqCst);
                if watcher_awaiting.load(Ordering::SeqCst) {
                    eprintln!("\n");
                    print_warning(INTERRUPTED_MESSAGE, use_color);
                    std::process::exit(INTERRUPTED_EXIT_CODE);
                }
            })?;

        Ok(Self {
            raised,
            awaiting_input,
        })
    }

    /// Flag raised once Ctrl-C is received.
    pub fn flag(&self) -> &AtomicBool {
        &self.raised
    }

    /// Returns true once Ctrl-C has been received.
    pub fn is_raised(&self) -> bool {
        self.raised.load(Ordering::SeqCst)
    }

    /// Runs `f` while the main thread waits on terminal input.
    ///
    /// An interrupt received during `f` prints the interrupt message and exits.
    pub fn while_awaiting_input<T>(&self, f: impl FnOnce() -> T) -> T {
        self.awaiting_input.store(true, Ordering::SeqCst);
        let result = f();
        self.awaiting_input.store(false, Ordering::SeqCst);
        result
    }
}

#[cfg(unix)]
fn listen() -> io::Result<tokio::signal::unix::Signal> {
    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt())
}

#[cfg(windows)]
fn listen() -> io::Result<tokio::signal::windows::CtrlC> {
    tokio::signal::windows::ctrl_c()
}
