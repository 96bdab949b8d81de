//! Counting pause/resume signals.
//!
//! The host environment raises [`SignalPair::notify_pause`] and
//! [`SignalPair::notify_resume`] from its own lifecycle thread; the main loop
//! drains them with [`Signal::wait`] or [`Signal::try_wait`] and compares
//! [`Signal::value`] against the event queue to coalesce repeated pauses.
//!
//! Each raise is a unit token in an unbounded channel, so the live count is
//! the number of queued tokens.

use crossbeam_channel::{Receiver, Sender};
use std::sync::Arc;

/// A counting signal (semaphore without an upper bound).
pub struct Signal {
    name: &'static str,
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Signal {
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { name, tx, rx }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raise the signal once.
    pub fn post(&self) {
        // Both channel ends live in `self`, so send cannot observe a disconnect.
        let _ = self.tx.send(());
        tracing::trace!(signal = self.name, count = self.value(), "signal raised");
    }

    /// Block until the signal is raised, then consume one count.
    pub fn wait(&self) {
        let _ = self.rx.recv();
    }

    /// Consume one count if the signal is raised. Never blocks.
    pub fn try_wait(&self) -> bool {
        self.rx.try_recv().is_ok()
    }

    /// Current count, without consuming it.
    pub fn value(&self) -> usize {
        self.rx.len()
    }
}

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("value", &self.value())
            .finish()
    }
}

/// The two host lifecycle signals.
#[derive(Debug)]
pub struct SignalPair {
    pub pause: Signal,
    pub resume: Signal,
}

/// Shared handle given to both the host thread and the main loop.
pub type SignalPairRef = Arc<SignalPair>;

impl Default for SignalPair {
    fn default() -> Self {
        Self {
            pause: Signal::new("pause"),
            resume: Signal::new("resume"),
        }
    }
}

impl SignalPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SignalPairRef {
        Arc::new(Self::new())
    }

    /// Called from the host thread when the app is sent to the background.
    pub fn notify_pause(&self) {
        self.pause.post();
    }

    /// Called from the host thread when the app returns to the foreground.
    pub fn notify_resume(&self) {
        self.resume.post();
    }
}
