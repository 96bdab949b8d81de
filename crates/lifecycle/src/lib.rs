//! Foreground/background lifecycle handling for stasis.
//!
//! The host raises pause/resume signals on its own thread. The main loop
//! calls [`LifecycleStateMachine::pump`] once per iteration; the pump turns
//! signals into lifecycle events, backs up and restores the graphics context
//! and quiesces audio exactly once per transition.
//!
//! # Example
//!
//! ```ignore
//! use stasis_lifecycle::{LifecycleConfig, LifecycleStateMachine};
//!
//! let mut lifecycle = LifecycleStateMachine::new(
//!     LifecycleConfig::non_blocking(),
//!     signals,
//!     events,
//!     continuity,
//!     audio,
//! );
//!
//! loop {
//!     lifecycle.pump();
//!     // drain events, render if not paused
//! }
//! ```

mod config;
mod machine;
mod state;

use std::sync::Arc;

pub use config::{ConfigError, LifecycleConfig, PumpMode};
pub use machine::LifecycleStateMachine;
pub use state::LifecycleState;

/// On-screen text entry, reactivated when the app returns to the foreground.
pub trait TextInput: Send + Sync {
    /// Whether text input was active before the app was backgrounded.
    fn is_active(&self) -> bool;

    /// Show the soft keyboard again.
    fn activate(&self);
}

pub type TextInputRef = Arc<dyn TextInput>;
