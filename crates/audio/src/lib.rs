//! Audio quiescing across foreground/background transitions.
//!
//! Audio output backends are registered as a capability list on an
//! [`AudioQuiesceController`]; the lifecycle pump pauses and resumes all of
//! them at once. A controller with no backends is inert.

mod backend;
mod controller;

#[cfg(feature = "cpal")]
mod cpal_backend;

pub use backend::{AudioBackend, AudioBackendRef, NullBackend};
pub use controller::AudioQuiesceController;

#[cfg(feature = "cpal")]
pub use cpal_backend::{CpalStreamBackend, StallFlag};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("backend {backend} failed to pause: {reason}")]
    PauseFailed { backend: String, reason: String },
    #[error("backend {backend} failed to resume: {reason}")]
    ResumeFailed { backend: String, reason: String },
    #[error("stream error: {0}")]
    StreamError(String),
    #[error("backend worker is gone")]
    Disconnected,
    #[cfg(feature = "cpal")]
    #[error("build stream error: {0}")]
    BuildStreamError(#[from] cpal::BuildStreamError),
}

pub type Result<T> = std::result::Result<T, AudioError>;
