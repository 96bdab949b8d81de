//! Fan-out of pause/resume to registered backends.

use crate::backend::AudioBackendRef;

/// Pauses and resumes a set of audio backends together.
///
/// Backend failures are logged and never stop the fan-out; the remaining
/// backends are still driven.
#[derive(Default, Clone)]
pub struct AudioQuiesceController {
    backends: Vec<AudioBackendRef>,
}

impl AudioQuiesceController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backends(backends: Vec<AudioBackendRef>) -> Self {
        Self { backends }
    }

    pub fn register(&mut self, backend: AudioBackendRef) {
        tracing::debug!(backend = backend.name(), "audio backend registered");
        self.backends.push(backend);
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn backend_names(&self) -> Vec<String> {
        self.backends.iter().map(|b| b.name().to_string()).collect()
    }

    pub fn pause_all(&self) {
        for backend in &self.backends {
            if let Err(e) = backend.pause() {
                tracing::warn!(backend = backend.name(), error = %e, "audio pause failed");
            }
        }
        tracing::debug!(backends = self.backends.len(), "audio paused");
    }

    pub fn resume_all(&self) {
        for backend in &self.backends {
            if let Err(e) = backend.resume() {
                tracing::warn!(backend = backend.name(), error = %e, "audio resume failed");
            }
        }
        tracing::debug!(backends = self.backends.len(), "audio resumed");
    }

    /// Cycle pause+resume on every backend whose playback has stalled.
    ///
    /// Returns the number of backends that were cycled.
    pub fn recover_broken_playback(&self) -> usize {
        let mut cycled = 0;
        for backend in &self.backends {
            if !backend.detect_broken_playback() {
                continue;
            }
            tracing::warn!(backend = backend.name(), "broken playback detected, cycling backend");
            if let Err(e) = backend.pause() {
                tracing::warn!(backend = backend.name(), error = %e, "audio pause failed");
            }
            if let Err(e) = backend.resume() {
                tracing::warn!(backend = backend.name(), error = %e, "audio resume failed");
            }
            cycled += 1;
        }
        cycled
    }
}

impl std::fmt::Debug for AudioQuiesceController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioQuiesceController")
            .field("backends", &self.backend_names())
            .finish()
    }
}
