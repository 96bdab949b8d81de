use std::sync::Arc;

/// An audio output backend that can be quiesced while the app is backgrounded.
pub trait AudioBackend: Send + Sync {
    /// Short name used in logs (e.g. "aaudio").
    fn name(&self) -> &str;

    /// Pause every open device of this backend.
    fn pause(&self) -> crate::Result<()>;

    /// Resume every device paused by [`AudioBackend::pause`].
    fn resume(&self) -> crate::Result<()>;

    /// Whether playback has silently stalled and needs a pause/resume cycle.
    fn detect_broken_playback(&self) -> bool {
        false
    }
}

/// Type alias for a registered backend.
pub type AudioBackendRef = Arc<dyn AudioBackend>;

/// Backend that accepts every call and does nothing.
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn name(&self) -> &str {
        "null"
    }

    fn pause(&self) -> crate::Result<()> {
        Ok(())
    }

    fn resume(&self) -> crate::Result<()> {
        Ok(())
    }
}
