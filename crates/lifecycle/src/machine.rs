//! Pause/resume state machine and its two pumps.

use crate::config::{LifecycleConfig, PumpMode};
use crate::state::LifecycleState;
use crate::TextInputRef;
use stasis_audio::AudioQuiesceController;
use stasis_context::ContextContinuityManager;
use stasis_events::{EventQueueRef, LifecycleEvent};
use stasis_signal::SignalPairRef;

/// Drives background/foreground transitions from the main loop.
///
/// A committed pause is quiesced in two phases: the commit records `Paused`
/// and marks the quiesce as pending, and the pending quiesce (context backup,
/// audio pause) runs afterwards. The blocking pump runs it in the same call
/// right before it blocks; the non-blocking pump runs it on the next call.
/// Either way the backup never races the commit and happens once per pause.
pub struct LifecycleStateMachine {
    config: LifecycleConfig,
    signals: SignalPairRef,
    events: EventQueueRef,
    continuity: ContextContinuityManager,
    audio: AudioQuiesceController,
    text_input: Option<TextInputRef>,
    state: LifecycleState,
    pending_quiesce: bool,
}

impl LifecycleStateMachine {
    pub fn new(
        config: LifecycleConfig,
        signals: SignalPairRef,
        events: EventQueueRef,
        continuity: ContextContinuityManager,
        audio: AudioQuiesceController,
    ) -> Self {
        Self {
            config,
            signals,
            events,
            continuity,
            audio,
            text_input: None,
            state: LifecycleState::Running,
            pending_quiesce: false,
        }
    }

    pub fn with_text_input(mut self, text_input: TextInputRef) -> Self {
        self.text_input = Some(text_input);
        self
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    pub fn continuity(&self) -> &ContextContinuityManager {
        &self.continuity
    }

    pub fn audio(&self) -> &AudioQuiesceController {
        &self.audio
    }

    /// Whether a committed pause still has to back up the context.
    pub fn is_quiesce_pending(&self) -> bool {
        self.pending_quiesce
    }

    /// Run the pump selected by [`LifecycleConfig::mode`].
    pub fn pump(&mut self) -> LifecycleState {
        match self.config.mode {
            PumpMode::Blocking => self.pump_blocking(),
            PumpMode::NonBlocking => self.pump_non_blocking(),
        }
    }

    /// Process lifecycle signals, blocking the calling thread while paused.
    ///
    /// Once a pause is committed this does not return until the host raises
    /// the resume signal.
    pub fn pump_blocking(&mut self) -> LifecycleState {
        if self.state != LifecycleState::Paused {
            self.poll_pause();
        }

        if self.state == LifecycleState::Paused {
            if self.pending_quiesce {
                self.quiesce(true);
            }

            tracing::info!("paused, waiting for resume");
            self.signals.resume.wait();
            self.enter_foreground(true);
        }

        self.audio.recover_broken_playback();
        self.state
    }

    /// Process lifecycle signals without ever blocking.
    ///
    /// Safe to call on every tick, including while paused.
    pub fn pump_non_blocking(&mut self) -> LifecycleState {
        if self.state == LifecycleState::Paused {
            if self.pending_quiesce {
                self.quiesce(self.config.pause_audio);
            }

            if self.signals.resume.try_wait() {
                self.enter_foreground(self.config.pause_audio);
            }
        } else {
            self.poll_pause();
        }

        self.audio.recover_broken_playback();
        self.state
    }

    fn poll_pause(&mut self) {
        let pausing = self.state == LifecycleState::PausingPending;
        if !pausing && !self.signals.pause.try_wait() {
            return;
        }

        if !pausing {
            self.continuity.capture_swap_interval();
            self.events.push(LifecycleEvent::WindowMinimized);
            self.events.push(LifecycleEvent::WillEnterBackground);
            self.events.push(LifecycleEvent::DidEnterBackground);
        }

        // Several pauses may have been signalled; before committing, the
        // DidEnterBackground of the first one has to reach the app.
        let queued = self.events.count(LifecycleEvent::DidEnterBackground);
        let signalled = self.signals.pause.value();
        if queued > signalled {
            if !pausing {
                tracing::debug!(
                    queued,
                    signalled,
                    "pause pending until background event is drained"
                );
            }
            self.state = LifecycleState::PausingPending;
        } else {
            self.state = LifecycleState::Paused;
            self.pending_quiesce = true;
            tracing::info!(queued, signalled, "entered background");
        }
    }

    fn quiesce(&mut self, pause_audio: bool) {
        if !self.config.context_external {
            self.continuity.backup();
        }
        if pause_audio {
            self.audio.pause_all();
        }
        self.pending_quiesce = false;
    }

    fn enter_foreground(&mut self, resume_audio: bool) {
        self.state = LifecycleState::Running;

        self.events.push(LifecycleEvent::WillEnterForeground);
        self.events.push(LifecycleEvent::DidEnterForeground);
        self.events.push(LifecycleEvent::WindowRestored);

        if resume_audio {
            self.audio.resume_all();
        }

        if self.config.context_external {
            tracing::debug!("context is external, skipping restore");
        } else if self.events.has(LifecycleEvent::Quit) {
            tracing::debug!("quit pending, skipping context restore");
        } else {
            self.continuity.restore();
        }

        if let Some(text_input) = &self.text_input {
            if text_input.is_active() {
                text_input.activate();
            }
        }

        tracing::info!("entered foreground");
    }
}
