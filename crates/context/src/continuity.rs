//! Backup/restore of the graphics context across a background transition.

use crate::display::max_refresh_rate;
use crate::provider::{GraphicsContextRef, ScreenResolution, WindowSurfaceRef};
use crate::state::{ContextSnapshot, GeometryMemo, SwapIntervalMemo};
use stasis_events::{EventQueueRef, LifecycleEvent};
use std::sync::{Arc, Mutex, PoisonError};

/// What a restore did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RestoreOutcome {
    /// A `RenderDeviceReset` event was pushed.
    pub device_reset: bool,
    /// Resolution pushed to the window, `None` when the geometry was unchanged.
    pub resolution: Option<ScreenResolution>,
    /// Swap interval in effect after the restore.
    pub swap_interval: i32,
}

/// Owns the saved context and the memos that make resume idempotent.
///
/// Backup and restore take the activity lock, which other code paths that
/// touch the context (e.g. a resize callback) can share via
/// [`ContextContinuityManager::activity_lock`].
pub struct ContextContinuityManager {
    graphics: GraphicsContextRef,
    surface: WindowSurfaceRef,
    events: EventQueueRef,
    activity_lock: Arc<Mutex<()>>,
    snapshot: ContextSnapshot,
    geometry: GeometryMemo,
    swap_interval: SwapIntervalMemo,
}

impl ContextContinuityManager {
    pub fn new(
        graphics: GraphicsContextRef,
        surface: WindowSurfaceRef,
        events: EventQueueRef,
    ) -> Self {
        Self {
            graphics,
            surface,
            events,
            activity_lock: Arc::new(Mutex::new(())),
            snapshot: ContextSnapshot::default(),
            geometry: GeometryMemo::default(),
            swap_interval: SwapIntervalMemo::default(),
        }
    }

    /// Use an existing lock instead of a private one.
    pub fn with_activity_lock(mut self, lock: Arc<Mutex<()>>) -> Self {
        self.activity_lock = lock;
        self
    }

    pub fn activity_lock(&self) -> Arc<Mutex<()>> {
        Arc::clone(&self.activity_lock)
    }

    pub fn snapshot(&self) -> ContextSnapshot {
        self.snapshot
    }

    pub fn is_backed_up(&self) -> bool {
        self.snapshot.backup_completed
    }

    pub fn geometry(&self) -> GeometryMemo {
        self.geometry
    }

    pub fn saved_swap_interval(&self) -> i32 {
        self.swap_interval.saved()
    }

    /// Remember the swap interval in effect before pausing.
    pub fn capture_swap_interval(&mut self) {
        let interval = self.graphics.swap_interval();
        self.swap_interval.capture(interval);
        tracing::debug!(interval, "swap interval captured");
    }

    /// Save the current context and detach it from the thread.
    ///
    /// Returns `false` if a backup is already held.
    pub fn backup(&mut self) -> bool {
        if self.snapshot.backup_completed {
            tracing::debug!("context already backed up");
            return false;
        }

        let lock = Arc::clone(&self.activity_lock);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let saved = self.graphics.current_context();
        // Detaching lets the windowing layer free the surface while backgrounded.
        if let Err(e) = self.graphics.make_current(None) {
            tracing::warn!(error = %e, "failed to detach context");
        }
        self.snapshot = ContextSnapshot {
            saved_context: saved,
            backup_completed: true,
        };

        tracing::debug!(context = ?saved.map(|c| c.as_raw()), "context backed up");
        true
    }

    /// Re-attach (or re-create) the saved context and re-derive the surface.
    ///
    /// Returns `None` when no backup is held.
    pub fn restore(&mut self) -> Option<RestoreOutcome> {
        if !self.snapshot.backup_completed {
            tracing::debug!("no context backup to restore");
            return None;
        }

        let lock = Arc::clone(&self.activity_lock);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let device_reset = self.reattach_context();
        if device_reset {
            self.events.push(LifecycleEvent::RenderDeviceReset);
        }

        let resolution = self.apply_geometry();
        let swap_interval = self.restore_swap_interval();
        self.snapshot = ContextSnapshot::default();

        tracing::debug!(device_reset, swap_interval, "context restored");
        Some(RestoreOutcome {
            device_reset,
            resolution,
            swap_interval,
        })
    }

    /// Returns whether GPU resources have to be rebuilt.
    fn reattach_context(&mut self) -> bool {
        let mut device_reset = false;

        if let Err(e) = self.graphics.make_current(self.snapshot.saved_context) {
            tracing::warn!(error = %e, "saved context is no longer valid, creating a new one");
            match self.graphics.create_context() {
                Ok(context) => {
                    if let Err(e) = self.graphics.make_current(Some(context)) {
                        tracing::warn!(error = %e, "failed to make new context current");
                    }
                }
                Err(e) => tracing::warn!(error = %e, "failed to create context"),
            }
            device_reset = true;
        }

        let code = self.graphics.last_error();
        if code.requires_device_reset() {
            tracing::warn!(?code, "graphics error after restore");
            device_reset = true;
        }

        device_reset
    }

    fn apply_geometry(&mut self) -> Option<ScreenResolution> {
        let (mut width, mut height) = self.surface.logical_size();
        if let Some((native_w, native_h)) = self.surface.native_size() {
            if native_w > 0 && native_h > 0 {
                width = native_w;
                height = native_h;
            }
        }

        let display = self.surface.display();
        let refresh_rate_hz = max_refresh_rate(display.as_ref());

        if let Some(format) = self.surface.native_format().filter(|f| f.is_known()) {
            self.surface.set_pixel_format(format);
        }

        let next = GeometryMemo {
            surface_width: width,
            surface_height: height,
            device_width: width,
            device_height: height,
            refresh_rate_hz,
        };

        if !self.geometry.differs_from(&next) {
            tracing::debug!(width, height, refresh_rate_hz, "geometry unchanged");
            return None;
        }

        let resolution = next.resolution();
        self.surface.set_screen_resolution(resolution);
        self.surface.send_resize(width, height);
        self.geometry = next;

        tracing::info!(width, height, refresh_rate_hz, "screen resolution applied");
        Some(resolution)
    }

    fn restore_swap_interval(&mut self) -> i32 {
        let wanted = self.swap_interval.saved();
        match self.graphics.set_swap_interval(wanted) {
            Ok(()) => wanted,
            Err(e) => {
                tracing::warn!(error = %e, wanted, "swap interval restore failed, disabling vsync");
                if let Err(e) = self.graphics.set_swap_interval(0) {
                    tracing::warn!(error = %e, "failed to disable vsync");
                }
                0
            }
        }
    }
}
