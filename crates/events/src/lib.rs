//! Lifecycle event contracts.
//!
//! Events pushed by the lifecycle pump into the application's event queue.
//! The queue itself is external; this crate only defines the event type and
//! the `EventQueue` seam the pump talks to.

mod queue;

pub use queue::{EventQueue, EventQueueRef, InMemoryEventQueue, NullEventQueue};

use serde::{Deserialize, Serialize};

/// An application or window lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// The app is about to be backgrounded. Stop rendering soon.
    WillEnterBackground,
    /// The app is backgrounded; the graphics context is about to be detached.
    DidEnterBackground,
    /// The app is about to return to the foreground.
    WillEnterForeground,
    /// The app is in the foreground again.
    DidEnterForeground,
    WindowMinimized,
    WindowRestored,
    /// The rendering context was lost; GPU resources must be rebuilt.
    RenderDeviceReset,
    /// The application was asked to quit.
    Quit,
}

impl LifecycleEvent {
    /// Stable event name.
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::WillEnterBackground => event_names::WILL_ENTER_BACKGROUND,
            LifecycleEvent::DidEnterBackground => event_names::DID_ENTER_BACKGROUND,
            LifecycleEvent::WillEnterForeground => event_names::WILL_ENTER_FOREGROUND,
            LifecycleEvent::DidEnterForeground => event_names::DID_ENTER_FOREGROUND,
            LifecycleEvent::WindowMinimized => event_names::WINDOW_MINIMIZED,
            LifecycleEvent::WindowRestored => event_names::WINDOW_RESTORED,
            LifecycleEvent::RenderDeviceReset => event_names::RENDER_DEVICE_RESET,
            LifecycleEvent::Quit => event_names::QUIT,
        }
    }

    /// Whether this is an application-level (as opposed to window-level) event.
    pub fn is_app_event(&self) -> bool {
        matches!(
            self,
            LifecycleEvent::WillEnterBackground
                | LifecycleEvent::DidEnterBackground
                | LifecycleEvent::WillEnterForeground
                | LifecycleEvent::DidEnterForeground
        )
    }
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Event names as constants to prevent typos.
pub mod event_names {
    pub const WILL_ENTER_BACKGROUND: &str = "app:will_enter_background";
    pub const DID_ENTER_BACKGROUND: &str = "app:did_enter_background";
    pub const WILL_ENTER_FOREGROUND: &str = "app:will_enter_foreground";
    pub const DID_ENTER_FOREGROUND: &str = "app:did_enter_foreground";
    pub const WINDOW_MINIMIZED: &str = "window:minimized";
    pub const WINDOW_RESTORED: &str = "window:restored";
    pub const RENDER_DEVICE_RESET: &str = "render:device_reset";
    pub const QUIT: &str = "app:quit";
}
