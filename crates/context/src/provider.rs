//! Traits for the graphics and windowing layers.
//!
//! These abstract the platform rendering API and native window so the
//! backup/restore protocol stays testable without a GPU.

use crate::display::DisplayInfo;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Opaque handle to a rendering context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextHandle(u64);

impl ContextHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Native pixel format code as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelFormat(pub i32);

impl PixelFormat {
    /// Non-positive codes mean the surface could not report a format.
    pub fn is_known(&self) -> bool {
        self.0 > 0
    }
}

/// Error state of the most recent graphics call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsErrorCode {
    Success,
    /// Allocation failed.
    BadAlloc,
    /// Context and surface configurations are incompatible.
    BadMatch,
    ContextLost,
    Other(i32),
}

impl GraphicsErrorCode {
    /// Whether GPU resources must be rebuilt even if the context looks usable.
    pub fn requires_device_reset(&self) -> bool {
        matches!(self, GraphicsErrorCode::BadAlloc | GraphicsErrorCode::BadMatch)
    }
}

/// Resolution pushed to the windowing layer after a resume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenResolution {
    pub surface_width: i32,
    pub surface_height: i32,
    pub device_width: i32,
    pub device_height: i32,
    pub refresh_rate: f32,
}

/// Rendering API bound to the main/render thread.
pub trait GraphicsContext: Send + Sync {
    /// Context current on the calling thread, if any.
    fn current_context(&self) -> Option<ContextHandle>;

    /// Make `context` current, or detach when `None`.
    fn make_current(&self, context: Option<ContextHandle>) -> crate::Result<()>;

    /// Create a fresh context for the window.
    fn create_context(&self) -> crate::Result<ContextHandle>;

    fn swap_interval(&self) -> i32;

    fn set_swap_interval(&self, interval: i32) -> crate::Result<()>;

    /// Error state left by the last call.
    fn last_error(&self) -> GraphicsErrorCode;
}

/// Native window and display queries/mutations.
pub trait WindowSurface: Send + Sync {
    /// Size of the live native surface, `None` when no surface is attached.
    fn native_size(&self) -> Option<(i32, i32)>;

    /// Last known logical window size.
    fn logical_size(&self) -> (i32, i32);

    /// Pixel format of the live native surface.
    fn native_format(&self) -> Option<PixelFormat>;

    /// Display the window is on.
    fn display(&self) -> Option<DisplayInfo>;

    /// Propagate the native format to the platform format state.
    fn set_pixel_format(&self, format: PixelFormat);

    fn set_screen_resolution(&self, resolution: ScreenResolution);

    /// Notify the window that its size may have changed.
    fn send_resize(&self, width: i32, height: i32);
}

pub type GraphicsContextRef = Arc<dyn GraphicsContext>;
pub type WindowSurfaceRef = Arc<dyn WindowSurface>;
