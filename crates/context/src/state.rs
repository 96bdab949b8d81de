//! Continuity state carried across a background/foreground transition.

use crate::provider::{ContextHandle, ScreenResolution};
use serde::{Deserialize, Serialize};

/// Context saved when the app went to the background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextSnapshot {
    /// Context that was current at backup time.
    pub saved_context: Option<ContextHandle>,

    /// Set by backup, cleared once restore has run.
    pub backup_completed: bool,
}

/// Last geometry applied to the windowing layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryMemo {
    pub surface_width: i32,
    pub surface_height: i32,
    pub device_width: i32,
    pub device_height: i32,
    pub refresh_rate_hz: i32,
}

impl GeometryMemo {
    /// Whether applying `next` would change anything the window cares about.
    ///
    /// Device size follows surface size, so only surface size and refresh
    /// rate are compared.
    pub fn differs_from(&self, next: &GeometryMemo) -> bool {
        self.surface_width != next.surface_width
            || self.surface_height != next.surface_height
            || self.refresh_rate_hz != next.refresh_rate_hz
    }

    pub fn resolution(&self) -> ScreenResolution {
        ScreenResolution {
            surface_width: self.surface_width,
            surface_height: self.surface_height,
            device_width: self.device_width,
            device_height: self.device_height,
            refresh_rate: self.refresh_rate_hz as f32,
        }
    }
}

/// Swap interval captured at pause; a newer pause overwrites it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SwapIntervalMemo(i32);

impl SwapIntervalMemo {
    pub fn capture(&mut self, interval: i32) {
        self.0 = interval;
    }

    pub fn saved(&self) -> i32 {
        self.0
    }
}
