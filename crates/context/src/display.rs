//! Display modes and refresh rate resolution.
//!
//! Pure domain logic - no I/O, no platform dependencies.

use serde::{Deserialize, Serialize};

/// Rate assumed when no display mode reports a positive refresh rate.
pub const DEFAULT_REFRESH_RATE_HZ: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayMode {
    pub width: i32,
    pub height: i32,
    /// Refresh rate in Hz, 0 when unknown.
    pub refresh_rate: i32,
}

/// A display's current mode and every mode it enumerates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayInfo {
    pub current_mode: DisplayMode,
    #[serde(default)]
    pub modes: Vec<DisplayMode>,
}

impl DisplayInfo {
    /// Highest positive refresh rate across the current and enumerated modes.
    pub fn max_refresh_rate(&self) -> Option<i32> {
        std::iter::once(&self.current_mode)
            .chain(self.modes.iter())
            .map(|mode| mode.refresh_rate)
            .filter(|rate| *rate > 0)
            .max()
    }
}

/// Resolve the refresh rate to apply after a resume.
pub fn max_refresh_rate(display: Option<&DisplayInfo>) -> i32 {
    display
        .and_then(DisplayInfo::max_refresh_rate)
        .unwrap_or(DEFAULT_REFRESH_RATE_HZ)
}
