//! Lifecycle configuration.

use serde::{Deserialize, Serialize};

/// Which pump [`crate::LifecycleStateMachine::pump`] dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PumpMode {
    /// Suspend the main loop while backgrounded.
    #[default]
    Blocking,
    /// Keep the main loop ticking while backgrounded.
    NonBlocking,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub mode: PumpMode,

    /// Pause audio while backgrounded in non-blocking mode. Turn off when the
    /// embedding host pauses and resumes audio itself.
    pub pause_audio: bool,

    /// The graphics context is owned by the embedder; skip backup/restore.
    pub context_external: bool,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            mode: PumpMode::Blocking,
            pause_audio: true,
            context_external: false,
        }
    }
}

impl LifecycleConfig {
    pub fn blocking() -> Self {
        Self::default()
    }

    pub fn non_blocking() -> Self {
        Self {
            mode: PumpMode::NonBlocking,
            ..Self::default()
        }
    }

    /// Parse a config, filling missing fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid lifecycle config: {0}")]
    Parse(#[from] serde_json::Error),
}
