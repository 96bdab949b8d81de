use serde::{Deserialize, Serialize};

/// Where the app is in the background/foreground cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    /// Foreground, rendering normally.
    #[default]
    Running,
    /// A pause was detected but its `DidEnterBackground` has not reached the
    /// app yet.
    PausingPending,
    /// Backgrounded; resources are (or are about to be) quiesced.
    Paused,
}

impl LifecycleState {
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleState::Running => "running",
            LifecycleState::PausingPending => "pausing",
            LifecycleState::Paused => "paused",
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(self, LifecycleState::Paused)
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
