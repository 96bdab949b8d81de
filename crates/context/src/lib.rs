//! Graphics context continuity for stasis.
//!
//! When the host backgrounds the app, the rendering context has to be
//! detached from the main thread so the windowing layer can release the
//! surface. On the way back it is re-attached (or re-created), the surface
//! geometry is re-derived and the swap interval is put back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                             │
//! │  display.rs  - refresh rate resolution (pure)               │
//! │  state.rs    - ContextSnapshot, GeometryMemo, swap memo     │
//! │  provider.rs - GraphicsContext / WindowSurface traits       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Application Layer                          │
//! │  continuity.rs - backup/restore protocol                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod continuity;
mod display;
mod provider;
mod state;

pub use continuity::{ContextContinuityManager, RestoreOutcome};
pub use display::{max_refresh_rate, DisplayInfo, DisplayMode, DEFAULT_REFRESH_RATE_HZ};
pub use provider::{
    ContextHandle, GraphicsContext, GraphicsContextRef, GraphicsErrorCode, PixelFormat,
    ScreenResolution, WindowSurface, WindowSurfaceRef,
};
pub use state::{ContextSnapshot, GeometryMemo, SwapIntervalMemo};

#[derive(Debug, thiserror::Error)]
pub enum GraphicsError {
    #[error("failed to make context current: {0}")]
    MakeCurrent(String),
    #[error("failed to create context: {0}")]
    CreateContext(String),
    #[error("swap interval {0} not supported")]
    SwapInterval(i32),
}

pub type Result<T> = std::result::Result<T, GraphicsError>;
