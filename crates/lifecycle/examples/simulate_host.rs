//! Example: drive the lifecycle pump against a simulated host.
//!
//! Run with: RUST_LOG=stasis=debug cargo run -p stasis-lifecycle --example simulate_host

use stasis_audio::{AudioBackendRef, AudioQuiesceController, NullBackend};
use stasis_context::{
    ContextContinuityManager, ContextHandle, DisplayInfo, DisplayMode, GraphicsContext,
    GraphicsErrorCode, PixelFormat, ScreenResolution, WindowSurface,
};
use stasis_events::{InMemoryEventQueue, LifecycleEvent};
use stasis_lifecycle::{LifecycleConfig, LifecycleState, LifecycleStateMachine};
use stasis_signal::SignalPair;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Pretends to be a GL-style API with a single context.
struct SimulatedGraphics {
    current: Mutex<Option<ContextHandle>>,
    swap_interval: Mutex<i32>,
}

impl GraphicsContext for SimulatedGraphics {
    fn current_context(&self) -> Option<ContextHandle> {
        *self.current.lock().unwrap()
    }

    fn make_current(&self, context: Option<ContextHandle>) -> stasis_context::Result<()> {
        *self.current.lock().unwrap() = context;
        Ok(())
    }

    fn create_context(&self) -> stasis_context::Result<ContextHandle> {
        Ok(ContextHandle::from_raw(2))
    }

    fn swap_interval(&self) -> i32 {
        *self.swap_interval.lock().unwrap()
    }

    fn set_swap_interval(&self, interval: i32) -> stasis_context::Result<()> {
        *self.swap_interval.lock().unwrap() = interval;
        Ok(())
    }

    fn last_error(&self) -> GraphicsErrorCode {
        GraphicsErrorCode::Success
    }
}

struct SimulatedSurface;

impl WindowSurface for SimulatedSurface {
    fn native_size(&self) -> Option<(i32, i32)> {
        Some((1080, 2400))
    }

    fn logical_size(&self) -> (i32, i32) {
        (1080, 2400)
    }

    fn native_format(&self) -> Option<PixelFormat> {
        Some(PixelFormat(1))
    }

    fn display(&self) -> Option<DisplayInfo> {
        let mode = |refresh_rate| DisplayMode {
            width: 1080,
            height: 2400,
            refresh_rate,
        };
        Some(DisplayInfo {
            current_mode: mode(60),
            modes: vec![mode(60), mode(90), mode(120)],
        })
    }

    fn set_pixel_format(&self, format: PixelFormat) {
        println!("  surface: pixel format {:?}", format);
    }

    fn set_screen_resolution(&self, resolution: ScreenResolution) {
        println!(
            "  surface: {}x{} @ {}Hz",
            resolution.surface_width, resolution.surface_height, resolution.refresh_rate
        );
    }

    fn send_resize(&self, width: i32, height: i32) {
        println!("  surface: resize {}x{}", width, height);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("stasis_lifecycle=debug,stasis_context=debug")
                }),
        )
        .init();

    println!("=== Lifecycle Simulation ===");
    println!("The host backgrounds the app after 0.5s and resumes it after 1.5s.\n");

    let signals = SignalPair::shared();
    let events = Arc::new(InMemoryEventQueue::new());
    let graphics = Arc::new(SimulatedGraphics {
        current: Mutex::new(Some(ContextHandle::from_raw(1))),
        swap_interval: Mutex::new(1),
    });

    let continuity = ContextContinuityManager::new(
        graphics.clone(),
        Arc::new(SimulatedSurface),
        events.clone(),
    );
    let audio =
        AudioQuiesceController::with_backends(vec![Arc::new(NullBackend) as AudioBackendRef]);
    let mut lifecycle = LifecycleStateMachine::new(
        LifecycleConfig::non_blocking(),
        Arc::clone(&signals),
        events.clone(),
        continuity,
        audio,
    );

    let host = Arc::clone(&signals);
    let host_thread = std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(500));
        println!("[host] onPause");
        host.notify_pause();
        std::thread::sleep(Duration::from_millis(1000));
        println!("[host] onResume");
        host.notify_resume();
    });

    let mut frames = 0u32;
    let mut resumed = false;
    for _ in 0..150 {
        let state = lifecycle.pump();

        for event in events.drain() {
            println!("[app] {}", event);
            if event == LifecycleEvent::DidEnterForeground {
                resumed = true;
            }
        }

        if state == LifecycleState::Running {
            frames += 1;
        }
        if resumed {
            break;
        }

        std::thread::sleep(Duration::from_millis(16));
    }

    let _ = host_thread.join();
    println!(
        "\nRendered {} frames, context {:?}, swap interval {}",
        frames,
        graphics.current_context(),
        graphics.swap_interval()
    );
}
