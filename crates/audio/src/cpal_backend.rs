//! Backend driving a cpal output stream.
//!
//! `cpal::Stream` is not `Send` on every host, so the stream lives on its own
//! worker thread and pause/play requests are forwarded over a channel.

use crate::{AudioBackend, AudioError};
use cpal::traits::StreamTrait;
use crossbeam_channel::{Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

/// Raised from a stream error callback to request a pause/resume cycle.
#[derive(Clone, Default)]
pub struct StallFlag(Arc<AtomicBool>);

impl StallFlag {
    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

enum Command {
    Pause(Sender<crate::Result<()>>),
    Play(Sender<crate::Result<()>>),
}

pub struct CpalStreamBackend {
    name: String,
    commands: Option<Sender<Command>>,
    stall: StallFlag,
    worker: Option<JoinHandle<()>>,
}

impl CpalStreamBackend {
    /// Build a stream on a dedicated worker thread.
    ///
    /// `build` receives the backend's [`StallFlag`]; its error callback should
    /// raise the flag when the device stops delivering (e.g. on
    /// `cpal::StreamError::DeviceNotAvailable`).
    pub fn spawn<F>(name: impl Into<String>, build: F) -> crate::Result<Self>
    where
        F: FnOnce(StallFlag) -> std::result::Result<cpal::Stream, cpal::BuildStreamError>
            + Send
            + 'static,
    {
        let name = name.into();
        let stall = StallFlag::default();
        let (tx, rx) = crossbeam_channel::unbounded::<Command>();
        let (ready_tx, ready_rx) = crossbeam_channel::bounded::<crate::Result<()>>(1);

        let worker_stall = stall.clone();
        let worker_name = name.clone();
        let worker = std::thread::Builder::new()
            .name(format!("audio-{name}"))
            .spawn(move || {
                let stream = match build(worker_stall) {
                    Ok(stream) => stream,
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.into()));
                        return;
                    }
                };
                let _ = ready_tx.send(Ok(()));
                run_worker(&worker_name, &stream, &rx);
            })
            .map_err(|e| AudioError::StreamError(format!("failed to spawn audio worker: {e}")))?;

        match ready_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                let _ = worker.join();
                return Err(e);
            }
            Err(_) => {
                let _ = worker.join();
                return Err(AudioError::Disconnected);
            }
        }

        tracing::info!(backend = %name, "cpal stream backend started");
        Ok(Self {
            name,
            commands: Some(tx),
            stall,
            worker: Some(worker),
        })
    }

    pub fn stall_flag(&self) -> StallFlag {
        self.stall.clone()
    }

    fn request(&self, make: fn(Sender<crate::Result<()>>) -> Command) -> crate::Result<()> {
        let commands = self.commands.as_ref().ok_or(AudioError::Disconnected)?;
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        commands
            .send(make(reply_tx))
            .map_err(|_| AudioError::Disconnected)?;
        reply_rx.recv().map_err(|_| AudioError::Disconnected)?
    }
}

fn run_worker(name: &str, stream: &cpal::Stream, rx: &Receiver<Command>) {
    for command in rx.iter() {
        match command {
            Command::Pause(reply) => {
                let result = stream.pause().map_err(|e| AudioError::PauseFailed {
                    backend: name.to_string(),
                    reason: e.to_string(),
                });
                let _ = reply.send(result);
            }
            Command::Play(reply) => {
                let result = stream.play().map_err(|e| AudioError::ResumeFailed {
                    backend: name.to_string(),
                    reason: e.to_string(),
                });
                let _ = reply.send(result);
            }
        }
    }
    tracing::debug!(backend = name, "cpal stream worker stopped");
}

impl AudioBackend for CpalStreamBackend {
    fn name(&self) -> &str {
        &self.name
    }

    fn pause(&self) -> crate::Result<()> {
        self.request(Command::Pause)
    }

    fn resume(&self) -> crate::Result<()> {
        self.request(Command::Play)
    }

    fn detect_broken_playback(&self) -> bool {
        self.stall.take()
    }
}

impl Drop for CpalStreamBackend {
    fn drop(&mut self) {
        // Closing the command channel ends the worker loop and drops the stream.
        self.commands.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
