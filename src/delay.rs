//! The confirmation pause before anything is published.
//!
//! The pause is the operator's abort window: npub installs no signal handler,
//! so Ctrl-C during the wait terminates the process before any side effect.

use std::sync::Mutex;
use std::thread;
use std::time::Duration;

/// Blocks the pipeline for a fixed interval
pub trait Pause: Send + Sync {
    fn wait(&self, duration: Duration);
}

/// Sleeps the current thread
pub struct ThreadPause;

impl Pause for ThreadPause {
    fn wait(&self, duration: Duration) {
        log::debug!("pausing for {:?}", duration);
        thread::sleep(duration);
    }
}

/// Records requested pauses without waiting
#[derive(Default)]
pub struct RecordingPause {
    waits: Mutex<Vec<Duration>>,
}

impl RecordingPause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits
            .lock()
            .map(|waits| waits.clone())
            .unwrap_or_default()
    }
}

impl Pause for RecordingPause {
    fn wait(&self, duration: Duration) {
        if let Ok(mut waits) = self.waits.lock() {
            waits.push(duration);
        }
    }
}
