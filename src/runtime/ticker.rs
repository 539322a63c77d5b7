//! Cancellable repeating timer.
//!
//! A ticker owns one background thread that waits on a stop channel with a
//! timeout. Each timeout fires the callback; closing the stop channel (via
//! [`Ticker::cancel`] or drop) ends the thread without another firing.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Handle to a running repeating timer.
#[derive(Debug)]
pub struct Ticker {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Start calling `on_tick` every `period`.
    ///
    /// The timer stops by itself once `on_tick` returns false.
    pub fn start<F>(period: Duration, mut on_tick: F) -> io::Result<Self>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let handle = thread::Builder::new()
            .name("osd-ticker".to_string())
            .spawn(move || loop {
                match stop_rx.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => {
                        if !on_tick() {
                            break;
                        }
                    }
                    // Stop requested or handle dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        Ok(Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Whether the timer thread is still running.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the timer and wait for its thread to exit.
    ///
    /// After this returns the callback will not fire again.
    pub fn cancel(&mut self) {
        self.stop_tx.take();
        if let Some(handle) = self.handle.take() {
            // A panicking callback has already stopped the timer
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
