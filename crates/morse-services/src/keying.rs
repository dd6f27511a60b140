//! Background keying thread.
//!
//! Playing through a [`KeyingHandle`] only queues commands, so a message is
//! compiled and handed over at once while a worker thread applies each key
//! change to a [`KeyOutput`] and sleeps for each interval.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{bounded, select, Receiver, RecvTimeoutError, Sender, TryRecvError};
use morse_core::{StateSetter, Waiter};
use thiserror::Error;
use tracing::{info, warn};

/// Commands queued before senders block
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyingError {
    #[error("Keying thread is not running")]
    Disconnected,
    #[error("Key output failed: {0}")]
    Output(String),
}

/// The device end of the keying thread: a relay, a GPIO line, a tone gate
pub trait KeyOutput: Send + 'static {
    type Error: fmt::Display;

    fn set_key(&mut self, down: bool) -> Result<(), Self::Error>;
}

enum Command {
    Key(bool),
    Wait(Duration),
    Flush(Sender<()>),
}

/// First output failure, reported to every handle from then on
type FailureSlot = Arc<Mutex<Option<String>>>;

/// Clonable sender side. Implements both collaborator contracts and never
/// blocks for longer than it takes to queue a command.
#[derive(Clone)]
pub struct KeyingHandle {
    tx: Sender<Command>,
    failure: FailureSlot,
}

impl KeyingHandle {
    fn send(&self, command: Command) -> Result<(), KeyingError> {
        self.check_failure()?;
        self.tx.send(command).map_err(|_| KeyingError::Disconnected)
    }

    fn check_failure(&self) -> Result<(), KeyingError> {
        match self.failure.lock() {
            Ok(slot) => match slot.as_ref() {
                Some(reason) => Err(KeyingError::Output(reason.clone())),
                None => Ok(()),
            },
            Err(_) => Err(KeyingError::Disconnected),
        }
    }

    /// Block until every command queued so far has been applied
    pub fn flush(&self) -> Result<(), KeyingError> {
        let (ack_tx, ack_rx) = bounded(1);
        self.send(Command::Flush(ack_tx))?;
        ack_rx.recv().map_err(|_| KeyingError::Disconnected)?;
        self.check_failure()
    }

    /// Commands waiting for the worker
    pub fn pending(&self) -> usize {
        self.tx.len()
    }
}

impl fmt::Debug for KeyingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyingHandle")
            .field("pending", &self.tx.len())
            .finish()
    }
}

impl StateSetter<KeyingError> for KeyingHandle {
    fn set_active(&mut self, active: bool) -> Result<(), KeyingError> {
        self.send(Command::Key(active))
    }
}

impl Waiter<KeyingError> for KeyingHandle {
    fn wait(&mut self, duration: Duration) -> Result<(), KeyingError> {
        self.send(Command::Wait(duration))
    }
}

/// Owns the worker thread. Dropping it stops the worker, abandoning
/// whatever is still queued, and releases the key.
pub struct KeyingThread {
    handle: KeyingHandle,
    stop_tx: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl KeyingThread {
    pub fn spawn<O: KeyOutput>(output: O) -> Self {
        Self::with_capacity(output, DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity<O: KeyOutput>(output: O, capacity: usize) -> Self {
        let (tx, rx) = bounded::<Command>(capacity);
        let (stop_tx, stop_rx) = bounded::<()>(1);
        let failure = FailureSlot::default();

        let worker_failure = failure.clone();
        let worker = thread::spawn(move || {
            Self::run(output, rx, stop_rx, worker_failure);
        });

        info!(capacity, "Keying thread started");

        Self {
            handle: KeyingHandle { tx, failure },
            stop_tx: Some(stop_tx),
            worker: Some(worker),
        }
    }

    pub fn handle(&self) -> KeyingHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    pub fn flush(&self) -> Result<(), KeyingError> {
        self.handle.flush()
    }

    /// Stop the worker and wait for it to exit. Safe to call twice.
    pub fn shutdown(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        if worker.join().is_err() {
            warn!("Keying thread panicked");
        }
        info!("Keying thread stopped");
    }

    fn run<O: KeyOutput>(
        mut output: O,
        rx: Receiver<Command>,
        stop_rx: Receiver<()>,
        failure: FailureSlot,
    ) {
        let mut failed = false;
        let mut key_down = false;

        loop {
            // A stop request wins over queued commands
            if !matches!(stop_rx.try_recv(), Err(TryRecvError::Empty)) {
                break;
            }
            let next = select! {
                recv(rx) -> msg => msg.ok(),
                recv(stop_rx) -> _ => None,
            };
            let Some(command) = next else { break };

            match command {
                Command::Key(down) if !failed => {
                    if let Err(e) = output.set_key(down) {
                        warn!(error = %e, "Key output failed, discarding the rest of the queue");
                        if let Ok(mut slot) = failure.lock() {
                            slot.get_or_insert_with(|| e.to_string());
                        }
                        failed = true;
                    } else {
                        key_down = down;
                    }
                }
                Command::Key(_) => {}
                Command::Wait(duration) if !failed => {
                    // Sleep, but wake at once on shutdown
                    match stop_rx.recv_timeout(duration) {
                        Err(RecvTimeoutError::Timeout) => {}
                        _ => break,
                    }
                }
                Command::Wait(_) => {}
                Command::Flush(ack) => {
                    let _ = ack.send(());
                }
            }
        }

        if key_down && output.set_key(false).is_err() {
            warn!("Could not release the key on shutdown");
        }
    }
}

impl fmt::Debug for KeyingThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyingThread")
            .field("running", &self.is_running())
            .field("pending", &self.handle.pending())
            .finish()
    }
}

impl Drop for KeyingThread {
    fn drop(&mut self) {
        self.shutdown();
    }
}
