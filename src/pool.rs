//! A bounded, scoped worker pool with an order-preserving `map`.
//!
//! Every call to [`WorkerPool::map`] spins up at most `size` named threads
//! inside a `std::thread::scope`. Workers claim the next unprocessed index
//! from a shared atomic cursor and send `(index, outcome)` back over a
//! crossbeam channel; each outcome lands in the slot for its original
//! position. The scope joins every worker before `map` returns.

use crossbeam::channel;
use std::any::Any;
use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error("worker pool needs at least one thread")]
    EmptyPool,

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("job {index} panicked: {message}")]
    WorkerPanicked { index: usize, message: String },

    #[error("no result was produced for job {index}")]
    MissingResult { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerPool {
    size: usize,
}

impl WorkerPool {
    pub fn new(size: usize) -> Result<Self, PoolError> {
        if size == 0 {
            return Err(PoolError::EmptyPool);
        }
        Ok(WorkerPool { size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Apply `f` to every item, returning results in input order.
    pub fn map<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>, PoolError>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync,
    {
        self.try_map(items, |item| Ok::<R, PoolError>(f(item)))
    }

    /// Fallible variant of [`map`](Self::map).
    ///
    /// All jobs run to completion; the error reported is the one at the
    /// lowest failing position.
    pub fn try_map<T, R, E, F>(&self, items: &[T], f: F) -> Result<Vec<R>, E>
    where
        T: Sync,
        R: Send,
        E: Send + From<PoolError>,
        F: Fn(&T) -> Result<R, E> + Sync,
    {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let workers = self.size.min(items.len());

        let next = AtomicUsize::new(0);
        let (result_tx, result_rx) = channel::unbounded::<(usize, Result<R, E>)>();
        let f = &f;

        let spawned: Result<(), PoolError> = thread::scope(|scope| {
            for id in 0..workers {
                let next = &next;
                let results = result_tx.clone();

                thread::Builder::new()
                    .name(format!("worker-{}", id))
                    .spawn_scoped(scope, move || {
                        debug!(worker = id, "worker started");
                        let mut processed = 0usize;

                        loop {
                            let index = next.fetch_add(1, Ordering::Relaxed);
                            let Some(item) = items.get(index) else {
                                break;
                            };
                            let outcome = match panic::catch_unwind(AssertUnwindSafe(|| f(item))) {
                                Ok(outcome) => outcome,
                                Err(payload) => Err(E::from(PoolError::WorkerPanicked {
                                    index,
                                    message: panic_message(payload.as_ref()),
                                })),
                            };
                            processed += 1;
                            if results.send((index, outcome)).is_err() {
                                break;
                            }
                        }

                        debug!(worker = id, processed, "worker finished");
                    })
                    .map_err(PoolError::Spawn)?;
            }
            Ok(())
        });
        drop(result_tx);
        spawned?;

        let mut slots: Vec<Option<Result<R, E>>> = (0..items.len()).map(|_| None).collect();
        for (index, outcome) in result_rx.try_iter() {
            slots[index] = Some(outcome);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.unwrap_or_else(|| Err(E::from(PoolError::MissingResult { index })))
            })
            .collect()
    }
}

impl Default for WorkerPool {
    /// One worker per logical CPU.
    fn default() -> Self {
        WorkerPool {
            size: num_cpus::get().max(1),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
