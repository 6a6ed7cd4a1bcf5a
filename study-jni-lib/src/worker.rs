//! Native worker threads.
//!
//! Workers never receive a `JNIEnv` or a local reference from the spawning
//! thread; they get the process-wide `JavaVM` and global references only,
//! and attach themselves.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::debug;

use crate::error::{Error, Result};

/// Number of native workers currently running.
pub static WORKERS: WorkerGauge = WorkerGauge::new();

pub struct WorkerGauge {
    alive: AtomicUsize,
}

impl WorkerGauge {
    pub const fn new() -> Self {
        Self {
            alive: AtomicUsize::new(0),
        }
    }

    pub fn alive(&self) -> usize {
        self.alive.load(Ordering::SeqCst)
    }

    fn enter(&'static self) -> GaugeTicket {
        self.alive.fetch_add(1, Ordering::SeqCst);
        GaugeTicket { gauge: self }
    }
}

impl Default for WorkerGauge {
    fn default() -> Self {
        Self::new()
    }
}

struct GaugeTicket {
    gauge: &'static WorkerGauge,
}

impl Drop for GaugeTicket {
    fn drop(&mut self) {
        self.gauge.alive.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Runs `work` on a new named thread and blocks until it finishes.
pub fn spawn_joined<T, F>(gauge: &'static WorkerGauge, name: &str, work: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let ticket = gauge.enter();
    let handle = thread::Builder::new()
        .name(name.to_owned())
        .spawn(move || {
            let _ticket = ticket;
            work()
        })?;
    debug!("waiting for worker `{}`", name);
    handle
        .join()
        .map_err(|_| Error::WorkerPanicked(name.to_owned()))
}

/// Runs `work` on a new named thread without waiting for it.
pub fn spawn_detached<F>(gauge: &'static WorkerGauge, name: &str, work: F) -> Result<()>
where
    F: FnOnce() + Send + 'static,
{
    let ticket = gauge.enter();
    thread::Builder::new()
        .name(name.to_owned())
        .spawn(move || {
            let _ticket = ticket;
            work()
        })?;
    Ok(())
}
