//! Main scheduling context
//!
//! Lookups complete on runtime worker threads. Their callbacks are queued
//! through a [`MainHandle`] and executed by whoever drives the matching
//! [`MainLoop`], typically the application's main thread.

use tokio::sync::mpsc;
use tracing::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Sender side of the main context, cheap to clone and share with tasks
#[derive(Clone)]
pub struct MainHandle {
    tx: mpsc::UnboundedSender<Job>,
}

/// Receiver side of the main context; runs queued jobs on the caller's thread
pub struct MainLoop {
    rx: mpsc::UnboundedReceiver<Job>,
}

/// Create a connected handle/loop pair
pub fn main_context() -> (MainHandle, MainLoop) {
    let (tx, rx) = mpsc::unbounded_channel();
    (MainHandle { tx }, MainLoop { rx })
}

impl MainHandle {
    /// Queue `job` for execution on the main context.
    ///
    /// Returns false if the loop has been dropped; the job is discarded.
    pub fn dispatch<F>(&self, job: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let sent = self.tx.send(Box::new(job)).is_ok();
        if !sent {
            debug!("Main loop is gone, dropping dispatched job");
        }
        sent
    }
}

impl MainLoop {
    /// Run jobs as they arrive until every [`MainHandle`] has been dropped.
    ///
    /// Returns the number of jobs executed.
    pub async fn run(&mut self) -> usize {
        let mut executed = 0;
        while let Some(job) = self.rx.recv().await {
            job();
            executed += 1;
        }
        executed
    }

    /// Wait for the next job and run it. Returns false once all handles are gone.
    pub async fn turn(&mut self) -> bool {
        match self.rx.recv().await {
            Some(job) => {
                job();
                true
            }
            None => false,
        }
    }

    /// Run every job that is already queued without waiting.
    ///
    /// For hosts that pump the queue from their own frame loop.
    pub fn run_pending(&mut self) -> usize {
        let mut executed = 0;
        while let Ok(job) = self.rx.try_recv() {
            job();
            executed += 1;
        }
        executed
    }
}
