//! Background worker for running strategise sweeps off the calling thread.
//!
//! Both entry points run the same pure sweep as [`strategise`]; they only
//! change where it runs and how the caller learns it has finished.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};

use malplan_core::error::StrategiseError;
use malplan_core::model::{RegionInterventions, StrategiseResult};
use malplan_core::strategise::{
    StrategiseOptions, SweepBounds, SweepProgress, strategise, strategise_with_progress,
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WorkerError {
    #[error("sweep was cancelled")]
    Cancelled,
    #[error("sweep thread stopped before sending a result")]
    Disconnected,
    #[error(transparent)]
    Strategise(#[from] StrategiseError),
}

/// Request sent to the background worker
#[derive(Debug)]
pub enum SweepRequest {
    /// Validate `options`, then sweep them over the given regions
    Strategise {
        regions: Vec<RegionInterventions>,
        options: StrategiseOptions,
    },
    /// Graceful shutdown
    Shutdown,
}

/// A finished sweep and the range it covered
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOutput {
    pub bounds: SweepBounds,
    pub results: Vec<StrategiseResult>,
}

/// Response from the background worker
#[derive(Debug, PartialEq)]
pub enum SweepResponse {
    Complete(SweepOutput),
    Cancelled,
    /// Rejected options
    Error(StrategiseError),
}

/// Background worker that runs sweeps on a separate thread
pub struct SweepWorker {
    request_tx: Sender<SweepRequest>,
    response_rx: Receiver<SweepResponse>,
    cancel_flag: Arc<AtomicBool>,
    progress: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    thread: Option<JoinHandle<()>>,
}

impl SweepWorker {
    pub fn new() -> Self {
        let (request_tx, request_rx) = channel();
        let (response_tx, response_rx) = channel();
        let cancel_flag = Arc::new(AtomicBool::new(false));
        let progress = Arc::new(AtomicUsize::new(0));
        let total = Arc::new(AtomicUsize::new(0));

        let ctx = WorkerContext {
            response_tx,
            sweep_progress: SweepProgress::from_atomics(
                progress.clone(),
                total.clone(),
                cancel_flag.clone(),
            ),
        };

        let thread = thread::spawn(move || {
            ctx.run(request_rx);
        });

        Self {
            request_tx,
            response_rx,
            cancel_flag,
            progress,
            total,
            thread: Some(thread),
        }
    }

    /// Queue a request; `false` if the worker thread has gone away
    pub fn send(&self, request: SweepRequest) -> bool {
        // Clear cancel flag for new work
        self.cancel_flag.store(false, Ordering::SeqCst);
        self.progress.store(0, Ordering::SeqCst);
        self.request_tx.send(request).is_ok()
    }

    /// Try to receive a response (non-blocking)
    pub fn try_recv(&self) -> Option<SweepResponse> {
        self.response_rx.try_recv().ok()
    }

    /// Wait for the next response
    pub fn recv(&self) -> Option<SweepResponse> {
        self.response_rx.recv().ok()
    }

    /// Thresholds evaluated in the current sweep
    pub fn get_progress(&self) -> usize {
        self.progress.load(Ordering::SeqCst)
    }

    /// Thresholds in the current sweep
    pub fn get_total(&self) -> usize {
        self.total.load(Ordering::SeqCst)
    }

    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::SeqCst)
    }

    pub fn shutdown(&self) {
        let _ = self.request_tx.send(SweepRequest::Shutdown);
    }

    /// Run one sweep to completion on the worker and wait for it
    pub fn run(
        &self,
        regions: Vec<RegionInterventions>,
        options: StrategiseOptions,
    ) -> Result<SweepOutput, WorkerError> {
        if !self.send(SweepRequest::Strategise { regions, options }) {
            return Err(WorkerError::Disconnected);
        }
        match self.recv() {
            Some(SweepResponse::Complete(output)) => Ok(output),
            Some(SweepResponse::Cancelled) => Err(WorkerError::Cancelled),
            Some(SweepResponse::Error(e)) => Err(WorkerError::Strategise(e)),
            None => Err(WorkerError::Disconnected),
        }
    }
}

impl Default for SweepWorker {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SweepWorker {
    fn drop(&mut self) {
        self.shutdown();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Shared state for the background worker thread.
struct WorkerContext {
    response_tx: Sender<SweepResponse>,
    sweep_progress: SweepProgress,
}

impl WorkerContext {
    fn run(&self, request_rx: Receiver<SweepRequest>) {
        while let Ok(request) = request_rx.recv() {
            match request {
                SweepRequest::Shutdown => break,

                SweepRequest::Strategise { regions, options } => {
                    let bounds = match options.validate() {
                        Ok(bounds) => bounds,
                        Err(e) => {
                            tracing::warn!(error = %e, "Rejected strategise options");
                            let _ = self.response_tx.send(SweepResponse::Error(e));
                            continue;
                        }
                    };
                    tracing::info!(
                        regions = regions.len(),
                        points = bounds.points,
                        min_threshold = bounds.min_threshold,
                        max_threshold = bounds.max_threshold,
                        "Starting strategise sweep"
                    );

                    let response =
                        match strategise_with_progress(&regions, &bounds, &self.sweep_progress) {
                            Ok(results) => {
                                tracing::info!(points = results.len(), "Strategise sweep complete");
                                SweepResponse::Complete(SweepOutput { bounds, results })
                            }
                            Err(StrategiseError::Cancelled) => {
                                tracing::info!(
                                    completed = self.sweep_progress.completed(),
                                    "Strategise sweep cancelled"
                                );
                                SweepResponse::Cancelled
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "Strategise sweep failed");
                                SweepResponse::Error(e)
                            }
                        };
                    let _ = self.response_tx.send(response);
                }
            }
        }
    }
}

/// A single sweep running on its own thread
pub struct SweepHandle {
    result_rx: Receiver<Vec<StrategiseResult>>,
    thread: Option<JoinHandle<()>>,
}

impl SweepHandle {
    /// The results if the sweep has finished (non-blocking)
    pub fn try_result(&self) -> Option<Vec<StrategiseResult>> {
        self.result_rx.try_recv().ok()
    }

    /// Wait for the sweep to finish
    pub fn join(mut self) -> Result<Vec<StrategiseResult>, WorkerError> {
        let results = self
            .result_rx
            .recv()
            .map_err(|_| WorkerError::Disconnected);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        results
    }
}

impl Drop for SweepHandle {
    fn drop(&mut self) {
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Run [`strategise`] on a background thread
pub fn spawn_strategise(regions: Vec<RegionInterventions>, bounds: SweepBounds) -> SweepHandle {
    let (result_tx, result_rx) = channel();
    let thread = thread::spawn(move || {
        let results = strategise(&regions, &bounds);
        tracing::debug!(points = results.len(), "Deferred sweep complete");
        let _ = result_tx.send(results);
    });

    SweepHandle {
        result_rx,
        thread: Some(thread),
    }
}
