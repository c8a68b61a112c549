//! Background execution of the orchestrator for a live editing session.
//!
//! Requests are tagged with a sequence number when dispatched. Only the
//! result of the latest dispatched request is ever applied to the
//! [`ResultRegister`]; anything older is dropped on arrival.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::{self, JoinHandle};
use tokio::time::timeout;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::genre::Genre;
use crate::{AnalysisReport, Analyzer, ReferenceFile};

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub text: String,
    pub genre: Genre,
    pub reference_files: Vec<ReferenceFile>,
}

#[derive(Debug, Clone)]
pub struct AnalysisUpdate {
    pub seq: u64,
    pub report: Arc<AnalysisReport>,
}

/// Work executed off the async executor for each surviving request.
pub trait AnalysisRunner: Send + Sync + 'static {
    fn run(&self, request: &AnalysisRequest) -> AnalysisReport;
}

impl AnalysisRunner for Analyzer {
    fn run(&self, request: &AnalysisRequest) -> AnalysisReport {
        self.run_full_analysis(&request.text, request.genre, &request.reference_files)
    }
}

/// Single-slot holder of the most recent applied result.
pub struct ResultRegister {
    dispatched: AtomicU64,
    slot: watch::Sender<Option<AnalysisUpdate>>,
}

impl Default for ResultRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultRegister {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            dispatched: AtomicU64::new(0),
            slot,
        }
    }

    /// Reserve the next sequence number. Sequence numbers start at 1.
    pub fn dispatch(&self) -> u64 {
        self.dispatched.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn latest_dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::SeqCst)
    }

    /// Store `report` if `seq` is still the latest dispatched request and newer
    /// than what is already applied. Returns whether the slot changed.
    pub fn apply(&self, seq: u64, report: AnalysisReport) -> bool {
        if seq != self.latest_dispatched() {
            return false;
        }
        self.slot.send_if_modified(|current| {
            let newer = current.as_ref().map_or(true, |applied| seq > applied.seq);
            if newer {
                *current = Some(AnalysisUpdate {
                    seq,
                    report: Arc::new(report),
                });
            }
            newer
        })
    }

    pub fn current(&self) -> Option<AnalysisUpdate> {
        self.slot.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<AnalysisUpdate>> {
        self.slot.subscribe()
    }
}

struct Dispatch {
    seq: u64,
    request: AnalysisRequest,
}

/// One background worker per editing session.
///
/// Dropping the session aborts the worker; a result still in flight is lost.
pub struct AnalysisSession {
    requests: Option<mpsc::UnboundedSender<Dispatch>>,
    register: Arc<ResultRegister>,
    worker: Option<JoinHandle<()>>,
}

impl AnalysisSession {
    /// Spawn the worker on the current tokio runtime. Outside a runtime the
    /// session is created unavailable and every request is ignored.
    pub fn start<R: AnalysisRunner>(runner: Arc<R>, config: &PipelineConfig) -> Self {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(err) => {
                warn!(error = %err, "no async runtime, analysis is unavailable");
                return Self::unavailable();
            }
        };

        let register = Arc::new(ResultRegister::new());
        let (requests, receiver) = mpsc::unbounded_channel();
        let debounce = Duration::from_millis(config.debounce_ms);
        let worker = handle.spawn(run_worker(
            runner,
            Arc::clone(&register),
            receiver,
            debounce,
        ));
        debug!(debounce_ms = config.debounce_ms, "analysis session started");

        Self {
            requests: Some(requests),
            register,
            worker: Some(worker),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            requests: None,
            register: Arc::new(ResultRegister::new()),
            worker: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.requests
            .as_ref()
            .is_some_and(|requests| !requests.is_closed())
    }

    /// Queue an analysis and return its sequence number, or `None` when the
    /// session cannot run analyses.
    pub fn request_analysis(
        &self,
        text: impl Into<String>,
        genre: Genre,
        reference_files: Vec<ReferenceFile>,
    ) -> Option<u64> {
        let requests = self.requests.as_ref()?;
        let seq = self.register.dispatch();
        let request = AnalysisRequest {
            text: text.into(),
            genre,
            reference_files,
        };
        if requests.send(Dispatch { seq, request }).is_err() {
            warn!(seq, "analysis worker has stopped");
            return None;
        }
        debug!(seq, "analysis dispatched");
        Some(seq)
    }

    pub fn latest(&self) -> Option<AnalysisUpdate> {
        self.register.current()
    }

    pub fn register(&self) -> Arc<ResultRegister> {
        Arc::clone(&self.register)
    }

    /// Applied results, starting with the current one if any.
    pub fn subscribe(&self) -> impl Stream<Item = AnalysisUpdate> + Send + 'static {
        WatchStream::new(self.register.subscribe()).filter_map(|update| update)
    }

    /// Invoke `callback` for every result applied after this call.
    pub fn on_result<F>(&self, mut callback: F) -> Option<JoinHandle<()>>
    where
        F: FnMut(AnalysisUpdate) + Send + 'static,
    {
        let handle = Handle::try_current().ok()?;
        let mut updates = self.register.subscribe();
        Some(handle.spawn(async move {
            while updates.changed().await.is_ok() {
                let update = updates.borrow_and_update().clone();
                if let Some(update) = update {
                    callback(update);
                }
            }
        }))
    }

    pub fn shutdown(&mut self) {
        self.requests.take();
        if let Some(worker) = self.worker.take() {
            worker.abort();
            debug!("analysis session stopped");
        }
    }
}

impl Drop for AnalysisSession {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn run_worker<R: AnalysisRunner>(
    runner: Arc<R>,
    register: Arc<ResultRegister>,
    mut requests: mpsc::UnboundedReceiver<Dispatch>,
    debounce: Duration,
) {
    while let Some(mut next) = requests.recv().await {
        if !debounce.is_zero() {
            while let Ok(Some(newer)) = timeout(debounce, requests.recv()).await {
                next = newer;
            }
        }
        while let Ok(newer) = requests.try_recv() {
            next = newer;
        }

        let Dispatch { seq, request } = next;
        if seq != register.latest_dispatched() {
            debug!(seq, "skipping superseded request");
            continue;
        }

        let job_runner = Arc::clone(&runner);
        let started = Instant::now();
        match task::spawn_blocking(move || job_runner.run(&request)).await {
            Ok(report) => {
                if register.apply(seq, report) {
                    debug!(
                        seq,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "analysis applied"
                    );
                } else {
                    debug!(seq, "discarding stale analysis result");
                }
            }
            Err(err) => warn!(seq, error = %err, "analysis task failed"),
        }
    }
    debug!("analysis worker finished");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(words: usize) -> AnalysisReport {
        let text = vec!["word"; words].join(" ");
        crate::run_full_analysis(&text, Genre::Thriller, &[])
    }

    #[test]
    fn older_result_after_newer_is_a_no_op() {
        let register = ResultRegister::new();
        let first = register.dispatch();
        let second = register.dispatch();

        assert!(register.apply(second, report(2)));
        assert!(!register.apply(first, report(1)));
        assert_eq!(register.current().map(|update| update.seq), Some(second));
    }

    #[test]
    fn result_of_a_superseded_request_is_never_applied() {
        let register = ResultRegister::new();
        let first = register.dispatch();
        register.dispatch();

        assert!(!register.apply(first, report(1)));
        assert!(register.current().is_none());
    }

    #[test]
    fn same_sequence_applies_once() {
        let register = ResultRegister::new();
        let seq = register.dispatch();
        assert!(register.apply(seq, report(1)));
        assert!(!register.apply(seq, report(1)));
    }

    #[test]
    fn start_outside_runtime_degrades() {
        let session = AnalysisSession::start(
            Arc::new(Analyzer::default()),
            &PipelineConfig::default(),
        );
        assert!(!session.is_available());
        assert_eq!(session.request_analysis("Text.", Genre::Thriller, Vec::new()), None);
        assert!(session.latest().is_none());
        assert!(session.on_result(|_| {}).is_none());
    }
}
