use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::timeout;
use tokio_stream::StreamExt;

use prose_analyzer::config::PipelineConfig;
use prose_analyzer::pipeline::{
    AnalysisRequest, AnalysisRunner, AnalysisSession, AnalysisUpdate, ResultRegister,
};
use prose_analyzer::{run_full_analysis, AnalysisReport, Analyzer, Genre};

const WAIT: Duration = Duration::from_secs(5);

fn no_debounce() -> PipelineConfig {
    PipelineConfig { debounce_ms: 0 }
}

fn word_count(update: &AnalysisUpdate) -> usize {
    update
        .report
        .stats
        .as_ref()
        .map(|stats| stats.word_count)
        .unwrap_or(0)
}

/// Blocks every run until the test releases it.
struct GatedRunner {
    analyzer: Analyzer,
    started: Notify,
    gate: Mutex<mpsc::Receiver<()>>,
}

impl AnalysisRunner for GatedRunner {
    fn run(&self, request: &AnalysisRequest) -> AnalysisReport {
        self.started.notify_one();
        let _ = self.gate.lock().unwrap().recv();
        self.analyzer.run(request)
    }
}

struct CountingRunner {
    runs: AtomicUsize,
}

impl AnalysisRunner for CountingRunner {
    fn run(&self, request: &AnalysisRequest) -> AnalysisReport {
        self.runs.fetch_add(1, Ordering::SeqCst);
        run_full_analysis(&request.text, request.genre, &request.reference_files)
    }
}

#[test]
fn late_stale_result_is_dropped() {
    let register = ResultRegister::new();
    let a = register.dispatch();
    let b = register.dispatch();

    let report_b = run_full_analysis("Text B has five words.", Genre::Thriller, &[]);
    let report_a = run_full_analysis("Text A.", Genre::Thriller, &[]);
    assert!(register.apply(b, report_b.clone()));
    assert!(!register.apply(a, report_a));

    let current = register.current().unwrap();
    assert_eq!(current.seq, b);
    assert_eq!(*current.report, report_b);
}

#[tokio::test]
async fn newer_request_wins_over_slow_older_run() {
    let (release, gate) = mpsc::channel();
    let runner = Arc::new(GatedRunner {
        analyzer: Analyzer::default(),
        started: Notify::new(),
        gate: Mutex::new(gate),
    });
    let session = AnalysisSession::start(Arc::clone(&runner), &no_debounce());
    let updates = session.subscribe();
    tokio::pin!(updates);

    let a = session
        .request_analysis("one two three.", Genre::Thriller, Vec::new())
        .unwrap();
    timeout(WAIT, runner.started.notified()).await.unwrap();

    let b = session
        .request_analysis("one two three four five.", Genre::Thriller, Vec::new())
        .unwrap();
    assert!(b > a);

    release.send(()).unwrap();
    release.send(()).unwrap();

    let update = timeout(WAIT, updates.next()).await.unwrap().unwrap();
    assert_eq!(update.seq, b);
    assert_eq!(word_count(&update), 5);
    assert_eq!(session.latest().map(|latest| latest.seq), Some(b));

    let register = session.register();
    assert_eq!(register.latest_dispatched(), b);
    let late = run_full_analysis("one two three.", Genre::Thriller, &[]);
    assert!(!register.apply(a, late));
    assert_eq!(register.current().map(|current| current.seq), Some(b));
}

#[tokio::test]
async fn bursts_are_coalesced_into_one_run() {
    let runner = Arc::new(CountingRunner {
        runs: AtomicUsize::new(0),
    });
    let session = AnalysisSession::start(Arc::clone(&runner), &PipelineConfig { debounce_ms: 50 });
    let updates = session.subscribe();
    tokio::pin!(updates);

    let mut text = String::new();
    let mut last = 0;
    for word in ["The", "storm", "broke", "over", "Eldoria."] {
        text.push_str(word);
        text.push(' ');
        last = session
            .request_analysis(text.clone(), Genre::Fantasy, Vec::new())
            .unwrap();
    }

    let update = timeout(WAIT, updates.next()).await.unwrap().unwrap();
    assert_eq!(update.seq, last);
    assert_eq!(word_count(&update), 5);
    assert_eq!(runner.runs.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn on_result_receives_applied_updates() {
    let session = AnalysisSession::start(Arc::new(Analyzer::default()), &no_debounce());
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let forwarder = session
        .on_result(move |update| {
            let _ = tx.send(update.seq);
        })
        .unwrap();

    let seq = session
        .request_analysis("The cat sat.", Genre::Mystery, Vec::new())
        .unwrap();
    assert_eq!(timeout(WAIT, rx.recv()).await.unwrap(), Some(seq));
    forwarder.abort();
}

#[tokio::test]
async fn shutdown_stops_accepting_requests() {
    let mut session = AnalysisSession::start(Arc::new(Analyzer::default()), &no_debounce());
    assert!(session.is_available());
    session.shutdown();
    assert!(!session.is_available());
    assert_eq!(
        session.request_analysis("Too late.", Genre::Thriller, Vec::new()),
        None
    );
}

#[test]
fn no_runtime_means_no_results() {
    let session = AnalysisSession::start(Arc::new(Analyzer::default()), &no_debounce());
    assert!(!session.is_available());
    assert_eq!(
        session.request_analysis("Anything.", Genre::Romance, Vec::new()),
        None
    );
    assert!(session.latest().is_none());
}
