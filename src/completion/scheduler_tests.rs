//! Tests for completion/scheduler

use super::*;
use crate::completion::{CompletionError, SourceState};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize};

/// Records every query and how many filters overlap
#[derive(Default)]
struct Probe {
    queries: Mutex<Vec<String>>,
    running: AtomicUsize,
    max_running: AtomicUsize,
}

impl Probe {
    fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[derive(Clone, Copy)]
enum Behavior {
    Ok,
    Fail,
    PanicOnce,
}

struct ProbeSource {
    title: &'static str,
    probe: Arc<Probe>,
    work: Duration,
    behavior: Behavior,
    tripped: AtomicBool,
}

#[async_trait]
impl CompletionSource for ProbeSource {
    fn title(&self) -> &str {
        self.title
    }

    async fn filter(&self, query: &str) -> Result<(), CompletionError> {
        let now = self.probe.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.probe.max_running.fetch_max(now, Ordering::SeqCst);
        self.probe.queries.lock().unwrap().push(query.to_string());

        if !self.work.is_zero() {
            tokio::time::sleep(self.work).await;
        }
        self.probe.running.fetch_sub(1, Ordering::SeqCst);

        match self.behavior {
            Behavior::Ok => Ok(()),
            Behavior::Fail => Err(CompletionError::Failed {
                source_name: self.title.to_string(),
                reason: "boom".to_string(),
            }),
            Behavior::PanicOnce => {
                if !self.tripped.swap(true, Ordering::SeqCst) {
                    panic!("source panicked");
                }
                Ok(())
            }
        }
    }

    fn next(&self) {}
    fn prev(&self) {}
    fn completion(&self) -> Option<String> {
        None
    }
    fn clear_completion(&self) {}
    fn state(&self) -> SourceState {
        SourceState::Normal
    }
    fn options(&self) -> Vec<String> {
        Vec::new()
    }
    fn selected(&self) -> Option<usize> {
        None
    }
}

#[derive(Default)]
struct RecordingListener {
    filtered: Mutex<Vec<String>>,
}

impl FilterListener for RecordingListener {
    fn source_filtered(&self, title: &str) {
        self.filtered.lock().unwrap().push(title.to_string());
    }
}

impl RecordingListener {
    fn filtered(&self) -> Vec<String> {
        self.filtered.lock().unwrap().clone()
    }
}

const DEBOUNCE: Duration = Duration::from_millis(100);

fn scheduler_with(
    sources: Vec<(&'static str, Duration, Behavior)>,
) -> (CompletionScheduler, Arc<Probe>, Arc<RecordingListener>, CompletionRegistry) {
    let probe = Arc::new(Probe::default());
    let listener = Arc::new(RecordingListener::default());

    let factory_probe = Arc::clone(&probe);
    let registry = CompletionRegistry::new(Arc::new(move || {
        sources
            .iter()
            .map(|&(title, work, behavior)| {
                Arc::new(ProbeSource {
                    title,
                    probe: Arc::clone(&factory_probe),
                    work,
                    behavior,
                    tripped: AtomicBool::new(false),
                }) as Arc<dyn CompletionSource>
            })
            .collect::<Vec<_>>()
    }));

    let scheduler = CompletionScheduler::new(
        registry.clone(),
        Arc::clone(&listener) as Arc<dyn FilterListener>,
        DEBOUNCE,
    );
    (scheduler, probe, listener, registry)
}

fn quick(title: &'static str) -> (&'static str, Duration, Behavior) {
    (title, Duration::ZERO, Behavior::Ok)
}

#[tokio::test(start_paused = true)]
async fn test_burst_within_window_runs_once_with_last_text() {
    let (mut scheduler, probe, _, _) = scheduler_with(vec![quick("a")]);

    scheduler.schedule("o");
    tokio::time::sleep(Duration::from_millis(30)).await;
    scheduler.schedule("op");
    scheduler.settle().await;

    assert_eq!(probe.queries(), vec!["op"]);
}

#[tokio::test(start_paused = true)]
async fn test_many_keystrokes_coalesce() {
    let (mut scheduler, probe, _, _) = scheduler_with(vec![quick("a")]);

    for text in ["t", "ta", "tab", "tabo", "tabop"] {
        scheduler.schedule(text);
        tokio::time::sleep(Duration::from_millis(99)).await;
    }
    scheduler.settle().await;

    assert_eq!(probe.queries(), vec!["tabop"]);
}

#[tokio::test(start_paused = true)]
async fn test_nothing_runs_before_window_elapses() {
    let (mut scheduler, probe, _, registry) = scheduler_with(vec![quick("a")]);

    scheduler.schedule("o");
    tokio::time::sleep(Duration::from_millis(99)).await;

    assert!(probe.queries().is_empty());
    assert!(!registry.is_enabled());

    scheduler.settle().await;
    assert_eq!(probe.queries(), vec!["o"]);
    assert!(registry.is_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_separated_inputs_each_run() {
    let (mut scheduler, probe, _, _) = scheduler_with(vec![quick("a")]);

    scheduler.schedule("o");
    tokio::time::sleep(Duration::from_millis(150)).await;
    scheduler.schedule("op");
    scheduler.settle().await;

    assert_eq!(probe.queries(), vec!["o", "op"]);
}

#[tokio::test(start_paused = true)]
async fn test_every_source_receives_the_text() {
    let (mut scheduler, probe, listener, _) =
        scheduler_with(vec![quick("first"), quick("second"), quick("third")]);

    scheduler.schedule("set");
    scheduler.settle().await;

    assert_eq!(probe.queries(), vec!["set", "set", "set"]);
    let mut filtered = listener.filtered();
    filtered.sort();
    assert_eq!(filtered, vec!["first", "second", "third"]);
}

#[tokio::test(start_paused = true)]
async fn test_sources_filter_concurrently() {
    let slow = Duration::from_millis(500);
    let (mut scheduler, probe, _, _) =
        scheduler_with(vec![("a", slow, Behavior::Ok), ("b", slow, Behavior::Ok)]);

    scheduler.schedule("x");
    scheduler.settle().await;

    assert_eq!(probe.max_running.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_passes_never_overlap() {
    let slow = Duration::from_millis(500);
    let (mut scheduler, probe, _, _) = scheduler_with(vec![("a", slow, Behavior::Ok)]);

    scheduler.schedule("first");
    // Fired and filtering
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(probe.queries(), vec!["first"]);

    scheduler.schedule("second");
    // Fired, but still waiting for the first pass
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(probe.queries(), vec!["first"]);

    scheduler.settle().await;
    assert_eq!(probe.queries(), vec!["first", "second"]);
    assert_eq!(probe.max_running.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn test_waiting_pass_superseded_while_previous_runs() {
    let slow = Duration::from_millis(500);
    let (mut scheduler, probe, _, _) = scheduler_with(vec![("a", slow, Behavior::Ok)]);

    scheduler.schedule("first");
    tokio::time::sleep(Duration::from_millis(150)).await;
    scheduler.schedule("second");
    // "second" has fired and waits on "first"
    tokio::time::sleep(Duration::from_millis(150)).await;
    scheduler.schedule("third");
    scheduler.settle().await;

    assert_eq!(probe.queries(), vec!["first", "third"]);
}

#[tokio::test(start_paused = true)]
async fn test_failing_source_does_not_stop_siblings() {
    let (mut scheduler, probe, listener, _) = scheduler_with(vec![
        ("broken", Duration::ZERO, Behavior::Fail),
        quick("healthy"),
    ]);

    scheduler.schedule("open");
    scheduler.settle().await;

    assert_eq!(probe.queries().len(), 2);
    assert_eq!(listener.filtered(), vec!["healthy"]);
}

#[tokio::test(start_paused = true)]
async fn test_failed_pass_does_not_block_next() {
    let (mut scheduler, probe, listener, _) =
        scheduler_with(vec![("crashy", Duration::ZERO, Behavior::PanicOnce)]);

    scheduler.schedule("first");
    tokio::time::sleep(Duration::from_millis(150)).await;

    // The first pass panicked; the second still runs
    scheduler.schedule("second");
    scheduler.settle().await;

    assert_eq!(probe.queries(), vec!["first", "second"]);
    assert_eq!(listener.filtered(), vec!["crashy"]);
}

#[tokio::test(start_paused = true)]
async fn test_supersede_makes_pending_pass_noop() {
    let (mut scheduler, probe, _, registry) = scheduler_with(vec![quick("a")]);

    scheduler.schedule("open");
    scheduler.supersede();
    tokio::time::sleep(Duration::from_millis(500)).await;
    scheduler.settle().await;

    assert!(probe.queries().is_empty());
    assert!(!registry.is_enabled());
}

#[tokio::test(start_paused = true)]
async fn test_generation_increases_per_schedule() {
    let (mut scheduler, _, _, _) = scheduler_with(vec![quick("a")]);

    let first = scheduler.schedule("a");
    let second = scheduler.schedule("ab");

    assert!(second > first);
    assert_eq!(scheduler.generation(), second);
    scheduler.settle().await;
}
