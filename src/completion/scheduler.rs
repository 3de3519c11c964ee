//! Debounced completion passes
//!
//! Every input change arms a timer and disarms the previous one. When a
//! timer fires, its pass first waits for the pass already running, then
//! runs only if no newer input arrived meanwhile. A pass filters every
//! active source concurrently with the text captured when it was armed.
//!
//! Two guards keep passes in order:
//! - a generation counter, bumped on every input change; a pass whose
//!   generation is no longer current when it would start does nothing
//! - the running pass, kept as a shared future that the next pass awaits,
//!   so at most one fan-out is in flight
//!
//! Passes that already started are never aborted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use futures::FutureExt;
use futures::future::{self, BoxFuture, Shared};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::registry::CompletionRegistry;
use super::source::CompletionSource;

/// Notified after each source finishes filtering
pub trait FilterListener: Send + Sync {
    fn source_filtered(&self, title: &str);
}

type InFlight = Shared<BoxFuture<'static, Result<(), String>>>;

fn idle() -> InFlight {
    future::ready(Ok(())).boxed().shared()
}

/// Timer of a pass that has not fired yet
struct ArmedPass {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

pub struct CompletionScheduler {
    registry: CompletionRegistry,
    listener: Arc<dyn FilterListener>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    in_flight: Arc<Mutex<InFlight>>,
    armed: Option<ArmedPass>,
}

impl CompletionScheduler {
    pub fn new(
        registry: CompletionRegistry,
        listener: Arc<dyn FilterListener>,
        delay: Duration,
    ) -> Self {
        Self {
            registry,
            listener,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Arc::new(Mutex::new(idle())),
            armed: None,
        }
    }

    /// Arm a pass for `text`, disarming any pass whose timer has not fired
    ///
    /// Must be called from within a tokio runtime. Returns the generation
    /// of the new pass.
    pub fn schedule(&mut self, text: impl Into<String>) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.disarm();

        let pass = Pass {
            generation,
            text: text.into(),
            current: Arc::clone(&self.generation),
            in_flight: Arc::clone(&self.in_flight),
            registry: self.registry.clone(),
            listener: Arc::clone(&self.listener),
        };

        let cancel = CancellationToken::new();
        let fired = cancel.clone();
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = fired.cancelled() => {
                    log::trace!("Completion pass {} disarmed", pass.generation);
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }
            pass.run().await;
        });

        self.armed = Some(ArmedPass { cancel, handle });
        generation
    }

    /// Make every pass scheduled so far a no-op
    pub fn supersede(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.disarm();
    }

    /// Wait until the armed pass and the running fan-out have finished
    pub async fn settle(&mut self) {
        if let Some(armed) = self.armed.take() {
            if let Err(e) = armed.handle.await {
                log::warn!("Completion pass ended abnormally: {}", e);
            }
        }
        let running = lock(&self.in_flight).clone();
        let _ = running.await;
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn disarm(&mut self) {
        if let Some(armed) = self.armed.take() {
            armed.cancel.cancel();
        }
    }
}

impl Drop for CompletionScheduler {
    fn drop(&mut self) {
        self.disarm();
    }
}

fn lock(in_flight: &Mutex<InFlight>) -> MutexGuard<'_, InFlight> {
    in_flight.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One fired completion pass
struct Pass {
    generation: u64,
    text: String,
    current: Arc<AtomicU64>,
    in_flight: Arc<Mutex<InFlight>>,
    registry: CompletionRegistry,
    listener: Arc<dyn FilterListener>,
}

impl Pass {
    async fn run(self) {
        let previous = lock(&self.in_flight).clone();
        if let Err(e) = previous.await {
            log::warn!("Previous completion pass failed: {}", e);
        }

        let running = {
            let mut in_flight = lock(&self.in_flight);
            if self.current.load(Ordering::SeqCst) != self.generation {
                log::trace!("Completion pass {} is stale", self.generation);
                return;
            }

            let sources = self.registry.enable();
            let handle = tokio::spawn(fan_out(sources, self.text, self.listener));
            let running = handle.map(|r| r.map_err(|e| e.to_string())).boxed().shared();
            *in_flight = running.clone();
            running
        };

        let _ = running.await;
    }
}

/// Filter every source with `text`; one failing source does not stop the others
async fn fan_out(
    sources: Vec<Arc<dyn CompletionSource>>,
    text: String,
    listener: Arc<dyn FilterListener>,
) {
    let passes = sources.iter().map(|source| {
        let text = text.as_str();
        let listener = &listener;
        async move {
            match source.filter(text).await {
                Ok(()) => listener.source_filtered(source.title()),
                Err(e) => log::warn!("{}", e),
            }
        }
    });

    future::join_all(passes).await;
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod scheduler_tests;
