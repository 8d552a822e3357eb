//! Dispatch module tests
//!
//! Contains test suites for handler dispatch:
//! - Execution guard (suppression, overlap, error accounting)
//! - Key history and the reset stage
//! - Pipeline composition
//! - Listener matching end to end

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::{KeyChord, KeyEvent, KeySequence, SimulatedKeySet};
use crate::dispatch::{ErrorReporter, ExecutionGuard, HandlerContext};

#[cfg(test)]
mod pipeline_tests;

/// Reporter that keeps every report for inspection
#[derive(Default)]
pub(super) struct RecordingReporter {
    reports: Mutex<Vec<(String, HandlerContext)>>,
}

impl RecordingReporter {
    pub(super) fn reports(&self) -> Vec<(String, HandlerContext)> {
        self.reports.lock().unwrap().clone()
    }
}

impl ErrorReporter for RecordingReporter {
    fn report(&self, error: &anyhow::Error, context: &HandlerContext) {
        self.reports
            .lock()
            .unwrap()
            .push((error.to_string(), context.clone()));
    }
}

/// Guard with the default simulated set and a recording reporter
pub(super) fn recording_guard() -> (ExecutionGuard, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let guard = ExecutionGuard::new(SimulatedKeySet::default()).with_reporter(reporter.clone());
    (guard, reporter)
}

pub(super) fn seq(s: &str) -> KeySequence {
    s.parse().unwrap()
}

pub(super) fn event(s: &str) -> KeyEvent {
    KeyEvent::new(s.parse::<KeyChord>().unwrap())
}

/// Shared call counter
#[derive(Clone, Default)]
pub(super) struct Calls(Arc<AtomicUsize>);

impl Calls {
    pub(super) fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub(super) fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
