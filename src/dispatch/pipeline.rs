//! Handler middleware composition
//!
//! Each stage takes a handler and returns a new one. Stages apply in the
//! order they are added, so the first stage sits closest to the user's
//! handler and the last one is outermost.
//!
//! The standard pipeline for a sequence is:
//! 1. Reset key history (multi-chord sequences only)
//! 2. Execution guard

use std::fmt;

use super::guard::ExecutionGuard;
use super::handler::Handler;
use super::reset::{reset_history_after, KeyHistory};
use crate::core::KeySequence;

/// A single pipeline stage
pub type Middleware = Box<dyn Fn(Handler) -> Handler + Send + Sync>;

/// Ordered list of middleware stages
#[derive(Default)]
pub struct HandlerPipeline {
    stages: Vec<Middleware>,
}

impl HandlerPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stage outside all previously added ones
    pub fn stage<F>(mut self, stage: F) -> Self
    where
        F: Fn(Handler) -> Handler + Send + Sync + 'static,
    {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Wraps `handler` in every stage
    pub fn apply(&self, handler: Handler) -> Handler {
        self.stages.iter().fold(handler, |inner, stage| stage(inner))
    }

    /// Standard pipeline for `sequence`: reset (if multi-chord), then guard
    pub fn for_sequence(sequence: &KeySequence, guard: &ExecutionGuard, history: &KeyHistory) -> Self {
        let mut pipeline = Self::new();

        if sequence.uses_multiple_chords() {
            let history = history.clone();
            pipeline = pipeline.stage(move |inner| reset_history_after(history.clone(), inner));
        }

        let guard = guard.clone();
        let sequence = sequence.clone();
        pipeline.stage(move |inner| guard.wrap(&sequence, inner))
    }
}

impl fmt::Debug for HandlerPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerPipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Fully wraps `handler` for registration under `sequence`
pub fn adapt_handler(
    sequence: &KeySequence,
    handler: Handler,
    guard: &ExecutionGuard,
    history: &KeyHistory,
) -> Handler {
    HandlerPipeline::for_sequence(sequence, guard, history).apply(handler)
}
