// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/dispatch/guard.rs
//!
//! Re-entrancy guard for hotkey handlers
//!
//! When a handler simulates a key press to trigger native behaviour (for
//! example sending `Escape` to close a popup), that synthetic event must
//! not run our own `Escape` hotkey. The guard tracks how many handlers are
//! in flight and drops events for sequences in the [`SimulatedKeySet`]
//! while the count is above zero.
//!
//! All other hotkeys are tracked but never blocked, so rapid repeated
//! presses may overlap with each other and with themselves.
//!
//! # State machine
//! ```text
//! NOT_RUNNING --event--> RUNNING (count + 1) --settled--> NOT_RUNNING (count - 1)
//!      |
//!      +--simulated sequence while count > 0--> DROPPED (no call, no change)
//! ```
//!
//! The suppression check and the increment both happen when the wrapped
//! handler is called, not when its future is first polled. A handler that
//! synthesizes a key before its first `.await` therefore already suppresses
//! it.

use futures_util::future::{self, FutureExt};
use std::fmt;
use std::sync::Arc;

use super::counter::ActiveCounter;
use super::handler::{invoke_caught, Handler, HandlerFuture};
use super::report::{ErrorReporter, HandlerContext, TracingReporter};
use crate::core::{KeyEvent, KeySequence, SimulatedKeySet};

/// Wraps handlers so simulated keys cannot re-enter them
///
/// Cloning shares the in-flight count, so every handler wrapped by clones
/// of one guard sees the same state.
#[derive(Clone)]
pub struct ExecutionGuard {
    counter: ActiveCounter,
    simulated: SimulatedKeySet,
    reporter: Arc<dyn ErrorReporter>,
}

impl ExecutionGuard {
    /// Creates a guard with its own counter, logging failures via `tracing`
    pub fn new(simulated: SimulatedKeySet) -> Self {
        Self {
            counter: ActiveCounter::new(),
            simulated,
            reporter: Arc::new(TracingReporter),
        }
    }

    /// Replaces the error reporter
    pub fn with_reporter(mut self, reporter: Arc<dyn ErrorReporter>) -> Self {
        self.reporter = reporter;
        self
    }

    /// Shares an existing counter instead of the guard's own
    pub fn with_counter(mut self, counter: ActiveCounter) -> Self {
        self.counter = counter;
        self
    }

    pub fn counter(&self) -> &ActiveCounter {
        &self.counter
    }

    pub fn simulated(&self) -> &SimulatedKeySet {
        &self.simulated
    }

    /// Number of tracked handlers currently running
    pub fn active_count(&self) -> usize {
        self.counter.active()
    }

    /// Resolves once every tracked handler has settled
    pub async fn wait_idle(&self) {
        self.counter.wait_idle().await
    }

    /// Wraps `handler`, which is bound to `sequence`
    ///
    /// The returned handler always resolves to `Ok(())`. Failures of the
    /// inner handler, including panics, go to the reporter.
    pub fn wrap(&self, sequence: &KeySequence, handler: Handler) -> Handler {
        let suppressible = sequence.might_be_simulated(&self.simulated);
        let label = sequence.to_string();
        let counter = self.counter.clone();
        let reporter = Arc::clone(&self.reporter);

        Arc::new(move |event: KeyEvent| -> HandlerFuture {
            if suppressible && !counter.is_idle() {
                tracing::debug!(
                    sequence = %label,
                    active = counter.active(),
                    "Dropping key event that may have been simulated"
                );
                return future::ready(Ok(())).boxed();
            }

            track(&counter, &reporter, &label, &handler, event)
        })
    }
}

/// Runs `handler` while holding a permit on `counter`
fn track(
    counter: &ActiveCounter,
    reporter: &Arc<dyn ErrorReporter>,
    label: &str,
    handler: &Handler,
    event: KeyEvent,
) -> HandlerFuture {
    let permit = counter.acquire();
    let reporter = Arc::clone(reporter);
    let context = HandlerContext {
        sequence: label.to_string(),
        binding: event.binding.clone(),
    };

    let pending = invoke_caught(handler, event);

    async move {
        if let Err(error) = pending.await {
            reporter.report(&error, &context);
        }
        drop(permit);
        Ok(())
    }
    .boxed()
}

impl fmt::Debug for ExecutionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionGuard")
            .field("active", &self.counter.active())
            .field("simulated", &self.simulated)
            .finish_non_exhaustive()
    }
}

impl Default for ExecutionGuard {
    fn default() -> Self {
        Self::new(SimulatedKeySet::default())
    }
}
