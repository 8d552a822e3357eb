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

//! Rolling-window hotkey listener
//!
//! Registers handlers under the literal binding forms of their sequences
//! and matches incoming chords against a rolling window of recent presses,
//! preferring the longest registered sequence that matches.
//!
//! Handlers are invoked as soon as a chord completes a match and then run
//! as a task on the current tokio runtime. `press` returns a completion
//! signal for that task; dropping it does not stop the handler. Nothing
//! queues behind a running handler.
//!
//! Single chords are looked up as received, so both `G` and `shift+g` reach
//! a `G` binding. Longer windows are looked up capital-normalized, matching
//! the forms multi-chord sequences register under.

use futures_util::future::FutureExt;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;

use super::error::{DispatchError, DispatchResult};
use super::guard::ExecutionGuard;
use super::handler::{Handler, HandlerFuture};
use super::pipeline::adapt_handler;
use super::reset::KeyHistory;
use crate::core::{KeyChord, KeyEvent, KeySequence};

struct Registration {
    sequence: KeySequence,
    handler: Handler,
}

/// Host listener that owns registrations and the key history
pub struct HotkeyListener {
    guard: ExecutionGuard,
    history: KeyHistory,
    bindings: HashMap<String, Registration>,
    longest: usize,
}

impl HotkeyListener {
    pub fn new(guard: ExecutionGuard) -> Self {
        Self {
            guard,
            history: KeyHistory::default(),
            bindings: HashMap::new(),
            longest: 0,
        }
    }

    pub fn guard(&self) -> &ExecutionGuard {
        &self.guard
    }

    pub fn history(&self) -> &KeyHistory {
        &self.history
    }

    /// Parses `sequence` and registers `handler` under all its binding forms
    ///
    /// Returns the registered forms.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::Parse` for a malformed sequence and
    /// `DispatchError::AlreadyBound` if any form is taken. Nothing is
    /// registered on error.
    pub fn register(&mut self, sequence: &str, handler: Handler) -> DispatchResult<Vec<String>> {
        let sequence: KeySequence = sequence.parse()?;
        self.register_sequence(sequence, handler)
    }

    /// Registers an already parsed sequence
    pub fn register_sequence(
        &mut self,
        sequence: KeySequence,
        handler: Handler,
    ) -> DispatchResult<Vec<String>> {
        let forms = sequence.to_binding_forms();

        if let Some((form, existing)) = forms
            .iter()
            .find_map(|form| self.bindings.get(form).map(|r| (form, &r.sequence)))
        {
            return Err(DispatchError::AlreadyBound {
                form: form.clone(),
                existing: existing.to_string(),
            });
        }

        let wrapped = adapt_handler(&sequence, handler, &self.guard, &self.history);

        for form in &forms {
            self.bindings.insert(
                form.clone(),
                Registration {
                    sequence: sequence.clone(),
                    handler: Arc::clone(&wrapped),
                },
            );
        }

        self.longest = self.longest.max(sequence.len());
        self.history.set_capacity(self.longest);

        tracing::info!(
            sequence = %sequence,
            forms = ?forms,
            "Registered hotkey"
        );

        Ok(forms)
    }

    /// Removes every form registered for `sequence`
    ///
    /// Returns false if the sequence was not registered.
    pub fn unregister(&mut self, sequence: &str) -> DispatchResult<bool> {
        let sequence: KeySequence = sequence.parse()?;
        let before = self.bindings.len();
        self.bindings.retain(|_, r| r.sequence != sequence);
        let removed = self.bindings.len() != before;

        if removed {
            self.longest = self
                .bindings
                .values()
                .map(|r| r.sequence.len())
                .max()
                .unwrap_or(0);
            self.history.set_capacity(self.longest);
            self.history.clear();
            tracing::info!(sequence = %sequence, "Unregistered hotkey");
        }

        Ok(removed)
    }

    /// Registered binding forms, sorted
    pub fn bound_forms(&self) -> Vec<&str> {
        let mut forms: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        forms.sort_unstable();
        forms
    }

    pub fn is_bound(&self, form: &str) -> bool {
        self.bindings.contains_key(form)
    }

    /// Feeds one chord into the listener
    ///
    /// Returns the matched handler's completion, or `None` if the current
    /// window matches nothing. The handler runs whether or not the returned
    /// future is polled.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::NoRuntime` when called outside a tokio
    /// runtime. The chord is not recorded in that case.
    pub fn press(&self, chord: KeyChord) -> DispatchResult<Option<HandlerFuture>> {
        let runtime = Handle::try_current().map_err(|_| DispatchError::NoRuntime)?;
        self.history.push(&chord);

        let window = self.history.len().min(self.longest);
        for n in (1..=window).rev() {
            let candidate = if n == 1 {
                self.history.trailing(n)
            } else {
                self.history.trailing_normalized(n)
            };
            let Some(candidate) = candidate else {
                continue;
            };

            if let Some(registration) = self.bindings.get(&candidate) {
                tracing::debug!(binding = %candidate, "Hotkey matched");
                let event = KeyEvent::new(chord).with_binding(candidate);
                let running = runtime.spawn((registration.handler)(event));

                return Ok(Some(
                    running
                        .map(|joined| joined.unwrap_or_else(|error| Err(error.into())))
                        .boxed(),
                ));
            }
        }

        Ok(None)
    }

    /// Parses `chord` and feeds it into the listener
    pub fn press_str(&self, chord: &str) -> DispatchResult<Option<HandlerFuture>> {
        let chord: KeyChord = chord.parse()?;
        self.press(chord)
    }
}

impl fmt::Debug for HotkeyListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyListener")
            .field("guard", &self.guard)
            .field("forms", &self.bound_forms())
            .field("history", &self.history.snapshot())
            .finish()
    }
}
