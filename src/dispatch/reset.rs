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

//! Rolling key history and the reset stage
//!
//! A listener matches multi-chord sequences against a rolling window of
//! recent chords. Left alone, pressing `g g g` fires `g g` twice because
//! the second and third presses form a new window. Clearing the history
//! once a multi-chord handler settles prevents that.

use futures_util::future::{self, FutureExt};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::handler::{invoke_caught, Handler, HandlerFuture};
use crate::core::{KeyChord, KeyEvent};

#[derive(Debug)]
struct HistoryBuffer {
    chords: VecDeque<KeyChord>,
    capacity: usize,
}

/// Recent chords, oldest first, shared between a listener and its handlers
#[derive(Clone, Debug)]
pub struct KeyHistory {
    inner: Arc<Mutex<HistoryBuffer>>,
}

impl KeyHistory {
    /// Creates an empty history holding at most `capacity` chords (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(HistoryBuffer {
                chords: VecDeque::with_capacity(capacity),
                capacity,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HistoryBuffer> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records a chord, evicting the oldest when full
    pub fn push(&self, chord: &KeyChord) {
        let mut buffer = self.lock();
        if buffer.chords.len() == buffer.capacity {
            buffer.chords.pop_front();
        }
        buffer.chords.push_back(chord.clone());
    }

    /// The last `n` chords as received, joined by a space
    ///
    /// Returns `None` unless at least `n` chords are recorded.
    pub fn trailing(&self, n: usize) -> Option<String> {
        self.window(n, KeyChord::to_string)
    }

    /// Like [`trailing`](Self::trailing), with every chord capital-normalized
    pub fn trailing_normalized(&self, n: usize) -> Option<String> {
        self.window(n, |chord| chord.normalize_capital().to_string())
    }

    fn window(&self, n: usize, render: impl Fn(&KeyChord) -> String) -> Option<String> {
        let buffer = self.lock();
        if n == 0 || n > buffer.chords.len() {
            return None;
        }
        let start = buffer.chords.len() - n;
        Some(
            buffer
                .chords
                .range(start..)
                .map(render)
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    pub fn set_capacity(&self, capacity: usize) {
        let mut buffer = self.lock();
        buffer.capacity = capacity.max(1);
        while buffer.chords.len() > buffer.capacity {
            buffer.chords.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    pub fn len(&self) -> usize {
        self.lock().chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().chords.is_empty()
    }

    pub fn clear(&self) {
        self.lock().chords.clear();
    }

    /// Copy of the recorded chords, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().chords.iter().map(KeyChord::to_string).collect()
    }
}

impl Default for KeyHistory {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Clears `history` after each invocation of `handler` settles
///
/// The clear runs on success, error and panic alike, and always after the
/// inner handler's future has completed. A handler that is already done on
/// its first poll has the history cleared before this call returns, so the
/// next key press never lands in the completed window. The inner outcome is
/// passed on unchanged (panics as `HandlerPanicked` errors).
pub fn reset_history_after(history: KeyHistory, handler: Handler) -> Handler {
    Arc::new(move |event: KeyEvent| -> HandlerFuture {
        let mut pending = invoke_caught(&handler, event);

        if let Some(outcome) = (&mut pending).now_or_never() {
            clear_history(&history);
            return future::ready(outcome).boxed();
        }

        let history = history.clone();
        async move {
            let outcome = pending.await;
            clear_history(&history);
            outcome
        }
        .boxed()
    })
}

fn clear_history(history: &KeyHistory) {
    history.clear();
    tracing::debug!("Cleared key history after multi-chord sequence");
}
