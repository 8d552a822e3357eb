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

//! In-flight handler accounting
//!
//! The only way to raise the count is [`ActiveCounter::acquire`], which hands
//! back an [`ActivePermit`]. Dropping the permit lowers the count again, so
//! every increment is paired with exactly one decrement whether the handler
//! returns, fails, panics, or its future is dropped half way.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

#[derive(Debug, Default)]
struct CounterState {
    active: AtomicUsize,
    idle: Notify,
}

/// Shared count of handlers currently running
///
/// Cloning shares the same count. Independent counters (e.g. one per test)
/// are created with [`ActiveCounter::new`].
#[derive(Clone, Debug, Default)]
pub struct ActiveCounter {
    inner: Arc<CounterState>,
}

impl ActiveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of permits currently held
    pub fn active(&self) -> usize {
        self.inner.active.load(Ordering::Acquire)
    }

    pub fn is_idle(&self) -> bool {
        self.active() == 0
    }

    /// Raises the count until the returned permit is dropped
    pub fn acquire(&self) -> ActivePermit {
        self.inner.active.fetch_add(1, Ordering::AcqRel);
        ActivePermit {
            counter: self.clone(),
        }
    }

    /// Resolves once no permit is held
    ///
    /// Returns immediately when already idle. A handler that never settles
    /// keeps this pending forever.
    pub async fn wait_idle(&self) {
        loop {
            let notified = self.inner.idle.notified();
            if self.is_idle() {
                return;
            }
            notified.await;
        }
    }

    #[allow(clippy::panic)]
    fn release(&self) {
        let previous = self
            .inner
            .active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1));

        match previous {
            Ok(1) => self.inner.idle.notify_waiters(),
            Ok(_) => {}
            Err(_) => {
                // Only reachable if a permit is released twice
                tracing::error!("Active handler count would go negative");
                panic!("active handler count underflow");
            }
        }
    }
}

/// Proof that one handler invocation is counted as active
#[must_use = "the handler is only counted while the permit is held"]
#[derive(Debug)]
pub struct ActivePermit {
    counter: ActiveCounter,
}

impl Drop for ActivePermit {
    fn drop(&mut self) {
        self.counter.release();
    }
}
