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

//! Handler dispatch
//!
//! Decides whether a bound handler runs, is dropped, or overlaps with
//! others:
//! - `counter`: in-flight handler count with RAII permits
//! - `guard`: suppression of simulated keys while handlers run
//! - `reset`: rolling key history and its post-handler reset
//! - `pipeline`: middleware composition (reset inside, guard outside)
//! - `listener`: a reference host listener built on the above
//!
//! # Example
//!
//! ```
//! use hotkey_dispatch::core::SimulatedKeySet;
//! use hotkey_dispatch::dispatch::{sync_handler, ExecutionGuard, HotkeyListener};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut listener = HotkeyListener::new(ExecutionGuard::new(SimulatedKeySet::default()));
//! listener.register("g g", sync_handler(|_| Ok(())))?;
//!
//! assert!(listener.press_str("g")?.is_none());
//! if let Some(done) = listener.press_str("g")? {
//!     done.await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod counter;
pub mod error;
pub mod guard;
pub mod handler;
pub mod listener;
pub mod pipeline;
pub mod report;
pub mod reset;

pub use counter::{ActiveCounter, ActivePermit};
pub use error::{DispatchError, DispatchResult};
pub use guard::ExecutionGuard;
pub use handler::{handler_fn, sync_handler, Handler, HandlerFuture};
pub use listener::HotkeyListener;
pub use pipeline::{adapt_handler, HandlerPipeline, Middleware};
pub use report::{ErrorReporter, HandlerContext, TracingReporter};
pub use reset::{reset_history_after, KeyHistory};

#[cfg(test)]
mod tests;
