//! Handler type and constructors
//!
//! A handler is any function of a [`KeyEvent`] that returns a boxed future.
//! Synchronous handlers are wrapped in an already completed future so every
//! stage of the pipeline can await them the same way.

use futures_util::future::{self, BoxFuture, FutureExt};
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use super::error::panic_error;
use crate::core::KeyEvent;

/// Completion of one handler invocation
pub type HandlerFuture = BoxFuture<'static, anyhow::Result<()>>;

/// Function run when a key sequence matches
pub type Handler = Arc<dyn Fn(KeyEvent) -> HandlerFuture + Send + Sync>;

/// Wraps an async function as a [`Handler`]
///
/// # Example
/// ```
/// use hotkey_dispatch::dispatch::handler_fn;
///
/// let handler = handler_fn(|event| async move {
///     println!("pressed {}", event.chord);
///     Ok(())
/// });
/// # let _ = handler;
/// ```
pub fn handler_fn<F, Fut>(f: F) -> Handler
where
    F: Fn(KeyEvent) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    Arc::new(move |event: KeyEvent| f(event).boxed())
}

/// Wraps a synchronous function as a [`Handler`]
pub fn sync_handler<F>(f: F) -> Handler
where
    F: Fn(KeyEvent) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(move |event: KeyEvent| future::ready(f(event)).boxed())
}

/// Calls `handler` immediately and returns its completion
///
/// Panics, whether raised by the call itself or while the returned future
/// is polled, come back as a `HandlerPanicked` error.
pub(crate) fn invoke_caught(handler: &Handler, event: KeyEvent) -> HandlerFuture {
    match panic::catch_unwind(AssertUnwindSafe(|| handler(event))) {
        Ok(pending) => AssertUnwindSafe(pending)
            .catch_unwind()
            .map(|outcome| outcome.unwrap_or_else(|payload| Err(panic_error(payload))))
            .boxed(),
        Err(payload) => future::ready(Err(panic_error(payload))).boxed(),
    }
}
