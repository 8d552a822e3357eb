//! Reporting of handler failures
//!
//! Handler errors never reach the listener. They are passed here instead,
//! together with the sequence that triggered the handler.

use std::fmt;

/// What was running when a handler failed
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HandlerContext {
    /// Canonical string of the bound sequence
    pub sequence: String,
    /// Binding form that matched, if the event came from a listener
    pub binding: Option<String>,
}

impl fmt::Display for HandlerContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.binding {
            Some(binding) if binding != &self.sequence => {
                write!(f, "{} (matched '{}')", self.sequence, binding)
            }
            _ => f.write_str(&self.sequence),
        }
    }
}

/// Receives errors that handlers did not recover from
pub trait ErrorReporter: Send + Sync {
    fn report(&self, error: &anyhow::Error, context: &HandlerContext);
}

/// Logs handler failures at error level
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, error: &anyhow::Error, context: &HandlerContext) {
        tracing::error!(
            sequence = %context.sequence,
            binding = ?context.binding,
            error = %format!("{error:#}"),
            "Hotkey handler failed"
        );
    }
}
