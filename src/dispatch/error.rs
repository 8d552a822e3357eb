use std::any::Any;
use thiserror::Error;

use crate::core::ParseError;

/// Errors raised while registering or running hotkey handlers.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The binding string could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A binding form is already registered by another sequence.
    #[error("Binding '{form}' is already bound by sequence '{existing}'")]
    AlreadyBound { form: String, existing: String },
    /// A key was pressed outside a tokio runtime.
    #[error("No tokio runtime available to run hotkey handlers")]
    NoRuntime,
    /// A handler panicked instead of returning an error.
    #[error("Handler panicked: {0}")]
    HandlerPanicked(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Extracts the message from a panic payload
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

pub(crate) fn panic_error(payload: Box<dyn Any + Send>) -> anyhow::Error {
    DispatchError::HandlerPanicked(panic_message(payload.as_ref())).into()
}
