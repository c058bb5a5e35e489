//! Common types and data structures

use std::time::Instant;

use crate::transform::TransformError;

/// Shared state for the submission in flight, written by the transform
/// task and polled by the UI thread every frame.
pub struct SubmitState {
    pub in_flight: bool,
    pub completion: Option<Result<String, TransformError>>,
}

impl Default for SubmitState {
    fn default() -> Self {
        Self {
            in_flight: false,
            completion: None,
        }
    }
}

/// Severity of a toast notification
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single toast: title + description, shown bottom-right with a timed fade
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            shown_at: Instant::now(),
        }
    }
}
