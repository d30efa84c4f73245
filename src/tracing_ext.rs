//! Tracing integration for error stacks.
//!
//! This module captures `tracing` span information as stack context and
//! emits error events for failed results.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! errstack = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt;

use tracing::Span;

use crate::traits::{Equatable, IntoStackEntry, StackError};
use crate::types::ErrorStack;

/// Stack element recording the span an error passed through.
///
/// Displays as `in span '<name>'`, or `in span 'unknown'` for a disabled span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanError {
    name: &'static str,
}

impl SpanError {
    /// Captures `span`'s name.
    pub fn new(span: &Span) -> Self {
        Self { name: span.metadata().map(|m| m.name()).unwrap_or("unknown") }
    }

    /// Captures the current span.
    pub fn current() -> Self {
        Self::new(&Span::current())
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Display for SpanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "in span '{}'", self.name)
    }
}

impl StackError for SpanError {
    #[inline]
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }
}

/// Extension trait adding span context and error events to stack results.
pub trait TracingResultExt<T> {
    /// Pushes the current span onto the error stack.
    fn in_current_span(self) -> Result<T, ErrorStack>;

    /// Pushes `span` onto the error stack.
    fn in_span(self, span: &Span) -> Result<T, ErrorStack>;

    /// Emits an `ERROR` event describing the stack and returns `self`.
    fn log_err(self) -> Self;
}

impl<T> TracingResultExt<T> for Result<T, ErrorStack> {
    fn in_current_span(self) -> Result<T, ErrorStack> {
        self.in_span(&Span::current())
    }

    fn in_span(self, span: &Span) -> Result<T, ErrorStack> {
        self.map_err(|stack| stack.with(SpanError::new(span)))
    }

    fn log_err(self) -> Self {
        if let Err(stack) = &self {
            tracing::error!(
                error = %stack,
                levels = stack.level(),
                root = stack.root().map(tracing::field::display),
                "error stack"
            );
        }
        self
    }
}

/// Builds a one-element stack from `error` with the current span on top.
pub fn instrument_error(error: impl IntoStackEntry) -> ErrorStack {
    ErrorStack::convert(error).with(SpanError::current())
}
