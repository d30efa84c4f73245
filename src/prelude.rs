//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use errstack::prelude::*;
//!
//! let stack = stack!["disk full", "open failed"];
//! assert!(stack.has(&Message::new("disk full")));
//! ```

// Macros
pub use crate::{impl_stack_error, stack};

// Core types
pub use crate::types::{Direction, ErrorStack, Message, SharedError, Verb, WalkControl, Wrapped};

// Traits
pub use crate::traits::{
    Equatable, IntoStackEntry, Matchable, NestedFormatter, ResultExt, StackError, Unwrappable,
};

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{SpanError, TracingResultExt};
