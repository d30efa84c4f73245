//! Layered error stacks: push context onto an error, search the stack for a
//! cause, compare stacks, and render them in several forms.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `errstack::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Building a Stack
//!
//! ```
//! use errstack::ErrorStack;
//!
//! let stack = ErrorStack::new()
//!     .with("disk full")
//!     .with("open failed")
//!     .with("request failed");
//!
//! assert_eq!(stack.level(), 3);
//! assert_eq!(stack.to_string(), "request failed: open failed: disk full");
//! ```
//!
//! ## Searching for a Cause
//!
//! ```
//! use errstack::{ErrorStack, Message, Wrapped};
//!
//! let stack = ErrorStack::new()
//!     .with(Wrapped::new("open failed", "disk full"))
//!     .with("request failed");
//!
//! // The cause is wrapped inside level 1.
//! assert_eq!(stack.first(&Message::new("disk full")), Some(1));
//! assert!(!stack.is(&Message::new("disk full")));
//! ```
//!
//! ## Comparing Stacks
//!
//! ```
//! use errstack::stack;
//!
//! let outer = stack!["a", "b", "c"];
//! assert_eq!(outer.first_stack(&stack!["b", "c"]), Some(2));
//! assert!(outer.is_stack(&stack!["a", "b"]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Stack construction macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Element traits and conversions
pub mod traits;
/// ErrorStack and its walking, matching and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    Direction, ErrorStack, ErrorVec, Levels, Message, SharedError, StackFormatBuilder,
    StackFormatConfig, StackFormatter, Verb, WalkControl, Wrapped,
};
