//! Error stack types and utilities.
//!
//! This module provides the [`ErrorStack`] container together with its
//! traversal, matching and rendering machinery.
//!
//! # Examples
//!
//! ```
//! use errstack::{ErrorStack, Message};
//!
//! let stack = ErrorStack::new()
//!     .with("disk full")
//!     .with("open failed")
//!     .with("request failed");
//!
//! assert!(stack.has(&Message::new("open failed")));
//! println!("{}", stack);
//! // Output: request failed: open failed: disk full
//! ```
use crate::traits::StackError;
use alloc_type::Arc;
use smallvec::SmallVec;

pub mod alloc_type;
pub mod error_formatter;
pub mod error_stack;
pub mod matcher;
pub mod message;
pub mod walk;

pub use error_formatter::*;
pub use error_stack::*;
pub use message::*;
pub use walk::*;

/// SmallVec-backed collection used for stack storage and match results.
///
/// Uses inline storage for up to 4 elements to avoid heap allocations
/// for the shallow stacks most call sites build.
pub type ErrorVec<E> = SmallVec<[E; 4]>;

/// A reference-counted stack element.
pub type SharedError = Arc<dyn StackError>;

/// 1-based levels reported by [`ErrorStack::find`].
pub type Levels = ErrorVec<usize>;
