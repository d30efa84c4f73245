//! Conversion of values into stack elements.
//!
//! # Implementations
//!
//! - any [`StackError`] value is moved behind a fresh [`SharedError`]
//! - [`SharedError`] is taken as-is, so the same value can sit in several stacks
//! - `&'static str`, `String` and `Cow<'static, str>` become a [`Message`]
//!
//! # Examples
//!
//! ```
//! use errstack::{IntoStackEntry, Message};
//!
//! let entry = "disk full".into_stack_entry();
//! assert_eq!(entry.to_string(), "disk full");
//! assert!(entry.is::<Message>());
//! ```
use crate::traits::StackError;
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::{Message, SharedError};

/// Converts a value into a [`SharedError`] ready to be pushed.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be pushed onto an error stack",
    label = "this type does not implement `StackError`",
    note = "implement `StackError` manually or use `impl_stack_error!({Self})`"
)]
pub trait IntoStackEntry {
    fn into_stack_entry(self) -> SharedError;
}

impl<T: StackError> IntoStackEntry for T {
    #[inline]
    fn into_stack_entry(self) -> SharedError {
        Arc::new(self)
    }
}

impl IntoStackEntry for SharedError {
    #[inline]
    fn into_stack_entry(self) -> SharedError {
        self
    }
}

impl IntoStackEntry for &SharedError {
    #[inline]
    fn into_stack_entry(self) -> SharedError {
        Arc::clone(self)
    }
}

impl IntoStackEntry for &'static str {
    #[inline]
    fn into_stack_entry(self) -> SharedError {
        Arc::new(Message::new(self))
    }
}

impl IntoStackEntry for String {
    #[inline]
    fn into_stack_entry(self) -> SharedError {
        Arc::new(Message::new(self))
    }
}

impl IntoStackEntry for Cow<'static, str> {
    #[inline]
    fn into_stack_entry(self) -> SharedError {
        Arc::new(Message::new(self))
    }
}
