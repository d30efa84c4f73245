//! Extension methods for attaching stack context to `Result`s.
//!
//! # Examples
//!
//! ```
//! use errstack::prelude::*;
//!
//! fn open() -> Result<(), &'static str> {
//!     Err("permission denied")
//! }
//!
//! fn load() -> Result<(), ErrorStack> {
//!     open().context("opening config")?;
//!     Ok(())
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.to_string(), "opening config: permission denied");
//! ```
use crate::traits::IntoStackEntry;
use crate::types::ErrorStack;

/// Converts a failing `Result` into one carrying an [`ErrorStack`].
pub trait ResultExt<T> {
    /// Converts the error into a stack without adding context.
    fn stack_err(self) -> Result<T, ErrorStack>;

    /// Pushes `context` on top of the error.
    fn context<C>(self, context: C) -> Result<T, ErrorStack>
    where
        C: IntoStackEntry;

    /// Pushes lazily built context on top of the error.
    ///
    /// `f` only runs on the error path.
    fn context_with<C, F>(self, f: F) -> Result<T, ErrorStack>
    where
        C: IntoStackEntry,
        F: FnOnce() -> C;
}

impl<T, E: IntoStackEntry> ResultExt<T> for Result<T, E> {
    #[inline]
    fn stack_err(self) -> Result<T, ErrorStack> {
        self.map_err(ErrorStack::convert)
    }

    #[inline]
    fn context<C>(self, context: C) -> Result<T, ErrorStack>
    where
        C: IntoStackEntry,
    {
        self.map_err(|err| ErrorStack::convert(err).with(context))
    }

    #[inline]
    fn context_with<C, F>(self, f: F) -> Result<T, ErrorStack>
    where
        C: IntoStackEntry,
        F: FnOnce() -> C,
    {
        self.map_err(|err| ErrorStack::convert(err).with(f()))
    }
}
