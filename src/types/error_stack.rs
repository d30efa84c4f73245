//! The layered error container.
//!
//! An [`ErrorStack`] keeps its errors root-first: level 1 is the innermost
//! cause, the highest level is the most recent context. Elements are shared
//! behind [`SharedError`], so copying a stack never clones the errors
//! themselves.

use crate::traits::stack_error::equals;
use crate::traits::{Equatable, IntoStackEntry, NestedFormatter, StackError};
use crate::types::{ErrorVec, SharedError};
use core::fmt;

/// An ordered stack of errors, from root cause to outermost context.
///
/// # Examples
///
/// ```
/// use errstack::ErrorStack;
///
/// let mut stack = ErrorStack::new();
/// stack.push("disk full").push("open failed").push("request failed");
///
/// assert_eq!(stack.level(), 3);
/// assert_eq!(stack.root().map(|e| e.to_string()).as_deref(), Some("disk full"));
/// assert_eq!(stack.to_string(), "request failed: open failed: disk full");
/// ```
#[must_use]
#[derive(Clone, Default)]
pub struct ErrorStack {
    pub(crate) errors: ErrorVec<SharedError>,
}

impl ErrorStack {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Creates a stack from errors given root-first.
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoStackEntry,
    {
        errors.into_iter().map(IntoStackEntry::into_stack_entry).collect()
    }

    /// Converts a single error into a stack.
    ///
    /// An error that already is an `ErrorStack` is copied as-is; anything else
    /// becomes a one-element stack.
    pub fn convert(error: impl IntoStackEntry) -> Self {
        let entry = error.into_stack_entry();
        match entry.downcast_ref::<ErrorStack>() {
            Some(stack) => stack.copy(),
            None => {
                let mut stack = Self::new();
                stack.errors.push(entry);
                stack
            }
        }
    }

    /// Pushes one error at the outermost position.
    #[inline]
    pub fn push(&mut self, error: impl IntoStackEntry) -> &mut Self {
        self.errors.push(error.into_stack_entry());
        self
    }

    /// Pushes errors in iteration order; the last one becomes the outermost.
    pub fn push_all<I>(&mut self, errors: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoStackEntry,
    {
        self.errors.extend(errors.into_iter().map(IntoStackEntry::into_stack_entry));
        self
    }

    /// Owned variant of [`push`](Self::push) for builder-style construction.
    #[inline]
    pub fn with(mut self, error: impl IntoStackEntry) -> Self {
        self.push(error);
        self
    }

    /// Appends the contents of each item, flattening nested stacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use errstack::ErrorStack;
    ///
    /// let lower = ErrorStack::from_errors(["a", "b"]);
    /// let mut upper = ErrorStack::from_errors(["c"]);
    /// upper.attach([lower]).attach(["d"]);
    ///
    /// assert_eq!(upper.level(), 4);
    /// assert_eq!(upper.to_string(), "d: b: a: c");
    /// ```
    pub fn attach<I>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: IntoStackEntry,
    {
        for item in items {
            let entry = item.into_stack_entry();
            match entry.downcast_ref::<ErrorStack>() {
                Some(stack) => self.errors.extend(stack.errors.iter().cloned()),
                None => self.errors.push(entry),
            }
        }
        self
    }

    /// Removes up to `n` outermost errors, returned in removal order.
    ///
    /// Popping more errors than the stack holds returns only the available
    /// ones; the result is never padded with placeholder entries, so its
    /// length tells how many errors were actually removed.
    pub fn pop(&mut self, n: usize) -> ErrorVec<SharedError> {
        let keep = self.errors.len().saturating_sub(n);
        self.errors.drain(keep..).rev().collect()
    }

    /// Removes the outermost error.
    #[inline]
    pub fn pop_one(&mut self) -> Option<SharedError> {
        self.errors.pop()
    }

    /// Returns a stack sharing the same errors with its own sequence.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Number of errors in the stack.
    #[inline]
    pub fn level(&self) -> usize {
        self.errors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the error at the 1-based `level`.
    #[inline]
    pub fn get(&self, level: usize) -> Option<&SharedError> {
        level.checked_sub(1).and_then(|index| self.errors.get(index))
    }

    /// The innermost error (level 1).
    #[inline]
    pub fn root(&self) -> Option<&SharedError> {
        self.errors.first()
    }

    /// The outermost error (highest level).
    #[inline]
    pub fn last(&self) -> Option<&SharedError> {
        self.errors.last()
    }

    /// Iterates root-first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, SharedError> {
        self.errors.iter()
    }
}

impl PartialEq for ErrorStack {
    fn eq(&self, other: &Self) -> bool {
        self.errors.len() == other.errors.len()
            && self
                .errors
                .iter()
                .zip(other.errors.iter())
                .all(|(left, right)| equals(left.as_ref(), right.as_ref()))
    }
}

impl fmt::Debug for ErrorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.errors.iter()).finish()
    }
}

impl StackError for ErrorStack {
    #[inline]
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }

    #[inline]
    fn as_nested_formatter(&self) -> Option<&dyn NestedFormatter> {
        Some(self)
    }
}

impl core::error::Error for ErrorStack {}

impl FromIterator<SharedError> for ErrorStack {
    fn from_iter<I: IntoIterator<Item = SharedError>>(iter: I) -> Self {
        Self { errors: iter.into_iter().collect() }
    }
}

impl Extend<SharedError> for ErrorStack {
    fn extend<I: IntoIterator<Item = SharedError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ErrorStack {
    type Item = SharedError;
    type IntoIter = smallvec::IntoIter<[SharedError; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorStack {
    type Item = &'a SharedError;
    type IntoIter = core::slice::Iter<'a, SharedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<SharedError> for ErrorStack {
    #[inline]
    fn from(error: SharedError) -> Self {
        Self::convert(error)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ErrorStack {
    /// Serializes as a single string holding the plain rendering.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
