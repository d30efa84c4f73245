//! The element trait stored in an [`ErrorStack`](crate::ErrorStack) and its
//! optional capabilities.
//!
//! Every value pushed onto a stack implements [`StackError`]. On top of plain
//! `Display`/`Debug` output, an element may opt into four capabilities by
//! overriding the matching probe method:
//!
//! | capability          | probe                   | used by                          |
//! |---------------------|-------------------------|----------------------------------|
//! | [`Equatable`]       | `as_equatable`          | `find`, `is`, sub-stack matching |
//! | [`Matchable`]       | `as_matchable`          | `find` when equality is missing  |
//! | [`Unwrappable`]     | `as_unwrappable`        | `find` descent into causes       |
//! | [`NestedFormatter`] | `as_nested_formatter`   | verbose rendering                |
//!
//! # Examples
//!
//! ```
//! use errstack::{ErrorStack, Matchable, StackError};
//! use core::fmt;
//!
//! #[derive(Debug)]
//! struct Timeout { after_ms: u64 }
//!
//! impl fmt::Display for Timeout {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         write!(f, "timed out after {}ms", self.after_ms)
//!     }
//! }
//!
//! impl Matchable for Timeout {
//!     fn matches(&self, other: &dyn StackError) -> bool {
//!         other.is::<Timeout>()
//!     }
//! }
//!
//! impl StackError for Timeout {
//!     fn as_matchable(&self) -> Option<&dyn Matchable> {
//!         Some(self)
//!     }
//! }
//!
//! let stack = ErrorStack::new().with(Timeout { after_ms: 30 }).with("fetch failed");
//! assert_eq!(stack.first(&Timeout { after_ms: 0 }), Some(1));
//! ```
use core::any::Any;
use core::fmt::{self, Debug, Display};

/// An error value that can live inside an [`ErrorStack`](crate::ErrorStack).
///
/// All probe methods default to `None`, so a bare implementation only
/// contributes its `Display` text. Use
/// [`impl_stack_error!`](crate::impl_stack_error) for the common cases.
pub trait StackError: Debug + Display + Any + Send + Sync + 'static {
    /// Structural equality, if this type supports it.
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        None
    }

    /// Custom equivalence used when structural equality is unavailable.
    fn as_matchable(&self) -> Option<&dyn Matchable> {
        None
    }

    /// Access to a wrapped inner cause.
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        None
    }

    /// Multi-line formatting used by the verbose renderer.
    fn as_nested_formatter(&self) -> Option<&dyn NestedFormatter> {
        None
    }
}

impl dyn StackError {
    /// Returns `true` if the concrete type of this error is `T`.
    #[inline]
    pub fn is<T: StackError>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts to the concrete type `T`.
    #[inline]
    pub fn downcast_ref<T: StackError>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }
}

/// Structural equality against another stack element.
///
/// Implemented for every `StackError + PartialEq` type. Values of a different
/// concrete type never compare equal.
pub trait Equatable {
    fn equals(&self, other: &dyn StackError) -> bool;
}

impl<T> Equatable for T
where
    T: StackError + PartialEq,
{
    #[inline]
    fn equals(&self, other: &dyn StackError) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}

/// Declares a custom equivalence between this error and a search target.
pub trait Matchable {
    fn matches(&self, other: &dyn StackError) -> bool;
}

/// Exposes the cause wrapped inside a single error value.
pub trait Unwrappable {
    fn unwrap_cause(&self) -> Option<&dyn StackError>;
}

/// Renders an error with its own internal structure.
pub trait NestedFormatter {
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Equality primitive shared by the matcher and sub-stack comparison.
///
/// Two elements are equal when they are the same value, or when `left` is
/// [`Equatable`] and reports equality. Returns `None` when `left` is a
/// different value and cannot be compared structurally.
pub(crate) fn compare(left: &dyn StackError, right: &dyn StackError) -> Option<bool> {
    let left_any: &dyn Any = left;
    let right_any: &dyn Any = right;
    if core::ptr::addr_eq(left, right) && left_any.type_id() == right_any.type_id() {
        return Some(true);
    }
    left.as_equatable().map(|eq| eq.equals(right))
}

/// Equality without any fallback.
#[inline]
pub(crate) fn equals(left: &dyn StackError, right: &dyn StackError) -> bool {
    compare(left, right).unwrap_or(false)
}
