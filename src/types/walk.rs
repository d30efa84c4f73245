//! Bidirectional traversal over an [`ErrorStack`].
//!
//! Every search and rendering routine in this crate is built on
//! [`ErrorStack::walk`]. The visitor decides after each element whether to
//! keep going, stop quietly, or abort with a failure.
//!
//! # Examples
//!
//! ```
//! use errstack::{Direction, ErrorStack, WalkControl};
//!
//! let stack = ErrorStack::from_errors(["a", "b", "c"]);
//!
//! let mut seen = Vec::new();
//! let outcome: Result<(), ()> = stack.walk(Direction::LastFirst, |index, err| {
//!     seen.push((index, err.to_string()));
//!     if index == 1 { WalkControl::Stop } else { WalkControl::Continue }
//! });
//!
//! assert!(outcome.is_ok());
//! assert_eq!(seen, vec![(2, "c".to_string()), (1, "b".to_string())]);
//! ```
use crate::types::{ErrorStack, SharedError};

/// Order in which [`ErrorStack::walk`] visits elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Root (level 1) to last.
    RootFirst,
    /// Last to root.
    LastFirst,
}

impl From<bool> for Direction {
    /// `true` walks from the root, `false` from the last error.
    #[inline]
    fn from(from_root: bool) -> Self {
        if from_root {
            Self::RootFirst
        } else {
            Self::LastFirst
        }
    }
}

/// Outcome of a single visit during a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkControl<E> {
    /// Visit the next element.
    Continue,
    /// End the walk successfully.
    Stop,
    /// End the walk and return `Err(E)` to the caller.
    Fail(E),
}

impl<E> From<Result<(), E>> for WalkControl<E> {
    #[inline]
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Continue,
            Err(err) => Self::Fail(err),
        }
    }
}

impl ErrorStack {
    /// Visits every element in `direction`, passing its 0-based index.
    ///
    /// Returns `Ok(())` when the walk completes or the visitor returns
    /// [`WalkControl::Stop`], and `Err(e)` when it returns
    /// [`WalkControl::Fail`].
    pub fn walk<E, F>(&self, direction: impl Into<Direction>, mut visit: F) -> Result<(), E>
    where
        F: FnMut(usize, &SharedError) -> WalkControl<E>,
    {
        let mut step = |index: usize, err: &SharedError| match visit(index, err) {
            WalkControl::Continue => None,
            WalkControl::Stop => Some(Ok(())),
            WalkControl::Fail(err) => Some(Err(err)),
        };

        let outcome = match direction.into() {
            Direction::RootFirst => {
                self.errors.iter().enumerate().find_map(|(index, err)| step(index, err))
            }
            Direction::LastFirst => {
                self.errors.iter().enumerate().rev().find_map(|(index, err)| step(index, err))
            }
        };
        outcome.unwrap_or(Ok(()))
    }
}
