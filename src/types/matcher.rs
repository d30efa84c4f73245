//! Searching a stack for a cause and for another stack.
//!
//! Single-error search ([`ErrorStack::find`] and friends) tests each element
//! independently and descends through [`Unwrappable`](crate::Unwrappable)
//! causes, reporting a hit at the element's own level. Stack search
//! ([`ErrorStack::first_stack`] and friends) looks for a contiguous run of
//! equal elements.
use crate::traits::stack_error::{compare, equals};
use crate::traits::StackError;
use crate::types::{ErrorStack, Levels, WalkControl};
use core::convert::Infallible;

/// Returns `true` if `err`, or any cause reachable from it, matches `target`.
fn matches_target(mut err: &dyn StackError, target: &dyn StackError) -> bool {
    loop {
        let matched = match compare(err, target) {
            Some(equal) => equal,
            None => err.as_matchable().is_some_and(|m| m.matches(target)),
        };
        if matched {
            return true;
        }
        match err.as_unwrappable().and_then(|u| u.unwrap_cause()) {
            Some(inner) => err = inner,
            None => return false,
        }
    }
}

impl ErrorStack {
    /// Returns the levels at which `target` appears, root-first, up to `max`
    /// hits (`None` for no limit).
    ///
    /// An element matches when it equals `target`, when it is not
    /// [`Equatable`](crate::Equatable) and its
    /// [`Matchable`](crate::Matchable) implementation accepts `target`, or
    /// when one of its unwrapped causes does.
    ///
    /// # Examples
    ///
    /// ```
    /// use errstack::{ErrorStack, Message};
    ///
    /// let stack = ErrorStack::from_errors(["x", "a", "x", "b", "x"]);
    /// let target = Message::new("x");
    ///
    /// assert_eq!(stack.find(&target, Some(2)).as_slice(), &[1, 3]);
    /// assert_eq!(stack.find(&target, None).as_slice(), &[1, 3, 5]);
    /// ```
    pub fn find(&self, target: &dyn StackError, max: Option<usize>) -> Levels {
        let mut levels = Levels::new();
        if max == Some(0) {
            return levels;
        }

        let Ok(()) = self.walk(true, |index, err| -> WalkControl<Infallible> {
            if matches_target(err.as_ref(), target) {
                levels.push(index + 1);
                if max.is_some_and(|max| levels.len() >= max) {
                    return WalkControl::Stop;
                }
            }
            WalkControl::Continue
        });
        levels
    }

    /// Level of the first occurrence of `target`.
    #[inline]
    pub fn first(&self, target: &dyn StackError) -> Option<usize> {
        self.find(target, Some(1)).first().copied()
    }

    /// Reports whether `target` occurs anywhere in the stack.
    #[inline]
    pub fn has(&self, target: &dyn StackError) -> bool {
        self.first(target).is_some()
    }

    /// Reports whether the root error equals `target`.
    ///
    /// Unlike [`has`](Self::has) this neither unwraps causes nor consults
    /// [`Matchable`](crate::Matchable).
    #[inline]
    pub fn is(&self, target: &dyn StackError) -> bool {
        self.root().is_some_and(|root| equals(root.as_ref(), target))
    }

    /// Lowest level at which `sub`'s root aligns with a run of elements equal
    /// to the whole of `sub`.
    ///
    /// # Examples
    ///
    /// ```
    /// use errstack::ErrorStack;
    ///
    /// let outer = ErrorStack::from_errors(["a", "b", "c"]);
    /// let sub = ErrorStack::from_errors(["b", "c"]);
    ///
    /// assert_eq!(outer.first_stack(&sub), Some(2));
    /// assert!(outer.has_stack(&sub));
    /// assert!(!outer.is_stack(&sub));
    /// ```
    pub fn first_stack(&self, sub: &ErrorStack) -> Option<usize> {
        if sub.is_empty() || sub.level() > self.level() {
            return None;
        }

        let mut found = None;
        let Ok(()) = self.walk(true, |index, _| -> WalkControl<Infallible> {
            if self.level() - index < sub.level() {
                return WalkControl::Stop;
            }
            if self.aligns_at(index, sub) {
                found = Some(index + 1);
                return WalkControl::Stop;
            }
            WalkControl::Continue
        });
        found
    }

    /// Reports whether `sub` occurs as a contiguous run.
    #[inline]
    pub fn has_stack(&self, sub: &ErrorStack) -> bool {
        self.first_stack(sub).is_some()
    }

    /// Reports whether `sub` matches this stack starting at the root.
    #[inline]
    pub fn is_stack(&self, sub: &ErrorStack) -> bool {
        !sub.is_empty() && self.aligns_at(0, sub)
    }

    /// Compares `sub` against the elements starting at 0-based `start`.
    fn aligns_at(&self, start: usize, sub: &ErrorStack) -> bool {
        match self.errors.get(start..start + sub.level()) {
            Some(window) => window
                .iter()
                .zip(sub.errors.iter())
                .all(|(outer, inner)| equals(outer.as_ref(), inner.as_ref())),
            None => false,
        }
    }
}
