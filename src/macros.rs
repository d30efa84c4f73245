/// Builds an [`ErrorStack`](crate::ErrorStack) from errors listed root-first.
///
/// # Examples
///
/// ```
/// use errstack::stack;
///
/// let s = stack!["disk full", "open failed"];
/// assert_eq!(s.to_string(), "open failed: disk full");
/// assert!(stack![].is_empty());
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::ErrorStack::new()
    };
    ($($err:expr),+ $(,)?) => {{
        let mut stack = $crate::ErrorStack::new();
        $( stack.push($err); )+
        stack
    }};
}

/// Implements [`StackError`](crate::StackError) for a `Display + Debug` type.
///
/// Add `eq` to opt the type into structural equality through its
/// `PartialEq` implementation.
///
/// # Examples
///
/// ```
/// use errstack::{impl_stack_error, ErrorStack};
///
/// #[derive(Debug, PartialEq)]
/// struct NotFound(u32);
///
/// impl core::fmt::Display for NotFound {
///     fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
///         write!(f, "record {} not found", self.0)
///     }
/// }
///
/// impl_stack_error!(NotFound, eq);
///
/// let stack = ErrorStack::new().with(NotFound(7)).with("lookup failed");
/// assert!(stack.is(&NotFound(7)));
/// ```
#[macro_export]
macro_rules! impl_stack_error {
    ($ty:ty) => {
        impl $crate::StackError for $ty {}
    };
    ($ty:ty, eq) => {
        impl $crate::StackError for $ty {
            #[inline]
            fn as_equatable(&self) -> ::core::option::Option<&dyn $crate::Equatable> {
                ::core::option::Option::Some(self)
            }
        }
    };
}
