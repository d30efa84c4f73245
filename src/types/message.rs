//! Ready-made stack elements.
//!
//! [`Message`] is the element created when a plain string is pushed onto a
//! stack. [`Wrapped`] layers a message over an existing cause so that the
//! matcher can descend into it.
use crate::traits::{Equatable, IntoStackEntry, StackError, Unwrappable};
use crate::types::alloc_type::{Arc, Cow, String};
use crate::types::SharedError;
use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A string-backed error value compared by its text.
///
/// # Examples
///
/// ```
/// use errstack::{ErrorStack, Message};
///
/// let stack = ErrorStack::new().with("disk full").with("open failed");
/// assert_eq!(stack.first(&Message::new("disk full")), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Message(Cow<'static, str>);

impl Message {
    #[inline]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// Returns the message text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Message {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StackError for Message {
    #[inline]
    fn as_equatable(&self) -> Option<&dyn Equatable> {
        Some(self)
    }
}

impl From<&'static str> for Message {
    #[inline]
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    #[inline]
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// A message wrapping an inner cause inside a single stack element.
///
/// Displays as `"{message}: {cause}"`. Searching a stack for the cause finds
/// it at the level of the `Wrapped` element.
///
/// # Examples
///
/// ```
/// use errstack::{ErrorStack, Message, Wrapped};
///
/// let wrapped = Wrapped::new("open failed", "permission denied");
/// assert_eq!(wrapped.to_string(), "open failed: permission denied");
///
/// let stack = ErrorStack::new().with("startup").with(wrapped);
/// assert_eq!(stack.first(&Message::new("permission denied")), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct Wrapped {
    message: Message,
    cause: SharedError,
}

impl Wrapped {
    pub fn new(message: impl Into<Message>, cause: impl IntoStackEntry) -> Self {
        Self { message: message.into(), cause: cause.into_stack_entry() }
    }

    #[inline]
    pub fn message(&self) -> &Message {
        &self.message
    }

    #[inline]
    pub fn cause(&self) -> &SharedError {
        &self.cause
    }
}

impl Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.cause)
    }
}

impl Unwrappable for Wrapped {
    #[inline]
    fn unwrap_cause(&self) -> Option<&dyn StackError> {
        Some(Arc::as_ref(&self.cause))
    }
}

impl StackError for Wrapped {
    #[inline]
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        Some(self)
    }
}
