//! Error stack rendering.
//!
//! Stacks render outermost error first, root last. Three verbs are built in:
//!
//! - [`Verb::Plain`]: each element's `Display`, joined by `": "` (`{}`)
//! - [`Verb::Quoted`]: each element's text as a quoted string, joined by `": "`;
//!   nested stacks quote each of their own elements
//! - [`Verb::Verbose`]: each element's [`NestedFormatter`] output when it has
//!   one, joined by newlines (`{:#}`)
//!
//! # Examples
//!
//! ```
//! use errstack::{ErrorStack, Verb};
//!
//! let inner = ErrorStack::from_errors(["disk full", "write failed"]);
//! let stack = ErrorStack::new().with(inner).with("save failed");
//!
//! assert_eq!(stack.to_string(), "save failed: write failed: disk full");
//! assert_eq!(format!("{:#}", stack), "save failed\nwrite failed\ndisk full");
//! assert_eq!(stack.render(Verb::Quoted), r#""save failed": "write failed": "disk full""#);
//! ```

use crate::traits::{NestedFormatter, StackError};
use crate::types::alloc_type::String;
use crate::types::{Direction, ErrorStack, WalkControl};
use core::fmt::{self, Display, Write};

/// Output form selected when rendering a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Verb {
    #[default]
    Plain,
    Quoted,
    Verbose,
}

impl Verb {
    /// Separator placed between elements for this verb.
    #[inline]
    pub const fn separator(self) -> &'static str {
        match self {
            Verb::Plain | Verb::Quoted => ": ",
            Verb::Verbose => "\n",
        }
    }
}

/// Trait for customizing stack formatting.
pub trait StackFormatter {
    fn separator(&self) -> &str {
        ": "
    }

    fn format_item(&self, f: &mut fmt::Formatter<'_>, err: &dyn StackError) -> fmt::Result {
        Display::fmt(err, f)
    }
}

/// Configuration-based stack formatter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StackFormatConfig {
    pub verb: Verb,
    /// Overrides the verb's separator when set.
    pub separator: Option<String>,
}

impl StackFormatConfig {
    #[inline]
    pub fn plain() -> Self {
        Self { verb: Verb::Plain, ..Default::default() }
    }

    #[inline]
    pub fn quoted() -> Self {
        Self { verb: Verb::Quoted, ..Default::default() }
    }

    #[inline]
    pub fn verbose() -> Self {
        Self { verb: Verb::Verbose, ..Default::default() }
    }
}

impl StackFormatter for StackFormatConfig {
    fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(self.verb.separator())
    }

    fn format_item(&self, f: &mut fmt::Formatter<'_>, err: &dyn StackError) -> fmt::Result {
        match self.verb {
            Verb::Plain => Display::fmt(err, f),
            Verb::Quoted => {
                if let Some(inner) = err.downcast_ref::<ErrorStack>() {
                    return inner.write_with(f, self);
                }
                let mut text = String::new();
                write!(text, "{}", err)?;
                fmt::Debug::fmt(text.as_str(), f)
            }
            Verb::Verbose => match err.as_nested_formatter() {
                Some(nested) => nested.fmt_nested(f),
                None => Display::fmt(err, f),
            },
        }
    }
}

impl ErrorStack {
    /// Writes the stack through `formatter`, outermost error first.
    pub fn write_with<F>(&self, f: &mut fmt::Formatter<'_>, formatter: &F) -> fmt::Result
    where
        F: StackFormatter + ?Sized,
    {
        let outermost = self.level().saturating_sub(1);
        self.walk(Direction::LastFirst, |index, err| {
            if index != outermost {
                if let Err(e) = f.write_str(formatter.separator()) {
                    return WalkControl::Fail(e);
                }
            }
            formatter.format_item(f, err.as_ref()).into()
        })
    }

    /// Renders the stack with a custom formatter.
    ///
    /// Rendering stops at the first element whose formatting fails and the
    /// text written up to that point is returned. Write through
    /// [`fmt`](Self::fmt) or [`write_with`](Self::write_with) to observe the
    /// error instead.
    #[must_use]
    pub fn render_with<F>(&self, formatter: &F) -> String
    where
        F: StackFormatter,
    {
        let mut out = String::new();
        let _ = write!(out, "{}", Rendered { stack: self, formatter });
        out
    }

    /// Renders the stack with one of the built-in verbs.
    #[must_use]
    pub fn render(&self, verb: Verb) -> String {
        self.render_with(&StackFormatConfig { verb, separator: None })
    }

    /// Returns a builder for customizing the output.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> StackFormatBuilder<'_> {
        StackFormatBuilder::new(self)
    }

    /// Display adapter for the quoted form.
    #[must_use]
    #[inline]
    pub fn quoted(&self) -> StackFormatBuilder<'_> {
        self.fmt().quoted()
    }
}

struct Rendered<'a, F: ?Sized> {
    stack: &'a ErrorStack,
    formatter: &'a F,
}

impl<F: StackFormatter + ?Sized> Display for Rendered<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stack.write_with(f, self.formatter)
    }
}

/// Builder for customizing stack display output.
pub struct StackFormatBuilder<'a> {
    pub(crate) stack: &'a ErrorStack,
    pub(crate) config: StackFormatConfig,
}

impl<'a> StackFormatBuilder<'a> {
    pub fn new(stack: &'a ErrorStack) -> Self {
        Self { stack, config: StackFormatConfig::default() }
    }

    pub fn verb(mut self, verb: Verb) -> Self {
        self.config.verb = verb;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = Some(separator.into());
        self
    }

    pub fn quoted(self) -> Self {
        self.verb(Verb::Quoted)
    }

    pub fn verbose(self) -> Self {
        self.verb(Verb::Verbose)
    }
}

impl Display for StackFormatBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stack.write_with(f, &self.config)
    }
}

impl Display for ErrorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if f.alternate() { Verb::Verbose } else { Verb::Plain };
        self.write_with(f, &StackFormatConfig { verb, separator: None })
    }
}

impl NestedFormatter for ErrorStack {
    #[inline]
    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, &StackFormatConfig::verbose())
    }
}
