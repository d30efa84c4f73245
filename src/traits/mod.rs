//! Core traits for stack elements and stack construction.
//!
//! - [`StackError`]: the element trait, with opt-in capabilities
//!   [`Equatable`], [`Matchable`], [`Unwrappable`] and [`NestedFormatter`]
//! - [`IntoStackEntry`]: conversion into a shared stack element
//! - [`ResultExt`]: context attachment on `Result`
//!
//! # Examples
//!
//! ```
//! use errstack::traits::IntoStackEntry;
//! use errstack::ErrorStack;
//!
//! let stack = ErrorStack::new().with("root cause".into_stack_entry());
//! assert_eq!(stack.level(), 1);
//! ```

pub mod into_stack_entry;
pub mod result_ext;
pub mod stack_error;

pub use into_stack_entry::IntoStackEntry;
pub use result_ext::ResultExt;
pub use stack_error::{Equatable, Matchable, NestedFormatter, StackError, Unwrappable};
