use crate::common::{Code, Opaque};
use errstack::{stack, ErrorStack, IntoStackEntry, Message, SharedError};
use std::sync::Arc;

fn texts<'a>(errors: impl IntoIterator<Item = &'a SharedError>) -> Vec<String> {
    errors.into_iter().map(|e| e.to_string()).collect()
}

#[test]
fn push_places_first_error_at_root() {
    let mut stack = ErrorStack::new();
    stack.push(Code(1)).push(Code(2));

    assert_eq!(stack.get(1).unwrap().downcast_ref::<Code>(), Some(&Code(1)));
    assert_eq!(stack.get(2).unwrap().downcast_ref::<Code>(), Some(&Code(2)));
    assert!(stack.get(0).is_none());
    assert!(stack.get(3).is_none());
}

#[test]
fn push_all_keeps_argument_order() {
    let mut stack = stack!["a"];
    stack.push_all(["b", "c"]).push_all(Vec::<&'static str>::new());

    assert_eq!(texts(&stack), ["a", "b", "c"]);
}

#[test]
fn from_errors_and_collect_agree() {
    let built = ErrorStack::from_errors(["a", "b"]);
    let collected: ErrorStack =
        ["a", "b"].into_iter().map(IntoStackEntry::into_stack_entry).collect();

    assert_eq!(built, collected);
}

#[test]
fn pop_returns_outermost_first() {
    let mut stack = stack!["a", "b", "c"];
    let popped = stack.pop(2);

    assert_eq!(texts(&popped), ["c", "b"]);
    assert_eq!(texts(&stack), ["a"]);
}

#[test]
fn pop_more_than_available_returns_what_exists() {
    let mut stack = stack!["a", "b"];
    let popped = stack.pop(5);

    assert_eq!(texts(&popped), ["b", "a"]);
    assert!(stack.is_empty());
    assert!(stack.pop(1).is_empty());
    assert!(stack.pop_one().is_none());
}

#[test]
fn pop_then_push_round_trips() {
    let original = stack![Code(1), Code(2), Code(3)];
    let mut stack = original.copy();

    let level = stack.level();
    let popped = stack.pop(level);
    assert_eq!(popped.len(), level);

    stack.push_all(popped.into_iter().rev());
    assert_eq!(stack, original);
}

#[test]
fn copy_is_equal_and_independent() {
    let original = stack![Opaque("a"), Opaque("b")];
    let mut copy = original.copy();

    assert_eq!(copy, original);
    for (left, right) in copy.iter().zip(original.iter()) {
        assert!(Arc::ptr_eq(left, right));
    }

    copy.pop_one();
    copy.push("extra");
    assert_eq!(original.level(), 2);
    assert_eq!(original.last().unwrap().to_string(), "b");
}

#[test]
fn attach_flattens_stacks_and_wraps_bare_errors() {
    let lower = stack!["a", "b"];
    let mut stack = stack!["root"];
    stack.attach([lower.into_stack_entry(), Message::new("bare").into_stack_entry()]);

    assert_eq!(texts(&stack), ["root", "a", "b", "bare"]);
}

#[test]
fn push_keeps_a_stack_as_one_element() {
    let inner = stack!["a", "b"];
    let stack = ErrorStack::new().with(inner.clone()).with("top");

    assert_eq!(stack.level(), 2);
    assert_eq!(stack.root().unwrap().downcast_ref::<ErrorStack>(), Some(&inner));
}

#[test]
fn convert_reuses_stacks_and_wraps_other_errors() {
    let stack = stack!["a", "b"];
    assert_eq!(ErrorStack::convert(stack.clone()), stack);

    let single = ErrorStack::convert(Code(4));
    assert_eq!(single.level(), 1);
    assert_eq!(single.root().unwrap().to_string(), "code 4");
}

#[test]
fn equality_uses_identity_for_opaque_errors() {
    let shared: SharedError = Arc::new(Opaque("same"));
    let left = stack![&shared];
    let right = stack![shared.clone()];

    assert_eq!(left, right);
    assert_ne!(stack![Opaque("same")], stack![Opaque("same")]);
}

#[test]
fn debug_lists_elements() {
    let stack = stack!["a", Code(2)];

    assert_eq!(format!("{:?}", stack), r#"[Message("a"), Code(2)]"#);
}
