use crate::common::{Code, Kind, Layer, Opaque};
use errstack::{stack, ErrorStack, Message, SharedError, Wrapped};
use std::sync::Arc;

#[test]
fn find_collects_every_level_root_first() {
    let stack = stack![Code(1), Code(2), Code(1), Code(1)];

    assert_eq!(stack.find(&Code(1), None).as_slice(), &[1, 3, 4]);
    assert_eq!(stack.find(&Code(1), Some(1)).as_slice(), &[1]);
    assert!(stack.find(&Code(1), Some(0)).is_empty());
    assert!(stack.find(&Code(9), None).is_empty());
}

#[test]
fn find_with_limit_matches_first() {
    let stack = stack!["a", "b", "a"];
    let target = Message::new("a");

    assert_eq!(stack.find(&target, Some(1)).as_slice(), &[stack.first(&target).unwrap()]);
    assert!(stack.find(&Message::new("z"), Some(1)).is_empty());
    assert_eq!(stack.first(&Message::new("z")), None);
}

#[test]
fn has_agrees_with_first() {
    let stack = stack!["a", Code(3)];

    let targets: [SharedError; 3] =
        [Arc::new(Message::new("a")), Arc::new(Code(3)), Arc::new(Code(4))];
    for target in targets {
        assert_eq!(stack.has(target.as_ref()), stack.first(target.as_ref()).is_some());
    }
}

#[test]
fn find_descends_into_unwrapped_causes() {
    let stack = stack![
        Layer::over("open", Layer::over("io", Code(28))),
        Layer::bottom("retry"),
        Wrapped::new("request", Code(28)),
    ];

    assert_eq!(stack.find(&Code(28), None).as_slice(), &[1, 3]);
    assert!(!stack.is(&Code(28)));
}

#[test]
fn find_stops_descending_at_a_match() {
    let stack = stack![Layer::over("outer", Wrapped::new("middle", Code(1)))];

    assert_eq!(stack.find(&Code(1), None).as_slice(), &[1]);
}

#[test]
fn find_uses_matchable_when_equality_is_unavailable() {
    let stack = stack![
        Kind { kind: "timeout", detail: "db" },
        "unrelated",
        Kind { kind: "timeout", detail: "cache" },
    ];
    let target = Kind { kind: "timeout", detail: "" };

    assert_eq!(stack.find(&target, None).as_slice(), &[1, 3]);
    assert!(!stack.has(&Kind { kind: "refused", detail: "" }));
}

#[test]
fn opaque_errors_match_only_themselves() {
    let shared: SharedError = Arc::new(Opaque("boom"));
    let stack = stack!["start", &shared];

    assert_eq!(stack.first(shared.as_ref()), Some(2));
    assert!(!stack.has(&Opaque("boom")));
}

#[test]
fn equatable_types_do_not_cross_match() {
    let stack = stack!["1", Code(1)];

    assert_eq!(stack.first(&Code(1)), Some(2));
    assert_eq!(stack.first(&Message::new("1")), Some(1));
}

#[test]
fn is_checks_only_the_root() {
    let stack = stack!["root", "top"];

    assert!(stack.is(&Message::new("root")));
    assert!(!stack.is(&Message::new("top")));
    assert!(!ErrorStack::new().is(&Message::new("root")));

    let matchable_root = stack![Kind { kind: "k", detail: "" }];
    assert!(!matchable_root.is(&Kind { kind: "k", detail: "" }));
}

#[test]
fn first_stack_finds_lowest_alignment() {
    let outer = stack!["a", "b", "a", "b"];

    assert_eq!(outer.first_stack(&stack!["a", "b"]), Some(1));
    assert_eq!(outer.first_stack(&stack!["b", "a"]), Some(2));
    assert_eq!(outer.first_stack(&stack!["b"]), Some(2));
}

#[test]
fn first_stack_handles_overlapping_prefixes() {
    let outer = stack!["a", "a", "b"];

    assert_eq!(outer.first_stack(&stack!["a", "b"]), Some(2));
    assert_eq!(outer.first_stack(&stack!["a", "a", "b"]), Some(1));
    assert!(!outer.is_stack(&stack!["a", "b"]));
}

#[test]
fn first_stack_rejects_tails_that_run_off_the_end() {
    let outer = stack!["a", "b", "c"];

    assert_eq!(outer.first_stack(&stack!["c", "d"]), None);
    assert_eq!(outer.first_stack(&stack!["a", "b", "c", "d"]), None);
    assert_eq!(outer.first_stack(&stack!["b", "a"]), None);
}

#[test]
fn empty_sub_stack_never_matches() {
    let outer = stack!["a"];

    assert_eq!(outer.first_stack(&ErrorStack::new()), None);
    assert!(!outer.has_stack(&ErrorStack::new()));
    assert!(!outer.is_stack(&ErrorStack::new()));
    assert!(!ErrorStack::new().has_stack(&stack!["a"]));
}

#[test]
fn is_stack_implies_has_stack() {
    let outer = stack!["a", "b", "c"];

    let subs = [
        stack!["a"],
        stack!["a", "b"],
        stack!["a", "b", "c"],
        stack!["b", "c"],
        stack!["x"],
    ];
    for sub in subs {
        if outer.is_stack(&sub) {
            assert!(outer.has_stack(&sub));
        }
        assert_eq!(outer.has_stack(&sub), outer.first_stack(&sub).is_some());
    }
    assert!(outer.is_stack(&stack!["a", "b", "c"]));
}

#[test]
fn stack_matching_does_not_unwrap_or_match() {
    let outer = stack![Wrapped::new("outer", "a"), Kind { kind: "k", detail: "x" }];

    assert!(!outer.has_stack(&stack!["a"]));
    assert!(!outer.has_stack(&stack![Kind { kind: "k", detail: "x" }]));
}
