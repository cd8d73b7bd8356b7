//! Unit tests for the State<S, A> monad.
//!
//! A State value wraps a pure transition `S -> (A, S)`; these tests
//! exercise construction, the run/eval/exec entry points, and the
//! combinators that thread state through multi-step chains.

#![cfg(feature = "effect")]

use kleisli::effect::State;
use rstest::rstest;

// =============================================================================
// Entry Points
// =============================================================================

#[rstest]
fn run_returns_result_and_final_state() {
    let computation: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    assert_eq!(computation.run(10), (20, 11));
}

#[rstest]
fn eval_discards_the_final_state() {
    let computation: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    assert_eq!(computation.eval(10), 20);
}

#[rstest]
fn exec_discards_the_result() {
    let computation: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    assert_eq!(computation.exec(10), 11);
}

// =============================================================================
// Primitive Computations
// =============================================================================

#[rstest]
fn pure_yields_the_value_and_keeps_the_state() {
    let computation: State<i32, &str> = State::pure("constant");
    assert_eq!(computation.run(42), ("constant", 42));
}

#[rstest]
fn get_yields_the_current_state_unchanged() {
    let computation: State<i32, i32> = State::get();
    assert_eq!(computation.run(42), (42, 42));
}

#[rstest]
fn gets_reads_a_projection_without_mutating() {
    #[derive(Clone, Debug, PartialEq)]
    struct Session {
        user: String,
        hits: u64,
    }

    let computation: State<Session, u64> = State::gets(|session: &Session| session.hits);
    let session = Session {
        user: "ada".to_string(),
        hits: 3,
    };
    let (hits, final_state) = computation.run(session.clone());
    assert_eq!(hits, 3);
    assert_eq!(final_state, session);
}

#[rstest]
fn init_installs_the_seed_state() {
    let computation: State<i32, i32> = State::init(7);
    assert_eq!(computation.run(99), (7, 7));
}

#[rstest]
fn put_replaces_the_state_and_yields_unit() {
    let computation: State<i32, ()> = State::put(100);
    assert_eq!(computation.run(42), ((), 100));
}

#[rstest]
fn modify_transforms_the_state_and_yields_unit() {
    let computation: State<i32, ()> = State::modify(|x| x * 2);
    assert_eq!(computation.run(21), ((), 42));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
fn map_transforms_only_the_result() {
    let computation: State<i32, i32> = State::new(|s: i32| (s, s));
    let mapped = computation.map(|value| value * 2);
    assert_eq!(mapped.run(21), (42, 21));
}

#[rstest]
fn and_then_runs_the_second_step_on_the_intermediate_state() {
    let computation: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    let chained = computation.and_then(|value| State::new(move |s: i32| (value + s, s * 2)));
    // First: (10, 11); second with state 11: (10 + 11, 22)
    assert_eq!(chained.run(10), (21, 22));
}

#[rstest]
fn then_discards_the_first_result() {
    let counted = State::modify(|count: i32| count + 1)
        .then(State::modify(|count: i32| count + 1))
        .then(State::get());
    assert_eq!(counted.run(0), (2, 2));
}

#[rstest]
fn map2_threads_state_through_both_computations() {
    let first: State<i32, i32> = State::new(|s: i32| (s, s + 1));
    let second: State<i32, i32> = State::new(|s: i32| (s * 2, s + 1));
    let combined = first.map2(second, |a, b| a + b);
    // first: (10, 11); second with state 11: (22, 12)
    assert_eq!(combined.run(10), (32, 12));
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn counter_seeded_with_zero_ends_at_one() {
    let counter = State::get().then(State::modify(|count: i32| count + 1));
    assert_eq!(counter.exec(0), 1);
}

#[rstest]
fn a_small_stack_machine_threads_its_storage() {
    fn push(value: i32) -> State<Vec<i32>, ()> {
        State::modify(move |mut stack: Vec<i32>| {
            stack.push(value);
            stack
        })
    }

    fn depth() -> State<Vec<i32>, usize> {
        State::gets(Vec::len)
    }

    let program = push(1).then(push(2)).then(push(3)).then(depth());
    let (depth, stack) = program.run(Vec::new());
    assert_eq!(depth, 3);
    assert_eq!(stack, vec![1, 2, 3]);
}

#[rstest]
fn clones_share_the_same_transition() {
    let computation: State<i32, i32> = State::new(|s: i32| (s * 3, s - 1));
    let cloned = computation.clone();
    assert_eq!(computation.run(9), cloned.run(9));
}
