#![cfg(all(feature = "combinator", feature = "derive"))]
//! Tests for currying over the declared arity.

use fpkit::callable;
use fpkit::combinator::curry;
use fpkit::error::{ContractError, Error};
use fpkit::value::{Callable, Collection, Value};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn apply(stage: &Value, argument: impl Into<Value>) -> Value {
    stage
        .as_callable()
        .expect("stage should be callable")
        .call(&[argument.into()])
        .expect("stage should succeed")
}

fn add_three() -> Value {
    Value::from(callable!(|x, y, z| x.to_number() + y.to_number() + z.to_number()))
}

#[test]
fn test_curry_three_arguments() {
    let curried = Value::from(curry(&add_three()).unwrap());
    let total = apply(&apply(&apply(&curried, 1), 2), 3);
    assert_eq!(total, Value::from(6));
}

#[test]
fn test_curry_intermediate_stages_are_callables() {
    let curried = Value::from(curry(&add_three()).unwrap());
    let first = apply(&curried, 1);
    let second = apply(&first, 2);

    assert!(first.as_callable().is_some());
    assert!(second.as_callable().is_some());
}

#[test]
fn test_curry_stages_can_branch() {
    let curried = Value::from(curry(&add_three()).unwrap());
    let add_ten = apply(&curried, 10);

    let left = apply(&add_ten, 1);
    let right = apply(&add_ten, 100);

    assert_eq!(apply(&left, 1), Value::from(12));
    assert_eq!(apply(&right, 1), Value::from(111));
    assert_eq!(apply(&left, 5), Value::from(16));
}

#[test]
fn test_curry_preserves_argument_order() {
    let join = Value::from(callable!(|a, b, c| format!("{a}{b}{c}")));
    let curried = Value::from(curry(&join).unwrap());
    assert_eq!(apply(&apply(&apply(&curried, "x"), "y"), "z"), Value::from("xyz"));
}

#[test]
fn test_curry_invokes_target_once_per_completed_chain() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let pair = Value::from(callable!(move |a, b| {
        counter.fetch_add(1, Ordering::SeqCst);
        Value::sequence([a, b])
    }));

    let curried = Value::from(curry(&pair).unwrap());
    let stage = apply(&curried, 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(apply(&stage, 2), Value::sequence([1, 2]));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_curry_unary_target_runs_immediately() {
    let negate = Value::from(callable!(|x| -x.to_number()));
    let curried = curry(&negate).unwrap();
    assert_eq!(curried.call(&[Value::from(4)]), Ok(Value::from(-4)));
}

#[test]
fn test_curry_propagates_target_errors() {
    let failing = Value::from(Callable::new(2, |_| Err(Error::raise("boom"))));
    let curried = Value::from(curry(&failing).unwrap());
    let stage = apply(&curried, 1);

    assert_eq!(
        stage.as_callable().unwrap().call(&[Value::from(2)]),
        Err(Error::raise("boom"))
    );
}

#[rstest]
#[case(Value::from(Collection::new()))]
#[case(Value::sequence(Vec::<Value>::new()))]
#[case(Value::from(""))]
fn test_curry_rejects_non_callables(#[case] candidate: Value) {
    assert_eq!(
        curry(&candidate).unwrap_err(),
        Error::Contract(ContractError::NotCallableArg)
    );
    assert_eq!(
        curry(&candidate).unwrap_err().to_string(),
        "Callback should be a function"
    );
}
