#![cfg(all(feature = "combinator", feature = "derive"))]
//! Tests for the single-call adapters: `to_unary`, `once`, `memoized` and
//! `factorial`.

use fpkit::callable;
use fpkit::combinator::{factorial, memoized, once, to_unary};
use fpkit::error::{ContractError, Error};
use fpkit::value::{Callable, Collection, Value};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type Adapter = fn(&Value) -> Result<Callable, Error>;

fn counter() -> (Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    (Arc::clone(&calls), calls)
}

#[rstest]
fn test_adapters_reject_non_callables(
    #[values(to_unary as Adapter, once as Adapter, memoized as Adapter)] adapter: Adapter,
    #[values(Value::from(Collection::new()), Value::sequence(Vec::<Value>::new()), Value::from(""))]
    candidate: Value,
) {
    let error = adapter(&candidate).unwrap_err();
    assert_eq!(error, Error::Contract(ContractError::NotCallableArg));
    assert_eq!(error.to_string(), "Callback should be a function");
}

// =============================================================================
// to_unary
// =============================================================================

#[test]
fn test_to_unary_forwards_only_first_argument() {
    let count = Value::from(callable!(|a, b, c| {
        [a, b, c].iter().filter(|value| **value != Value::Undefined).count()
    }));
    let unary = to_unary(&count).unwrap();

    assert_eq!(unary.arity(), 1);
    assert_eq!(
        unary.call(&[Value::from(1), Value::from(2), Value::from(3)]),
        Ok(Value::from(1))
    );
}

#[test]
fn test_to_unary_keeps_unary_instance() {
    let identity = Value::from(callable!(|x| x));
    let unary = Value::from(to_unary(&identity).unwrap());
    assert!(unary.same_instance(&identity));
}

#[test]
fn test_to_unary_with_parse_semantics() {
    let parse = Value::from(callable!(|text, radix| {
        if radix == Value::Undefined { text.to_number() } else { f64::NAN }
    }));
    let unary = Value::from(to_unary(&parse).unwrap());

    assert_eq!(
        fpkit::sequence::map(&Value::sequence(["1", "2", "3"]), &unary),
        Ok(Value::sequence([1, 2, 3]))
    );
}

// =============================================================================
// once
// =============================================================================

#[test]
fn test_once_runs_target_a_single_time() {
    let (calls, observed) = counter();
    let initialize = Value::from(callable!(move || {
        calls.fetch_add(1, Ordering::SeqCst);
        "initialized"
    }));
    let guarded = once(&initialize).unwrap();

    assert_eq!(guarded.call(&[]), Ok(Value::from("initialized")));
    for _ in 0..3 {
        assert_eq!(guarded.call(&[]), Ok(Value::Undefined));
    }
    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_once_forwards_all_arguments() {
    let sum = Value::from(callable!(|a, b, c| a.to_number() + b.to_number() + c.to_number()));
    let guarded = once(&sum).unwrap();
    assert_eq!(
        guarded.call(&[Value::from(1), Value::from(2), Value::from(3)]),
        Ok(Value::from(6))
    );
}

#[test]
fn test_once_ignores_later_arguments() {
    let identity = Value::from(callable!(|x| x));
    let guarded = once(&identity).unwrap();

    assert_eq!(guarded.call(&[Value::from("first")]), Ok(Value::from("first")));
    assert_eq!(guarded.call(&[Value::from("second")]), Ok(Value::Undefined));
}

#[test]
fn test_once_wrappers_are_independent() {
    let (calls, observed) = counter();
    let target = Value::from(callable!(move || {
        calls.fetch_add(1, Ordering::SeqCst);
    }));

    let first = once(&target).unwrap();
    let second = once(&target).unwrap();
    first.call(&[]).unwrap();
    second.call(&[]).unwrap();
    first.call(&[]).unwrap();

    assert_eq!(observed.load(Ordering::SeqCst), 2);
}

// =============================================================================
// memoized
// =============================================================================

#[test]
fn test_memoized_returns_cached_result() {
    let (calls, observed) = counter();
    let square = Value::from(callable!(move |x| {
        calls.fetch_add(1, Ordering::SeqCst);
        x.to_number() * x.to_number()
    }));
    let cached = memoized(&square).unwrap();

    for _ in 0..4 {
        assert_eq!(cached.call(&[Value::from(9)]), Ok(Value::from(81)));
    }
    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_memoized_distinguishes_arguments() {
    let (calls, observed) = counter();
    let add = Value::from(callable!(move |a, b| {
        calls.fetch_add(1, Ordering::SeqCst);
        a.to_number() + b.to_number()
    }));
    let cached = memoized(&add).unwrap();

    assert_eq!(cached.call(&[Value::from(1), Value::from(2)]), Ok(Value::from(3)));
    assert_eq!(cached.call(&[Value::from(2), Value::from(1)]), Ok(Value::from(3)));
    assert_eq!(cached.call(&[Value::from(1), Value::from(2)]), Ok(Value::from(3)));
    assert_eq!(observed.load(Ordering::SeqCst), 2);
}

#[test]
fn test_memoized_string_form_keys_collide() {
    let (calls, observed) = counter();
    let describe = Value::from(callable!(move |x| {
        calls.fetch_add(1, Ordering::SeqCst);
        format!("seen {x}")
    }));
    let cached = memoized(&describe).unwrap();

    assert_eq!(cached.call(&[Value::from(5)]), Ok(Value::from("seen 5")));
    assert_eq!(cached.call(&[Value::from("5")]), Ok(Value::from("seen 5")));
    assert_eq!(observed.load(Ordering::SeqCst), 1);
}

#[test]
fn test_memoized_recursive_target() {
    let (calls, observed) = counter();
    let fibonacci: Arc<std::sync::OnceLock<Callable>> = Arc::new(std::sync::OnceLock::new());
    let inner = Arc::clone(&fibonacci);

    let body = Value::from(callable!(move |n| {
        calls.fetch_add(1, Ordering::SeqCst);
        let n = n.to_number();
        if n < 2.0 {
            return Ok::<_, Error>(Value::from(n));
        }
        let recurse = inner.get().expect("memoized callable is installed");
        let left = recurse.call(&[Value::from(n - 1.0)])?.to_number();
        let right = recurse.call(&[Value::from(n - 2.0)])?.to_number();
        Ok::<_, Error>(Value::from(left + right))
    }));
    let cached = memoized(&body).unwrap();
    fibonacci.set(cached.clone()).expect("installed once");

    assert_eq!(cached.call(&[Value::from(20)]), Ok(Value::from(6765)));
    assert_eq!(observed.load(Ordering::SeqCst), 21);
}

// =============================================================================
// factorial
// =============================================================================

#[rstest]
#[case(Value::from(0), 1.0)]
#[case(Value::from(1), 1.0)]
#[case(Value::from(5), 120.0)]
#[case(Value::from(10), 3_628_800.0)]
#[case(Value::from("4"), 24.0)]
#[case(Value::from(-5), 1.0)]
#[case(Value::from(171), f64::INFINITY)]
#[case(Value::from(1_000_000), f64::INFINITY)]
fn test_factorial(#[case] number: Value, #[case] expected: f64) {
    assert_eq!(factorial(&number), Ok(expected));
}

#[rstest]
#[case(Value::sequence(Vec::<Value>::new()))]
#[case(Value::from(""))]
#[case(Value::from("invalid"))]
#[case(Value::from(Collection::new()))]
fn test_factorial_rejects_non_numeric(#[case] candidate: Value) {
    assert_eq!(
        factorial(&candidate).unwrap_err().to_string(),
        "n should be a number"
    );
}
