#![cfg(all(feature = "combinator", feature = "derive"))]
//! Tests for sharing stateful adapters across threads.

use fpkit::callable;
use fpkit::combinator::{curry, memoized, once};
use fpkit::value::Value;
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

#[rstest]
fn once_fires_exactly_once_across_threads() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let guarded = once(&Value::from(callable!(move || {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        42
    })))
    .unwrap();

    let handles: Vec<_> = (0..64)
        .map(|_| {
            let guarded = guarded.clone();
            thread::spawn(move || guarded.call(&[]).unwrap())
        })
        .collect();

    let results: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(results.iter().filter(|value| **value == Value::from(42)).count(), 1);
    assert_eq!(
        results.iter().filter(|value| **value == Value::Undefined).count(),
        63
    );
}

#[rstest]
fn memoized_results_agree_across_threads() {
    let counter = Arc::new(AtomicUsize::new(0));
    let counter_clone = Arc::clone(&counter);
    let cached = memoized(&Value::from(callable!(move |x| {
        counter_clone.fetch_add(1, Ordering::SeqCst);
        x.to_number() * 10.0
    })))
    .unwrap();

    let handles: Vec<_> = (0..64_i32)
        .map(|index| {
            let cached = cached.clone();
            thread::spawn(move || cached.call(&[Value::from(index % 4)]).unwrap())
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Value::from((index % 4) * 10));
    }

    // Racing misses may compute the same key more than once before the first
    // result is stored; later calls are hits.
    let computed = counter.load(Ordering::SeqCst);
    assert!((4..=64).contains(&computed));
    for key in 0..4_i32 {
        cached.call(&[Value::from(key)]).unwrap();
    }
    assert_eq!(counter.load(Ordering::SeqCst), computed);
}

#[rstest]
fn curried_stages_are_shared_safely() {
    let curried = curry(&Value::from(callable!(|a, b| a.to_number() * b.to_number()))).unwrap();
    let stage = curried.call(&[Value::from(3)]).unwrap();

    let handles: Vec<_> = (0..16_i32)
        .map(|index| {
            let stage = stage.clone();
            thread::spawn(move || {
                stage
                    .as_callable()
                    .unwrap()
                    .call(&[Value::from(index)])
                    .unwrap()
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Value::from(index * 3));
    }
}
