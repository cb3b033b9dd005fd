//! Integration tests for sharing adaptors across threads.
//!
//! Adaptors hold nothing but the callables and arguments they wrap, so they
//! are `Send`/`Sync` exactly when those are. These tests share adaptors
//! between scoped threads and move them into spawned ones.

#![cfg(feature = "full")]

use fnfit::adaptor::{Match, Tap};
use fnfit::compose::{Always, Flip, Flow};
use fnfit::partial::{Infix, Pipable};
use fnfit::recursion::{Repeat, RepeatWhile};
use fnfit::unpack::Unpacked;
use fnfit::{Callable, fix, flow, partial, repeat, unpack};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

type Unary = fn(i32) -> i32;

// =============================================================================
// Static guarantees
// =============================================================================

assert_impl_all!(Flow<Unary, Unary>: Send, Sync, Copy);
assert_impl_all!(Flip<fn(i32, i32) -> i32>: Send, Sync, Copy);
assert_impl_all!(Always<String>: Send, Sync, Clone);
assert_impl_all!(Unpacked<Unary>: Send, Sync);
assert_impl_all!(Repeat<Unary>: Send, Sync);
assert_impl_all!(RepeatWhile<fn(&i32) -> bool, Unary>: Send, Sync);
assert_impl_all!(Infix<fn(i32, i32) -> i32>: Send, Sync);
assert_impl_all!(Pipable<Unary, (i32, ())>: Send, Sync, Copy);
assert_impl_all!(Tap<fn(&i32)>: Send, Sync);
assert_impl_all!(Match<(Unary, (fn(&str) -> usize, ()))>: Send, Sync);

assert_not_impl_any!(Always<Rc<String>>: Send, Sync);
assert_not_impl_any!(Flow<Unary, Rc<Unary>>: Send, Sync);

// =============================================================================
// Runtime sharing
// =============================================================================

#[rstest]
#[case(1)]
#[case(4)]
fn test_shared_partial_application(#[case] thread_count: i32) {
    let volume = |width: i32, height: i32, depth: i32| width * height * depth;
    let base = partial(volume).call((2, 3));

    let results: Vec<i32> = thread::scope(|scope| {
        let handles: Vec<_> = (0..thread_count)
            .map(|depth| {
                let base = &base;
                scope.spawn(move || base.call((depth,)))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    let expected: Vec<i32> = (0..thread_count).map(|depth| 6 * depth).collect();
    assert_eq!(results, expected);
}

#[test]
fn test_fixed_point_shared_by_reference() {
    let calls = AtomicUsize::new(0);
    let triangle = fix(|recurse: &dyn Fn(u64) -> u64, n: u64| {
        calls.fetch_add(1, Ordering::Relaxed);
        if n == 0 { 0 } else { n + recurse(n - 1) }
    });

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| assert_eq!(triangle.call((10,)), 55));
        }
    });

    assert_eq!(calls.load(Ordering::Relaxed), 44);
}

#[test]
fn test_adaptor_moved_into_spawned_thread() {
    let pipeline = Arc::new(flow(
        unpack(|a: u32, b: u32| a + b),
        repeat(3).call((|value: u32| value * 2,)),
    ));

    let handles: Vec<_> = (0..3_u32)
        .map(|offset| {
            let pipeline = Arc::clone(&pipeline);
            thread::spawn(move || pipeline.call(([offset, 1],)))
        })
        .collect();

    let results: Vec<u32> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();
    assert_eq!(results, vec![8, 16, 24]);
}
