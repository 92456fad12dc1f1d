/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use hardened_atomic::atomic::{
    AtomicI32,
    AtomicI64,
    AtomicWrapI32,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Test concurrent increments
#[test]
fn test_concurrent_increment() {
    let counter = Arc::new(AtomicI32::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.inc();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.read(), (NUM_THREADS * ITERATIONS_PER_THREAD) as i32);
}

// Test concurrent decrements
#[test]
fn test_concurrent_decrement() {
    let counter = Arc::new(AtomicI64::new(10000));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.dec();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.read(), 0);
}

// Exactly one thread observes the drop to zero
#[test]
fn test_concurrent_dec_and_test_has_single_winner() {
    let refs = Arc::new(AtomicI32::new(NUM_THREADS as i32));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let refs = refs.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            refs.dec_and_test()
        }));
    }

    let winners = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|&last| last)
        .count();
    assert_eq!(winners, 1);
    assert_eq!(refs.read(), 0);
}

// Once the count hits zero no thread may resurrect it
#[test]
fn test_concurrent_inc_not_zero_never_resurrects() {
    let refs = Arc::new(AtomicI32::new(1));
    let barrier = Arc::new(Barrier::new(NUM_THREADS + 1));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let refs = refs.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                if refs.inc_not_zero() {
                    refs.dec();
                }
                assert!(refs.read() >= 0);
            }
        }));
    }

    barrier.wait();
    refs.dec();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(refs.read(), 0);
    assert!(!refs.inc_not_zero());
}

// Concurrent dec_if_positive never drives the count negative
#[test]
fn test_concurrent_dec_if_positive() {
    let permits = Arc::new(AtomicI64::new(500));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let permits = permits.clone();
        handles.push(thread::spawn(move || {
            let mut granted = 0;
            for _ in 0..ITERATIONS_PER_THREAD {
                if permits.dec_if_positive() >= 0 {
                    granted += 1;
                }
            }
            granted
        }));
    }

    let granted: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(granted, 500);
    assert_eq!(permits.read(), 0);
}

// Concurrent cmpxchg loop
#[test]
fn test_concurrent_cmpxchg() {
    let counter = Arc::new(AtomicI32::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                let mut current = counter.read();
                loop {
                    let seen = counter.cmpxchg(current, current + 1);
                    if seen == current {
                        break;
                    }
                    current = seen;
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.read(), (NUM_THREADS * ITERATIONS_PER_THREAD) as i32);
}

// Wrapping counters stay exact modulo the width under contention
#[test]
fn test_concurrent_wrapping_add() {
    let counter = Arc::new(AtomicWrapI32::new(i32::MAX));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.inc();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let total = (NUM_THREADS * ITERATIONS_PER_THREAD) as i32;
    assert_eq!(counter.read(), i32::MAX.wrapping_add(total));
}
