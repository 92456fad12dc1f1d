/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the in-range tests every counter type must pass,
/// whatever its overflow policy.
#[macro_export]
macro_rules! test_hardened_atomic {
    ($atomic_type:ident, $value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use hardened_atomic::atomic::{
                $atomic_type,
                Atomic,
                AtomicCounter,
            };
            use std::sync::Arc;
            use std::thread;

            #[test]
            fn test_new() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(atomic.read(), 42);
            }

            #[test]
            fn test_default() {
                let atomic = <$atomic_type>::default();
                assert_eq!(atomic.read(), 0);
            }

            #[test]
            fn test_from() {
                let atomic = <$atomic_type>::from(100);
                assert_eq!(atomic.read(), 100);
            }

            #[test]
            fn test_read_set() {
                let atomic = <$atomic_type>::new(0);
                atomic.set(42);
                assert_eq!(atomic.read(), 42);
                atomic.set(-10);
                assert_eq!(atomic.read(), -10);
            }

            #[test]
            fn test_add_sub() {
                let atomic = <$atomic_type>::new(10);
                atomic.add(5);
                assert_eq!(atomic.read(), 15);
                atomic.sub(20);
                assert_eq!(atomic.read(), -5);
                atomic.add(-5);
                assert_eq!(atomic.read(), -10);
            }

            #[test]
            fn test_add_return_sub_return() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.add_return(5), 15);
                assert_eq!(atomic.sub_return(3), 12);
                assert_eq!(atomic.read(), 12);
            }

            #[test]
            fn test_inc_dec() {
                let atomic = <$atomic_type>::new(0);
                atomic.inc();
                atomic.inc();
                atomic.dec();
                assert_eq!(atomic.read(), 1);
                assert_eq!(atomic.inc_return(), 2);
                assert_eq!(atomic.dec_return(), 1);
            }

            #[test]
            fn test_fetch_add_fetch_sub() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.fetch_add(5), 10);
                assert_eq!(atomic.fetch_sub(3), 15);
                assert_eq!(atomic.read(), 12);
            }

            #[test]
            fn test_and_test_family() {
                let atomic = <$atomic_type>::new(-1);
                assert!(atomic.inc_and_test());
                assert!(!atomic.inc_and_test());

                let atomic = <$atomic_type>::new(2);
                assert!(!atomic.dec_and_test());
                assert!(atomic.dec_and_test());

                let atomic = <$atomic_type>::new(7);
                assert!(!atomic.sub_and_test(3));
                assert!(atomic.sub_and_test(4));

                let atomic = <$atomic_type>::new(-7);
                assert!(!atomic.add_and_test(3));
                assert!(atomic.add_and_test(4));
            }

            #[test]
            fn test_add_negative() {
                let atomic = <$atomic_type>::new(1);
                assert!(!atomic.add_negative(-1));
                assert!(atomic.add_negative(-1));
                assert_eq!(atomic.read(), -1);
                assert!(!atomic.add_negative(1));
            }

            #[test]
            fn test_add_unless() {
                let atomic = <$atomic_type>::new(0);
                assert_eq!(atomic.add_unless(1, 0), 0);
                assert_eq!(atomic.read(), 0);

                atomic.set(5);
                assert_eq!(atomic.add_unless(2, 0), 5);
                assert_eq!(atomic.read(), 7);
                assert_eq!(atomic.add_unless(2, 7), 7);
                assert_eq!(atomic.read(), 7);
            }

            #[test]
            fn test_inc_not_zero() {
                let atomic = <$atomic_type>::new(0);
                assert!(!atomic.inc_not_zero());
                assert_eq!(atomic.read(), 0);

                atomic.set(1);
                assert!(atomic.inc_not_zero());
                assert_eq!(atomic.read(), 2);
            }

            #[test]
            fn test_dec_if_positive() {
                let atomic = <$atomic_type>::new(2);
                assert_eq!(atomic.dec_if_positive(), 1);
                assert_eq!(atomic.dec_if_positive(), 0);
                assert_eq!(atomic.read(), 0);

                assert_eq!(atomic.dec_if_positive(), -1);
                assert_eq!(atomic.read(), 0);

                atomic.set(-5);
                assert_eq!(atomic.dec_if_positive(), -6);
                assert_eq!(atomic.read(), -5);
            }

            #[test]
            fn test_dec_if_positive_at_min_does_not_fault() {
                let atomic = <$atomic_type>::new(<$value_type>::MIN);
                assert_eq!(atomic.dec_if_positive(), <$value_type>::MIN);
                assert_eq!(atomic.read(), <$value_type>::MIN);
            }

            #[test]
            fn test_bitwise() {
                let atomic = <$atomic_type>::new(0b1100);
                assert_eq!(atomic.fetch_and(0b1010), 0b1100);
                assert_eq!(atomic.read(), 0b1000);
                assert_eq!(atomic.fetch_or(0b0011), 0b1000);
                assert_eq!(atomic.read(), 0b1011);
                assert_eq!(atomic.fetch_xor(0b1111), 0b1011);
                assert_eq!(atomic.read(), 0b0100);
                assert_eq!(atomic.fetch_andnot(0b0100), 0b0100);
                assert_eq!(atomic.read(), 0);

                atomic.or(0b0110);
                atomic.and(0b0011);
                atomic.xor(0b0001);
                atomic.andnot(0b0001);
                assert_eq!(atomic.read(), 0b0010);
            }

            #[test]
            fn test_bitwise_at_extremes_does_not_fault() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.fetch_or(<$value_type>::MIN), <$value_type>::MAX);
                assert_eq!(atomic.read(), -1);
                assert_eq!(atomic.fetch_xor(-1), -1);
                assert_eq!(atomic.read(), 0);
            }

            #[test]
            fn test_xchg() {
                let atomic = <$atomic_type>::new(<$value_type>::MAX);
                assert_eq!(atomic.xchg(<$value_type>::MIN), <$value_type>::MAX);
                assert_eq!(atomic.read(), <$value_type>::MIN);
            }

            #[test]
            fn test_cmpxchg() {
                let atomic = <$atomic_type>::new(10);
                assert_eq!(atomic.cmpxchg(10, 20), 10);
                assert_eq!(atomic.read(), 20);
                assert_eq!(atomic.cmpxchg(10, 30), 20);
                assert_eq!(atomic.read(), 20);
            }

            #[test]
            fn test_cmpxchg_same_value_is_idempotent() {
                let atomic = <$atomic_type>::new(33);
                assert_eq!(atomic.cmpxchg(33, 33), 33);
                assert_eq!(atomic.cmpxchg(33, 33), 33);
                assert_eq!(atomic.read(), 33);
            }

            #[test]
            fn test_trait_surface() {
                fn bump<C: AtomicCounter>(counter: &C) -> C::Value {
                    counter.inc();
                    counter.inc_return()
                }

                let atomic = <$atomic_type as Atomic>::with_value(5);
                assert_eq!(bump(&atomic), 7);
                assert_eq!(Atomic::read(&atomic), 7);
            }

            #[test]
            fn test_debug_display() {
                let atomic = <$atomic_type>::new(42);
                assert_eq!(format!("{}", atomic), "42");
                assert!(format!("{:?}", atomic).contains("42"));
            }

            #[test]
            fn test_inner() {
                let atomic = <$atomic_type>::new(9);
                assert_eq!(
                    atomic.inner().load(std::sync::atomic::Ordering::Relaxed),
                    9
                );
            }

            #[test]
            fn test_concurrent_inc_dec_balance() {
                let counter = Arc::new(<$atomic_type>::new(0));
                let mut handles = vec![];

                for _ in 0..8 {
                    let counter = counter.clone();
                    handles.push(thread::spawn(move || {
                        for _ in 0..500 {
                            counter.inc();
                            counter.dec();
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(counter.read(), 0);
            }
        }
    };
}
