/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Counter Macro
//!
//! Provides a macro to generate counter types with consistent
//! implementations. The arithmetic lives in the generic engine; the macro
//! only lays out the type surface.
//!
//! # Author
//!
//! Haixing Hu

/// Macro to generate counter types.
///
/// This macro generates a complete counter type with all methods, trait
/// implementations, and documentation.
///
/// # Parameters
///
/// * `$name` - The name of the counter type (e.g., `AtomicI32`)
/// * `$inner_type` - The underlying atomic cell (e.g.,
///   `crate::sync::AtomicI32`)
/// * `$value_type` - The value type (e.g., `i32`)
/// * `$policy` - The overflow policy (`Checked` or `Wrapping`)
/// * `$doc_type` - The type description for documentation (e.g., "32-bit
///   checked counter")
macro_rules! impl_atomic_counter {
    ($name:ident, $inner_type:ty, $value_type:ty, $policy:ty, $doc_type:expr) => {
        #[doc = concat!("Atomic ", $doc_type, ".")]
        ///
        #[doc = concat!("Arithmetic overflow follows the [`", stringify!($policy), "`] policy.")]
        /// All methods are thread-safe; a counter is shared by reference.
        ///
        /// # Memory Ordering Strategy
        ///
        /// - **Arithmetic, bitwise and exchange operations** use `Relaxed`
        ///   ordering: only the counter itself is synchronized.
        /// - **`add_unless`** and **`dec_if_positive`** are fully ordered,
        ///   since their result typically decides whether an object may be
        ///   freed.
        ///
        /// # Example
        ///
        /// ```rust
        #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
        /// use std::sync::Arc;
        /// use std::thread;
        ///
        #[doc = concat!("let counter = Arc::new(", stringify!($name), "::new(0));")]
        /// let mut handles = vec![];
        ///
        /// for _ in 0..10 {
        ///     let counter = counter.clone();
        ///     let handle = thread::spawn(move || {
        ///         for _ in 0..100 {
        ///             counter.inc();
        ///         }
        ///     });
        ///     handles.push(handle);
        /// }
        ///
        /// for handle in handles {
        ///     handle.join().unwrap();
        /// }
        ///
        /// assert_eq!(counter.read(), 1000);
        /// ```
        ///
        /// # Author
        ///
        /// Haixing Hu
        #[repr(transparent)]
        pub struct $name {
            inner: $inner_type,
            policy: PhantomData<$policy>,
        }

        impl $name {
            /// Creates a new counter.
            ///
            /// Usable in `static` initializers.
            ///
            /// # Parameters
            ///
            /// * `value` - The initial value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("static REFS: ", stringify!($name), " = ", stringify!($name), "::new(1);")]
            /// assert_eq!(REFS.read(), 1);
            /// ```
            #[cfg(not(loom))]
            #[inline]
            pub const fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                    policy: PhantomData,
                }
            }

            /// Creates a new counter.
            #[cfg(loom)]
            pub fn new(value: $value_type) -> Self {
                Self {
                    inner: <$inner_type>::new(value),
                    policy: PhantomData,
                }
            }

            /// Reads the current value.
            ///
            /// A bare `Relaxed` load: it is never retried and never faults.
            #[inline]
            pub fn read(&self) -> $value_type {
                engine::read::<$value_type>(&self.inner)
            }

            /// Overwrites the current value.
            #[inline]
            pub fn set(&self, value: $value_type) {
                engine::set::<$value_type>(&self.inner, value);
            }

            /// Adds `delta` to the counter.
            ///
            /// # Parameters
            ///
            /// * `delta` - The signed value to add.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// atomic.add(5);
            /// assert_eq!(atomic.read(), 15);
            /// ```
            #[inline]
            pub fn add(&self, delta: $value_type) {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::Add, delta);
            }

            /// Subtracts `delta` from the counter.
            #[inline]
            pub fn sub(&self, delta: $value_type) {
                engine::sub_return::<$value_type, $policy>(&self.inner, Operation::Sub, delta);
            }

            /// Adds `delta`, returning the new value.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.add_return(5), 15);
            /// ```
            #[inline]
            pub fn add_return(&self, delta: $value_type) -> $value_type {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::AddReturn, delta)
            }

            /// Subtracts `delta`, returning the new value.
            #[inline]
            pub fn sub_return(&self, delta: $value_type) -> $value_type {
                engine::sub_return::<$value_type, $policy>(&self.inner, Operation::SubReturn, delta)
            }

            /// Adds one.
            #[inline]
            pub fn inc(&self) {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::Inc, 1);
            }

            /// Subtracts one.
            #[inline]
            pub fn dec(&self) {
                engine::sub_return::<$value_type, $policy>(&self.inner, Operation::Dec, 1);
            }

            /// Adds one, returning the new value.
            #[inline]
            pub fn inc_return(&self) -> $value_type {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::IncReturn, 1)
            }

            /// Subtracts one, returning the new value.
            #[inline]
            pub fn dec_return(&self) -> $value_type {
                engine::sub_return::<$value_type, $policy>(&self.inner, Operation::DecReturn, 1)
            }

            /// Adds `delta`, returning the previous value.
            ///
            /// The new value still passes the overflow policy before it is
            /// committed.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.fetch_add(5), 10);
            /// assert_eq!(atomic.read(), 15);
            /// ```
            #[inline]
            pub fn fetch_add(&self, delta: $value_type) -> $value_type {
                engine::fetch_add::<$value_type, $policy>(&self.inner, Operation::FetchAdd, delta)
            }

            /// Subtracts `delta`, returning the previous value.
            #[inline]
            pub fn fetch_sub(&self, delta: $value_type) -> $value_type {
                engine::fetch_sub::<$value_type, $policy>(&self.inner, Operation::FetchSub, delta)
            }

            /// Adds one and reports whether the result is zero.
            #[inline]
            pub fn inc_and_test(&self) -> bool {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::IncAndTest, 1) == 0
            }

            /// Subtracts one and reports whether the result is zero.
            ///
            /// This is the usual "drop the last reference" test.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let refs = ", stringify!($name), "::new(2);")]
            /// assert!(!refs.dec_and_test());
            /// assert!(refs.dec_and_test());
            /// ```
            #[inline]
            pub fn dec_and_test(&self) -> bool {
                engine::sub_return::<$value_type, $policy>(&self.inner, Operation::DecAndTest, 1) == 0
            }

            /// Subtracts `delta` and reports whether the result is zero.
            #[inline]
            pub fn sub_and_test(&self, delta: $value_type) -> bool {
                engine::sub_return::<$value_type, $policy>(&self.inner, Operation::SubAndTest, delta) == 0
            }

            /// Adds `delta` and reports whether the result is zero.
            #[inline]
            pub fn add_and_test(&self, delta: $value_type) -> bool {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::AddAndTest, delta) == 0
            }

            /// Adds `delta` and reports whether the result is negative.
            #[inline]
            pub fn add_negative(&self, delta: $value_type) -> bool {
                engine::add_return::<$value_type, $policy>(&self.inner, Operation::AddNegative, delta) < 0
            }

            /// Adds `a` unless the counter currently equals `u`.
            ///
            /// # Memory Ordering
            ///
            /// Fully ordered when the add happens. When the counter already
            /// equals `u`, nothing is added and no trailing fence is issued.
            ///
            /// # Parameters
            ///
            /// * `a` - The value to add.
            /// * `u` - The sentinel that suppresses the add.
            ///
            /// # Returns
            ///
            /// The value observed before the operation. The add happened
            /// exactly when it differs from `u`.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(0);")]
            /// assert_eq!(atomic.add_unless(1, 0), 0);
            /// assert_eq!(atomic.read(), 0);
            ///
            /// atomic.set(3);
            /// assert_eq!(atomic.add_unless(1, 0), 3);
            /// assert_eq!(atomic.read(), 4);
            /// ```
            #[inline]
            pub fn add_unless(&self, a: $value_type, u: $value_type) -> $value_type {
                engine::add_unless::<$value_type, $policy>(&self.inner, a, u)
            }

            /// Takes a new reference unless the count already dropped to
            /// zero.
            ///
            /// # Returns
            ///
            /// `true` if the counter was non-zero and got incremented.
            #[inline]
            pub fn inc_not_zero(&self) -> bool {
                self.add_unless(1, 0) != 0
            }

            /// Decrements the counter only if it is positive.
            ///
            /// Fully ordered on entry and exit.
            ///
            /// # Returns
            ///
            /// The decremented value. A negative result means the counter
            /// was not positive and was left unchanged.
            #[inline]
            pub fn dec_if_positive(&self) -> $value_type {
                engine::dec_if_positive::<$value_type, $policy>(&self.inner)
            }

            /// Bitwise AND with `mask`.
            #[inline]
            pub fn and(&self, mask: $value_type) {
                self.fetch_and(mask);
            }

            /// Clears the bits set in `mask`.
            #[inline]
            pub fn andnot(&self, mask: $value_type) {
                self.fetch_andnot(mask);
            }

            /// Bitwise OR with `mask`.
            #[inline]
            pub fn or(&self, mask: $value_type) {
                self.fetch_or(mask);
            }

            /// Bitwise XOR with `mask`.
            #[inline]
            pub fn xor(&self, mask: $value_type) {
                self.fetch_xor(mask);
            }

            /// Bitwise AND, returning the previous value.
            ///
            /// Bitwise operations carry no signed meaning and never fault.
            #[inline]
            pub fn fetch_and(&self, mask: $value_type) -> $value_type {
                engine::fetch_bitwise::<$value_type, _>(&self.inner, |v| v.bit_and(mask))
            }

            /// Clears the bits set in `mask`, returning the previous value.
            #[inline]
            pub fn fetch_andnot(&self, mask: $value_type) -> $value_type {
                engine::fetch_bitwise::<$value_type, _>(&self.inner, |v| v.bit_and(mask.bit_not()))
            }

            /// Bitwise OR, returning the previous value.
            #[inline]
            pub fn fetch_or(&self, mask: $value_type) -> $value_type {
                engine::fetch_bitwise::<$value_type, _>(&self.inner, |v| v.bit_or(mask))
            }

            /// Bitwise XOR, returning the previous value.
            #[inline]
            pub fn fetch_xor(&self, mask: $value_type) -> $value_type {
                engine::fetch_bitwise::<$value_type, _>(&self.inner, |v| v.bit_xor(mask))
            }

            /// Replaces the value unconditionally, returning the previous
            /// one. Never faults.
            #[inline]
            pub fn xchg(&self, value: $value_type) -> $value_type {
                engine::xchg::<$value_type>(&self.inner, value)
            }

            /// Replaces the value with `new` if it currently equals `old`.
            ///
            /// Never faults.
            ///
            /// # Returns
            ///
            /// The value observed before the attempt, whether or not the
            /// replacement happened.
            ///
            /// # Example
            ///
            /// ```rust
            #[doc = concat!("use hardened_atomic::", stringify!($name), ";")]
            ///
            #[doc = concat!("let atomic = ", stringify!($name), "::new(10);")]
            /// assert_eq!(atomic.cmpxchg(10, 20), 10);
            /// assert_eq!(atomic.cmpxchg(10, 30), 20);
            /// assert_eq!(atomic.read(), 20);
            /// ```
            #[inline]
            pub fn cmpxchg(&self, old: $value_type, new: $value_type) -> $value_type {
                engine::cmpxchg::<$value_type>(&self.inner, old, new)
            }

            /// Gets a reference to the underlying atomic cell.
            ///
            /// Writes through the cell bypass the overflow policy.
            #[inline]
            pub fn inner(&self) -> &$inner_type {
                &self.inner
            }
        }

        // Trait implementations forward to the inherent methods so both
        // direct calls and generic code over `AtomicCounter` work.

        impl crate::atomic::traits::Atomic for $name {
            type Value = $value_type;

            #[inline]
            fn with_value(value: $value_type) -> Self {
                Self::new(value)
            }

            #[inline]
            fn read(&self) -> $value_type {
                self.read()
            }

            #[inline]
            fn set(&self, value: $value_type) {
                self.set(value);
            }

            #[inline]
            fn xchg(&self, value: $value_type) -> $value_type {
                self.xchg(value)
            }

            #[inline]
            fn cmpxchg(&self, old: $value_type, new: $value_type) -> $value_type {
                self.cmpxchg(old, new)
            }

            #[inline]
            fn fetch_and(&self, mask: $value_type) -> $value_type {
                self.fetch_and(mask)
            }

            #[inline]
            fn fetch_andnot(&self, mask: $value_type) -> $value_type {
                self.fetch_andnot(mask)
            }

            #[inline]
            fn fetch_or(&self, mask: $value_type) -> $value_type {
                self.fetch_or(mask)
            }

            #[inline]
            fn fetch_xor(&self, mask: $value_type) -> $value_type {
                self.fetch_xor(mask)
            }
        }

        impl crate::atomic::traits::AtomicCounter for $name {
            type Policy = $policy;

            #[inline]
            fn add(&self, delta: $value_type) {
                self.add(delta);
            }

            #[inline]
            fn sub(&self, delta: $value_type) {
                self.sub(delta);
            }

            #[inline]
            fn add_return(&self, delta: $value_type) -> $value_type {
                self.add_return(delta)
            }

            #[inline]
            fn sub_return(&self, delta: $value_type) -> $value_type {
                self.sub_return(delta)
            }

            #[inline]
            fn inc(&self) {
                self.inc();
            }

            #[inline]
            fn dec(&self) {
                self.dec();
            }

            #[inline]
            fn inc_return(&self) -> $value_type {
                self.inc_return()
            }

            #[inline]
            fn dec_return(&self) -> $value_type {
                self.dec_return()
            }

            #[inline]
            fn fetch_add(&self, delta: $value_type) -> $value_type {
                self.fetch_add(delta)
            }

            #[inline]
            fn fetch_sub(&self, delta: $value_type) -> $value_type {
                self.fetch_sub(delta)
            }

            #[inline]
            fn inc_and_test(&self) -> bool {
                self.inc_and_test()
            }

            #[inline]
            fn dec_and_test(&self) -> bool {
                self.dec_and_test()
            }

            #[inline]
            fn sub_and_test(&self, delta: $value_type) -> bool {
                self.sub_and_test(delta)
            }

            #[inline]
            fn add_and_test(&self, delta: $value_type) -> bool {
                self.add_and_test(delta)
            }

            #[inline]
            fn add_negative(&self, delta: $value_type) -> bool {
                self.add_negative(delta)
            }

            #[inline]
            fn add_unless(&self, a: $value_type, u: $value_type) -> $value_type {
                self.add_unless(a, u)
            }

            #[inline]
            fn dec_if_positive(&self) -> $value_type {
                self.dec_if_positive()
            }
        }

        impl Default for $name {
            #[inline]
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value_type> for $name {
            #[inline]
            fn from(value: $value_type) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("value", &self.read())
                    .finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.read())
            }
        }
    };
}

pub(crate) use impl_atomic_counter;
