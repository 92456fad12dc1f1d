/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_hardened_atomic!(AtomicI32, i32, atomic_i32_tests);
test_hardened_atomic!(AtomicI64, i64, atomic_i64_tests);
test_hardened_atomic!(AtomicWrapI32, i32, atomic_wrap_i32_tests);
test_hardened_atomic!(AtomicWrapI64, i64, atomic_wrap_i64_tests);
