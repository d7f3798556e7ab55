/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Numerical sanity checks: these are always evaluated in tests or with the `extra_checks` feature, and
//! compiled out otherwise.

#[cfg(not(any(test, feature = "extra_checks")))]
macro_rules! test_assert {
    ($cond:expr) => {{}};
    ($cond:expr,) => {{}};
    ($cond:expr, $($arg:tt)+) => {{}};
}

#[cfg(any(test, feature = "extra_checks"))]
macro_rules! test_assert {
    ($cond:expr) => ({ assert!($cond); });
    ($cond:expr,) => ({ assert!($cond); });
    ($cond:expr, $($arg:tt)+) => ({ assert!($cond, $($arg)*); });
}

///
/// Checks that two floating point values are within a precision of each other
///
#[cfg(not(any(test, feature = "extra_checks")))]
#[allow(unused_macros)]
macro_rules! test_assert_near {
    ($a:expr, $b:expr, $precision:expr) => {{}};
}

#[cfg(any(test, feature = "extra_checks"))]
#[allow(unused_macros)]
macro_rules! test_assert_near {
    ($a:expr, $b:expr, $precision:expr) => ({
        let (a, b, precision): (f64, f64, f64) = ($a, $b, $precision);
        assert!((a - b).abs() <= precision, "{} and {} differ by more than {}", a, b, precision);
    });
}
