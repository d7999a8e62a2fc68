//  Copyright 2024 cino Project Authors
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//  http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.

/// Use `assert!` with feature "strict_assertions", otherwise use `debug_assert!`.
#[macro_export]
macro_rules! strict_assert {
    ($($arg:tt)*) => {
        #[cfg(feature = "strict_assertions")]
        assert!($($arg)*);
        #[cfg(not(feature = "strict_assertions"))]
        debug_assert!($($arg)*);
    }
}

/// Use `assert_eq!` with feature "strict_assertions", otherwise use `debug_assert_eq!`.
#[macro_export]
macro_rules! strict_assert_eq {
    ($($arg:tt)*) => {
        #[cfg(feature = "strict_assertions")]
        assert_eq!($($arg)*);
        #[cfg(not(feature = "strict_assertions"))]
        debug_assert_eq!($($arg)*);
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_strict_assert_pass() {
        strict_assert!(1 + 1 == 2);
        strict_assert_eq!(2, 1 + 1, "math is broken");
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict_assertions"))]
    #[should_panic]
    fn test_strict_assert_fail() {
        let len = 0usize;
        strict_assert_eq!(len, 1);
    }
}
