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

use std::cmp::Ordering;

use crate::{
    error::{Error, Result},
    kind::{ElementKind, Primitive},
};

/// Comparison policy of a container.
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering>;

/// Destruction policy of a container.
///
/// The destructor receives ownership of every element that leaves the container without being handed back to the
/// caller.
pub type Destructor<T> = Box<dyn FnMut(T)>;

/// Compares two elements by identity.
///
/// Two references are equal only if they point to the same element. This is the default comparator of the generic
/// kind and is almost never what callers want: override it.
pub fn compare_identity<T>(a: &T, b: &T) -> Ordering {
    (a as *const T).cmp(&(b as *const T))
}

/// Releases an element by dropping it.
pub fn destroy_drop<T>(element: T) {
    drop(element)
}

/// The comparison and destruction policies bound to a container.
pub struct Policies<T> {
    compare: Comparator<T>,
    destroy: Destructor<T>,
}

impl<T: 'static> Policies<T> {
    /// Default policies of the generic kind: identity comparison, drop on destroy.
    pub fn generic() -> Self {
        Self {
            compare: Box::new(compare_identity::<T>),
            destroy: Box::new(destroy_drop::<T>),
        }
    }

    /// Bind `compare` and keep the current destructor.
    pub fn with_compare(mut self, compare: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        self.compare = Box::new(compare);
        self
    }

    /// Bind `destroy` and keep the current comparator.
    pub fn with_destroy(mut self, destroy: impl FnMut(T) + 'static) -> Self {
        self.destroy = Box::new(destroy);
        self
    }
}

impl<T: Primitive> Policies<T> {
    /// Default policies of the element type's primitive kind.
    pub fn primitive() -> Self {
        Self {
            compare: Box::new(T::compare),
            destroy: Box::new(destroy_drop::<T>),
        }
    }

    /// Default policies for `kind`.
    ///
    /// A primitive kind must be the element type's own kind. The generic kind is accepted for any element type and
    /// binds the generic defaults.
    pub fn for_kind(kind: ElementKind) -> Result<Self> {
        match kind {
            ElementKind::Generic => Ok(Self::generic()),
            kind if kind == T::KIND => Ok(Self::primitive()),
            kind => Err(Error::KindMismatch {
                expected: T::KIND,
                actual: kind,
            }),
        }
    }

    /// Default policies selected by kind name, e.g. `"int"` or `"char"`.
    pub fn by_name(name: &str) -> Result<Self> {
        Self::for_kind(name.parse()?)
    }
}

impl<T> Policies<T> {
    /// Create policies from a comparator and a destructor.
    pub fn new(compare: Comparator<T>, destroy: Destructor<T>) -> Self {
        Self { compare, destroy }
    }

    /// Compare two elements with the bound comparator.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    /// Release an element with the bound destructor.
    pub fn destroy(&mut self, element: T) {
        (self.destroy)(element)
    }
}

impl<T> std::fmt::Debug for Policies<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Policies").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn test_primitive_policies() {
        let policies = Policies::<i64>::primitive();
        assert_eq!(policies.compare(&1, &2), Ordering::Less);
        assert_eq!(policies.compare(&2, &2), Ordering::Equal);

        let policies = Policies::<char>::by_name("char").unwrap();
        assert_eq!(policies.compare(&'z', &'a'), Ordering::Greater);
    }

    #[test]
    fn test_policies_by_name() {
        assert_eq!(
            Policies::<i32>::by_name("double").unwrap_err(),
            Error::KindMismatch {
                expected: ElementKind::Int,
                actual: ElementKind::Double,
            }
        );
        assert_eq!(
            Policies::<i32>::by_name("bool").unwrap_err(),
            Error::UnknownKind("bool".to_string())
        );

        // The generic kind compares by identity even for primitive element types.
        let policies = Policies::<i32>::by_name("generic").unwrap();
        let (a, b) = (7, 7);
        assert_eq!(policies.compare(&a, &a), Ordering::Equal);
        assert_ne!(policies.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_custom_policies() {
        let released = Rc::new(RefCell::new(vec![]));
        let r = released.clone();
        let mut policies = Policies::<String>::generic()
            .with_compare(|a: &String, b: &String| a.len().cmp(&b.len()))
            .with_destroy(move |s: String| r.borrow_mut().push(s));

        assert_eq!(policies.compare(&"ab".to_string(), &"cd".to_string()), Ordering::Equal);
        policies.destroy("gone".to_string());
        assert_eq!(*released.borrow(), vec!["gone".to_string()]);
    }
}
