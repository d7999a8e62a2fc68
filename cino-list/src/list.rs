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

//! Sentinel-bounded doubly linked list with pluggable policies.

use std::{cmp::Ordering, fmt::Debug, iter::FusedIterator};

use cino_common::{
    error::{Error, Rejected, Result},
    kind::{ElementKind, Primitive},
    policy::{Comparator, Destructor, Policies},
    strict_assert,
};

use crate::{
    config::ListBuilder,
    node::{Chain, Link, Token},
};

/// Direction of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the front to the back.
    Forward,
    /// From the back to the front.
    Backward,
}

/// A doubly linked list that owns its elements.
///
/// The list is created with an [`ElementKind`] and a pair of [`Policies`]. The comparison policy drives
/// [`List::index_of`]; the destruction policy receives every element the list releases on its own, that is on
/// [`List::clear`], [`List::erase`], [`List::set`] and when the list is dropped. Elements handed back to the caller by
/// [`List::pop_front`], [`List::pop_back`] or [`List::remove`] never pass through the destruction policy.
///
/// Indexed access walks from whichever end of the chain is nearer, so accessing index `i` of a list of length `n`
/// visits at most `min(i, n - i) + 1` nodes.
///
/// # Example
///
/// ```
/// use cino_list::List;
///
/// let mut list = List::<char>::primitive();
/// list.push_back('a');
/// list.push_back('b');
/// list.push_back('c');
///
/// assert_eq!(list.get(1), Some(&'b'));
/// assert_eq!(list.remove(1), Some('b'));
/// assert_eq!(list.get(1), Some(&'c'));
/// assert_eq!(list.len(), 2);
///
/// list.clear();
/// assert!(list.is_empty());
/// ```
pub struct List<T> {
    chain: Chain<T>,
    kind: ElementKind,
    policies: Policies<T>,
}

impl<T: Primitive> List<T> {
    /// Create a list of the element type's primitive kind with its default policies.
    pub fn primitive() -> Self {
        Self::from_parts(T::KIND, 0, Policies::primitive())
    }

    /// Create a list of `kind` with the kind's default policies.
    pub fn new(kind: ElementKind) -> Result<Self> {
        Self::with_policies(kind, None, None)
    }

    /// Create a list of `kind`, binding the kind's default for every policy not supplied.
    ///
    /// Fails with [`Error::KindMismatch`] if `kind` is a primitive kind other than the element type's own kind.
    pub fn with_policies(
        kind: ElementKind,
        compare: Option<Comparator<T>>,
        destroy: Option<Destructor<T>>,
    ) -> Result<Self> {
        ListBuilder::new(kind)
            .with_policies(compare, destroy)
            .build_with_defaults()
    }
}

impl<T: 'static> List<T> {
    /// Create a list of the generic kind with the generic default policies.
    ///
    /// The generic default comparator compares by identity, so [`List::index_of`] will not find anything that is
    /// not stored in the list itself. Supply a comparator with [`ListBuilder`] to search by value.
    pub fn generic() -> Self {
        Self::from_parts(ElementKind::Generic, 0, Policies::generic())
    }
}

impl<T> List<T> {
    pub(crate) fn from_parts(kind: ElementKind, capacity: usize, policies: Policies<T>) -> Self {
        tracing::debug!(%kind, capacity, "[list]: create");
        Self {
            chain: Chain::with_capacity(capacity),
            kind,
            policies,
        }
    }

    /// Get the element kind of the list.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Get the policies bound to the list.
    pub fn policies(&self) -> &Policies<T> {
        &self.policies
    }

    /// Get the number of elements in the list.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Destroy every element from the front to the back.
    ///
    /// The list is left in the same state as a freshly created one. Returns the number of destroyed elements.
    pub fn clear(&mut self) -> usize {
        let mut destroyed = 0;
        while let Some(token) = self.chain.first() {
            let element = self.chain.unlink(token);
            self.policies.destroy(element);
            destroyed += 1;
        }
        strict_assert!(self.chain.is_empty());
        tracing::trace!(destroyed, "[list]: clear");
        destroyed
    }

    /// Get the reference of the first element.
    pub fn front(&self) -> Option<&T> {
        self.chain.first().map(|token| self.chain.data(token))
    }

    /// Get the reference of the last element.
    pub fn back(&self) -> Option<&T> {
        self.chain.last().map(|token| self.chain.data(token))
    }

    /// Get the mutable reference of the first element.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.chain.first().map(|token| self.chain.data_mut(token))
    }

    /// Get the mutable reference of the last element.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.chain.last().map(|token| self.chain.data_mut(token))
    }

    /// Push an element to the first position.
    pub fn push_front(&mut self, element: T) {
        self.splice(0, element);
    }

    /// Push an element to the last position.
    pub fn push_back(&mut self, element: T) {
        self.splice(self.len(), element);
    }

    /// Remove the first element and hand it back.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(0)
    }

    /// Remove the last element and hand it back.
    pub fn pop_back(&mut self) -> Option<T> {
        let index = self.len().checked_sub(1)?;
        self.remove(index)
    }

    /// Insert an element so that it ends up at `index`.
    ///
    /// `index` may equal the length of the list, which appends. An out-of-range index hands the element back
    /// and leaves the list unchanged.
    pub fn insert(&mut self, index: usize, element: T) -> std::result::Result<(), Rejected<T>> {
        if index > self.len() {
            return Err(self.reject(index, element));
        }
        self.splice(index, element);
        Ok(())
    }

    /// Remove the element at `index` and hand it back without destroying it.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let token = self.resolve(index)?;
        Some(self.chain.unlink(token))
    }

    /// Remove the element at `index` and destroy it with the destruction policy.
    ///
    /// Returns `false` if `index` is out of range.
    pub fn erase(&mut self, index: usize) -> bool {
        match self.remove(index) {
            Some(element) => {
                self.policies.destroy(element);
                true
            }
            None => false,
        }
    }

    /// Get the reference of the element at `index`.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.resolve(index).map(|token| self.chain.data(token))
    }

    /// Get the mutable reference of the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.resolve(index).map(|token| self.chain.data_mut(token))
    }

    /// Replace the element at `index`, destroying the replaced one with the destruction policy.
    ///
    /// An out-of-range index hands the element back and leaves the list unchanged.
    pub fn set(&mut self, index: usize, element: T) -> std::result::Result<(), Rejected<T>> {
        let Some(token) = self.resolve(index) else {
            return Err(self.reject(index, element));
        };
        let old = self.chain.replace(token, element);
        self.policies.destroy(old);
        Ok(())
    }

    /// Find the index of the first element that compares equal to `target` under the comparison policy.
    ///
    /// The target stays owned by the caller.
    pub fn index_of(&self, target: &T) -> Option<usize> {
        self.iter()
            .position(|element| self.policies.compare(element, target) == Ordering::Equal)
    }

    /// Find the index of the first element accepted by `matcher`.
    pub fn index_where(&self, matcher: impl FnMut(&T) -> bool) -> Option<usize> {
        self.iter().position(matcher)
    }

    /// Check if any element compares equal to `target` under the comparison policy.
    pub fn contains(&self, target: &T) -> bool {
        self.index_of(target).is_some()
    }

    /// Visit every element in the given direction.
    pub fn for_each(&self, direction: Direction, visit: impl FnMut(&T)) {
        match direction {
            Direction::Forward => self.iter().for_each(visit),
            Direction::Backward => self.iter().rev().for_each(visit),
        }
    }

    /// Get the element reference iterator of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: &self.chain,
            front: Link::Head,
            back: Link::Tail,
            remaining: self.len(),
        }
    }

    /// Splice a new node in so that it ends up at `index`, which must be in `[0, len]`.
    ///
    /// All insertions go through here.
    fn splice(&mut self, index: usize, element: T) {
        let next = if index == self.len() {
            Link::Tail
        } else {
            match self.resolve(index) {
                Some(token) => Link::Node(token),
                None => Link::Tail,
            }
        };
        self.chain.link_before(next, element);
    }

    /// Resolve `index` to its node, walking from the nearer sentinel.
    fn resolve(&self, index: usize) -> Option<Token> {
        let len = self.len();
        if index >= len {
            return None;
        }

        let link = if index <= len / 2 {
            (0..=index).fold(Link::Head, |link, _| self.chain.next(link))
        } else {
            (0..len - index).fold(Link::Tail, |link, _| self.chain.prev(link))
        };

        match link {
            Link::Node(token) => Some(token),
            _ => None,
        }
    }

    fn reject(&self, index: usize, element: T) -> Rejected<T> {
        let error = Error::IndexOutOfRange { index, len: self.len() };
        tracing::debug!(%error, "[list]: reject element");
        Rejected::new(element, error)
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|element| self.push_back(element));
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Element reference iterator of the list.
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.front = self.chain.next(self.front);
        match self.front {
            Link::Node(token) => {
                self.remaining -= 1;
                Some(self.chain.data(token))
            }
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.back = self.chain.prev(self.back);
        match self.back {
            Link::Node(token) => {
                self.remaining -= 1;
                Some(self.chain.data(token))
            }
            _ => None,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// Owning iterator of the list.
///
/// Elements yielded are handed to the caller; elements left when the iterator is dropped are destroyed with the
/// destruction policy.
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
