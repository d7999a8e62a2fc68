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

use cino_list::List;

use crate::adapter::list_adapter;

/// Double-ended queue over a [`List`].
pub struct Deque<T> {
    list: List<T>,
}

list_adapter!(Deque);

impl<T> Deque<T> {
    /// Push an element to the front.
    pub fn push_front(&mut self, element: T) {
        self.list.push_front(element);
    }

    /// Push an element to the back.
    pub fn push_back(&mut self, element: T) {
        self.list.push_back(element);
    }

    /// Remove the front element and hand it back.
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Remove the back element and hand it back.
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Get the reference of the front element.
    pub fn front(&self) -> Option<&T> {
        self.list.front()
    }

    /// Get the reference of the back element.
    pub fn back(&self) -> Option<&T> {
        self.list.back()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test_log::test]
    fn test_deque_both_ends() {
        let mut deque = Deque::<i32>::primitive();
        assert!(deque.is_empty());

        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);
        assert_eq!(deque.front(), Some(&1));
        assert_eq!(deque.back(), Some(&3));
        assert_eq!(deque.iter().copied().collect_vec(), vec![1, 2, 3]);

        assert_eq!(deque.pop_back(), Some(3));
        assert_eq!(deque.pop_front(), Some(1));
        assert_eq!(deque.pop_front(), Some(2));
        assert_eq!(deque.pop_back(), None);
        assert_eq!(deque.len(), 0);
    }

    #[test_log::test]
    fn test_deque_from_list() {
        let mut list = cino_list::List::<u8>::primitive();
        list.extend([1, 2]);

        let mut deque = Deque::from(list);
        assert_eq!(deque.kind(), cino_list::ElementKind::Int);
        deque.push_front(0);
        assert_eq!(deque.iter().copied().collect_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_deque_debug() {
        let mut deque = Deque::<char>::primitive();
        deque.extend(['x', 'y']);
        assert_eq!(format!("{deque:?}"), "Deque(['x', 'y'])");
    }
}
