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

/// First-in first-out queue over a [`List`].
pub struct Queue<T> {
    list: List<T>,
}

list_adapter!(Queue);

impl<T> Queue<T> {
    /// Append an element to the back of the queue.
    pub fn enqueue(&mut self, element: T) {
        self.list.push_back(element);
    }

    /// Remove the front element and hand it back.
    pub fn dequeue(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    /// Get the reference of the front element.
    pub fn peek(&self) -> Option<&T> {
        self.list.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: u64 = 1000;

    #[test]
    fn test_queue_fifo() {
        let mut queue = Queue::<u64>::primitive();
        for i in 0..N {
            queue.enqueue(i);
        }
        assert_eq!(queue.len(), N as usize);

        for i in 0..N {
            assert_eq!(queue.peek(), Some(&i));
            assert_eq!(queue.dequeue(), Some(i));
        }
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = Queue::<i16>::primitive();
        queue.extend(0..100);
        assert_eq!(queue.clear(), 100);
        assert!(queue.is_empty());
    }
}
