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

//! cino - generic containers for Rust.
//!
//! Every container is created with an [`ElementKind`] and an optional pair of comparison and destruction
//! [`Policies`]. The [`List`] is the sentinel-bounded doubly linked list at the core of the family; [`Deque`],
//! [`Queue`] and [`Stack`] narrow its front and back operations.
//!
//! ```
//! use cino::{Queue, Stack};
//!
//! let mut queue = Queue::<u32>::primitive();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Some(1));
//!
//! let mut stack = Stack::<char>::primitive();
//! stack.push('a');
//! stack.push('b');
//! assert_eq!(stack.pop(), Some('b'));
//! ```

mod adapter;
mod deque;
mod queue;
mod stack;

pub use cino_list::{
    Comparator, Destructor, Direction, ElementKind, Error, IntoIter, Iter, List, ListBuilder, ListConfig,
    Policies, Primitive, Rejected, Result,
};
pub use deque::Deque;
pub use queue::Queue;
pub use stack::Stack;
