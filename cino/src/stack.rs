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

/// Last-in first-out stack over a [`List`].
pub struct Stack<T> {
    list: List<T>,
}

list_adapter!(Stack);

impl<T> Stack<T> {
    /// Push an element on top of the stack.
    pub fn push(&mut self, element: T) {
        self.list.push_back(element);
    }

    /// Remove the top element and hand it back.
    pub fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    /// Get the reference of the top element.
    pub fn peek(&self) -> Option<&T> {
        self.list.back()
    }
}
