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

use std::fmt::Debug;

use crate::kind::ElementKind;

/// Errors reported by cino containers.
///
/// Every error is raised before the container is mutated, so a failed operation always leaves the container
/// unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The element kind name is not one of `int`, `double`, `char` or `generic`.
    #[error("unknown element kind: {0:?}")]
    UnknownKind(String),
    /// A primitive kind was requested that differs from the element type's own kind.
    #[error("element kind mismatch, expected: {expected}, actual: {actual}")]
    KindMismatch {
        /// Kind of the element type.
        expected: ElementKind,
        /// Kind that was requested.
        actual: ElementKind,
    },
    /// A primitive kind was requested for a non-primitive element type without a comparator.
    #[error("no comparator supplied for {0} container of non-primitive elements")]
    MissingComparator(ElementKind),
    /// The index is outside of the valid range of the operation.
    #[error("index out of range, index: {index}, len: {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the container at the time of the request.
        len: usize,
    },
}

/// Result type of cino containers.
pub type Result<T> = std::result::Result<T, Error>;

/// An element refused by an insertion, handed back to the caller together with the reason.
pub struct Rejected<T> {
    /// The refused element.
    pub element: T,
    /// Why it was refused.
    pub error: Error,
}

impl<T> Rejected<T> {
    /// Create a rejection for `element`.
    pub fn new(element: T, error: Error) -> Self {
        Self { element, error }
    }

    /// Take the refused element back.
    pub fn into_element(self) -> T {
        self.element
    }
}

impl<T> Debug for Rejected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rejected").field("error", &self.error).finish_non_exhaustive()
    }
}

impl<T> std::fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "element rejected: {}", self.error)
    }
}

impl<T> std::error::Error for Rejected<T> {}

impl<T> From<Rejected<T>> for Error {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}
