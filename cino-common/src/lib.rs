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

//! Shared components for cino containers.
//!
//! Every container in the family is configured with an [`ElementKind`] and a pair of
//! [`Policies`]. This crate defines that protocol together with the error taxonomy
//! used by all containers.

/// Assertions that are enforced in release builds with the `strict_assertions` feature.
pub mod assert;
/// Error taxonomy of cino containers.
pub mod error;
/// Element kinds and the primitive element trait.
pub mod kind;
/// Comparison and destruction policies.
pub mod policy;

pub use error::{Error, Rejected, Result};
pub use kind::{ElementKind, Primitive};
pub use policy::{Comparator, Destructor, Policies};
