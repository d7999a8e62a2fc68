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

//! Doubly linked list of the cino container family.
//!
//! ```
//! use cino_list::{ElementKind, List, ListBuilder};
//!
//! let mut scores = List::<i32>::primitive();
//! scores.extend([3, 1, 4, 1, 5]);
//! assert_eq!(scores.index_of(&1), Some(1));
//!
//! let mut names = ListBuilder::<String>::new(ElementKind::Generic)
//!     .with_compare(|a: &String, b: &String| a.cmp(b))
//!     .build()
//!     .unwrap();
//! names.push_back("cino".to_string());
//! assert!(names.contains(&"cino".to_string()));
//! ```

mod config;
mod list;
mod node;

pub use cino_common::{
    error::{Error, Rejected, Result},
    kind::{ElementKind, Primitive},
    policy::{Comparator, Destructor, Policies},
};
pub use config::{ListBuilder, ListConfig};
pub use list::{Direction, IntoIter, Iter, List};
