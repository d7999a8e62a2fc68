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

//! Shared construction surface of the list adapters.

/// Implement the creation contract and the common queries of an adapter that wraps a `list: List<T>` field.
macro_rules! list_adapter {
    ($name:ident) => {
        impl<T: cino_list::Primitive> $name<T> {
            #[doc = concat!("Create a ", stringify!($name), " of the element type's primitive kind.")]
            pub fn primitive() -> Self {
                Self::from(cino_list::List::<T>::primitive())
            }

            #[doc = concat!("Create a ", stringify!($name), " of `kind` with the kind's default policies.")]
            pub fn new(kind: cino_list::ElementKind) -> cino_list::Result<Self> {
                cino_list::List::<T>::new(kind).map(Self::from)
            }

            #[doc = concat!("Create a ", stringify!($name), " of `kind`, defaulting every policy not supplied.")]
            pub fn with_policies(
                kind: cino_list::ElementKind,
                compare: Option<cino_list::Comparator<T>>,
                destroy: Option<cino_list::Destructor<T>>,
            ) -> cino_list::Result<Self> {
                cino_list::List::<T>::with_policies(kind, compare, destroy).map(Self::from)
            }
        }

        impl<T: 'static> $name<T> {
            #[doc = concat!("Create a ", stringify!($name), " of the generic kind with the generic default policies.")]
            pub fn generic() -> Self {
                Self::from(cino_list::List::<T>::generic())
            }
        }

        impl<T> $name<T> {
            /// Get the element kind.
            pub fn kind(&self) -> cino_list::ElementKind {
                self.list.kind()
            }

            /// Get the number of elements.
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Check if there are no elements.
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Destroy every element with the destruction policy, returning how many were destroyed.
            pub fn clear(&mut self) -> usize {
                self.list.clear()
            }

            /// Get the element reference iterator, from the front to the back.
            pub fn iter(&self) -> cino_list::Iter<'_, T> {
                self.list.iter()
            }

            /// Unwrap the underlying list.
            pub fn into_list(self) -> cino_list::List<T> {
                self.list
            }
        }

        impl<T> From<cino_list::List<T>> for $name<T> {
            fn from(list: cino_list::List<T>) -> Self {
                tracing::debug!(kind = %list.kind(), len = list.len(), concat!("[", stringify!($name), "]: create"));
                Self { list }
            }
        }

        impl<T> Extend<T> for $name<T> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                self.list.extend(iter)
            }
        }

        impl<T: std::fmt::Debug> std::fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.list).finish()
            }
        }
    };
}

pub(crate) use list_adapter;
