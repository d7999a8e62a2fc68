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

use cino_common::{
    error::{Error, Result},
    kind::{ElementKind, Primitive},
    policy::{Comparator, Destructor, Policies},
};
use serde::{Deserialize, Serialize};

use crate::list::List;

/// Creation-time configuration of a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListConfig {
    /// Element kind of the list.
    pub kind: ElementKind,
    /// Number of nodes to pre-allocate.
    #[serde(default)]
    pub capacity: usize,
}

/// Builder of a [`List`].
///
/// Policies left unset fall back to the defaults of the configured kind.
pub struct ListBuilder<T> {
    config: ListConfig,
    compare: Option<Comparator<T>>,
    destroy: Option<Destructor<T>>,
}

impl<T: 'static> ListBuilder<T> {
    /// Start building a list of `kind`.
    pub fn new(kind: ElementKind) -> Self {
        Self::from_config(ListConfig { kind, capacity: 0 })
    }

    /// Start building a list from a configuration.
    pub fn from_config(config: ListConfig) -> Self {
        Self {
            config,
            compare: None,
            destroy: None,
        }
    }

    /// Pre-allocate room for `capacity` nodes.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Override the comparison policy.
    pub fn with_compare(mut self, compare: impl Fn(&T, &T) -> std::cmp::Ordering + 'static) -> Self {
        self.compare = Some(Box::new(compare));
        self
    }

    /// Override the destruction policy.
    pub fn with_destroy(mut self, destroy: impl FnMut(T) + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }

    /// Set the policies from optional overrides.
    pub fn with_policies(mut self, compare: Option<Comparator<T>>, destroy: Option<Destructor<T>>) -> Self {
        if compare.is_some() {
            self.compare = compare;
        }
        if destroy.is_some() {
            self.destroy = destroy;
        }
        self
    }

    /// Build the list.
    ///
    /// Without a comparator, a primitive kind cannot be honoured for an arbitrary element type and the build fails
    /// with [`Error::MissingComparator`]. Use [`ListBuilder::build_with_defaults`] for primitive element types.
    pub fn build(self) -> Result<List<T>> {
        let Self {
            config,
            compare,
            destroy,
        } = self;
        let policies = match compare {
            Some(compare) => Policies::generic().with_compare(compare),
            None if config.kind.is_primitive() => return Err(Error::MissingComparator(config.kind)),
            None => Policies::generic(),
        };
        Ok(Self::finish(config, policies, destroy))
    }

    fn finish(config: ListConfig, policies: Policies<T>, destroy: Option<Destructor<T>>) -> List<T> {
        let policies = match destroy {
            Some(destroy) => policies.with_destroy(destroy),
            None => policies,
        };
        List::from_parts(config.kind, config.capacity, policies)
    }
}

impl<T: Primitive> ListBuilder<T> {
    /// Build the list, binding the default policies of the configured kind for every policy left unset.
    ///
    /// Fails with [`Error::KindMismatch`] if a primitive kind other than the element type's own kind is configured.
    pub fn build_with_defaults(self) -> Result<List<T>> {
        let Self {
            config,
            compare,
            destroy,
        } = self;
        let policies = Policies::for_kind(config.kind)?;
        let policies = match compare {
            Some(compare) => policies.with_compare(compare),
            None => policies,
        };
        Ok(Self::finish(config, policies, destroy))
    }
}
