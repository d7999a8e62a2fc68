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

use std::{cmp::Ordering, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The category of elements a container holds.
///
/// The kind is fixed when a container is created and decides which default policies the container binds when the
/// caller does not supply its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Signed or unsigned integers.
    Int,
    /// Floating-point numbers.
    Double,
    /// Characters.
    Char,
    /// Caller-defined records.
    #[default]
    Generic,
}

impl ElementKind {
    /// All recognized kinds.
    pub const ALL: [ElementKind; 4] = [Self::Int, Self::Double, Self::Char, Self::Generic];

    /// Name of the kind, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            ElementKind::Int => "int",
            ElementKind::Double => "double",
            ElementKind::Char => "char",
            ElementKind::Generic => "generic",
        }
    }

    /// Check if the kind is one of the primitive kinds.
    pub fn is_primitive(&self) -> bool {
        !matches!(self, ElementKind::Generic)
    }
}

impl FromStr for ElementKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "int" => Ok(Self::Int),
            "double" => Ok(Self::Double),
            "char" => Ok(Self::Char),
            "generic" => Ok(Self::Generic),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Element types of the primitive kinds.
///
/// Primitive elements are stored by value and compared numerically (or by code point for characters).
pub trait Primitive: Copy + PartialEq + std::fmt::Debug + 'static {
    /// The kind of this element type.
    const KIND: ElementKind;

    /// Default comparison of the kind.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_primitive_int {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                const KIND: ElementKind = ElementKind::Int;

                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

impl_primitive_int! { i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize }

macro_rules! impl_primitive_float {
    ($($t:ty),*) => {
        $(
            impl Primitive for $t {
                const KIND: ElementKind = ElementKind::Double;

                fn compare(&self, other: &Self) -> Ordering {
                    self.total_cmp(other)
                }
            }
        )*
    };
}

impl_primitive_float! { f32, f64 }

impl Primitive for char {
    const KIND: ElementKind = ElementKind::Char;

    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}
