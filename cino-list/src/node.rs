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

//! Node arena of the doubly linked list.
//!
//! Nodes live in a [`Slab`] and are addressed by [`Token`]s. The chain is closed by two sentinels that never carry
//! an element, so splicing and unlinking never branch on the ends of the chain.

use std::num::NonZeroUsize;

use cino_common::{strict_assert, strict_assert_eq};
use slab::Slab;

/// Stable address of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token(NonZeroUsize);

impl Token {
    const MASK: usize = 1 << (usize::BITS - 1);

    /// Create a token from a raw slab key.
    pub fn from_raw(raw: usize) -> Self {
        // The highest bit is reserved to keep the token non-zero.
        strict_assert_eq!(0, raw & Self::MASK);
        let inner = unsafe { NonZeroUsize::new_unchecked(raw | Self::MASK) };
        Self(inner)
    }

    /// Get the raw slab key of the token.
    pub fn to_raw(self) -> usize {
        self.0.get() & !Self::MASK
    }
}

/// A position in the chain: one of the two sentinels or a live node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Head,
    Tail,
    Node(Token),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Links {
    pub prev: Link,
    pub next: Link,
}

impl Links {
    /// Links of both sentinels of an empty chain.
    const CLOSED: Self = Self {
        prev: Link::Head,
        next: Link::Tail,
    };
}

pub struct Node<T> {
    links: Links,
    data: T,
}

impl<T> Node<T> {
    pub fn new(data: T, links: Links) -> Self {
        Self { links, data }
    }
}

/// The sentinel-bounded node chain.
///
/// Only `head.next` and `tail.prev` are meaningful for the sentinels.
pub struct Chain<T> {
    head: Links,
    tail: Links,
    nodes: Slab<Node<T>>,
    len: usize,
}

impl<T> Chain<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: Links::CLOSED,
            tail: Links::CLOSED,
            nodes: Slab::with_capacity(capacity),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        strict_assert_eq!(
            self.len == 0,
            self.head.next == Link::Tail && self.tail.prev == Link::Head
        );
        self.len == 0
    }

    /// The link after `link`. The tail sentinel links to itself.
    pub fn next(&self, link: Link) -> Link {
        match link {
            Link::Tail => Link::Tail,
            link => self.links(link).next,
        }
    }

    /// The link before `link`. The head sentinel links to itself.
    pub fn prev(&self, link: Link) -> Link {
        match link {
            Link::Head => Link::Head,
            link => self.links(link).prev,
        }
    }

    pub fn first(&self) -> Option<Token> {
        match self.head.next {
            Link::Node(token) => Some(token),
            _ => None,
        }
    }

    pub fn last(&self) -> Option<Token> {
        match self.tail.prev {
            Link::Node(token) => Some(token),
            _ => None,
        }
    }

    pub fn data(&self, token: Token) -> &T {
        &self.nodes[token.to_raw()].data
    }

    pub fn data_mut(&mut self, token: Token) -> &mut T {
        &mut self.nodes[token.to_raw()].data
    }

    /// Swap the element of a node, returning the old one.
    pub fn replace(&mut self, token: Token, data: T) -> T {
        std::mem::replace(self.data_mut(token), data)
    }

    /// Build a node for `data` and splice it right before `next`.
    pub fn link_before(&mut self, next: Link, data: T) -> Token {
        strict_assert!(next != Link::Head);

        let prev = self.links(next).prev;
        let token = Token::from_raw(self.nodes.insert(Node::new(data, Links { prev, next })));

        self.links_mut(prev).next = Link::Node(token);
        self.links_mut(next).prev = Link::Node(token);
        self.len += 1;

        strict_assert_eq!(self.len, self.nodes.len());
        token
    }

    /// Detach a node from the chain and release it, handing its element back.
    pub fn unlink(&mut self, token: Token) -> T {
        let Node { links, data } = self.nodes.remove(token.to_raw());

        self.links_mut(links.prev).next = links.next;
        self.links_mut(links.next).prev = links.prev;
        self.len -= 1;

        strict_assert_eq!(self.len, self.nodes.len());
        data
    }

    fn links(&self, link: Link) -> &Links {
        match link {
            Link::Head => &self.head,
            Link::Tail => &self.tail,
            Link::Node(token) => &self.nodes[token.to_raw()].links,
        }
    }

    fn links_mut(&mut self, link: Link) -> &mut Links {
        match link {
            Link::Head => &mut self.head,
            Link::Tail => &mut self.tail,
            Link::Node(token) => &mut self.nodes[token.to_raw()].links,
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn forward<T: Copy>(chain: &Chain<T>) -> Vec<T> {
        let mut res = vec![];
        let mut link = chain.next(Link::Head);
        while let Link::Node(token) = link {
            res.push(*chain.data(token));
            link = chain.next(link);
        }
        res
    }

    fn backward<T: Copy>(chain: &Chain<T>) -> Vec<T> {
        let mut res = vec![];
        let mut link = chain.prev(Link::Tail);
        while let Link::Node(token) = link {
            res.push(*chain.data(token));
            link = chain.prev(link);
        }
        res
    }

    /// Every live node must satisfy `prev.next == self == next.prev`.
    fn assert_closed<T>(chain: &Chain<T>) {
        let mut link = Link::Head;
        let mut count = 0;
        loop {
            let next = chain.next(link);
            assert_eq!(chain.prev(next), link);
            if next == Link::Tail {
                break;
            }
            link = next;
            count += 1;
        }
        assert_eq!(count, chain.len());
    }

    #[test]
    fn test_repr() {
        assert_eq!(std::mem::size_of::<Token>(), std::mem::size_of::<Option<Token>>());
        assert_eq!(Token::from_raw(42).to_raw(), 42);
    }

    #[test]
    fn test_chain_simple() {
        let mut chain = Chain::with_capacity(4);
        assert!(chain.is_empty());
        assert!(chain.first().is_none());
        assert!(chain.last().is_none());
        assert_closed(&chain);

        let t2 = chain.link_before(Link::Tail, 2);
        let t1 = chain.link_before(Link::Node(t2), 1);
        chain.link_before(Link::Tail, 4);
        chain.link_before(chain.prev(Link::Tail), 3);
        assert_closed(&chain);

        assert_eq!(forward(&chain), vec![1, 2, 3, 4]);
        assert_eq!(backward(&chain), vec![4, 3, 2, 1]);
        assert_eq!(chain.first(), Some(t1));
        assert_eq!(chain.len(), 4);

        assert_eq!(chain.unlink(t2), 2);
        assert_eq!(chain.replace(t1, 10), 1);
        assert_closed(&chain);
        assert_eq!(forward(&chain), vec![10, 3, 4]);

        let tokens = std::iter::successors(chain.first(), |&token| match chain.next(Link::Node(token)) {
            Link::Node(next) => Some(next),
            _ => None,
        })
        .collect_vec();
        for token in tokens {
            chain.unlink(token);
            assert_closed(&chain);
        }
        assert!(chain.is_empty());
        assert_eq!(chain.next(Link::Head), Link::Tail);
        assert_eq!(chain.prev(Link::Tail), Link::Head);
    }

    #[test]
    fn test_sentinels_are_fixed_points() {
        let mut chain = Chain::with_capacity(0);
        chain.link_before(Link::Tail, 'a');
        assert_eq!(chain.next(Link::Tail), Link::Tail);
        assert_eq!(chain.prev(Link::Head), Link::Head);
    }
}
