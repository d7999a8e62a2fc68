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

//! Integration tests of the cino containers.

use std::{cell::RefCell, cmp::Ordering, rc::Rc};

use cino::{Deque, Direction, ElementKind, Error, List, ListBuilder, ListConfig, Queue, Stack};
use itertools::Itertools;

#[derive(Debug, Clone, PartialEq)]
struct Order {
    id: u64,
    price: f64,
}

fn order(id: u64, price: f64) -> Order {
    Order { id, price }
}

fn by_price(a: &Order, b: &Order) -> Ordering {
    a.price.total_cmp(&b.price)
}

#[test_log::test]
fn test_list_of_records() {
    let released = Rc::new(RefCell::new(vec![]));
    let r = released.clone();

    let mut orders: List<Order> = ListBuilder::<Order>::from_config(ListConfig {
        kind: ElementKind::Generic,
        capacity: 16,
    })
    .with_compare(by_price)
    .with_destroy(move |o: Order| r.borrow_mut().push(o.id))
    .build()
    .unwrap();

    orders.extend([order(1, 10.0), order(2, 9.5), order(3, 10.5)]);
    orders.insert(1, order(4, 9.5)).unwrap();

    // The first element with an equal price, in forward order.
    assert_eq!(orders.index_of(&order(0, 9.5)), Some(1));
    assert_eq!(orders.index_where(|o| o.id == 3), Some(3));
    assert_eq!(orders.index_where(|o| o.price > 100.0), None);

    let mut ids = vec![];
    orders.for_each(Direction::Backward, |o| ids.push(o.id));
    assert_eq!(ids, vec![3, 2, 4, 1]);

    // Handed back, not released.
    assert_eq!(orders.pop_front().map(|o| o.id), Some(1));
    assert!(released.borrow().is_empty());

    orders.set(0, order(5, 1.0)).unwrap();
    assert_eq!(*released.borrow(), vec![4]);

    assert_eq!(orders.clear(), 3);
    assert_eq!(*released.borrow(), vec![4, 5, 2, 3]);
    assert!(orders.is_empty());
}

#[test_log::test]
fn test_adapters_share_the_destroy_contract() {
    let released = Rc::new(RefCell::new(vec![]));

    let r = released.clone();
    let mut deque = Deque::<i32>::with_policies(
        ElementKind::Int,
        None,
        Some(Box::new(move |v: i32| r.borrow_mut().push(v))),
    )
    .unwrap();
    deque.extend([1, 2, 3]);
    assert_eq!(deque.pop_front(), Some(1));
    drop(deque);

    let r = released.clone();
    let mut queue = Queue::<i32>::with_policies(
        ElementKind::Int,
        None,
        Some(Box::new(move |v: i32| r.borrow_mut().push(v))),
    )
    .unwrap();
    queue.extend([10, 20]);
    assert_eq!(queue.dequeue(), Some(10));
    assert_eq!(queue.clear(), 1);

    let r = released.clone();
    let mut stack = Stack::<i32>::with_policies(
        ElementKind::Int,
        None,
        Some(Box::new(move |v: i32| r.borrow_mut().push(v))),
    )
    .unwrap();
    stack.extend([100, 200]);
    assert_eq!(stack.pop(), Some(200));
    drop(stack);

    assert_eq!(*released.borrow(), vec![2, 3, 20, 100]);
}

#[test]
fn test_adapter_kinds() {
    assert_eq!(Queue::<f32>::primitive().kind(), ElementKind::Double);
    assert_eq!(Stack::<String>::generic().kind(), ElementKind::Generic);
    assert_eq!(
        Deque::<char>::new("int".parse().unwrap()).unwrap_err(),
        Error::KindMismatch {
            expected: ElementKind::Char,
            actual: ElementKind::Int,
        }
    );
    assert_eq!(
        "vector".parse::<ElementKind>().unwrap_err(),
        Error::UnknownKind("vector".to_string())
    );
}

#[test]
fn test_adapter_round_trip_through_list() {
    let mut list = List::<u16>::primitive();
    list.extend(0..10);

    let stack = Stack::from(list);
    assert_eq!(stack.peek(), Some(&9));

    let list = stack.into_list();
    let queue = Queue::from(list);
    assert_eq!(queue.peek(), Some(&0));
    assert_eq!(queue.iter().copied().collect_vec(), (0..10).collect_vec());

    let drained = queue.into_list().into_iter().rev().collect_vec();
    assert_eq!(drained, (0..10).rev().collect_vec());
}
