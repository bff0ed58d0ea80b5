use std::collections::VecDeque;

use longbits::bytes::{ByteSink, ByteSource, ChunkedBytes};

fn list() -> ChunkedBytes {
    ChunkedBytes::from(vec![vec![0, 1], vec![], vec![2, 3, 4], vec![5]])
}

#[test]
fn new() {
    let list = ChunkedBytes::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(ByteSource::get(&list, 0), None);
}

#[test]
fn get() {
    let list = list();
    assert_eq!(list.len(), 6);
    assert_eq!(list.chunks().len(), 3);
    let bytes = (0..7).map(|i| ByteSource::get(&list, i)).collect::<Vec<_>>();
    assert_eq!(
        bytes,
        vec![Some(0), Some(1), Some(2), Some(3), Some(4), Some(5), None]
    );
}

#[test]
fn set() {
    let mut list = list();
    (0..6).for_each(|i| list.set(i, 10 + i as u8));
    assert_eq!(list.to_vec(), vec![10, 11, 12, 13, 14, 15]);
    assert_eq!(list.chunks()[1], vec![12, 13, 14]);
}

#[test]
#[should_panic]
fn set_out_of_bounds() {
    let mut list = list();
    list.set(6, 0);
}

#[test]
fn push() {
    let mut list = ChunkedBytes::new();
    list.push(vec![1, 2]);
    list.push(&[3u8][..]);
    list.push(Vec::new());
    assert_eq!(list.len(), 3);
    assert_eq!(list.chunks().len(), 2);
    assert_eq!(list.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn sliced() {
    let list = list();
    let sliced = list.sliced(1, 3);
    assert_eq!(sliced.to_vec(), vec![1, 2, 3]);
    assert_eq!(sliced.chunks().to_vec(), vec![vec![1u8], vec![2, 3]]);

    assert!(list.sliced(6, 0).is_empty());
    assert_eq!(list.sliced(0, 6), list);
}

#[test]
#[should_panic]
fn sliced_out_of_bounds() {
    list().sliced(4, 3);
}

#[test]
fn contiguous_adapters() {
    let mut array = [0u8; 3];
    array.set(2, 7);
    assert_eq!(ByteSource::len(&array), 3);
    assert_eq!(ByteSource::get(&array, 2), Some(7));
    assert_eq!(ByteSource::get(&array, 3), None);

    let mut vec = vec![0u8; 2];
    vec.set(0, 1);
    assert_eq!(ByteSource::get(&vec, 0), Some(1));
    assert_eq!(ByteSource::get(&vec[1..], 0), Some(0));

    let mut deque = VecDeque::from(vec![1u8, 2, 3]);
    deque.rotate_left(2);
    deque.set(0, 9);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![9, 1, 2]);
    assert!(!ByteSource::is_empty(&deque));
}
