use std::{
    collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque},
    hash::{BuildHasher, Hash},
};

/// Container that can be refilled one element at a time, in decode order.
///
/// Used by [`Buffer::read_into`](crate::Buffer::read_into). Maps are containers
/// of `(key, value)` pairs.
pub trait Container {
    type Element;

    fn insert_element(&mut self, element: Self::Element);
}

/// Key-value container, used by [`Buffer::read_map_into`](crate::Buffer::read_map_into).
pub trait MapContainer {
    type Key;
    type Value;

    fn insert_entry(&mut self, key: Self::Key, value: Self::Value);
}

impl<T> Container for Vec<T> {
    type Element = T;

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push(element);
    }
}

impl<T> Container for VecDeque<T> {
    type Element = T;

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push_back(element);
    }
}

impl<T> Container for LinkedList<T> {
    type Element = T;

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push_back(element);
    }
}

impl<T, S> Container for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Element = T;

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord> Container for BTreeSet<T> {
    type Element = T;

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord> Container for BinaryHeap<T> {
    type Element = T;

    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push(element);
    }
}

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Element = (K, V);

    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Container for BTreeMap<K, V> {
    type Element = (K, V);

    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, V, S> MapContainer for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> MapContainer for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn insert_entry(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}
