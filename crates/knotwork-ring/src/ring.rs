//! The circular list itself.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::handle::RingHandle;
use crate::iter::{Handles, Iter, Range, Triples};

#[derive(Clone)]
struct Slot<T> {
    value: Option<T>,
    prev: u32,
    next: u32,
    generation: u32,
}

/// A circular doubly-linked list stored in a slot arena.
///
/// # Examples
///
/// ```
/// use knotwork_ring::Ring;
///
/// let mut ring: Ring<char> = "abcd".chars().collect();
/// let b = ring.find_first(|c| *c == 'b').unwrap();
/// assert_eq!(ring[ring.next(b)], 'c');
/// assert_eq!(ring[ring.step(b, -2)], 'd');
/// assert_eq!(ring.nth(-1), Some(&'d'));
///
/// ring.remove(b);
/// assert_eq!(ring.iter().collect::<String>(), "acd");
/// assert!(ring.get(b).is_none());
/// ```
#[derive(Clone)]
pub struct Ring<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: Option<u32>,
    len: usize,
}

impl<T> Ring<T> {
    /// An empty ring.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// An empty ring with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            len: 0,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the ring has no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the start entry.
    pub fn head(&self) -> Option<RingHandle> {
        self.head.map(|i| self.handle_at(i))
    }

    /// Handle of the entry just before the start entry.
    pub fn tail(&self) -> Option<RingHandle> {
        self.head.map(|i| self.handle_at(self.slots[i as usize].prev))
    }

    /// Make `handle` the start entry of every traversal.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn set_head(&mut self, handle: RingHandle) {
        let i = self.resolve(handle);
        self.head = Some(i);
    }

    /// The value at `handle`, or `None` if the handle is stale.
    pub fn get(&self, handle: RingHandle) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.value.as_ref())
    }

    /// Mutable access to the value at `handle`.
    pub fn get_mut(&mut self, handle: RingHandle) -> Option<&mut T> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|s| s.generation == handle.generation)
            .and_then(|s| s.value.as_mut())
    }

    /// Whether `handle` still names a live entry.
    pub fn contains_handle(&self, handle: RingHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Append `value` at the end of the ring (just before the head).
    pub fn push_back(&mut self, value: T) -> RingHandle {
        match self.head {
            None => {
                let i = self.alloc(value, 0, 0);
                let slot = &mut self.slots[i as usize];
                slot.prev = i;
                slot.next = i;
                self.head = Some(i);
                self.len = 1;
                self.handle_at(i)
            }
            Some(head) => {
                let tail = self.slots[head as usize].prev;
                self.link_after(tail, value)
            }
        }
    }

    /// Insert `value` before the head and make it the new head.
    pub fn push_front(&mut self, value: T) -> RingHandle {
        let handle = self.push_back(value);
        self.head = Some(handle.index);
        handle
    }

    /// Insert `value` directly after `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn insert_after(&mut self, handle: RingHandle, value: T) -> RingHandle {
        let i = self.resolve(handle);
        self.link_after(i, value)
    }

    /// Insert `value` directly before `handle`.
    ///
    /// Inserting before the head does not move the head, so the new entry
    /// becomes the last one of a traversal.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn insert_before(&mut self, handle: RingHandle, value: T) -> RingHandle {
        let i = self.resolve(handle);
        let prev = self.slots[i as usize].prev;
        self.link_after(prev, value)
    }

    /// Splice the entry at `handle` out of the ring, joining its neighbours.
    ///
    /// Returns `None` if the handle is stale. Removing the head makes the
    /// following entry the new head.
    pub fn remove(&mut self, handle: RingHandle) -> Option<T> {
        self.get(handle)?;
        let i = handle.index;
        let (prev, next) = {
            let slot = &self.slots[i as usize];
            (slot.prev, slot.next)
        };
        if self.len == 1 {
            self.head = None;
        } else {
            self.slots[prev as usize].next = next;
            self.slots[next as usize].prev = prev;
            if self.head == Some(i) {
                self.head = Some(next);
            }
        }
        let slot = &mut self.slots[i as usize];
        slot.generation = slot.generation.wrapping_add(1);
        let value = slot.value.take();
        self.free.push(i);
        self.len -= 1;
        value
    }

    /// Remove every entry.
    ///
    /// Slots are kept for reuse, with their generations bumped so that no
    /// handle issued before the call resolves afterwards.
    pub fn clear(&mut self) {
        self.free.clear();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(i as u32);
        }
        self.head = None;
        self.len = 0;
    }

    /// The entry after `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn next(&self, handle: RingHandle) -> RingHandle {
        let i = self.resolve(handle);
        self.handle_at(self.slots[i as usize].next)
    }

    /// The entry before `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn prev(&self, handle: RingHandle) -> RingHandle {
        let i = self.resolve(handle);
        self.handle_at(self.slots[i as usize].prev)
    }

    /// The entry `k` steps away from `handle`; negative `k` walks backward.
    ///
    /// Wraps around the ring and walks whichever way round is shorter.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn step(&self, handle: RingHandle, k: isize) -> RingHandle {
        let mut i = self.resolve(handle);
        let len = self.len as isize;
        let forward = k.rem_euclid(len);
        if forward <= len / 2 {
            for _ in 0..forward {
                i = self.slots[i as usize].next;
            }
        } else {
            for _ in 0..(len - forward) {
                i = self.slots[i as usize].prev;
            }
        }
        self.handle_at(i)
    }

    /// Handle of the entry `index` steps from the head, wrapping modulo the
    /// length. Negative indices count back from the head.
    pub fn nth_handle(&self, index: isize) -> Option<RingHandle> {
        self.head().map(|h| self.step(h, index))
    }

    /// The value `index` steps from the head, wrapping modulo the length.
    pub fn nth(&self, index: isize) -> Option<&T> {
        self.nth_handle(index).and_then(|h| self.get(h))
    }

    /// Number of forward steps from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn distance_forward(&self, from: RingHandle, to: RingHandle) -> usize {
        let target = self.resolve(to);
        let mut i = self.resolve(from);
        let mut steps = 0;
        while i != target {
            i = self.slots[i as usize].next;
            steps += 1;
            assert!(steps < self.len, "ring handles {from} and {to} are not linked");
        }
        steps
    }

    /// Number of backward steps from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn distance_backward(&self, from: RingHandle, to: RingHandle) -> usize {
        match self.distance_forward(from, to) {
            0 => 0,
            forward => self.len - forward,
        }
    }

    /// Handles walking forward from `from` to `to`, both inclusive.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn range(&self, from: RingHandle, to: RingHandle) -> Range<'_, T> {
        let start = self.resolve(from);
        let end = self.resolve(to);
        Range::new(self, start, end)
    }

    /// Handles of every entry whose value matches, in ring order.
    pub fn find<F>(&self, mut pred: F) -> Vec<RingHandle>
    where
        F: FnMut(&T) -> bool,
    {
        self.handles().filter(|h| pred(&self[*h])).collect()
    }

    /// Handle of the first entry (from the head) whose value matches.
    pub fn find_first<F>(&self, mut pred: F) -> Option<RingHandle>
    where
        F: FnMut(&T) -> bool,
    {
        self.handles().find(|h| pred(&self[*h]))
    }

    /// Whether any entry matches.
    pub fn contains<F>(&self, pred: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.find_first(pred).is_some()
    }

    /// Values in order, starting at the head.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self, self.head, self.len)
    }

    /// Values in order, starting at `handle`.
    ///
    /// # Panics
    ///
    /// Panics if `handle` is stale.
    pub fn iter_from(&self, handle: RingHandle) -> Iter<'_, T> {
        let i = self.resolve(handle);
        Iter::new(self, Some(i), self.len)
    }

    /// Handles in order, starting at the head.
    pub fn handles(&self) -> Handles<'_, T> {
        Handles::new(self, self.head, self.len)
    }

    /// `(previous, current, next)` for every entry once, starting with the
    /// head as `current`.
    pub fn triples(&self) -> Triples<'_, T> {
        Triples::new(self, self.head, self.len)
    }

    pub(crate) fn slot_value(&self, index: u32) -> &T {
        match &self.slots[index as usize].value {
            Some(v) => v,
            None => panic!("ring slot {index} is vacant but linked"),
        }
    }

    pub(crate) fn slot_next(&self, index: u32) -> u32 {
        self.slots[index as usize].next
    }

    pub(crate) fn slot_prev(&self, index: u32) -> u32 {
        self.slots[index as usize].prev
    }

    pub(crate) fn handle_at(&self, index: u32) -> RingHandle {
        RingHandle::new(index, self.slots[index as usize].generation)
    }

    fn resolve(&self, handle: RingHandle) -> u32 {
        match self.slots.get(handle.index as usize) {
            Some(slot) if slot.generation == handle.generation && slot.value.is_some() => {
                handle.index
            }
            _ => panic!("stale or foreign {handle}"),
        }
    }

    fn alloc(&mut self, value: T, prev: u32, next: u32) -> u32 {
        match self.free.pop() {
            Some(i) => {
                let slot = &mut self.slots[i as usize];
                slot.value = Some(value);
                slot.prev = prev;
                slot.next = next;
                i
            }
            None => {
                let i = self.slots.len() as u32;
                self.slots.push(Slot {
                    value: Some(value),
                    prev,
                    next,
                    generation: 0,
                });
                i
            }
        }
    }

    fn link_after(&mut self, at: u32, value: T) -> RingHandle {
        let next = self.slots[at as usize].next;
        let i = self.alloc(value, at, next);
        self.slots[at as usize].next = i;
        self.slots[next as usize].prev = i;
        self.len += 1;
        self.handle_at(i)
    }
}

impl<T: Clone> Ring<T> {
    /// Values in order from the head, cloned into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Ring<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<RingHandle> for Ring<T> {
    type Output = T;

    fn index(&self, handle: RingHandle) -> &T {
        let i = self.resolve(handle);
        self.slot_value(i)
    }
}

impl<T> IndexMut<RingHandle> for Ring<T> {
    fn index_mut(&mut self, handle: RingHandle) -> &mut T {
        let i = self.resolve(handle);
        match &mut self.slots[i as usize].value {
            Some(v) => v,
            None => panic!("ring slot {i} is vacant but linked"),
        }
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Extend<T> for Ring<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Ring<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Ring<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ring(n: i32) -> Ring<i32> {
        (0..n).collect()
    }

    #[test]
    fn empty_ring_has_no_entries() {
        let r: Ring<i32> = Ring::new();
        assert!(r.is_empty());
        assert_eq!(r.head(), None);
        assert_eq!(r.nth(3), None);
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.triples().count(), 0);
    }

    #[test]
    fn single_entry_links_to_itself() {
        let mut r = Ring::new();
        let h = r.push_back(1);
        assert_eq!(r.next(h), h);
        assert_eq!(r.prev(h), h);
        let t: Vec<_> = r.triples().collect();
        assert_eq!(t, vec![(&1, &1, &1)]);
    }

    #[test]
    fn push_back_appends_before_head() {
        let r = ring(4);
        assert_eq!(r.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(r[r.tail().unwrap()], 3);
    }

    #[test]
    fn push_front_moves_head() {
        let mut r = ring(3);
        r.push_front(9);
        assert_eq!(r.to_vec(), vec![9, 0, 1, 2]);
    }

    #[test]
    fn insert_after_and_before() {
        let mut r = ring(3);
        let one = r.find_first(|v| *v == 1).unwrap();
        r.insert_after(one, 10);
        r.insert_before(one, 20);
        assert_eq!(r.to_vec(), vec![0, 20, 1, 10, 2]);
        let head = r.head().unwrap();
        r.insert_before(head, 30);
        assert_eq!(r.to_vec(), vec![0, 20, 1, 10, 2, 30]);
    }

    #[test]
    fn remove_head_advances_head() {
        let mut r = ring(3);
        let head = r.head().unwrap();
        assert_eq!(r.remove(head), Some(0));
        assert_eq!(r.to_vec(), vec![1, 2]);
        assert_eq!(r.remove(head), None);
    }

    #[test]
    fn remove_last_entry_empties() {
        let mut r = ring(1);
        let h = r.head().unwrap();
        assert_eq!(r.remove(h), Some(0));
        assert!(r.is_empty());
        assert_eq!(r.head(), None);
        r.push_back(5);
        assert_eq!(r.to_vec(), vec![5]);
    }

    #[test]
    fn reused_slot_invalidates_old_handle() {
        let mut r = ring(3);
        let one = r.find_first(|v| *v == 1).unwrap();
        r.remove(one);
        let fresh = r.push_back(7);
        assert_eq!(fresh.index(), one.index());
        assert_ne!(fresh.generation(), one.generation());
        assert!(r.get(one).is_none());
        assert_eq!(r[fresh], 7);
    }

    #[test]
    #[should_panic(expected = "stale")]
    fn stale_handle_panics_on_navigation() {
        let mut r = ring(3);
        let h = r.head().unwrap();
        r.remove(h);
        let _ = r.next(h);
    }

    #[test]
    fn step_wraps_both_ways() {
        let r = ring(5);
        let h = r.head().unwrap();
        assert_eq!(r[r.step(h, 2)], 2);
        assert_eq!(r[r.step(h, 7)], 2);
        assert_eq!(r[r.step(h, -1)], 4);
        assert_eq!(r[r.step(h, -6)], 4);
        assert_eq!(r[r.step(h, 0)], 0);
        assert_eq!(r.nth(-2), Some(&3));
    }

    #[test]
    fn distances_between_entries() {
        let r = ring(6);
        let a = r.nth_handle(1).unwrap();
        let b = r.nth_handle(4).unwrap();
        assert_eq!(r.distance_forward(a, b), 3);
        assert_eq!(r.distance_backward(a, b), 3);
        assert_eq!(r.distance_forward(b, a), 3);
        let c = r.nth_handle(2).unwrap();
        assert_eq!(r.distance_forward(a, c), 1);
        assert_eq!(r.distance_backward(a, c), 5);
        assert_eq!(r.distance_backward(a, a), 0);
    }

    #[test]
    fn range_is_inclusive_and_wraps() {
        let r = ring(5);
        let from = r.nth_handle(3).unwrap();
        let to = r.nth_handle(1).unwrap();
        let vals: Vec<i32> = r.range(from, to).map(|h| r[h]).collect();
        assert_eq!(vals, vec![3, 4, 0, 1]);
        let same: Vec<i32> = r.range(from, from).map(|h| r[h]).collect();
        assert_eq!(same, vec![3]);
    }

    #[test]
    fn find_returns_all_matches() {
        let r: Ring<i32> = [1, 2, 1, 3, 1].into_iter().collect();
        let hits = r.find(|v| *v == 1);
        assert_eq!(hits.len(), 3);
        assert!(r.contains(|v| *v == 3));
        assert!(!r.contains(|v| *v == 4));
    }

    #[test]
    fn triples_visit_each_entry_once() {
        let r = ring(4);
        let t: Vec<(i32, i32, i32)> = r.triples().map(|(p, c, n)| (*p, *c, *n)).collect();
        assert_eq!(t, vec![(3, 0, 1), (0, 1, 2), (1, 2, 3), (2, 3, 0)]);
    }

    #[test]
    fn set_head_rotates_traversal() {
        let mut r = ring(4);
        let h = r.nth_handle(2).unwrap();
        r.set_head(h);
        assert_eq!(r.to_vec(), vec![2, 3, 0, 1]);
        assert_eq!(r.iter_from(r.nth_handle(1).unwrap()).copied().collect::<Vec<_>>(), vec![3, 0, 1, 2]);
    }

    #[test]
    fn clone_is_independent() {
        let r = ring(3);
        let mut c = r.clone();
        let h = c.head().unwrap();
        c[h] = 42;
        assert_eq!(r.to_vec(), vec![0, 1, 2]);
        assert_eq!(c.to_vec(), vec![42, 1, 2]);
    }

    proptest! {
        #[test]
        fn removals_keep_ring_consistent(
            len in 1usize..40,
            removals in proptest::collection::vec(0usize..40, 0..40),
        ) {
            let mut r: Ring<usize> = (0..len).collect();
            let mut model: Vec<usize> = (0..len).collect();
            for k in removals {
                if model.is_empty() {
                    break;
                }
                let pos = k % model.len();
                let h = r.nth_handle(pos as isize).unwrap();
                prop_assert_eq!(r.remove(h), Some(model.remove(pos)));
            }
            prop_assert_eq!(r.len(), model.len());
            prop_assert_eq!(r.to_vec(), model.clone());
            // Walking backward visits the same entries in reverse.
            if let Some(head) = r.head() {
                let mut back = Vec::new();
                let mut h = head;
                for _ in 0..r.len() {
                    h = r.prev(h);
                    back.push(r[h]);
                }
                back.reverse();
                prop_assert_eq!(back, model);
            }
        }

        #[test]
        fn forward_and_backward_distances_sum_to_len(
            len in 2usize..30,
            a in 0usize..30,
            b in 0usize..30,
        ) {
            let r: Ring<usize> = (0..len).collect();
            let ha = r.nth_handle((a % len) as isize).unwrap();
            let hb = r.nth_handle((b % len) as isize).unwrap();
            let f = r.distance_forward(ha, hb);
            let back = r.distance_backward(ha, hb);
            if ha == hb {
                prop_assert_eq!(f + back, 0);
            } else {
                prop_assert_eq!(f + back, len);
            }
            prop_assert_eq!(r.step(ha, f as isize), hb);
        }
    }
}
