//! Borrowing traversals over a [`Ring`].

use std::iter::FusedIterator;

use crate::handle::RingHandle;
use crate::ring::Ring;

/// Forward iterator over values, one lap long.
pub struct Iter<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>, start: Option<u32>, remaining: usize) -> Self {
        Self {
            ring,
            cursor: start,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.cursor?;
        self.remaining -= 1;
        self.cursor = Some(self.ring.slot_next(i));
        Some(self.ring.slot_value(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Forward iterator over handles, one lap long.
pub struct Handles<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<u32>,
    remaining: usize,
}

impl<'a, T> Handles<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>, start: Option<u32>, remaining: usize) -> Self {
        Self {
            ring,
            cursor: start,
            remaining,
        }
    }
}

impl<T> Iterator for Handles<'_, T> {
    type Item = RingHandle;

    fn next(&mut self) -> Option<RingHandle> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.cursor?;
        self.remaining -= 1;
        self.cursor = Some(self.ring.slot_next(i));
        Some(self.ring.handle_at(i))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Handles<'_, T> {}
impl<T> FusedIterator for Handles<'_, T> {}

/// `(previous, current, next)` windows, one per entry.
pub struct Triples<'a, T> {
    ring: &'a Ring<T>,
    cursor: Option<u32>,
    remaining: usize,
}

impl<'a, T> Triples<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>, start: Option<u32>, remaining: usize) -> Self {
        Self {
            ring,
            cursor: start,
            remaining,
        }
    }
}

impl<'a, T> Iterator for Triples<'a, T> {
    type Item = (&'a T, &'a T, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let i = self.cursor?;
        self.remaining -= 1;
        let prev = self.ring.slot_prev(i);
        let next = self.ring.slot_next(i);
        self.cursor = Some(next);
        Some((
            self.ring.slot_value(prev),
            self.ring.slot_value(i),
            self.ring.slot_value(next),
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Triples<'_, T> {}
impl<T> FusedIterator for Triples<'_, T> {}

/// Handles from one entry forward to another, both inclusive.
pub struct Range<'a, T> {
    ring: &'a Ring<T>,
    cursor: u32,
    end: u32,
    done: bool,
}

impl<'a, T> Range<'a, T> {
    pub(crate) fn new(ring: &'a Ring<T>, start: u32, end: u32) -> Self {
        Self {
            ring,
            cursor: start,
            end,
            done: false,
        }
    }
}

impl<T> Iterator for Range<'_, T> {
    type Item = RingHandle;

    fn next(&mut self) -> Option<RingHandle> {
        if self.done {
            return None;
        }
        let i = self.cursor;
        if i == self.end {
            self.done = true;
        } else {
            self.cursor = self.ring.slot_next(i);
        }
        Some(self.ring.handle_at(i))
    }
}

impl<T> FusedIterator for Range<'_, T> {}
