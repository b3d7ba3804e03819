//! Priority queue ordered by an injected comparator.
//!
//! Backed by a binary min-heap stored in a `Vec`: `dequeue` returns the item
//! the comparator ranks lowest. Equal keys come out in no particular order.

use std::cmp::Ordering;
use std::fmt;

use super::ParcelQueue;

/// Ordering strategy for [`PriorityQueue`].
pub trait Compare<T> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Uses the item's own `Ord` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Compare<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

pub struct PriorityQueue<T, C = NaturalOrder> {
    heap: Vec<T>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T, NaturalOrder> {
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: Ord> Default for PriorityQueue<T, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: Vec::new(),
            cmp,
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.cmp.compare(&self.heap[i], &self.heap[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.less(idx, parent) {
                break;
            }
            self.heap.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;
            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == idx {
                break;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &self.heap.len())
            .field("head", &self.heap.first())
            .finish()
    }
}

impl<T: fmt::Debug, C: Compare<T>> ParcelQueue<T> for PriorityQueue<T, C> {
    fn enqueue(&mut self, item: T) {
        self.heap.push(item);
        let last = self.heap.len() - 1;
        self.sift_up(last);
    }

    fn dequeue(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let item = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(item)
    }

    fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
