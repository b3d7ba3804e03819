//! FIFO（先进先出）队列

use std::collections::VecDeque;

use super::ParcelQueue;

#[derive(Debug)]
pub struct FifoQueue<T> {
    q: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self { q: VecDeque::new() }
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> ParcelQueue<T> for FifoQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.q.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.q.pop_front()
    }

    fn peek(&self) -> Option<&T> {
        self.q.front()
    }

    fn len(&self) -> usize {
        self.q.len()
    }
}
