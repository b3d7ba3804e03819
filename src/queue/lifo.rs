//! LIFO（后进先出）队列，即栈

use super::ParcelQueue;

#[derive(Debug)]
pub struct LifoQueue<T> {
    stack: Vec<T>,
}

impl<T> LifoQueue<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for LifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> ParcelQueue<T> for LifoQueue<T> {
    fn enqueue(&mut self, item: T) {
        self.stack.push(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.stack.last()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}
