//! Fixed-capacity stack and queue.
//!
//! Both containers allocate their whole buffer up front and never grow. Running
//! out of room or popping an empty container is reported as an error rather than
//! handled, since the solver sizes every container to the most it can ever hold.

use crate::{Error, Result};

/// LIFO container with a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Create an empty stack that can hold `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, item: T) -> Result<()> {
        if self.items.len() >= self.capacity {
            return Err(Error::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Underflow)
    }

    /// The top element, if any
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate from the bottom of the stack to the top
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// FIFO ring buffer with a fixed capacity
#[derive(Debug, Clone)]
pub struct BoundedQueue<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue that can hold `capacity` elements
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, item: T) -> Result<()> {
        let capacity = self.capacity();
        if self.len == capacity {
            return Err(Error::CapacityExceeded { capacity });
        }
        let tail = (self.head + self.len) % capacity;
        self.slots[tail] = Some(item);
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::Underflow);
        }
        // Taking the value clears the slot so it can be reused after wrap-around
        let item = self.slots[self.head].take().ok_or(Error::Underflow)?;
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        Ok(item)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterate from the front of the queue to the back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        let capacity = self.capacity();
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % capacity].as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_lifo() {
        let mut stack = BoundedStack::new(3);
        assert!(stack.is_empty());
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.push(3).unwrap();
        assert!(stack.is_full());
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

        assert_eq!(stack.pop(), Ok(3));
        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.pop(), Ok(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_stack_overflow_and_underflow() {
        let mut stack = BoundedStack::new(2);
        stack.push('a').unwrap();
        stack.push('b').unwrap();
        assert_eq!(stack.push('c'), Err(Error::CapacityExceeded { capacity: 2 }));
        // A failed push leaves the contents alone
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&'b'));

        stack.pop().unwrap();
        stack.pop().unwrap();
        assert_eq!(stack.pop(), Err(Error::Underflow));
    }

    #[test]
    fn test_zero_capacity_stack() {
        let mut stack: BoundedStack<u8> = BoundedStack::new(0);
        assert!(stack.is_full());
        assert_eq!(stack.push(1), Err(Error::CapacityExceeded { capacity: 0 }));
    }

    #[test]
    fn test_queue_fifo() {
        let mut queue = BoundedQueue::new(4);
        for i in 0..4 {
            queue.enqueue(i).unwrap();
        }
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(9), Err(Error::CapacityExceeded { capacity: 4 }));

        assert_eq!(queue.dequeue(), Ok(0));
        assert_eq!(queue.dequeue(), Ok(1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_queue_wraps_without_leaking_slots() {
        let mut queue = BoundedQueue::new(4);
        // Far more operations than slots; a leaking ring would fill up
        for round in 0..50 {
            queue.enqueue(round).unwrap();
            queue.enqueue(round + 1000).unwrap();
            assert_eq!(queue.dequeue(), Ok(round));
            assert_eq!(queue.dequeue(), Ok(round + 1000));
            assert!(queue.is_empty());
        }

        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();
        queue.enqueue(3).unwrap();
        assert_eq!(queue.dequeue(), Ok(1));
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap();
        assert!(queue.is_full());
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_queue_underflow() {
        let mut queue: BoundedQueue<u8> = BoundedQueue::new(4);
        assert_eq!(queue.dequeue(), Err(Error::Underflow));
        queue.enqueue(7).unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.dequeue(), Err(Error::Underflow));
    }
}
