//! Bounded metric history.
//!
//! Each stream keeps its most recent readings in a fixed-capacity FIFO.
//! Appending past capacity evicts the oldest entry in the same call, so no
//! reader ever observes more than `capacity` entries. Reads return copies.

use std::collections::VecDeque;

/// Default per-stream capacity.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Fixed-capacity FIFO history for one metric stream.
#[derive(Debug, Clone)]
pub struct MetricBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> Default for MetricBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> MetricBuffer<T> {
    /// Create a buffer holding at most [`DEFAULT_CAPACITY`] entries.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a buffer with a custom capacity (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append to the tail, evicting the head when full.
    ///
    /// Returns the evicted entry, if any.
    pub fn append(&mut self, metric: T) -> Option<T> {
        let evicted = if self.entries.len() == self.capacity {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(metric);
        evicted
    }

    /// Copy of the last `n` entries in insertion order.
    ///
    /// Returns fewer when the buffer holds fewer; an empty result is valid.
    pub fn recent_window(&self, n: usize) -> Vec<T> {
        let skip = self.entries.len().saturating_sub(n);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Most recently appended entry.
    pub fn latest(&self) -> Option<T> {
        self.entries.back().cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_within_capacity() {
        let mut buffer = MetricBuffer::with_capacity(3);
        assert!(buffer.append(1).is_none());
        assert!(buffer.append(2).is_none());
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.recent_window(10), vec![1, 2]);
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut buffer = MetricBuffer::with_capacity(3);
        for value in 1..=3 {
            buffer.append(value);
        }
        assert_eq!(buffer.append(4), Some(1));
        assert_eq!(buffer.append(5), Some(2));
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.recent_window(3), vec![3, 4, 5]);
    }

    #[test]
    fn test_default_capacity() {
        let mut buffer = MetricBuffer::new();
        for value in 0..1500 {
            buffer.append(value);
        }
        assert_eq!(buffer.capacity(), DEFAULT_CAPACITY);
        assert_eq!(buffer.len(), DEFAULT_CAPACITY);
        assert_eq!(buffer.recent_window(1), vec![1499]);
        assert_eq!(buffer.recent_window(DEFAULT_CAPACITY)[0], 500);
    }

    #[test]
    fn test_recent_window_edge_cases() {
        let mut buffer: MetricBuffer<u32> = MetricBuffer::with_capacity(5);
        assert!(buffer.recent_window(3).is_empty());
        assert!(buffer.latest().is_none());

        buffer.append(7);
        assert!(buffer.recent_window(0).is_empty());
        assert_eq!(buffer.recent_window(3), vec![7]);
        assert_eq!(buffer.latest(), Some(7));
    }

    #[test]
    fn test_window_is_a_copy() {
        let mut buffer = MetricBuffer::with_capacity(2);
        buffer.append(String::from("a"));
        let mut window = buffer.recent_window(2);
        window[0].push('!');
        assert_eq!(buffer.recent_window(2), vec!["a".to_string()]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut buffer = MetricBuffer::with_capacity(0);
        buffer.append(1);
        buffer.append(2);
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.recent_window(5), vec![2]);
    }
}
