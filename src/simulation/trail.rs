//! Bounded FIFO of a body's past screen positions
//!
//! One `TrailBuffer` per body, appended to once per tick by the scenario.
//! When the buffer is full the oldest entry is evicted, so the trail
//! always covers at most the last `capacity` ticks.

use std::collections::VecDeque;

use crate::simulation::states::NVec2;

#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<NVec2>, // oldest at the front
    capacity: usize,
}

impl TrailBuffer {
    /// Create an empty trail holding at most `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append the newest screen position, evicting the oldest when full.
    pub fn push(&mut self, p: NVec2) {
        self.points.push_back(p);
        if self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &NVec2> {
        self.points.iter()
    }
}
