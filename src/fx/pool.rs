//! Bounded FIFO pool shared by every effect subsystem
//!
//! A pool never rejects a spawn: at capacity the oldest primitive is
//! evicted first. Dead primitives are compacted with a single retain pass.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct Pool<P> {
    items: VecDeque<P>,
    cap: usize,
}

impl<P> Pool<P> {
    pub fn new(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Insert, evicting the oldest primitive when at capacity
    pub fn push(&mut self, item: P) {
        if self.items.len() >= self.cap {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    pub fn retain(&mut self, f: impl FnMut(&P) -> bool) {
        self.items.retain(f);
    }

    /// Oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.items.iter_mut()
    }

    pub fn front(&self) -> Option<&P> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&P> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
