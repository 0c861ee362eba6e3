//! Shared search state for the shortest-path algorithms
//!
//! Both Dijkstra and A* key their frontier on a live distance map. The
//! queue does not support decrease-key; instead every improvement is
//! pushed as a fresh entry and a popped entry whose weight no longer
//! matches the live map is discarded (lazy deletion). This guarantees a
//! vertex is never processed twice without paying for in-place re-keying.

use crate::weight::OrderedMonoid;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Best-known distance per vertex; absence means "unset" (infinity)
#[derive(Debug, Clone)]
pub struct ShortestDistances<V, W> {
    map: HashMap<V, W>,
}

impl<V, W> Default for ShortestDistances<V, W> {
    fn default() -> Self {
        ShortestDistances {
            map: HashMap::new(),
        }
    }
}

impl<V, W> ShortestDistances<V, W>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, vertex: &V) -> Option<&W> {
        self.map.get(vertex)
    }

    pub fn set(&mut self, vertex: V, distance: W) {
        self.map.insert(vertex, distance);
    }

    /// True when `candidate` strictly improves the recorded distance, or
    /// the vertex is still unset
    pub fn improves<M>(&self, monoid: &M, vertex: &V, candidate: &W) -> bool
    where
        M: OrderedMonoid<W>,
    {
        match self.map.get(vertex) {
            Some(current) => monoid.compare(candidate, current) == Ordering::Less,
            None => true,
        }
    }

    /// True when `weight` still matches the live distance of `vertex`.
    /// Queue entries failing this check are stale and must be discarded.
    pub fn is_current<M>(&self, monoid: &M, vertex: &V, weight: &W) -> bool
    where
        M: OrderedMonoid<W>,
    {
        self.map
            .get(vertex)
            .is_some_and(|live| monoid.compare(weight, live) == Ordering::Equal)
    }
}

/// Min-priority queue ordered by a monoid's comparison.
///
/// `std::collections::BinaryHeap` needs `Ord` on the element type, which
/// a generic weight domain cannot provide; this heap threads every
/// comparison through the supplied monoid instead. Entries are never
/// removed or re-keyed in place; callers push improvements again and
/// discard stale pops.
#[derive(Debug)]
pub(crate) struct WeightQueue<T, W> {
    entries: Vec<(T, W)>,
}

impl<T, W> WeightQueue<T, W> {
    pub(crate) fn new() -> Self {
        WeightQueue {
            entries: Vec::new(),
        }
    }

    pub(crate) fn push<M>(&mut self, monoid: &M, item: T, weight: W)
    where
        M: OrderedMonoid<W>,
    {
        self.entries.push((item, weight));
        self.sift_up(monoid, self.entries.len() - 1);
    }

    pub(crate) fn pop<M>(&mut self, monoid: &M) -> Option<(T, W)>
    where
        M: OrderedMonoid<W>,
    {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let top = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(monoid, 0);
        }
        top
    }

    fn less<M>(&self, monoid: &M, a: usize, b: usize) -> bool
    where
        M: OrderedMonoid<W>,
    {
        monoid.compare(&self.entries[a].1, &self.entries[b].1) == Ordering::Less
    }

    fn sift_up<M>(&mut self, monoid: &M, mut i: usize)
    where
        M: OrderedMonoid<W>,
    {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.less(monoid, i, parent) {
                self.entries.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down<M>(&mut self, monoid: &M, mut i: usize)
    where
        M: OrderedMonoid<W>,
    {
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < self.entries.len() && self.less(monoid, left, smallest) {
                smallest = left;
            }
            if right < self.entries.len() && self.less(monoid, right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }
}
