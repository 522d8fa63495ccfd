use std::cmp::Ordering;

/// A simple cycle stored as a canonical vertex sequence. Two traversals of
/// the same edge set (any rotation, either direction) normalize to the same
/// path: the smallest vertex comes first and its smaller neighbor second.
/// The closing edge from the last vertex back to the first is implicit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cycle {
    path: Vec<usize>,
}

impl Cycle {
    /// Canonicalize a vertex sequence already known to be a valid cycle.
    /// Use [`crate::graph_ops::to_cycle`] to validate arbitrary orderings.
    pub(crate) fn new(path: Vec<usize>) -> Self {
        Self {
            path: normalize(path),
        }
    }

    /// The vertices in cycle-traversal order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Number of edges (equal to the number of vertices).
    pub fn weight(&self) -> usize {
        self.path.len()
    }

    pub fn contains(&self, v: usize) -> bool {
        self.path.contains(&v)
    }

    /// The edges of the cycle, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.path.len();
        (0..len).map(move |i| (self.path[i], self.path[(i + 1) % len]))
    }

    /// Whether `u`, `v`, `w` occur in succession (either direction) in the
    /// cycle, wrap-around included.
    pub fn contains_triple(&self, u: usize, v: usize, w: usize) -> bool {
        let len = self.path.len();
        (0..len).any(|i| {
            let a = self.path[i];
            let b = self.path[(i + 1) % len];
            let c = self.path[(i + 2) % len];
            b == v && ((a == u && c == w) || (a == w && c == u))
        })
    }
}

impl PartialOrd for Cycle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cycle {
    /// Shorter cycles first; equal weights break ties lexicographically on
    /// the canonical path. This is the total order every family is sorted
    /// and deduplicated by.
    fn cmp(&self, other: &Self) -> Ordering {
        self.path
            .len()
            .cmp(&other.path.len())
            .then_with(|| self.path.cmp(&other.path))
    }
}

fn normalize(ring: Vec<usize>) -> Vec<usize> {
    if ring.is_empty() {
        return ring;
    }
    let min_pos = ring
        .iter()
        .enumerate()
        .min_by_key(|&(_, v)| v)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let len = ring.len();
    let mut normalized = Vec::with_capacity(len);
    for i in 0..len {
        normalized.push(ring[(min_pos + i) % len]);
    }

    if len > 2 && normalized[1] > normalized[len - 1] {
        normalized[1..].reverse();
    }

    normalized
}
