use std::collections::BTreeSet;

use crate::cycle::Cycle;
use crate::graph::AdjacencyGraph;

/// Exhaustive enumeration of every simple cycle, with an explicit
/// worklist instead of recursion. Each cycle is discovered exactly once:
/// the search roots at the cycle's minimum vertex and a direction guard
/// rejects the mirrored traversal. The count of cycles found so far is
/// checked cooperatively against a ceiling so a pathological input can be
/// abandoned; callers that want the complete answer pass `usize::MAX`.
#[derive(Debug)]
pub struct AllCycles {
    cycles: Vec<Cycle>,
    completed: bool,
}

impl AllCycles {
    /// Enumerate simple cycles of at most `max_length` vertices, giving
    /// up once more than `ceiling` cycles have been found.
    pub fn new(graph: &AdjacencyGraph, max_length: usize, ceiling: usize) -> Self {
        let n = graph.vertex_count();
        let mut found: BTreeSet<Cycle> = BTreeSet::new();
        let mut completed = true;

        let mut on_path = vec![false; n];
        let mut path: Vec<usize> = Vec::new();
        // (vertex, index of the next neighbor to try)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        'roots: for root in 0..n {
            path.clear();
            path.push(root);
            on_path[root] = true;
            stack.clear();
            stack.push((root, 0));

            while let Some(&(v, i)) = stack.last() {
                if i >= graph.degree(v) {
                    stack.pop();
                    on_path[v] = false;
                    path.pop();
                    continue;
                }
                if let Some(last) = stack.last_mut() {
                    last.1 += 1;
                }
                let w = graph.neighbors(v)[i];
                if w == root && path.len() >= 3 {
                    // the mirrored walk closes the same cycle; keep one
                    if path[1] < path[path.len() - 1] {
                        found.insert(Cycle::new(path.clone()));
                        if found.len() > ceiling {
                            completed = false;
                            for &p in &path {
                                on_path[p] = false;
                            }
                            break 'roots;
                        }
                    }
                } else if w > root && !on_path[w] && path.len() < max_length {
                    stack.push((w, 0));
                    path.push(w);
                    on_path[w] = true;
                }
            }
            on_path[root] = false;
        }

        Self {
            cycles: found.into_iter().collect(),
            completed,
        }
    }

    /// Whether enumeration ran to completion rather than hitting the
    /// ceiling. When false the discovered cycles are a partial family and
    /// callers are expected to discard them.
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn number_of_cycles(&self) -> usize {
        self.cycles.len()
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_of(vertex_count: usize, edges: &[(usize, usize)]) -> AllCycles {
        let g = AdjacencyGraph::from_parts(vertex_count, edges).unwrap();
        AllCycles::new(&g, g.vertex_count(), usize::MAX)
    }

    #[test]
    fn triangle() {
        let ac = all_of(3, &[(0, 1), (1, 2), (2, 0)]);
        assert!(ac.completed());
        assert_eq!(ac.number_of_cycles(), 1);
    }

    #[test]
    fn acyclic() {
        let ac = all_of(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(ac.number_of_cycles(), 0);
    }

    #[test]
    fn naphthalene_has_three_cycles() {
        let ac = all_of(
            10,
            &[
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 4),
                (4, 5),
                (5, 0),
                (5, 6),
                (6, 7),
                (7, 8),
                (8, 9),
                (9, 0),
            ],
        );
        let weights: Vec<usize> = ac.cycles().iter().map(Cycle::weight).collect();
        assert_eq!(weights, vec![6, 6, 10]);
    }

    #[test]
    fn k4_has_seven_cycles() {
        let ac = all_of(4, &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        assert_eq!(ac.number_of_cycles(), 7);
    }

    #[test]
    fn k5_has_thirty_seven_cycles() {
        let mut edges = Vec::new();
        for u in 0..5usize {
            for v in (u + 1)..5 {
                edges.push((u, v));
            }
        }
        let ac = all_of(5, &edges);
        assert_eq!(ac.number_of_cycles(), 37);
    }

    #[test]
    fn length_limit_prunes() {
        let g = AdjacencyGraph::from_parts(
            4,
            &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
        )
        .unwrap();
        let ac = AllCycles::new(&g, 3, usize::MAX);
        assert!(ac.completed());
        assert_eq!(ac.number_of_cycles(), 4);
    }

    #[test]
    fn ceiling_aborts_enumeration() {
        let mut edges = Vec::new();
        for u in 0..6usize {
            for v in (u + 1)..6 {
                edges.push((u, v));
            }
        }
        let g = AdjacencyGraph::from_parts(6, &edges).unwrap();
        let ac = AllCycles::new(&g, 6, 10);
        assert!(!ac.completed());
    }
}
