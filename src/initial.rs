use std::collections::{BTreeSet, HashMap};

use crate::cycle::Cycle;
use crate::graph::AdjacencyGraph;
use crate::graph_ops::{first_marked, ShortestPathDag};

/// Candidate pool from which the basis, relevant and essential sets are
/// selected. Generated Horton-style: for every vertex `r` and edge
/// `(x, y)`, the two shortest paths `r..x` and `r..y` plus the edge close
/// a candidate whenever the paths share only `r`. All tied shortest paths
/// are enumerated so the pool carries every relevant cycle, not an
/// arbitrary representative per family.
#[derive(Debug)]
pub struct InitialCycles {
    cycles: Vec<Cycle>,
    edge_index: HashMap<(usize, usize), usize>,
    edge_count: usize,
    rank: usize,
}

impl InitialCycles {
    pub fn new(graph: &AdjacencyGraph) -> Self {
        let n = graph.vertex_count();

        // index the edges so cycles can move between the path and the
        // incidence-vector representation
        let mut edge_index = HashMap::new();
        for v in 0..n {
            for &w in graph.neighbors(v) {
                if w > v {
                    edge_index.insert((v, w), edge_index.len());
                }
            }
        }
        let edge_count = edge_index.len();

        let mut set: BTreeSet<Cycle> = BTreeSet::new();
        for r in 0..n {
            let dag = ShortestPathDag::new(graph, r);
            for x in 0..n {
                for &y in graph.neighbors(x) {
                    if y < x {
                        continue;
                    }
                    let (dx, dy) = match (dag.distance_to(x), dag.distance_to(y)) {
                        (Some(dx), Some(dy)) => (dx, dy),
                        _ => continue,
                    };
                    if dx + dy + 1 < 3 {
                        continue;
                    }
                    for path_x in dag.paths_to(x) {
                        for path_y in dag.paths_to(y) {
                            if !singleton_intersect(&path_x, &path_y) {
                                continue;
                            }
                            let mut path = path_x.clone();
                            path.extend(path_y[1..].iter().rev());
                            set.insert(Cycle::new(path));
                        }
                    }
                }
            }
        }

        Self {
            cycles: set.into_iter().collect(),
            edge_index,
            edge_count,
            rank: graph.circuit_rank(),
        }
    }

    /// Candidates in ascending `(weight, lexicographic)` order.
    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn number_of_cycles(&self) -> usize {
        self.cycles.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Circuit rank of the graph the pool was generated from.
    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn index_of_edge(&self, u: usize, v: usize) -> Option<usize> {
        let key = if u < v { (u, v) } else { (v, u) };
        self.edge_index.get(&key).copied()
    }

    /// Incidence vector of a cycle over the indexed edge set.
    pub fn edge_vector(&self, cycle: &Cycle) -> Vec<u64> {
        let words = self.edge_count.div_ceil(64);
        let mut bv = vec![0u64; words];
        for (u, v) in cycle.edges() {
            if let Some(idx) = self.index_of_edge(u, v) {
                bv[idx / 64] |= 1u64 << (idx % 64);
            } else {
                debug_assert!(false, "cycle edge {{{}, {}}} not in graph", u, v);
            }
        }
        bv
    }
}

/// Two shortest paths from a common source share only that source. Shared
/// vertices must sit at equal distance from the source, so a positionwise
/// comparison suffices.
fn singleton_intersect(p: &[usize], q: &[usize]) -> bool {
    let n = p.len().min(q.len());
    for i in 1..n {
        if p[i] == q[i] {
            return false;
        }
    }
    true
}

/// All shortest cycles through each edge: remove the edge, BFS between its
/// endpoints, and close every tied shortest path back through the edge.
/// Bridges contribute nothing.
pub fn edge_short_cycles(graph: &AdjacencyGraph) -> Vec<Cycle> {
    let mut set = BTreeSet::new();
    for cycles in per_edge_short(graph) {
        set.extend(cycles);
    }
    set.into_iter().collect()
}

/// All shortest cycles through each vertex, derived from the edge-short
/// families: every shortest cycle through a vertex is a shortest cycle
/// through one of its incident edges.
pub fn vertex_short_cycles(graph: &AdjacencyGraph) -> Vec<Cycle> {
    let pool: Vec<Cycle> = edge_short_cycles(graph);
    let order: Vec<usize> = (0..pool.len()).collect();

    let mut set = BTreeSet::new();
    for v in 0..graph.vertex_count() {
        let marked: Vec<bool> = pool.iter().map(|c| c.contains(v)).collect();
        // pool is sorted, so the first marked candidate is minimum weight
        let Some(pos) = first_marked(&order, &marked) else {
            continue;
        };
        let shortest = pool[pos].weight();
        for cycle in &pool[pos..] {
            if cycle.weight() > shortest {
                break;
            }
            if cycle.contains(v) {
                set.insert(cycle.clone());
            }
        }
    }
    set.into_iter().collect()
}

fn per_edge_short(graph: &AdjacencyGraph) -> Vec<Vec<Cycle>> {
    let n = graph.vertex_count();
    let mut families = Vec::new();
    for u in 0..n {
        for &v in graph.neighbors(u) {
            if v < u {
                continue;
            }
            let dag = ShortestPathDag::avoiding_edge(graph, u, (u, v));
            if dag.distance_to(v).is_none() {
                continue;
            }
            let cycles = dag
                .paths_to(v)
                .into_iter()
                .map(Cycle::new)
                .collect::<Vec<_>>();
            families.push(cycles);
        }
    }
    families
}
