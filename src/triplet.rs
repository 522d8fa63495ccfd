use std::collections::BTreeSet;

use crate::basis::MinimumCycleBasis;
use crate::cycle::Cycle;
use crate::graph::AdjacencyGraph;
use crate::graph_ops::ShortestPathDag;

/// Shortest cycles through each vertex triple, seeded from a minimum
/// cycle basis. For every vertex `v` lying in more than one basis cycle
/// and each pair of its neighbors `(u, w)`, the shortest cycles through
/// `-u-v-w-` are added: all shortest `u..w` paths that avoid `v`, closed
/// back through `v`. This recovers envelope rings (the naphthalene
/// 10-cycle) without exhaustive enumeration.
#[derive(Debug, Clone)]
pub struct TripletShortCycles {
    cycles: Vec<Cycle>,
}

impl TripletShortCycles {
    pub fn new(graph: &AdjacencyGraph, mcb: &MinimumCycleBasis) -> Self {
        let mut set: BTreeSet<Cycle> = mcb.cycles().iter().cloned().collect();

        let n = graph.vertex_count();
        let mut n_cycles = vec![0usize; n];
        for cycle in mcb.cycles() {
            for &v in cycle.path() {
                n_cycles[v] += 1;
            }
        }

        for v in 0..n {
            if n_cycles[v] < 2 {
                continue;
            }
            let neighbors = graph.neighbors(v);
            for (i, &u) in neighbors.iter().enumerate() {
                let dag = ShortestPathDag::avoiding_vertex(graph, u, v);
                for &w in &neighbors[i + 1..] {
                    for path in dag.paths_to(w) {
                        let mut cycle = path;
                        cycle.push(v);
                        set.insert(Cycle::new(cycle));
                    }
                }
            }
        }

        Self {
            cycles: set.into_iter().collect(),
        }
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    pub fn number_of_cycles(&self) -> usize {
        self.cycles.len()
    }

    pub fn into_cycles(self) -> Vec<Cycle> {
        self.cycles
    }
}
