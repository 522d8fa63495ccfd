use std::fmt;

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

/// Errors produced when building an [`AdjacencyGraph`] from caller input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// No source structure was supplied.
    MissingSource,
    /// An edge references a vertex outside the declared vertex set, or is a
    /// self-loop. Typically the caller removed an atom but left a dangling
    /// bond behind.
    InvalidEdge {
        u: usize,
        v: usize,
        vertex_count: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSource => write!(f, "no source structure provided"),
            Self::InvalidEdge {
                u,
                v,
                vertex_count,
            } => write!(
                f,
                "edge {{{}, {}}} is invalid for a graph of {} vertices",
                u, v, vertex_count
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// Immutable adjacency-list view of a vertex/edge set. Vertices are the
/// indices `0..n`, matching the iteration order of the source container.
/// Built once and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    adj: Vec<Vec<usize>>,
    edge_count: usize,
}

impl AdjacencyGraph {
    /// Build from an explicit vertex count and edge list. Fails if an edge
    /// endpoint falls outside `0..vertex_count` or the edge is a loop.
    /// Duplicate edges collapse to a single adjacency.
    pub fn from_parts(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut adj = vec![Vec::new(); vertex_count];
        let mut edge_count = 0;
        for &(u, v) in edges {
            if u >= vertex_count || v >= vertex_count || u == v {
                return Err(GraphError::InvalidEdge { u, v, vertex_count });
            }
            if adj[u].contains(&v) {
                continue;
            }
            adj[u].push(v);
            adj[v].push(u);
            edge_count += 1;
        }
        Ok(Self { adj, edge_count })
    }

    /// Build from a caller-owned petgraph structure. Self-loops and parallel
    /// edges carry no cycle-perception meaning and are dropped.
    pub fn from_graph<A, B>(graph: &UnGraph<A, B>) -> Self {
        let n = graph.node_count();
        let mut adj = vec![Vec::new(); n];
        let mut edge_count = 0;
        for edge in graph.edge_references() {
            let u = edge.source().index();
            let v = edge.target().index();
            if u == v || adj[u].contains(&v) {
                continue;
            }
            adj[u].push(v);
            adj[v].push(u);
            edge_count += 1;
        }
        Self { adj, edge_count }
    }

    /// Build from an optional source reference, failing fast when the
    /// reference is absent.
    pub fn from_source<A, B>(source: Option<&UnGraph<A, B>>) -> Result<Self, GraphError> {
        match source {
            Some(graph) => Ok(Self::from_graph(graph)),
            None => Err(GraphError::MissingSource),
        }
    }

    pub(crate) fn from_adjacency(adj: Vec<Vec<usize>>) -> Self {
        let edge_count = adj.iter().map(Vec::len).sum::<usize>() / 2;
        Self { adj, edge_count }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    pub fn adjacent(&self, u: usize, v: usize) -> bool {
        self.adj[u].contains(&v)
    }

    /// Number of connected components.
    pub fn components(&self) -> usize {
        let n = self.adj.len();
        let mut visited = vec![false; n];
        let mut count = 0;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            count += 1;
            let mut stack = vec![start];
            visited[start] = true;
            while let Some(v) = stack.pop() {
                for &w in &self.adj[v] {
                    if !visited[w] {
                        visited[w] = true;
                        stack.push(w);
                    }
                }
            }
        }
        count
    }

    /// Dimension of the cycle space: `|E| - |V| + components`. Equals the
    /// size of any minimum cycle basis.
    pub fn circuit_rank(&self) -> usize {
        (self.edge_count + self.components()).saturating_sub(self.adj.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::UnGraph;

    fn hexagon() -> AdjacencyGraph {
        AdjacencyGraph::from_parts(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap()
    }

    #[test]
    fn from_parts_rejects_dangling_edge() {
        let err = AdjacencyGraph::from_parts(3, &[(0, 1), (1, 3)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidEdge {
                u: 1,
                v: 3,
                vertex_count: 3
            }
        );
    }

    #[test]
    fn from_parts_rejects_loop() {
        assert!(AdjacencyGraph::from_parts(2, &[(1, 1)]).is_err());
    }

    #[test]
    fn from_source_rejects_absent_reference() {
        let err = AdjacencyGraph::from_source::<(), ()>(None).unwrap_err();
        assert_eq!(err, GraphError::MissingSource);
    }

    #[test]
    fn from_source_accepts_graph() {
        let mut g: UnGraph<(), ()> = UnGraph::default();
        let a = g.add_node(());
        let b = g.add_node(());
        g.add_edge(a, b, ());
        let adj = AdjacencyGraph::from_source(Some(&g)).unwrap();
        assert_eq!(adj.vertex_count(), 2);
        assert_eq!(adj.edge_count(), 1);
        assert!(adj.adjacent(0, 1));
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = AdjacencyGraph::from_parts(2, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(0), &[1]);
    }

    #[test]
    fn high_degree_vertex() {
        let edges: Vec<(usize, usize)> = (1..=50).map(|v| (0, v)).collect();
        let g = AdjacencyGraph::from_parts(51, &edges).unwrap();
        assert_eq!(g.degree(0), 50);
        assert_eq!(g.circuit_rank(), 0);
    }

    #[test]
    fn circuit_rank_single_ring() {
        assert_eq!(hexagon().circuit_rank(), 1);
    }

    #[test]
    fn circuit_rank_disconnected() {
        // two triangles, no connection
        let g =
            AdjacencyGraph::from_parts(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)])
                .unwrap();
        assert_eq!(g.components(), 2);
        assert_eq!(g.circuit_rank(), 2);
    }

    #[test]
    fn circuit_rank_acyclic() {
        let g = AdjacencyGraph::from_parts(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        assert_eq!(g.circuit_rank(), 0);
    }
}
