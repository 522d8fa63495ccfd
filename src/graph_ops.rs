use std::collections::VecDeque;
use std::fmt;

use crate::cycle::Cycle;
use crate::graph::AdjacencyGraph;

/// Errors produced when confirming a vertex ordering as a cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotACycleError {
    /// Fewer than three vertices were supplied.
    TooShort { len: usize },
    /// A vertex occurs more than once in the ordering.
    RepeatedVertex { vertex: usize },
    /// The pair starting at `position` is not adjacent in the graph. A
    /// `position` of `len - 1` means the wrap-around edge is missing.
    NonAdjacent { position: usize, u: usize, v: usize },
}

impl fmt::Display for NotACycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => {
                write!(f, "a cycle needs at least 3 vertices, got {}", len)
            }
            Self::RepeatedVertex { vertex } => {
                write!(f, "vertex {} repeats in the ordering", vertex)
            }
            Self::NonAdjacent { position, u, v } => write!(
                f,
                "vertices {} and {} at position {} are not adjacent",
                u, v, position
            ),
        }
    }
}

impl std::error::Error for NotACycleError {}

/// Vertex-induced subgraph. The result relabels the chosen vertices
/// `0..k` in the order given; edges with an endpoint outside the subset
/// are dropped silently.
pub fn subgraph(graph: &AdjacencyGraph, vertices: &[usize]) -> AdjacencyGraph {
    let mut mapping = vec![usize::MAX; graph.vertex_count()];
    for (new, &old) in vertices.iter().enumerate() {
        mapping[old] = new;
    }
    let mut adj = vec![Vec::new(); vertices.len()];
    for (new, &old) in vertices.iter().enumerate() {
        for &w in graph.neighbors(old) {
            if mapping[w] != usize::MAX {
                adj[new].push(mapping[w]);
            }
        }
    }
    AdjacencyGraph::from_adjacency(adj)
}

/// Confirm an arbitrary vertex ordering as a closed walk of the graph and
/// return it in canonical cycle form.
pub fn to_cycle(graph: &AdjacencyGraph, ordering: &[usize]) -> Result<Cycle, NotACycleError> {
    if ordering.len() < 3 {
        return Err(NotACycleError::TooShort {
            len: ordering.len(),
        });
    }
    let mut seen = vec![false; graph.vertex_count()];
    for &v in ordering {
        if seen[v] {
            return Err(NotACycleError::RepeatedVertex { vertex: v });
        }
        seen[v] = true;
    }
    let len = ordering.len();
    for i in 0..len {
        let u = ordering[i];
        let v = ordering[(i + 1) % len];
        if !graph.adjacent(u, v) {
            return Err(NotACycleError::NonAdjacent { position: i, u, v });
        }
    }
    Ok(Cycle::new(ordering.to_vec()))
}

/// First position in `order` whose entry is marked, or `None`. Small pure
/// scan used by the short-cycle selection.
pub fn first_marked(order: &[usize], marked: &[bool]) -> Option<usize> {
    order.iter().position(|&v| marked[v])
}

/// Single-source BFS keeping every shortest-path predecessor, so tied
/// shortest paths can be enumerated rather than an arbitrary winner.
#[derive(Debug)]
pub(crate) struct ShortestPathDag {
    source: usize,
    dist: Vec<u32>,
    preds: Vec<Vec<usize>>,
}

impl ShortestPathDag {
    pub(crate) fn new(graph: &AdjacencyGraph, source: usize) -> Self {
        Self::search(graph, source, None, None)
    }

    /// BFS in the graph with `banned` unreachable, used for cycles closed
    /// through a removed vertex.
    pub(crate) fn avoiding_vertex(graph: &AdjacencyGraph, source: usize, banned: usize) -> Self {
        Self::search(graph, source, Some(banned), None)
    }

    /// BFS with one edge removed, used for shortest cycles through an edge.
    pub(crate) fn avoiding_edge(
        graph: &AdjacencyGraph,
        source: usize,
        edge: (usize, usize),
    ) -> Self {
        Self::search(graph, source, None, Some(edge))
    }

    fn search(
        graph: &AdjacencyGraph,
        source: usize,
        banned_vertex: Option<usize>,
        banned_edge: Option<(usize, usize)>,
    ) -> Self {
        let n = graph.vertex_count();
        let mut dist = vec![u32::MAX; n];
        let mut preds = vec![Vec::new(); n];
        dist[source] = 0;
        let mut queue = VecDeque::new();
        queue.push_back(source);
        while let Some(v) = queue.pop_front() {
            let d = dist[v];
            for &w in graph.neighbors(v) {
                if Some(w) == banned_vertex {
                    continue;
                }
                if let Some((a, b)) = banned_edge {
                    if (v == a && w == b) || (v == b && w == a) {
                        continue;
                    }
                }
                if dist[w] == u32::MAX {
                    dist[w] = d + 1;
                    preds[w].push(v);
                    queue.push_back(w);
                } else if dist[w] == d + 1 {
                    preds[w].push(v);
                }
            }
        }
        Self {
            source,
            dist,
            preds,
        }
    }

    pub(crate) fn distance_to(&self, v: usize) -> Option<usize> {
        if self.dist[v] == u32::MAX {
            None
        } else {
            Some(self.dist[v] as usize)
        }
    }

    /// Every shortest path from the source to `target`, each starting at
    /// the source. Explicit worklist; the number of tied paths can grow
    /// combinatorially on symmetric graphs.
    pub(crate) fn paths_to(&self, target: usize) -> Vec<Vec<usize>> {
        if self.dist[target] == u32::MAX {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut frames: Vec<(usize, usize)> = vec![(target, 0)];
        while let Some(&(v, i)) = frames.last() {
            if v == self.source {
                out.push(frames.iter().rev().map(|&(x, _)| x).collect());
                frames.pop();
                continue;
            }
            if i < self.preds[v].len() {
                if let Some(last) = frames.last_mut() {
                    last.1 += 1;
                }
                frames.push((self.preds[v][i], 0));
            } else {
                frames.pop();
            }
        }
        out
    }
}
