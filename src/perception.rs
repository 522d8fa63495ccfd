use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

use crate::all_cycles::AllCycles;
use crate::basis::MinimumCycleBasis;
use crate::cycle::Cycle;
use crate::graph::AdjacencyGraph;
use crate::initial::{edge_short_cycles, vertex_short_cycles, InitialCycles};
use crate::relevant::{EssentialCycles, RelevantCycles};
use crate::triplet::TripletShortCycles;

/// Ceiling on the number of cycles the fallback strategy will accept from
/// exhaustive enumeration before switching to the vertex-short family.
/// The value matches the original toolkit's PubChem 99th-percentile ring
/// count threshold.
const CYCLE_CEILING: usize = 684;

/// The named cycle families. Each variant is a pure function of the
/// graph, dispatched through a single match in [`CycleSet::with_strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStrategy {
    /// Every simple cycle. Exponential; a direct request always runs to
    /// completion, however large the answer.
    All,
    /// Every simple cycle of at most the given length.
    AllUpToLength(usize),
    /// Minimum cycle basis (SSSR).
    MinimumBasis,
    /// Union of all minimum cycle bases.
    Relevant,
    /// Intersection of all minimum cycle bases.
    Essential,
    /// Shortest cycles through each vertex triple (ESSSR envelopes).
    TripletShort,
    /// Shortest cycles through each edge.
    EdgeShort,
    /// Shortest cycles through each vertex.
    VertexShort,
    /// Historical aromaticity set: the minimum basis when it has more
    /// than three cycles, otherwise all cycles of the (small) system.
    AromaticSet,
    /// Attempt `All` under the safety ceiling; on overflow fall back to
    /// `VertexShort`. Deterministic: the same graph always takes the
    /// same branch.
    AllOrVertexShort,
}

/// A perceived family of cycles over a caller's graph. Paths are vertex
/// indices in the source container's node order; [`CycleSet::to_ring_set`]
/// maps them back onto the caller's atoms and bonds.
#[derive(Debug, Clone)]
pub struct CycleSet {
    cycles: Vec<Cycle>,
}

/// One cycle lifted back onto the caller's container: the atoms and the
/// bonds between them, in cycle-traversal order (the last bond closes the
/// ring back to the first atom).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    pub atoms: Vec<NodeIndex>,
    pub bonds: Vec<EdgeIndex>,
}

impl CycleSet {
    pub fn with_strategy<A, B>(strategy: CycleStrategy, graph: &UnGraph<A, B>) -> Self {
        let adj = AdjacencyGraph::from_graph(graph);
        Self {
            cycles: compute(strategy, &adj),
        }
    }

    pub fn all<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::All, graph)
    }

    pub fn all_up_to<A, B>(graph: &UnGraph<A, B>, length: usize) -> Self {
        Self::with_strategy(CycleStrategy::AllUpToLength(length), graph)
    }

    pub fn mcb<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::MinimumBasis, graph)
    }

    /// Alias of [`CycleSet::mcb`] under the chemistry-community name.
    pub fn sssr<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::mcb(graph)
    }

    pub fn relevant<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::Relevant, graph)
    }

    pub fn essential<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::Essential, graph)
    }

    pub fn triplet_short<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::TripletShort, graph)
    }

    pub fn edge_short<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::EdgeShort, graph)
    }

    pub fn vertex_short<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::VertexShort, graph)
    }

    pub fn aromatic_set<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::AromaticSet, graph)
    }

    pub fn all_or_vertex_short<A, B>(graph: &UnGraph<A, B>) -> Self {
        Self::with_strategy(CycleStrategy::AllOrVertexShort, graph)
    }

    pub fn number_of_cycles(&self) -> usize {
        self.cycles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.is_empty()
    }

    pub fn cycles(&self) -> &[Cycle] {
        &self.cycles
    }

    /// Vertex paths of each cycle as a defensive copy; mutating the
    /// result never affects the set or later calls.
    pub fn paths(&self) -> Vec<Vec<usize>> {
        self.cycles.iter().map(|c| c.path().to_vec()).collect()
    }

    /// Map each cycle back onto the caller's container. Cycles whose
    /// edges cannot be resolved in `graph` (a container other than the
    /// one perceived) are skipped.
    pub fn to_ring_set<A, B>(&self, graph: &UnGraph<A, B>) -> Vec<Ring> {
        self.cycles
            .iter()
            .filter_map(|cycle| ring_of(graph, cycle))
            .collect()
    }
}

fn ring_of<A, B>(graph: &UnGraph<A, B>, cycle: &Cycle) -> Option<Ring> {
    let atoms: Vec<NodeIndex> = cycle.path().iter().map(|&v| NodeIndex::new(v)).collect();
    let mut bonds = Vec::with_capacity(atoms.len());
    for i in 0..atoms.len() {
        let a = atoms[i];
        let b = atoms[(i + 1) % atoms.len()];
        bonds.push(graph.find_edge(a, b)?);
    }
    Some(Ring { atoms, bonds })
}

fn compute(strategy: CycleStrategy, graph: &AdjacencyGraph) -> Vec<Cycle> {
    let n = graph.vertex_count();
    match strategy {
        CycleStrategy::All => AllCycles::new(graph, n, usize::MAX).into_cycles(),
        CycleStrategy::AllUpToLength(length) => {
            AllCycles::new(graph, length.min(n), usize::MAX).into_cycles()
        }
        CycleStrategy::MinimumBasis => {
            MinimumCycleBasis::new(&InitialCycles::new(graph)).into_cycles()
        }
        CycleStrategy::Relevant => RelevantCycles::new(&InitialCycles::new(graph)).into_cycles(),
        CycleStrategy::Essential => EssentialCycles::new(&InitialCycles::new(graph)).into_cycles(),
        CycleStrategy::TripletShort => {
            let mcb = MinimumCycleBasis::new(&InitialCycles::new(graph));
            TripletShortCycles::new(graph, &mcb).into_cycles()
        }
        CycleStrategy::EdgeShort => edge_short_cycles(graph),
        CycleStrategy::VertexShort => vertex_short_cycles(graph),
        CycleStrategy::AromaticSet => {
            let mcb = MinimumCycleBasis::new(&InitialCycles::new(graph));
            if mcb.size() > 3 {
                mcb.into_cycles()
            } else {
                // a rank of three or less bounds the cycle count at seven
                AllCycles::new(graph, n, usize::MAX).into_cycles()
            }
        }
        CycleStrategy::AllOrVertexShort => {
            let attempt = AllCycles::new(graph, n, CYCLE_CEILING);
            if attempt.completed() {
                attempt.into_cycles()
            } else {
                vertex_short_cycles(graph)
            }
        }
    }
}
