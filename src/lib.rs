pub mod all_cycles;
pub mod basis;
pub mod cycle;
pub mod graph;
pub mod graph_ops;
pub mod initial;
pub mod perception;
pub mod relevant;
pub mod triplet;

pub use all_cycles::AllCycles;
pub use basis::MinimumCycleBasis;
pub use cycle::Cycle;
pub use graph::{AdjacencyGraph, GraphError};
pub use graph_ops::{first_marked, subgraph, to_cycle, NotACycleError};
pub use initial::{edge_short_cycles, vertex_short_cycles, InitialCycles};
pub use perception::{CycleSet, CycleStrategy, Ring};
pub use relevant::{EssentialCycles, RelevantCycles};
pub use triplet::TripletShortCycles;
