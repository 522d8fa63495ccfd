use petgraph::graph::{NodeIndex, UnGraph};

use ringcrab::{AdjacencyGraph, CycleSet, CycleStrategy};

fn graph_of(vertex_count: usize, edges: &[(usize, usize)]) -> UnGraph<(), ()> {
    let mut g = UnGraph::default();
    let nodes: Vec<NodeIndex> = (0..vertex_count).map(|_| g.add_node(())).collect();
    for &(u, v) in edges {
        g.add_edge(nodes[u], nodes[v], ());
    }
    g
}

fn biphenyl() -> UnGraph<(), ()> {
    graph_of(
        12,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (0, 6),
            (6, 7),
            (7, 8),
            (8, 9),
            (9, 10),
            (10, 11),
            (11, 6),
        ],
    )
}

fn naphthalene() -> UnGraph<(), ()> {
    graph_of(
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
    )
}

fn anthracene() -> UnGraph<(), ()> {
    // three linearly fused hexagons
    graph_of(
        14,
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
            (8, 10),
            (10, 11),
            (11, 12),
            (12, 13),
            (13, 9),
        ],
    )
}

fn bicyclooctane() -> UnGraph<(), ()> {
    // bicyclo[2.2.2]octane, bridgeheads 0 and 3
    graph_of(
        8,
        &[
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (0, 6),
            (6, 7),
            (7, 3),
        ],
    )
}

fn complete(n: usize) -> UnGraph<(), ()> {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            edges.push((u, v));
        }
    }
    graph_of(n, &edges)
}

/// Square grid with `rows * cols` vertices.
fn grid(rows: usize, cols: usize) -> UnGraph<(), ()> {
    let mut edges = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            let v = r * cols + c;
            if c + 1 < cols {
                edges.push((v, v + 1));
            }
            if r + 1 < rows {
                edges.push((v, v + cols));
            }
        }
    }
    graph_of(rows * cols, &edges)
}

#[test]
fn biphenyl_every_family_sees_both_rings() {
    let g = biphenyl();
    for strategy in [
        CycleStrategy::All,
        CycleStrategy::MinimumBasis,
        CycleStrategy::Relevant,
        CycleStrategy::Essential,
        CycleStrategy::TripletShort,
        CycleStrategy::EdgeShort,
        CycleStrategy::VertexShort,
    ] {
        let set = CycleSet::with_strategy(strategy, &g);
        assert_eq!(set.number_of_cycles(), 2, "{strategy:?}");
        assert!(set.cycles().iter().all(|c| c.weight() == 6), "{strategy:?}");
    }
}

#[test]
fn naphthalene_families() {
    let g = naphthalene();
    assert_eq!(CycleSet::mcb(&g).number_of_cycles(), 2);
    assert_eq!(CycleSet::relevant(&g).number_of_cycles(), 2);
    assert_eq!(CycleSet::essential(&g).number_of_cycles(), 2);
    assert_eq!(CycleSet::all(&g).number_of_cycles(), 3);

    let mut triplet: Vec<usize> = CycleSet::triplet_short(&g)
        .cycles()
        .iter()
        .map(|c| c.weight())
        .collect();
    triplet.sort_unstable();
    assert_eq!(triplet, vec![6, 6, 10]);
}

#[test]
fn anthracene_families() {
    let g = anthracene();
    assert_eq!(CycleSet::mcb(&g).number_of_cycles(), 3);
    assert_eq!(CycleSet::essential(&g).number_of_cycles(), 3);
    assert_eq!(CycleSet::all(&g).number_of_cycles(), 6);
}

#[test]
fn bicyclooctane_families() {
    // three tied six-rings: any two form a basis, none is in every basis
    let g = bicyclooctane();
    assert_eq!(CycleSet::mcb(&g).number_of_cycles(), 2);
    assert_eq!(CycleSet::relevant(&g).number_of_cycles(), 3);
    assert_eq!(CycleSet::essential(&g).number_of_cycles(), 0);
}

#[test]
fn acyclic_graph_has_no_cycles_under_any_strategy() {
    let g = graph_of(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]);
    for strategy in [
        CycleStrategy::All,
        CycleStrategy::MinimumBasis,
        CycleStrategy::Relevant,
        CycleStrategy::Essential,
        CycleStrategy::TripletShort,
        CycleStrategy::EdgeShort,
        CycleStrategy::VertexShort,
        CycleStrategy::AromaticSet,
        CycleStrategy::AllOrVertexShort,
    ] {
        assert!(
            CycleSet::with_strategy(strategy, &g).is_empty(),
            "{strategy:?}"
        );
    }
}

#[test]
fn length_limited_enumeration_on_a_grid() {
    // 6 x 11 grid: 66 vertices, 115 edges, circuit rank 50
    let g = grid(6, 11);
    let adj = AdjacencyGraph::from_graph(&g);
    assert_eq!(adj.circuit_rank(), 50);

    // length 4 catches exactly the unit squares
    assert_eq!(CycleSet::all_up_to(&g, 4).number_of_cycles(), 50);
    // length 6 adds the two-cell dominoes: 45 horizontal and 40 vertical
    assert_eq!(CycleSet::all_up_to(&g, 6).number_of_cycles(), 135);
}

#[test]
fn fallback_switches_once_over_the_ceiling() {
    // the grid has far more cycles than the ceiling permits
    let g = grid(6, 11);
    let fallback = CycleSet::all_or_vertex_short(&g);
    assert_eq!(fallback.cycles(), CycleSet::vertex_short(&g).cycles());
    // every vertex's shortest cycles are its unit squares
    assert_eq!(fallback.number_of_cycles(), 50);
}

#[test]
fn fallback_on_a_dense_graph() {
    let g = complete(7);
    assert_eq!(CycleSet::all(&g).number_of_cycles(), 1172);

    // 1172 exceeds the ceiling; the fallback keeps only the triangles
    let set = CycleSet::all_or_vertex_short(&g);
    assert_eq!(set.number_of_cycles(), 35);
    assert!(set.cycles().iter().all(|c| c.weight() == 3));
}

#[test]
fn ring_set_resolves_atoms_and_bonds() {
    let g = naphthalene();
    let rings = CycleSet::mcb(&g).to_ring_set(&g);
    assert_eq!(rings.len(), 2);
    for ring in &rings {
        assert_eq!(ring.atoms.len(), 6);
        assert_eq!(ring.bonds.len(), 6);
        for (i, &bond) in ring.bonds.iter().enumerate() {
            let (a, b) = g.edge_endpoints(bond).unwrap();
            let u = ring.atoms[i];
            let v = ring.atoms[(i + 1) % ring.atoms.len()];
            assert!((a == u && b == v) || (a == v && b == u));
        }
    }
}

#[test]
fn perception_is_deterministic() {
    let g = bicyclooctane();
    let first = CycleSet::relevant(&g);
    for _ in 0..5 {
        assert_eq!(CycleSet::relevant(&g).paths(), first.paths());
    }
}
