#![allow(dead_code)]

use digraph_rs::{EdgeId, Graph, VertexId, graph::AdjacencyList};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Eight vertices A..H, eleven edges, one cycle D -> F -> D.
pub struct Cyclic {
    pub graph: AdjacencyList,
    pub vertices: [VertexId; 8],
    pub edges: [EdgeId; 11],
}

pub const CYCLIC_EDGES: [(usize, usize); 11] = [
    (0, 1), // A -> B
    (0, 2), // A -> C
    (0, 4), // A -> E
    (1, 3), // B -> D
    (1, 4), // B -> E
    (2, 3), // C -> D
    (3, 4), // D -> E
    (3, 5), // D -> F
    (5, 3), // F -> D
    (5, 7), // F -> H
    (6, 7), // G -> H
];

/// Six vertices A..F, seven edges, no cycle.
pub const ACYCLIC_EDGES: [(usize, usize); 7] = [
    (0, 1), // A -> B
    (0, 3), // A -> D
    (1, 4), // B -> E
    (4, 3), // E -> D
    (2, 4), // C -> E
    (2, 5), // C -> F
    (5, 0), // F -> A
];

pub fn cyclic() -> Cyclic {
    let mut graph = AdjacencyList::new();
    let vertices = [(); 8].map(|_| graph.add_vertex());
    let edges = CYCLIC_EDGES.map(|(u, v)| {
        let (edge, inserted) = graph.add_edge(vertices[u], vertices[v]).unwrap();
        assert!(inserted);
        edge
    });

    Cyclic {
        graph,
        vertices,
        edges,
    }
}

pub fn from_edges(vertices: usize, edges: &[(usize, usize)]) -> AdjacencyList {
    let mut graph = AdjacencyList::with_capacity(vertices);
    (0..vertices).for_each(|_| {
        graph.add_vertex();
    });
    for (u, v) in edges {
        graph
            .add_edge(VertexId::new(*u), VertexId::new(*v))
            .unwrap();
    }
    graph
}

pub fn acyclic() -> AdjacencyList {
    from_edges(6, &ACYCLIC_EDGES)
}

/// a -> b -> c -> a
pub fn three_cycle() -> AdjacencyList {
    from_edges(3, &[(0, 1), (1, 2), (2, 0)])
}

/// Space separated vertex indices.
pub fn render(order: &[VertexId]) -> String {
    order
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
