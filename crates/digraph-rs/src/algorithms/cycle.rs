use std::ops::ControlFlow;

use log::debug;

use crate::{
    DirectedGraph, VertexId,
    algorithms::dfs::{DfsVisitor, depth_first},
};

/// Stops at the first back edge.
struct BackEdgeFinder;

impl DfsVisitor for BackEdgeFinder {
    type Break = (VertexId, VertexId);

    fn back_edge(&mut self, source: VertexId, target: VertexId) -> ControlFlow<Self::Break> {
        ControlFlow::Break((source, target))
    }
}

pub trait HasCycle {
    /// The first back edge found by a depth-first walk, if any.
    fn back_edge(&self) -> Option<(VertexId, VertexId)>;

    fn has_cycle(&self) -> bool {
        self.back_edge().is_some()
    }
}

impl<G> HasCycle for G
where
    G: DirectedGraph,
{
    fn back_edge(&self) -> Option<(VertexId, VertexId)> {
        match depth_first(self, &mut BackEdgeFinder) {
            ControlFlow::Break((source, target)) => {
                debug!("cycle found through back edge {} -> {}", source, target);
                Some((source, target))
            }
            ControlFlow::Continue(()) => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{Graph, GraphConfig, VertexId, graph::AdjacencyList};

    use super::HasCycle;

    fn graph(edges: &[(usize, usize)]) -> AdjacencyList {
        let mut g = AdjacencyList::with_config(GraphConfig::default().auto_extend(true));
        for (u, v) in edges {
            g.add_edge(VertexId::new(*u), VertexId::new(*v)).unwrap();
        }
        g
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(!AdjacencyList::new().has_cycle());
    }

    #[test]
    fn isolated_vertices_are_acyclic() {
        let mut g = AdjacencyList::new();
        (0..5).for_each(|_| {
            g.add_vertex();
        });
        assert!(!g.has_cycle());
    }

    #[test]
    fn self_loop() {
        let g = graph(&[(0, 0)]);
        assert!(g.has_cycle());
        assert_eq!(g.back_edge(), Some((VertexId::new(0), VertexId::new(0))));
    }

    #[test]
    fn two_cycle() {
        assert!(graph(&[(0, 1), (1, 0)]).has_cycle());
    }

    #[test]
    fn three_cycle() {
        let g = graph(&[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(g.back_edge(), Some((VertexId::new(2), VertexId::new(0))));
    }

    #[test]
    fn diamond_is_acyclic() {
        assert!(!graph(&[(0, 1), (0, 2), (1, 3), (2, 3)]).has_cycle());
    }

    #[test]
    fn cycle_in_later_component() {
        let g = graph(&[(0, 1), (2, 3), (3, 4), (4, 3)]);
        assert_eq!(g.back_edge(), Some((VertexId::new(4), VertexId::new(3))));
    }
}
